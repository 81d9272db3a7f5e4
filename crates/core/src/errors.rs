/// Result type alias for ssmrun operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for ssmrun operations
///
/// Errors render as a colon-joined chain, outer context first and the original
/// cause last, e.g. `cannot get paramter value: cannot get ssm parameter:
/// error in AWS`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Remote parameter lookup failed (not found, auth, decrypt, network).
    ///
    /// The parameter name is carried for logging but kept out of the message;
    /// callers add their own context instead.
    #[error("cannot get ssm parameter: {message}")]
    ParameterLookup {
        name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The child process ran but exited non-zero.
    #[error("execute external command {command} failed with exit code {exit_code}: exit status {exit_code}")]
    CommandExit { command: String, exit_code: i32 },

    /// The child process could not be started or relayed at all.
    #[error("external command execution failed {command}: {message}")]
    CommandStart {
        command: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// No positional argument named a command to execute.
    #[error("no command specified")]
    NoCommand,

    /// Startup or configuration errors
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// A lower-level error wrapped with added context.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

// Helper methods for creating errors with context
impl Error {
    /// Create a parameter lookup error
    #[must_use]
    pub fn parameter_lookup(name: impl Into<String>, message: impl Into<String>) -> Self {
        Error::ParameterLookup {
            name: name.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a parameter lookup error with a source error
    #[must_use]
    pub fn parameter_lookup_with_source(
        name: impl Into<String>,
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::ParameterLookup {
            name: name.into(),
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a non-zero exit error
    #[must_use]
    pub fn command_exit(command: impl Into<String>, exit_code: i32) -> Self {
        Error::CommandExit {
            command: command.into(),
            exit_code,
        }
    }

    /// Create a command start error
    #[must_use]
    pub fn command_start(command: impl Into<String>, message: impl Into<String>) -> Self {
        Error::CommandStart {
            command: command.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a command start error with a source error
    #[must_use]
    pub fn command_start_with_source(
        command: impl Into<String>,
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::CommandStart {
            command: command.into(),
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }
}

// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to a Result
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a lazy message
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Context {
            context: message.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| Error::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
