//! Orchestration of one resolve-and-launch invocation.

use std::io::Write;

use ssmrun_core::constants::SSM_PARAMETER_SUFFIX;
use ssmrun_core::{Error, ResolvedSecrets, Result, ResultExt};
use tracing::debug;

use crate::launcher;
use crate::scanner;
use crate::store::ParameterStore;

/// One secret-injection launch: ambient snapshot and positional arguments in,
/// child outcome out.
///
/// All process-wide inputs (environment, arguments, output streams) are
/// injected explicitly so the pipeline can run against scripted collaborators
/// in tests. Nothing is shared across invocations.
pub struct Invocation {
    environ: Vec<String>,
    args: Vec<String>,
    stdout: Box<dyn Write + Send>,
    stderr: Box<dyn Write + Send>,
    store: Box<dyn ParameterStore>,
}

impl Invocation {
    /// Build an invocation from an ambient environment snapshot and positional
    /// arguments, where `args[0]` is the command and the rest its arguments.
    pub fn new(
        environ: Vec<String>,
        args: Vec<String>,
        stdout: Box<dyn Write + Send>,
        stderr: Box<dyn Write + Send>,
        store: Box<dyn ParameterStore>,
    ) -> Self {
        Self {
            environ,
            args,
            stdout,
            stderr,
            store,
        }
    }

    /// Run the pipeline: scan for secret references, resolve each one, then
    /// execute the command with the augmented environment.
    ///
    /// The first resolution failure aborts the invocation; the child is never
    /// started. The launcher runs at most once.
    pub async fn handle(self) -> Result<()> {
        let Invocation {
            environ,
            args,
            stdout,
            stderr,
            store,
        } = self;

        let Some((command, command_args)) = args.split_first() else {
            return Err(Error::NoCommand);
        };

        let references = scanner::scan_with_suffix(&environ, SSM_PARAMETER_SUFFIX);
        debug!(count = references.len(), "found secret references");

        let mut secrets = ResolvedSecrets::new();
        for (key, parameter_name) in &references {
            let value = store
                .get_parameter(parameter_name)
                .await
                .context("cannot get paramter value")?;

            let derived = scanner::strip_suffix_key(key, SSM_PARAMETER_SUFFIX);
            debug!(key = %derived, parameter = %parameter_name, "resolved ssm parameter");
            secrets.insert(derived, value);
        }

        launcher::execute(&environ, &secrets, command, command_args, stdout, stderr)
            .context("external command execution failed")
    }
}
