/// Constants used throughout the ssmrun codebase
// Environment variable keys ending in this suffix reference an SSM parameter;
// the value names the parameter, the key minus the suffix names the injected
// variable.
pub const SSM_PARAMETER_SUFFIX: &str = "_SSM_PARAMETER_NAME";

// Default tracing filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
