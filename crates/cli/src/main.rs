use clap::Parser;
use lambda_runtime::{service_fn, Error as LambdaError, LambdaEvent};
use ssmrun_env::{Invocation, SsmStore};
use tracing::info;

mod telemetry;

/// Run a command inside Lambda with SSM-referenced secrets injected into its
/// environment.
///
/// Every ambient variable whose key ends in `_SSM_PARAMETER_NAME` names an SSM
/// parameter; its decrypted value is exported under the key minus the suffix
/// before the command starts.
#[derive(Parser)]
#[command(name = "ssmrun")]
#[command(version)]
struct Cli {
    /// Command to execute, followed by its arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    telemetry::init()?;

    let cli = Cli::parse();

    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = SsmStore::new(aws_sdk_ssm::Client::new(&config));

    lambda_runtime::run(service_fn(move |_event: LambdaEvent<serde_json::Value>| {
        let store = store.clone();
        let args = cli.command.clone();
        async move {
            if let Some(command) = args.first() {
                info!(command = %command, "launching wrapped command");
            }

            // Fresh ambient snapshot per invocation; the store client is the
            // only thing reused across events.
            let environ: Vec<String> = std::env::vars()
                .map(|(key, value)| format!("{key}={value}"))
                .collect();

            Invocation::new(
                environ,
                args,
                Box::new(std::io::stdout()),
                Box::new(std::io::stderr()),
                Box::new(store),
            )
            .handle()
            .await?;

            Ok::<serde_json::Value, LambdaError>(serde_json::Value::Null)
        }
    }))
    .await
}
