use clap::Parser;
use tracing::debug;

use slack_send::cli::{self, Cli};
use slack_send::{AppConfig, SlackClient, SlackError};

/// Exit status for usage errors, matching every other failure.
const USAGE_EXIT_CODE: i32 = 1;

async fn run(args: &Cli) -> Result<String, SlackError> {
    let config = AppConfig::from_env()?;
    let client = SlackClient::from_config(&config);
    cli::dispatch(&args.command, &config, &client).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        // --help and --version also arrive here and keep clap's exit status 0.
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            std::process::exit(USAGE_EXIT_CODE);
        }
    };
    slack_send::setup_logging();

    match run(&args).await {
        Ok(message) => cli::write_success(&message),
        Err(err) => {
            debug!("Command failed: {}", err);
            cli::write_error(&err);
            std::process::exit(err.exit_code());
        }
    }
}
