//! Accent Convert CLI entry point

use std::process::ExitCode;

use clap::Parser;

use accent_convert::cli::{
    app::{cli_config, load_merged_config, resolve_run_options, run_convert},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    logging::init_tracing,
    presenter::Presenter,
    EXIT_ERROR, EXIT_USAGE_ERROR,
};
use accent_convert::domain::error::ConfigError;
use accent_convert::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let presenter = Presenter::new();

    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return match e {
                ConfigError::ValidationError { .. } => ExitCode::from(EXIT_USAGE_ERROR),
                _ => ExitCode::from(EXIT_ERROR),
            };
        }
        return ExitCode::SUCCESS;
    }

    let config = load_merged_config(cli_config(&cli)).await;

    let options = match resolve_run_options(&cli, &config) {
        Ok(options) => options,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    run_convert(options, &config).await
}
