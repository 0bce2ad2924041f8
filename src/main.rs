//! gcphelper - Main entry point

use clap::Parser;
use log::{debug, info};
use std::process::ExitCode;

use gcphelper::{
    run_folders_command, run_organizations_command, Cli, Command, GcpClient, Result,
    TokenResolver,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting gcphelper v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    // Reject bad settings before touching credentials or the network
    let options = cli.output_options()?;
    let endpoint = cli.endpoint()?;
    debug!(
        "CLI args: format={}, verbose={}, batch={}, endpoint={}",
        options.format, options.verbose, cli.batch, endpoint
    );

    let token = TokenResolver::new()
        .resolve(cli.access_token.as_deref())
        .await?;
    let client = GcpClient::new(token, endpoint.to_string());

    match &cli.command {
        Command::Organizations => run_organizations_command(&client, &options).await,
        Command::Folders(args) => run_folders_command(&client, args, &options).await,
    }
}
