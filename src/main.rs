//! spacectl - Main entry point

use clap::Parser;
use log::{debug, info};

use spacectl::{
    run_get_user_command, run_list_spaces_command, Cli, Command, GetResource, ListResource, Result,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting spacectl v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: config={:?}, batch={}, no_header={}",
        cli.config, cli.batch, cli.no_header
    );

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::List {
            resource: ListResource::Spaces(args),
        } => run_list_spaces_command(cli, args).await,
        Command::Get {
            resource: GetResource::User,
        } => run_get_user_command(cli),
    }
}
