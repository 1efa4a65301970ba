//! Start the Folio server.

use clap::Args;

use folio_core::config::AppConfig;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Seed the sample gallery when the store is empty
    #[arg(long)]
    pub seed: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> anyhow::Result<()> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if args.seed {
        config.database.seed_on_start = true;
    }

    println!("Starting Folio server...");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);

    folio_api::run_server(config).await?;
    Ok(())
}
