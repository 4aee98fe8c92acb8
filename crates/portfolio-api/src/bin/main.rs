//! Portfolio API entry point

use clap::Parser;
use portfolio_api::startup::{initialize, load_seed, open_store, serve};
use portfolio_api::telemetry::init_tracing;
use portfolio_api::{build_app, Cli, Commands};
use portfolio_storage::PortfolioStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let server_config = cli.command.server_config();

    match cli.command {
        Commands::Serve {
            seed_file, store, ..
        } => {
            let Some(server_config) = server_config else {
                anyhow::bail!("serve command without server settings");
            };
            let settings = store.settings()?;
            let seed = load_seed(seed_file.as_deref())?;

            let store = open_store(&settings).await?;
            let (state, _) = initialize(store, &seed).await?;
            let app = build_app(state, &server_config)?;

            let listener = tokio::net::TcpListener::bind((
                server_config.host.as_str(),
                server_config.port,
            ))
            .await?;
            serve(listener, app).await?;
        }

        Commands::Seed { seed_file, store } => {
            let settings = store.settings()?;
            let seed = load_seed(seed_file.as_deref())?;

            let store = open_store(&settings).await?;
            let (_, outcome) = initialize(store, &seed).await?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }

        Commands::Messages { store } => {
            let settings = store.settings()?;
            let store = open_store(&settings).await?;
            store.prepare_schema().await?;

            let messages = store.contact_messages().await?;
            println!("{}", serde_json::to_string_pretty(&messages)?);
        }
    }

    Ok(())
}
