// src/main.rs
use clap::Parser;
use sf_servers_bot::bot::{self, CommandReply, TerminalResponder, handle_servers_command};
use sf_servers_bot::cli::Args;
use sf_servers_bot::config::Config;
use sf_servers_bot::data_fetcher::api::create_http_client_with_timeout;
use sf_servers_bot::data_fetcher::{HttpServerSource, SteamNameResolver};
use sf_servers_bot::embed_ui::LayoutLimits;
use sf_servers_bot::error::AppError;
use sf_servers_bot::logging::setup_logging;

/// Runs the command once against the live data source and prints the result.
async fn run_once(config: &Config) -> Result<(), AppError> {
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let source = HttpServerSource::new(client.clone(), config.api_url.clone());
    let resolver = SteamNameResolver::from_config(client, config);

    let reply = handle_servers_command(
        &source,
        &resolver,
        &TerminalResponder,
        &LayoutLimits::default(),
    )
    .await;

    if let CommandReply::Document(document) = reply {
        tracing::info!(
            "Previewed {} of {} servers",
            document.blocks.len(),
            document.total_servers
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let config = Config::load(args.config.as_deref()).await?;

    // The guard must be kept alive for the duration of the program
    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.once {
        return run_once(&config).await;
    }

    bot::run(&config).await
}
