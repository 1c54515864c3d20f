use enraya_ranking::Ranking;
use enraya_server::{GameServer, ServerConfig, http};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::default();
    let http_addr = config.http_addr.clone();

    let server = GameServer::bind(config, Ranking::new()).await?;

    let handle = server.handle();
    tokio::spawn(async move {
        if let Err(e) = http::serve(&http_addr, handle).await {
            tracing::error!(error = %e, "leaderboard endpoint stopped");
        }
    });

    server.run().await?;
    Ok(())
}
