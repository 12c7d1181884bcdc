use connect_service::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    init_tracing(&config)?;

    tracing::info!(
        "Starting {} on port {}",
        config.service.name,
        config.service.port
    );
    tracing::info!("  POST /api/createUser - Validate and echo user records");
    tracing::info!("  POST /api/images     - Normalize an upload to a 256x256 PNG");

    let router = app(&config);
    Server::new(config).serve(router).await?;

    tracing::info!("Server stopped gracefully");
    Ok(())
}
