use std::net::SocketAddr;
use std::sync::Arc;

use scribe::api::{create_router, AppState};
use scribe::application::Logger;
use scribe::infrastructure::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    let logger = Arc::new(Logger::new(config.log.clone()));
    logger.info("Starting server...", &[]);

    let state = AppState::new(logger.clone());
    let app = create_router(state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    logger.info(format!("Server listening on {addr}"), &[]);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
