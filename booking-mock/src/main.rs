use booking_mock::{AppState, Config, logger, router};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    logger::init_logger(&config.log_filter);

    let state = Arc::new(AppState::seeded());
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "booking-mock listening");

    axum::serve(listener, app).await
}
