use librarystats::config::Config;
use librarystats::{router, AppState};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("librarystats=info,tower_http=info")
        .init();

    let config = Config::from_env();
    let state = Arc::new(AppState::new(&config));

    let app = router(state);

    let addr = format!("0.0.0.0:{}", config.port);

    info!("Library stats service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
