use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use editorial_search::config;
use editorial_search::loader::{self, Source};
use editorial_search::Controller;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "editorial_search=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration / 加载配置
    let app_config = config::load_config().map_err(anyhow::Error::msg)?;
    tracing::info!("Server will listen on {}:{}", app_config.server.host, app_config.server.port);

    let source = Source::parse(&app_config.source.location);
    let client = loader::http_client(&app_config.source)?;

    // Load editorials in background, searches before completion see an empty set / 后台加载社论
    let controller = Controller::new();
    controller.spawn_startup(source.clone(), client);
    tracing::info!("Loading editorials from {} in background...", source);

    let app = editorial_search::api::router(controller);

    let bind_addr = app_config.get_bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server running at http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
