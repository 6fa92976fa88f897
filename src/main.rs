use anyhow::Context;
use lightcheck::build_app;
use lightcheck::config::Config;
use lightcheck::utils::init_logging;
use log::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    // initialize tracing
    init_logging();

    let config = Config::from_env().context("Failed to load configuration")?;
    let bind_addr = config.bind_addr.clone();
    let app = build_app(config).context("Failed to build PageSpeed client")?;

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    info!("🚀 Server running on http://{}", bind_addr);
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
