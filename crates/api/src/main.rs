use anyhow::Context;

use catalogo_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalogo_observability::init();

    let config = ApiConfig::from_env().context("invalid server configuration")?;
    let app = catalogo_api::app::build_app(catalogo_api::app::services::AppServices::in_memory());

    let listener = tokio::net::TcpListener::bind(config.socket_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.socket_addr()))?;

    tracing::info!("Servidor rodando na porta {}", listener.local_addr()?.port());

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
