mod config;
mod routes;

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },

    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env()?;
    if !config.dist_dir.is_dir() {
        tracing::warn!(
            dir = %config.dist_dir.display(),
            "plugin bundle directory missing; run `trunk build` in plugin/"
        );
    }

    let app = routes::app(&config);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(port = config.port, dir = %config.dist_dir.display(), "plugin asset server listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
