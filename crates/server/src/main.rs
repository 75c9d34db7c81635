use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // DB path: use VIDSHELF_DB env or default
    let db_path = std::env::var("VIDSHELF_DB").unwrap_or_else(|_| "vidshelf.db".to_string());
    info!(db_path = %db_path, "connecting to database");

    let pool = vidshelf_db::connect(&db_path)
        .await
        .context("failed to connect to database")?;

    // Run migrations
    vidshelf_db::migrate::run(&pool)
        .await
        .context("failed to run migrations")?;
    info!("migrations complete");

    let app_state = vidshelf_server::state::AppState { db: pool };
    let app = vidshelf_server::routes::build_router(app_state);

    let bind_addr = std::env::var("VIDSHELF_BIND").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .context("failed to bind")?;
    info!(addr = %bind_addr, "server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
