use sqlx::SqlitePool;

/// Shared application state passed to all handlers. Built once in `main`
/// and injected via `State`; nothing reaches for a process-wide client.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
}
