use axum::extract::{Path, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use vidshelf_core::error::NavError;
use vidshelf_core::nav;
use vidshelf_core::types::{Target, View};

use crate::error::AppError;
use crate::pages;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(browse_home))
        .route("/{*path}", get(browse_path))
        // Stand-in for a drop-in response cache: browse pages are cacheable
        // for 5 minutes; the resolver is unaware of it.
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=300"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    sqlx::query("SELECT 1")
        .execute(&state.db)
        .await
        .map_err(|e| NavError::upstream(format!("database check failed: {e}")))?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}

// ---------------------------------------------------------------------------
// Browsing
// ---------------------------------------------------------------------------

async fn browse_home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let view = resolve(&state, Target::Home).await?;
    Ok(Html(pages::render(&view)))
}

async fn browse_path(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response, AppError> {
    let Some(target) = Target::parse(&path) else {
        // Path outside the navigation grammar: router-level miss.
        return Ok((StatusCode::NOT_FOUND, "not found").into_response());
    };

    let view = resolve(&state, target).await?;
    Ok(Html(pages::render(&view)).into_response())
}

/// Fetch what the target needs and run the resolver over it. One sequential
/// chain of lookups per request; any store error aborts the request.
async fn resolve(state: &AppState, target: Target) -> Result<View, AppError> {
    let view = match target {
        Target::Home => {
            let names = vidshelf_db::repo::catalog::all_names(&state.db)
                .await
                .map_err(upstream)?;
            nav::resolve_home(names)
        }
        Target::Title { name } => {
            let entries = vidshelf_db::repo::catalog::title_entries(&state.db, &name)
                .await
                .map_err(upstream)?;
            nav::resolve_title(&name, &entries)
        }
        Target::Season { name, season } => {
            let entries = vidshelf_db::repo::catalog::season_entries(&state.db, &name, season)
                .await
                .map_err(upstream)?;
            nav::resolve_season(&name, season, &entries)
        }
        Target::Episode {
            name,
            season,
            episode,
        } => {
            let entries = vidshelf_db::repo::catalog::season_entries(&state.db, &name, season)
                .await
                .map_err(upstream)?;
            View::Playback(nav::resolve_episode(&name, season, episode, &entries)?)
        }
        Target::Part { name, part } => {
            let entries = vidshelf_db::repo::catalog::title_entries(&state.db, &name)
                .await
                .map_err(upstream)?;
            View::Playback(nav::resolve_part(&name, part, &entries)?)
        }
    };
    Ok(view)
}

fn upstream(e: sqlx::Error) -> AppError {
    AppError(NavError::upstream(e.to_string()))
}
