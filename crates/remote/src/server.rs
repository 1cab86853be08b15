// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP server implementation.
//!
//! Serves one collection per record kind under the API root:
//!
//! | Method | Path          | Response                                  |
//! |--------|---------------|-------------------------------------------|
//! | GET    | `/notes`      | every note                                |
//! | POST   | `/notes`      | the created note (201)                    |
//! | PUT    | `/notes/:id`  | the updated note                          |
//! | DELETE | `/notes/:id`  | `{"message": "Item deleted successfully"}` |
//! | GET    | `/health`     | status, version and message               |
//!
//! `/todos` and `/goals` follow the same shape.

use std::future::Future;
use std::net::SocketAddr;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Serialize;
use sj_core::{Goal, Note, Record, Task};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{debug, info};

use crate::db::Stored;
use crate::error::Result;
use crate::state::ServerState;

pub const DEFAULT_API_ROOT: &str = "/api";

const DELETED: &str = "Item deleted successfully";

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
struct Message {
    message: &'static str,
}

async fn list<R: Stored>(State(state): State<ServerState>) -> Result<Json<Vec<R>>> {
    let records = state.list::<R>().await?;
    debug!(kind = %R::KIND, count = records.len(), "listed");
    Ok(Json(records))
}

async fn create<R: Stored>(
    State(state): State<ServerState>,
    Json(draft): Json<R::Draft>,
) -> Result<impl IntoResponse> {
    let record = state.create::<R>(draft).await?;
    info!(kind = %R::KIND, id = record.id(), "created");
    Ok((StatusCode::CREATED, Json(record)))
}

async fn update<R: Stored>(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(draft): Json<R::Draft>,
) -> Result<Json<R>> {
    let record = state.update::<R>(id, draft).await?;
    info!(kind = %R::KIND, id, "updated");
    Ok(Json(record))
}

async fn delete<R: Stored>(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<Message>> {
    state.delete::<R>(id).await?;
    info!(kind = %R::KIND, id, "deleted");
    Ok(Json(Message { message: DELETED }))
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        message: "SJ Notes API is running",
    })
}

fn collection<R: Stored>() -> Router<ServerState> {
    Router::new()
        .route("/", get(list::<R>).post(create::<R>))
        .route("/:id", put(update::<R>).delete(delete::<R>))
}

/// Normalizes an API root to `/segment` form; `""` and `"/"` mean no prefix.
pub fn normalize_root(root: &str) -> String {
    let trimmed = root.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

/// Builds the router with every collection nested under `api_root`.
pub fn router(state: ServerState, api_root: &str) -> Router {
    let api = Router::new()
        .nest(Note::KIND.path(), collection::<Note>())
        .nest(Task::KIND.path(), collection::<Task>())
        .nest(Goal::KIND.path(), collection::<Goal>())
        .route("/health", get(health));

    let root = normalize_root(api_root);
    let app = if root.is_empty() {
        api
    } else {
        Router::new().nest(&root, api)
    };
    app.layer(CorsLayer::permissive()).with_state(state)
}

/// Serves on an already-bound listener until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    state: ServerState,
    api_root: &str,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    axum::serve(listener, router(state, api_root))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Runs the HTTP server on the given address until Ctrl-C.
pub async fn run(addr: SocketAddr, state: ServerState, api_root: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on: http://{}{}", listener.local_addr()?, normalize_root(api_root));

    serve(listener, state, api_root, async {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutting down");
        }
    })
    .await
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
