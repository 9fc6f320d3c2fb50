//! # mastery-api
//!
//! JSON-over-HTTP surface for the workspace store.
//!
//! | Route | Success | Failure |
//! |---|---|---|
//! | `GET /api/{streams,habits,journals}` | 200 + array | |
//! | `POST /api/{streams,habits,journals}` | 201 + record | 400 + `{"detail"}` |
//! | `GET /api/{collection}/:id` | 200 + record | 404 |
//! | `DELETE /api/{collection}/:id` | 204 | 404 |
//! | `POST /api/streams/:id/progress` | 200 + record | 404 |
//! | `POST /api/habits/:id/check-in` | 200 + record | 404 |
//! | `GET /api/dashboard` | 200 + snapshot | |
//! | `GET /api/export` | 200 + document | |
//! | `POST /api/import` | 202 | 400 + first validation error |

pub mod error;
pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::sync::RwLock;

use mastery_db::service::MasteryService;

/// Store shared across handlers. Reads take the read lock; every mutation
/// takes the write lock so transactions never interleave on the connection.
pub type SharedState = Arc<RwLock<MasteryService>>;

#[must_use]
pub fn shared(service: MasteryService) -> SharedState {
    Arc::new(RwLock::new(service))
}

/// Create the API router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route(
            "/api/streams",
            get(routes::list_streams).post(routes::create_stream),
        )
        .route(
            "/api/streams/:id",
            get(routes::get_stream).delete(routes::delete_stream),
        )
        .route("/api/streams/:id/progress", post(routes::update_progress))
        .route(
            "/api/habits",
            get(routes::list_habits).post(routes::create_habit),
        )
        .route(
            "/api/habits/:id",
            get(routes::get_habit).delete(routes::delete_habit),
        )
        .route("/api/habits/:id/check-in", post(routes::toggle_check_in))
        .route(
            "/api/journals",
            get(routes::list_journals).post(routes::create_journal_entry),
        )
        .route(
            "/api/journals/:id",
            get(routes::get_journal_entry).delete(routes::delete_journal_entry),
        )
        .route("/api/dashboard", get(routes::dashboard))
        .route("/api/export", get(routes::export_workspace))
        .route("/api/import", post(routes::import_workspace))
        .with_state(state)
}

/// Bind `addr` and serve the API until the process is stopped.
///
/// # Errors
///
/// Returns the I/O error if the listener cannot bind or the server fails.
pub async fn serve(service: MasteryService, addr: SocketAddr) -> std::io::Result<()> {
    let app = create_router(shared(service));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "mastery API listening");
    axum::serve(listener, app).await
}
