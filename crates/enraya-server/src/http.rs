//! Auxiliary read endpoint: the current top ten as JSON.
//!
//! A single `GET /leaderboard` route, answered from a coordinator
//! snapshot. Not part of the match protocol — it exists so anything that
//! can speak HTTP (a status page, a script) can read the standings.

use axum::{Json, Router, extract::State, routing::get};
use enraya_ranking::ScoreEntry;

use crate::ServerError;
use crate::coordinator::CoordinatorHandle;

/// Builds the leaderboard router.
pub fn router(handle: CoordinatorHandle) -> Router {
    Router::new()
        .route("/leaderboard", get(leaderboard))
        .with_state(handle)
}

async fn leaderboard(State(handle): State<CoordinatorHandle>) -> Json<Vec<ScoreEntry>> {
    Json(handle.top_ten().await)
}

/// Serves the endpoint until the process terminates.
pub async fn serve(addr: &str, handle: CoordinatorHandle) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(ServerError::Http)?;
    tracing::info!(addr, "leaderboard endpoint listening");
    axum::serve(listener, router(handle))
        .await
        .map_err(ServerError::Http)?;
    Ok(())
}
