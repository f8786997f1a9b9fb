use axum::{extract::State, routing::get, Json, Router};
use serde_json::json;

use crate::error::Result;
use crate::models::User;
use crate::state::AppState;
use crate::zdk::types::AuthTokenRequest;

pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(me))
        .route("/token", get(token))
}

/// GET /me - identity of the process user, no upstream call
async fn me(State(state): State<AppState>) -> Json<User> {
    Json(state.user.as_ref().clone())
}

/// GET /token - mint a ZDK auth token for the process user
async fn token(State(state): State<AppState>) -> Result<Json<serde_json::Value>> {
    let request = AuthTokenRequest::for_user(&state.user);
    let token = state.zdk.create_token(request).await?;

    tracing::info!(user_id = %state.user.id, "Issued ZDK token");

    Ok(Json(json!({ "token": token })))
}
