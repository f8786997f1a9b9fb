use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::error::{AppError, Result};
use crate::state::AppState;

const DEFAULT_ROOM_NAME: &str = "test room";

pub fn room_routes() -> Router<AppState> {
    Router::new()
        .route("/room", get(create_room))
        .route("/room/select", post(select_room))
        .route("/room/{room_id}", put(update_room).delete(delete_room))
        .route("/kick", post(kick_member))
}

/// GET /room - create a room and return the first room object
async fn create_room(State(state): State<AppState>) -> Result<Json<serde_json::Value>> {
    let room = state.zdk.create_room(DEFAULT_ROOM_NAME).await?;

    tracing::info!(room_id = ?room.get("id"), "Room created");

    Ok(Json(json!({ "room": room })))
}

#[derive(Debug, Default, Deserialize)]
struct SelectRoomBody {
    id: Option<String>,
}

/// POST /room/select - look up rooms by id, raw passthrough
async fn select_room(
    State(state): State<AppState>,
    body: Option<Json<SelectRoomBody>>,
) -> Result<Json<serde_json::Value>> {
    let room_id = body
        .and_then(|Json(b)| b.id)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::Validation("room id is required".to_string()))?;

    let response = state.zdk.select_rooms(&room_id).await?;
    Ok(Json(response))
}

#[derive(Debug, Default, Deserialize)]
struct UpdateRoomBody {
    capacity: Option<u32>,
    metadata: Option<HashMap<String, String>>,
}

/// PUT /room/:room_id - update only the fields present, raw passthrough
async fn update_room(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    body: Option<Json<UpdateRoomBody>>,
) -> Result<Json<serde_json::Value>> {
    let Json(body) = body.unwrap_or_default();

    let response = state
        .zdk
        .update_room(&room_id, body.capacity, body.metadata)
        .await?;

    Ok(Json(response))
}

/// DELETE /room/:room_id - raw passthrough
async fn delete_room(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> Result<Json<serde_json::Value>> {
    let response = state.zdk.delete_room(&room_id).await?;

    tracing::info!(%room_id, "Room deleted");

    Ok(Json(response))
}

#[derive(Debug, Default, Deserialize)]
struct KickParams {
    id: Option<String>,
    reason: Option<String>,
}

/// POST /kick - remove a member, id taken from the JSON body or query string
async fn kick_member(
    State(state): State<AppState>,
    Query(query): Query<KickParams>,
    body: Option<Json<KickParams>>,
) -> Result<Json<serde_json::Value>> {
    let Json(body) = body.unwrap_or_default();

    let user_id = body
        .id
        .or(query.id)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::Validation("user id is required".to_string()))?;
    let reason = body.reason.or(query.reason);

    let result = state.zdk.kick_member(&user_id, reason).await?;

    tracing::info!(%user_id, "Member kicked");

    Ok(Json(json!({ "result": result })))
}
