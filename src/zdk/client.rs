use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::zdk::types::{
    AuthTokenRequest, CallBody, CreateRoomRequest, CreateRoomsResponse, CreateTokensResponse,
    KickRequest, RoomQueryRequest, UpdateRoomRequest,
};

const TOKENS_SERVICE: &str = "user";
const ROOMS_SERVICE: &str = "room";

/// Client for the ZDK private API.
///
/// The API is RPC over HTTP: one service subdomain per resource, always POST,
/// bearer-token auth, and a `{"arguments": [...]}` JSON body.
#[derive(Clone)]
pub struct ZdkClient {
    http: Client,
    api_key: Option<String>,
    api_host: String,
}

impl ZdkClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            api_host: config.api_host.clone(),
        })
    }

    /// Create an auth token for the given user and return the first token.
    pub async fn create_token(&self, request: AuthTokenRequest) -> Result<String> {
        let response = self
            .call(TOKENS_SERVICE, "user.tokens.private.v1.Service/Create", request)
            .await?;

        let tokens: CreateTokensResponse = serde_json::from_value(response).map_err(|e| {
            AppError::Upstream(format!("user.tokens.private.v1.Service/Create: {}", e))
        })?;

        tokens.tokens.into_iter().next().ok_or_else(|| {
            AppError::Upstream(
                "user.tokens.private.v1.Service/Create returned no tokens".to_string(),
            )
        })
    }

    /// Create a room and return the first room object.
    pub async fn create_room(&self, name: &str) -> Result<Value> {
        let response = self
            .call(
                ROOMS_SERVICE,
                "room.rooms.private.v1.Service/Create",
                CreateRoomRequest::named(name),
            )
            .await?;

        let rooms: CreateRoomsResponse = serde_json::from_value(response).map_err(|e| {
            AppError::Upstream(format!("room.rooms.private.v1.Service/Create: {}", e))
        })?;

        rooms.rooms.into_iter().next().ok_or_else(|| {
            AppError::Upstream("room.rooms.private.v1.Service/Create returned no rooms".to_string())
        })
    }

    /// Select rooms by id; the raw upstream response is passed through.
    pub async fn select_rooms(&self, room_id: &str) -> Result<Value> {
        self.call(
            ROOMS_SERVICE,
            "room.rooms.private.v1.Service/Select",
            RoomQueryRequest::by_id(room_id),
        )
        .await
    }

    /// Update the fields that are present; raw response passthrough.
    pub async fn update_room(
        &self,
        room_id: &str,
        capacity: Option<u32>,
        metadata: Option<HashMap<String, String>>,
    ) -> Result<Value> {
        self.call(
            ROOMS_SERVICE,
            "room.rooms.private.v1.Service/Update",
            UpdateRoomRequest::new(room_id, capacity, metadata),
        )
        .await
    }

    /// Delete rooms by id; raw response passthrough.
    pub async fn delete_room(&self, room_id: &str) -> Result<Value> {
        self.call(
            ROOMS_SERVICE,
            "room.rooms.private.v1.Service/Delete",
            RoomQueryRequest::by_id(room_id),
        )
        .await
    }

    /// Kick a member from all rooms they are in.
    pub async fn kick_member(&self, user_id: &str, reason: Option<String>) -> Result<Value> {
        self.call(
            ROOMS_SERVICE,
            "room.members.private.v1.Service/Kick",
            KickRequest::user(user_id, reason),
        )
        .await
    }

    /// Issue one RPC call. The key is checked before any network I/O so a
    /// missing key never produces an outbound request.
    async fn call<T: Serialize>(&self, service: &str, rpc: &str, argument: T) -> Result<Value> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::Configuration("ZDK_API_KEY is not set".to_string()))?;

        let url = format!("https://{}.{}/{}", service, self.api_host, rpc);

        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&CallBody::one(argument))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::UpstreamTimeout(format!("{}: {}", rpc, e))
                } else {
                    AppError::Upstream(format!("{}: {}", rpc, e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "{} returned {}: {}",
                rpc, status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("{}: invalid response body: {}", rpc, e)))
    }
}
