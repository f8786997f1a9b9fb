//! Request and response bodies for the ZDK private API.
//!
//! The API is RPC-style: every call is a POST whose body wraps a single
//! request object in `{"arguments": [...]}`. The shapes here must match the
//! upstream schema exactly.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::User;

/// Room kind for group rooms.
pub const ROOM_KIND_GROUP: u32 = 2;

/// Default room capacity (upstream maximum is 256).
pub const ROOM_CAPACITY: u32 = 32;

/// Rooms are deleted after 24 hours of inactivity, in nanoseconds.
pub const ROOM_RETENTION_NANOS: u64 = 86_400_000_000_000;

/// Static capability list granted to every token.
pub const TOKEN_PERMISSIONS: [u32; 8] = [100, 200, 300, 400, 500, 600, 700, 800];

/// Envelope for every outbound call.
#[derive(Debug, Serialize)]
pub struct CallBody<T> {
    pub arguments: Vec<T>,
}

impl<T> CallBody<T> {
    pub fn one(argument: T) -> Self {
        Self {
            arguments: vec![argument],
        }
    }
}

/// `user.tokens.private.v1.Service/Create` argument.
#[derive(Debug, Serialize)]
pub struct AuthTokenRequest {
    pub id: String,
    pub avatar: String,
    pub nickname: String,
    pub fullname: String,
    pub permissions: Vec<u32>,
}

impl AuthTokenRequest {
    pub fn for_user(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            avatar: String::new(),
            nickname: user.name.clone(),
            fullname: String::new(),
            permissions: TOKEN_PERMISSIONS.to_vec(),
        }
    }
}

/// `room.rooms.private.v1.Service/Create` argument.
///
/// Everything except the name is constant; capacity and retention are fixed
/// regardless of caller input.
#[derive(Debug, Serialize)]
pub struct CreateRoomRequest {
    pub metadata: RoomMetadata,
    pub kind: u32,
    pub capacity: u32,
    pub retention: u64,
}

impl CreateRoomRequest {
    pub fn named(name: &str) -> Self {
        Self {
            metadata: RoomMetadata {
                name: name.to_string(),
            },
            kind: ROOM_KIND_GROUP,
            capacity: ROOM_CAPACITY,
            retention: ROOM_RETENTION_NANOS,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RoomMetadata {
    pub name: String,
}

/// Query selecting rooms by id, used by Select, Update and Delete.
#[derive(Debug, Serialize)]
pub struct RoomQuery {
    pub conditions: Vec<RoomCondition>,
}

impl RoomQuery {
    pub fn by_id(id: &str) -> Self {
        Self {
            conditions: vec![RoomCondition {
                ids: vec![id.to_string()],
            }],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RoomCondition {
    pub ids: Vec<String>,
}

/// `room.rooms.private.v1.Service/{Select,Delete}` argument.
#[derive(Debug, Serialize)]
pub struct RoomQueryRequest {
    pub query: RoomQuery,
}

impl RoomQueryRequest {
    pub fn by_id(id: &str) -> Self {
        Self {
            query: RoomQuery::by_id(id),
        }
    }
}

/// `room.rooms.private.v1.Service/Update` argument.
///
/// Only the fields present are updated upstream; absent ones are omitted from
/// the JSON entirely.
#[derive(Debug, Serialize)]
pub struct UpdateRoomRequest {
    pub query: RoomQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<FieldUpdate<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<FieldUpdate<HashMap<String, String>>>,
}

impl UpdateRoomRequest {
    pub fn new(id: &str, capacity: Option<u32>, metadata: Option<HashMap<String, String>>) -> Self {
        Self {
            query: RoomQuery::by_id(id),
            capacity: capacity.map(|value| FieldUpdate { value }),
            metadata: metadata.map(|value| FieldUpdate { value }),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FieldUpdate<T> {
    pub value: T,
}

/// `room.members.private.v1.Service/Kick` argument.
#[derive(Debug, Serialize)]
pub struct KickRequest {
    pub query: MemberQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl KickRequest {
    pub fn user(user_id: &str, reason: Option<String>) -> Self {
        Self {
            query: MemberQuery {
                conditions: vec![MemberCondition {
                    user_ids: vec![user_id.to_string()],
                }],
            },
            reason,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MemberQuery {
    pub conditions: Vec<MemberCondition>,
}

#[derive(Debug, Serialize)]
pub struct MemberCondition {
    pub user_ids: Vec<String>,
}

/// Response of `user.tokens.private.v1.Service/Create`.
#[derive(Debug, Deserialize)]
pub struct CreateTokensResponse {
    pub tokens: Vec<String>,
}

/// Response of `room.rooms.private.v1.Service/Create`.
#[derive(Debug, Deserialize)]
pub struct CreateRoomsResponse {
    pub rooms: Vec<serde_json::Value>,
}
