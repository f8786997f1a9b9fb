pub mod health;
pub mod rooms;
pub mod session;

use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

/// Create the router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(session::session_routes())
        .merge(rooms::room_routes())
        .merge(health::health_routes())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::{Config, DEFAULT_API_HOST};

    fn test_state() -> AppState {
        let config = Config {
            server_host: "localhost".to_string(),
            server_port: 8080,
            api_key: None,
            api_host: DEFAULT_API_HOST.to_string(),
            request_timeout_seconds: 10,
        };
        AppState::new(config).expect("state should build")
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_unknown_route_returns_404() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/does-not-exist")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Route not found");
    }

    #[tokio::test]
    async fn test_me_is_stable_across_calls() {
        let state = test_state();

        let mut seen = Vec::new();
        for _ in 0..2 {
            let app = create_router(state.clone());
            let response = app
                .oneshot(Request::builder().uri("/me").body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            seen.push(body_json(response).await);
        }

        assert_eq!(seen[0], seen[1]);
        assert!(seen[0]["id"].is_string());
        assert!(seen[0]["name"].is_string());
    }

    #[tokio::test]
    async fn test_token_without_api_key_returns_500() {
        let app = create_router(test_state());

        let response = app
            .oneshot(Request::builder().uri("/token").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Configuration error");
        assert_eq!(json["details"], "ZDK_API_KEY is not set");
    }

    #[tokio::test]
    async fn test_room_without_api_key_returns_500() {
        let app = create_router(test_state());

        let response = app
            .oneshot(Request::builder().uri("/room").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_kick_without_id_returns_400() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/kick")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "user id is required");
    }

    #[tokio::test]
    async fn test_kick_without_body_returns_400() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/kick")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_kick_accepts_id_from_query() {
        // Validation passes, then the missing key is reported; either way no
        // outbound call is made.
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/kick?id=abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Configuration error");
    }

    #[tokio::test]
    async fn test_select_room_without_id_returns_400() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/room/select")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "room id is required");
    }

    #[tokio::test]
    async fn test_health_reports_missing_key() {
        let app = create_router(test_state());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["api_key"], "missing");
    }
}
