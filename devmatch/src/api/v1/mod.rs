pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod response;
pub mod router;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    use crate::api::{create_router, AppState};
    use crate::cache::SystemClock;
    use crate::config::{
        CacheConfig, Config, DatabaseConfig, GitHubConfig, MatchingConfig, ServerConfig,
    };
    use crate::db::InMemoryProfileStore;
    use crate::github::StaticDataSource;
    use crate::models::{InterestList, UserProfile};

    fn profile(uid: &str, location: &str, age: u32, interests: &str) -> UserProfile {
        UserProfile {
            uid: uid.to_string(),
            location: Some(location.to_string()),
            age: Some(age),
            goal: Some("dating".to_string()),
            interests: Some(InterestList::Text(interests.to_string())),
            ..Default::default()
        }
    }

    fn test_state(api_keys: Vec<String>) -> AppState {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                api_keys,
            },
            database: DatabaseConfig {
                url: "file::memory:".to_string(),
                auth_token: None,
                local_path: None,
            },
            github: GitHubConfig::default(),
            cache: CacheConfig::default(),
            matching: MatchingConfig::default(),
        };

        let store = InMemoryProfileStore::with_profiles([
            profile("alice", "London", 28, "music,travel"),
            profile("bob", "london", 30, "music,coding"),
        ]);

        AppState::new(
            config,
            Arc::new(store),
            Arc::new(StaticDataSource::new()),
            Arc::new(SystemClock),
        )
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn calculate_request(body: serde_json::Value, key: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/api/v1/matches:calculate")
            .header("content-type", "application/json");
        if let Some(key) = key {
            builder = builder.header("authorization", format!("Bearer {key}"));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn protected_route_requires_auth() {
        let app = create_router(test_state(vec!["test-key".to_string()]));

        let response = app
            .oneshot(calculate_request(
                json!({"userAId": "alice", "userBId": "bob"}),
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "unauthorized");
        assert!(json.get("data").is_none());
    }

    #[tokio::test]
    async fn wrong_key_is_rejected() {
        let app = create_router(test_state(vec!["test-key".to_string()]));

        let response = app
            .oneshot(calculate_request(
                json!({"userAId": "alice", "userBId": "bob"}),
                Some("other"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn health_is_public() {
        let app = create_router(test_state(vec!["secret".to_string()]));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["database"]["status"], "ok");
    }

    #[tokio::test]
    async fn unknown_route_uses_error_envelope() {
        let app = create_router(test_state(vec!["secret".to_string()]));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/unknown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "not_found");
    }

    #[tokio::test]
    async fn openapi_json_is_public_and_valid() {
        let app = create_router(test_state(vec!["secret".to_string()]));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let version = json["openapi"]
            .as_str()
            .expect("openapi field should be a string");
        assert!(version.starts_with('3'));
        assert!(json["paths"].get("/api/v1/matches:calculate").is_some());
    }

    #[tokio::test]
    async fn calculate_match_returns_result() {
        let app = create_router(test_state(vec!["k".to_string()]));

        let response = app
            .oneshot(calculate_request(
                json!({"userAId": "alice", "userBId": "bob"}),
                Some("k"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["matchScore"], 58);
        assert_eq!(json["data"]["compatibility"]["profile"], 33);
        assert_eq!(json["data"]["breakdown"]["location"]["insight"], "Perfect location match!");
    }

    #[tokio::test]
    async fn calculate_match_requires_both_ids() {
        let app = create_router(test_state(vec!["k".to_string()]));

        let response = app
            .oneshot(calculate_request(json!({"userAId": "alice"}), Some("k")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "invalid_request");
    }

    #[tokio::test]
    async fn calculate_match_unknown_profile_is_404() {
        let app = create_router(test_state(vec!["k".to_string()]));

        let response = app
            .oneshot(calculate_request(
                json!({"userAId": "alice", "userBId": "nobody"}),
                Some("k"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "not_found");
    }

    #[tokio::test]
    async fn suggestions_are_wrapped_with_total() {
        let app = create_router(test_state(vec!["k".to_string()]));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/matches/suggestions/alice?limit=5")
                    .header("authorization", "Bearer k")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["total"], 1);
        assert_eq!(json["data"]["matches"][0]["user"]["uid"], "bob");
        assert!(json["data"]["matches"][0]["user"].get("email").is_none());
    }

    #[tokio::test]
    async fn invalid_handle_yields_zero_fingerprint() {
        let app = create_router(test_state(vec!["k".to_string()]));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/fingerprints/github.com")
                    .header("authorization", "Bearer k")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["primaryLanguages"], json!([]));
        assert_eq!(json["data"]["activityMetrics"]["commitFrequency"], "low");
    }
}
