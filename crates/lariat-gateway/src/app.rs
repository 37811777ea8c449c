use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{health_handler, redirect_handler, shorten_handler, stats_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/shorten", post(shorten_handler))
            .route("/stats/{code}", get(stats_handler))
            .route("/{code}", get(redirect_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use lariat_shortener::{InMemoryRepository, ShortenerService};
    use lariat_snowflake::{Snowflake, SnowflakeSettings};
    use std::sync::Arc;
    use tower::util::ServiceExt;

    fn test_router() -> Router {
        let settings = SnowflakeSettings::builder().worker_id(1).build();
        let generator = Snowflake::new(settings).unwrap();
        let service = ShortenerService::new(InMemoryRepository::new(), generator);
        let state = AppState::new(Arc::new(service), "http://localhost:8080");
        App::router(state)
    }

    fn shorten_request(url: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/shorten")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::json!({ "url": url }).to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = test_router()
            .oneshot(get_request("/health"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn shorten_returns_created_code() {
        let response = test_router()
            .oneshot(shorten_request("https://example.com"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        let code = body["code"].as_str().unwrap();
        assert!(!code.is_empty());
        assert!(code.len() <= 11);
        assert_eq!(body["short_url"], format!("http://localhost:8080/{code}"));
    }

    #[tokio::test]
    async fn shorten_rejects_invalid_url() {
        let response = test_router()
            .oneshot(shorten_request("not-a-valid-url"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn redirect_and_stats_flow() {
        let router = test_router();

        let response = router
            .clone()
            .oneshot(shorten_request("https://example.com/page"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let code = body_json(response).await["code"]
            .as_str()
            .unwrap()
            .to_owned();

        // No clicks yet.
        let response = router
            .clone()
            .oneshot(get_request(&format!("/stats/{code}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let stats = body_json(response).await;
        assert_eq!(stats["original_url"], "https://example.com/page");
        assert_eq!(stats["clicks"], 0);

        // Following the link redirects and counts a click.
        let response = router
            .clone()
            .oneshot(get_request(&format!("/{code}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "https://example.com/page"
        );

        let response = router
            .oneshot(get_request(&format!("/stats/{code}")))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["clicks"], 1);
    }

    #[tokio::test]
    async fn unknown_code_is_not_found() {
        let router = test_router();

        let response = router
            .clone()
            .oneshot(get_request("/doesnotexist"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = router
            .oneshot(get_request("/stats/doesnotexist"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
