pub mod contact;
pub mod extract;
pub mod health;

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::errors::AppError;
use crate::generation::handlers;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    AppError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/health", get(health::api_health_handler))
        .route("/generate", post(handlers::handle_generate))
        .route("/generate-resume", post(handlers::handle_generate_resume))
        .route("/contact", post(contact::contact_handler))
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::generation::generator::test_support::StubBackend;
    use crate::llm_client::CompletionBackend;

    fn state_with(llm: Option<Arc<dyn CompletionBackend>>) -> AppState {
        AppState {
            config: Config::from_lookup(|_| None).unwrap(),
            llm,
        }
    }

    async fn send(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(state).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn jane() -> Value {
        json!({
            "fullName": "Jane Doe",
            "email": "jane@x.com",
            "jobTitle": "Backend Engineer",
            "skills": "Go, PostgreSQL"
        })
    }

    #[tokio::test]
    async fn test_generate_without_api_key_uses_fallback() {
        let (status, body) = send(state_with(None), post_json("/generate", jane())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(
            body["message"],
            "Content generated using fallback method (OpenAI API not configured)"
        );
        let resume = body["resume"].as_str().unwrap();
        assert!(resume.starts_with("JANE DOE\n========\n"));
        for key in [
            "resumeSummary",
            "skillHighlights",
            "coverLetter",
            "portfolioBio",
            "timestamp",
        ] {
            assert!(
                !body[key].as_str().unwrap_or_default().is_empty(),
                "missing {key}"
            );
        }
    }

    #[tokio::test]
    async fn test_generate_with_backend_has_no_message() {
        let llm: Arc<dyn CompletionBackend> = Arc::new(StubBackend::succeeding());
        let (status, body) = send(state_with(Some(llm)), post_json("/generate", jane())).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.get("message").is_none());
        assert_eq!(body["portfolioBio"], "AI text (500 tokens)");
        assert!(body["resume"]
            .as_str()
            .unwrap()
            .contains("PROFESSIONAL SUMMARY\n--------------------\nAI text (300 tokens)"));
    }

    #[tokio::test]
    async fn test_generate_upstream_failure_still_succeeds() {
        let llm: Arc<dyn CompletionBackend> = Arc::new(StubBackend::failing_on("branding"));
        let (status, body) = send(state_with(Some(llm)), post_json("/generate", jane())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(
            body["message"],
            "Content generated using fallback method due to API issue"
        );
        assert!(body["resumeSummary"]
            .as_str()
            .unwrap()
            .starts_with("Jane Doe is a motivated Backend Engineer"));
    }

    #[tokio::test]
    async fn test_generate_reports_missing_field() {
        for (field, payload) in [
            ("fullName", json!({"email": "jane@x.com", "jobTitle": "Engineer"})),
            ("email", json!({"fullName": "Jane Doe", "jobTitle": "Engineer"})),
            ("jobTitle", json!({"fullName": "Jane Doe", "email": "jane@x.com", "jobTitle": ""})),
        ] {
            let llm = Arc::new(StubBackend::succeeding());
            let backend: Arc<dyn CompletionBackend> = llm.clone();
            let (status, body) = send(state_with(Some(backend)), post_json("/generate", payload)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["success"], false);
            assert_eq!(body["error"], format!("Missing required field: {field}"));
            assert_eq!(llm.call_count(), 0, "no generation for missing {field}");
        }
    }

    #[tokio::test]
    async fn test_generate_rejects_non_json_body() {
        let request = Request::builder()
            .method("POST")
            .uri("/generate")
            .header("content-type", "application/json")
            .body(Body::from("not json"))
            .unwrap();
        let (status, body) = send(state_with(None), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No JSON data provided");
    }

    #[tokio::test]
    async fn test_empty_object_body_is_no_json() {
        for uri in ["/generate", "/generate-resume", "/contact"] {
            let (status, body) = send(state_with(None), post_json(uri, json!({}))).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body, json!({"success": false, "error": "No JSON data provided"}));
        }
    }

    #[tokio::test]
    async fn test_generate_resume_legacy_fallback() {
        let (status, body) = send(state_with(None), post_json("/generate-resume", jane())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(
            body["message"],
            "Resume generated using fallback method (OpenAI API key not configured)"
        );
        assert!(body["resume"].as_str().unwrap().contains("Contact Information:"));
        assert!(body.get("resumeSummary").is_none());
    }

    #[tokio::test]
    async fn test_generate_resume_legacy_ai() {
        let llm: Arc<dyn CompletionBackend> = Arc::new(StubBackend::succeeding());
        let (_, body) = send(state_with(Some(llm)), post_json("/generate-resume", jane())).await;

        assert_eq!(body["resume"], "AI text (1500 tokens)");
        assert!(body.get("message").is_none());
    }

    #[tokio::test]
    async fn test_contact_acknowledges() {
        let payload = json!({"name": "Sam", "email": "sam@x.com", "message": "Hello"});
        let (status, body) = send(state_with(None), post_json("/contact", payload)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(
            body["message"],
            "Thank you for your message. We will get back to you soon!"
        );
    }

    #[tokio::test]
    async fn test_contact_requires_message() {
        let payload = json!({"name": "Sam", "email": "sam@x.com"});
        let (status, body) = send(state_with(None), post_json("/contact", payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required field: message");
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(state_with(None), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["openai_configured"], false);

        let request = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();
        let (_, body) = send(state_with(None), request).await;
        assert_eq!(body["openai_model"], "gpt-3.5-turbo");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert!(body["endpoints"].get("/generate").is_some());
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let request = Request::builder().uri("/nope").body(Body::empty()).unwrap();
        let (status, body) = send(state_with(None), request).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"success": false, "error": "Endpoint not found"}));
    }

    async fn boom() -> StatusCode {
        panic!("boom")
    }

    #[tokio::test]
    async fn test_panicking_handler_is_json_500() {
        let app = Router::new()
            .route("/boom", get(boom))
            .layer(CatchPanicLayer::custom(panic_response));
        let request = Request::builder().uri("/boom").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"success": false, "error": "Internal server error"}));
    }

    #[tokio::test]
    async fn test_panic_payload_detail_not_leaked() {
        let response = panic_response(Box::new(String::from("secret detail")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(!String::from_utf8_lossy(&bytes).contains("secret detail"));
    }
}
