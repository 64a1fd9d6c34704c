pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::drafts::handlers as drafts;
use crate::guided::handlers as guided;
use crate::parsing::handlers as parsing;
use crate::preview::handlers as preview;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Free-text entry
        .route("/api/v1/fields/normalize", post(parsing::handle_normalize))
        .route("/api/v1/resume/parse", post(parsing::handle_parse))
        .route("/api/v1/resume/preview", post(preview::handle_preview))
        // Guided entry
        .route("/api/v1/guided/apply", post(guided::handle_apply))
        .route("/api/v1/guided/flatten", post(guided::handle_flatten))
        // Drafts
        .route(
            "/api/v1/drafts/:id",
            put(drafts::handle_save_draft)
                .get(drafts::handle_load_draft)
                .delete(drafts::handle_delete_draft),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::drafts::InMemoryDraftStore;

    fn app() -> Router {
        build_router(AppState {
            drafts: Arc::new(InMemoryDraftStore::default()),
        })
    }

    async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        let request = match body {
            Some(body) => request.body(Body::from(body.to_string())).unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["draft_store"], "memory");
    }

    #[tokio::test]
    async fn test_normalize_skills() {
        let (status, body) = send(
            app(),
            Method::POST,
            "/api/v1/fields/normalize",
            Some(json!({"field": "skills", "value": "Rust;Go\n\nSQL"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["value"], "Rust, Go, SQL");
        assert_eq!(body["hints"], json!([]));
    }

    #[tokio::test]
    async fn test_normalize_email_hint() {
        let (_, body) = send(
            app(),
            Method::POST,
            "/api/v1/fields/normalize",
            Some(json!({"field": "email", "value": "  not-an-email"})),
        )
        .await;
        assert_eq!(body["value"], "not-an-email");
        assert_eq!(body["hints"][0]["kind"], "invalid_email");
    }

    #[tokio::test]
    async fn test_normalize_rejects_blank_field_name() {
        let (status, body) = send(
            app(),
            Method::POST,
            "/api/v1/fields/normalize",
            Some(json!({"field": " ", "value": "x"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_parse_record() {
        let (status, body) = send(
            app(),
            Method::POST,
            "/api/v1/resume/parse",
            Some(json!({
                "experience": "Software Engineer at Acme\n- Built X\n- Fixed Y\n\nDeveloper at Beta\n- Led Z"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["experience"][0]["company"], "Acme");
        assert_eq!(body["experience"][1]["bullets"], json!(["Led Z"]));
        assert_eq!(body["skills"], json!([]));
    }

    #[tokio::test]
    async fn test_preview_uses_session_skill_groups() {
        let session = json!({
            "technical_skills": [{"id": Uuid::new_v4(), "text": "Rust"}],
            "non_technical_skills": [
                {"id": Uuid::new_v4(), "text": "Mentoring"},
                {"id": Uuid::new_v4(), "text": "Writing"}
            ]
        });
        let (status, body) = send(
            app(),
            Method::POST,
            "/api/v1/resume/preview",
            Some(json!({
                "record": {"name": "Jane Doe", "skills": "Rust, Mentoring, Writing"},
                "size": "small",
                "session": session
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["file_name"], "Jane_Doe.pdf");
        assert_eq!(body["typography"]["body"], "text-sm");
        assert_eq!(body["resume"]["skill_groups"]["technical"], json!(["Rust"]));
        assert_eq!(
            body["resume"]["skill_groups"]["non_technical"],
            json!(["Mentoring", "Writing"])
        );
    }

    #[tokio::test]
    async fn test_guided_apply_autosaves_draft() {
        let app = app();
        let draft_id = Uuid::new_v4();
        let (status, body) = send(
            app.clone(),
            Method::POST,
            "/api/v1/guided/apply",
            Some(json!({
                "action": {
                    "action": "add",
                    "item": {"section": "experience", "item": {
                        "title": "Engineer", "company": "Acme", "description": "- Built X"
                    }}
                },
                "draft_id": draft_id
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["changed"], true);
        assert_eq!(body["saved"], true);
        assert_eq!(body["record"]["experience"], "Engineer at Acme\n- Built X");

        let (status, draft) = send(
            app,
            Method::GET,
            &format!("/api/v1/drafts/{draft_id}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(draft["record"]["experience"], "Engineer at Acme\n- Built X");
    }

    #[tokio::test]
    async fn test_guided_flatten() {
        let (status, body) = send(
            app(),
            Method::POST,
            "/api/v1/guided/flatten",
            Some(json!({
                "languages": [{"language": "English", "proficiency": "Native"}],
                "interests": [{"id": Uuid::new_v4(), "text": "Chess"}]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["languages"], "English (Native)");
        assert_eq!(body["interests"], "Chess");
        assert_eq!(body["profileImage"], "");
    }

    #[tokio::test]
    async fn test_draft_lifecycle() {
        let app = app();
        let uri = format!("/api/v1/drafts/{}", Uuid::new_v4());

        let (status, _) = send(app.clone(), Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, saved) = send(
            app.clone(),
            Method::PUT,
            &uri,
            Some(json!({"name": "Jane", "profileImage": "data:image/png;base64,AA=="})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(saved["record"]["profileImage"], "data:image/png;base64,AA==");

        let (status, _) = send(app.clone(), Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
