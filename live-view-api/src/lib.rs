//! HTTP surface for the live OCR result page.

pub mod page;

use axum::{
    Router,
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    routing::get,
};
use live_view_store::ResultRepository;
use log::debug;
use std::sync::Arc;

/// Shared, read-only state handed to every request.
pub struct AppState {
    pub repository: ResultRepository,
    /// Result path as shown in the page instructions.
    pub result_label: String,
}

impl AppState {
    pub fn new(repository: ResultRepository, result_label: impl Into<String>) -> Self {
        Self {
            repository,
            result_label: result_label.into(),
        }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(result_page))
        .with_state(state)
}

async fn result_page(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let view = state.repository.view_state().await;
    debug!(
        "Rendering {} view for {:?}",
        if view.is_empty() { "empty" } else { "loaded" },
        state.repository.path()
    );

    (
        [(header::CACHE_CONTROL, "no-store")],
        Html(page::render_page(&view, &state.result_label)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode};
    use std::fs;
    use std::path::PathBuf;
    use tower::ServiceExt;

    struct Fixture {
        dir: PathBuf,
        file: PathBuf,
        app: Router,
    }

    impl Fixture {
        fn new(name: &str) -> Self {
            let dir = std::env::temp_dir().join(format!(
                "live_view_api_{name}_{}",
                std::process::id()
            ));
            let _ = fs::remove_dir_all(&dir);
            fs::create_dir_all(&dir).unwrap();
            let file = dir.join("latest_result.json");
            let state = AppState::new(
                ResultRepository::new(&file),
                "outputs/latest_result.json",
            );
            Self {
                dir,
                file,
                app: create_router(Arc::new(state)),
            }
        }

        fn write(&self, content: &str) {
            fs::write(&self.file, content).unwrap();
        }

        async fn get(&self) -> (StatusCode, Option<String>, String) {
            let response = self
                .app
                .clone()
                .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
                .await
                .unwrap();
            let status = response.status();
            let content_type = response
                .headers()
                .get(header::CONTENT_TYPE)
                .map(|v| v.to_str().unwrap().to_string());
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
        }
    }

    impl Drop for Fixture {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.dir);
        }
    }

    #[tokio::test]
    async fn absent_file_renders_placeholder() {
        let fx = Fixture::new("absent");
        let (status, content_type, body) = fx.get().await;

        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/html"));
        assert!(body.contains(page::PLACEHOLDER));
        assert!(!body.contains("\": "));
    }

    #[tokio::test]
    async fn valid_json_is_pretty_printed() {
        let fx = Fixture::new("valid");
        fx.write(r#"{"a":1}"#);
        let (status, _, body) = fx.get().await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.lines().any(|line| line == r#"    "a": 1"#));
        assert!(!body.contains(page::PLACEHOLDER));
    }

    #[tokio::test]
    async fn malformed_json_matches_absent_file() {
        let absent = Fixture::new("absent_cmp");
        let (_, _, absent_body) = absent.get().await;

        let broken = Fixture::new("broken");
        broken.write(r#"{"a":"#);
        let (status, _, broken_body) = broken.get().await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(broken_body, absent_body);
    }

    #[tokio::test]
    async fn refresh_interval_is_one_second() {
        let fx = Fixture::new("refresh");
        let (_, _, empty_body) = fx.get().await;
        fx.write("[1, 2, 3]");
        let (_, _, loaded_body) = fx.get().await;

        for body in [empty_body, loaded_body] {
            assert!(body.contains(r#"<meta http-equiv="refresh" content="1" />"#));
        }
    }

    #[tokio::test]
    async fn file_changes_show_up_without_restart() {
        let fx = Fixture::new("changes");
        fx.write(r#"{"text":"first"}"#);
        assert!(fx.get().await.2.contains(r#""text": "first""#));

        fx.write(r#"{"text":"second"}"#);
        let (_, _, body) = fx.get().await;
        assert!(body.contains(r#""text": "second""#));
        assert!(!body.contains("first"));
    }

    #[tokio::test]
    async fn unicode_is_rendered_literally() {
        let fx = Fixture::new("unicode");
        fx.write(r#"{"msg":"xin chào"}"#);
        let (_, _, body) = fx.get().await;

        assert!(body.contains(r#""msg": "xin chào""#));
        assert!(!body.contains("\\u00e0"));
    }

    #[tokio::test]
    async fn responses_are_not_cached() {
        let fx = Fixture::new("cache");
        let response = fx
            .app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");
    }

    #[tokio::test]
    async fn only_get_is_served() {
        let fx = Fixture::new("method");
        let response = fx
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
