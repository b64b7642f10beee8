pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::generation::handlers as generation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analyze", post(analysis::handle_analyze))
        .route("/api/v1/analyze/compare", post(analysis::handle_compare))
        .route(
            "/api/v1/analyze/upload",
            post(analysis::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Generation API
        .route("/api/v1/content/generate", post(generation::handle_generate))
        .route("/api/v1/content/optimize", post(generation::handle_optimize))
        .route("/api/v1/industries", get(generation::handle_list_industries))
        .route(
            "/api/v1/industries/:industry/keywords",
            get(generation::handle_industry_keywords),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::errors::AppError;
    use crate::generation::generator::{ContentBrief, ContentGenerator};
    use crate::llm_client::DEFAULT_MODEL;

    const GENERATED: &str = "SEO is fun. We like SEO. It is easy.";

    /// Canned generator that records the briefs and revision requests it receives.
    #[derive(Default)]
    struct StubGenerator {
        briefs: Mutex<Vec<String>>,
        revisions: Mutex<Vec<Vec<String>>>,
        fail: bool,
    }

    #[async_trait]
    impl ContentGenerator for StubGenerator {
        async fn generate(&self, brief: &ContentBrief) -> Result<String, AppError> {
            if self.fail {
                return Err(AppError::Llm("service unavailable".to_string()));
            }
            self.briefs
                .lock()
                .unwrap()
                .push(brief.target_keyword.clone());
            Ok(GENERATED.to_string())
        }

        async fn revise(
            &self,
            _content: &str,
            _target_keyword: &str,
            suggestions: &[String],
        ) -> Result<String, AppError> {
            self.revisions.lock().unwrap().push(suggestions.to_vec());
            Ok(GENERATED.to_string())
        }
    }

    fn test_config(max_upload_bytes: usize) -> Config {
        Config {
            google_api_key: "test-key".to_string(),
            gemini_model: DEFAULT_MODEL.to_string(),
            port: 0,
            rust_log: "info".to_string(),
            max_upload_bytes,
        }
    }

    fn app_with(generator: Arc<StubGenerator>, max_upload_bytes: usize) -> Router {
        build_router(AppState {
            config: test_config(max_upload_bytes),
            generator,
        })
    }

    fn app() -> Router {
        app_with(Arc::new(StubGenerator::default()), 1024 * 1024)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
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

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn multipart_request(file_name: &str, content_type: &str, file_body: &str) -> Request<Body> {
        multipart_request_with_keyword("seo", file_name, content_type, file_body)
    }

    fn multipart_request_with_keyword(
        keyword: &str,
        file_name: &str,
        content_type: &str,
        file_body: &str,
    ) -> Request<Body> {
        let body = format!(
            "--XBOUNDARY\r\n\
             Content-Disposition: form-data; name=\"target_keyword\"\r\n\r\n\
             {keyword}\r\n\
             --XBOUNDARY\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: {content_type}\r\n\r\n\
             {file_body}\r\n\
             --XBOUNDARY--\r\n"
        );
        Request::builder()
            .method("POST")
            .uri("/api/v1/analyze/upload")
            .header("content-type", "multipart/form-data; boundary=XBOUNDARY")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(), get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_analyze_worked_example() {
        let (status, body) = send(
            app(),
            post_json(
                "/api/v1/analyze",
                json!({
                    "text": "AI content optimization is great. AI tools help.",
                    "target_keyword": "AI"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["keyword_frequency"], 2);
        assert_eq!(body["total_word_count"], 8);
        assert_eq!(body["keyword_density_display"], "25.00");
        assert_eq!(body["target_keyword"], "AI");
    }

    #[tokio::test]
    async fn test_analyze_empty_keyword_is_bad_request() {
        let (status, body) = send(
            app(),
            post_json("/api/v1/analyze", json!({"text": "hello", "target_keyword": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_compare_endpoint() {
        let (status, body) = send(
            app(),
            post_json(
                "/api/v1/analyze/compare",
                json!({
                    "previous_text": "Nothing relevant here at all.",
                    "current_text": GENERATED,
                    "target_keyword": "seo"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["keyword_frequency_delta"], 2);
        assert_eq!(body["current"]["looks_good"], true);
    }

    #[tokio::test]
    async fn test_upload_plain_text() {
        let request = multipart_request("post.txt", "text/plain", GENERATED);
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["format"], "plain_text");
        assert_eq!(body["file_name"], "post.txt");
        assert_eq!(body["report"]["keyword_frequency"], 2);
    }

    #[tokio::test]
    async fn test_upload_unsupported_format() {
        let (status, body) = send(
            app(),
            multipart_request("sheet.xlsx", "application/octet-stream", "data"),
        )
        .await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["error"]["code"], "UNSUPPORTED_MEDIA_TYPE");
    }

    #[tokio::test]
    async fn test_upload_blank_keyword_is_rejected_before_extraction() {
        // A corrupt archive would be a 422 if extraction ran first.
        let request = multipart_request_with_keyword(
            " ",
            "post.docx",
            "application/octet-stream",
            "not a zip",
        );
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_upload_over_limit_is_rejected() {
        let app = app_with(Arc::new(StubGenerator::default()), 64);
        let big = "word ".repeat(100);
        let (status, _) = send(app, multipart_request("big.txt", "text/plain", &big)).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_generate_analyzes_generated_content() {
        let generator = Arc::new(StubGenerator::default());
        let (status, body) = send(
            app_with(generator.clone(), 1024),
            post_json(
                "/api/v1/content/generate",
                json!({
                    "target_keyword": "SEO",
                    "industry": "marketing",
                    "content_type": "blog_post"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["content"], GENERATED);
        assert_eq!(body["industry"], "marketing");
        assert_eq!(body["content_type"], "blog_post");
        assert_eq!(body["report"]["keyword_frequency"], 2);
        assert!(body["generated_at"].is_string());
        assert_eq!(*generator.briefs.lock().unwrap(), vec!["SEO".to_string()]);
    }

    #[tokio::test]
    async fn test_generate_failure_is_non_fatal_json_error() {
        let generator = Arc::new(StubGenerator {
            fail: true,
            ..Default::default()
        });
        let app = app_with(generator, 1024);
        let (status, body) = send(
            app.clone(),
            post_json("/api/v1/content/generate", json!({"target_keyword": "SEO"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "LLM_ERROR");

        // The service keeps answering after a collaborator failure.
        let (status, _) = send(app, get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_generate_unknown_industry_is_not_found() {
        let (status, _) = send(
            app(),
            post_json(
                "/api/v1/content/generate",
                json!({"target_keyword": "SEO", "industry": "astrology"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_optimize_revises_when_suggestions_exist() {
        let generator = Arc::new(StubGenerator::default());
        let (status, body) = send(
            app_with(generator.clone(), 1024),
            post_json(
                "/api/v1/content/optimize",
                json!({"content": "Nothing relevant here at all.", "target_keyword": "seo"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["revised"], true);
        assert_eq!(body["revised_content"], GENERATED);
        assert_eq!(
            body["comparison"]["resolved_suggestions"]
                .as_array()
                .unwrap()
                .len(),
            1
        );
        let revisions = generator.revisions.lock().unwrap();
        assert_eq!(revisions.len(), 1);
        assert!(revisions[0][0].contains("'seo'"));
    }

    #[tokio::test]
    async fn test_optimize_skips_revision_for_good_content() {
        let generator = Arc::new(StubGenerator::default());
        let (status, body) = send(
            app_with(generator.clone(), 1024),
            post_json(
                "/api/v1/content/optimize",
                json!({"content": GENERATED, "target_keyword": "seo"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["revised"], false);
        assert_eq!(body["comparison"]["density_delta"], 0.0);
        assert!(generator.revisions.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_industry_endpoints() {
        let (status, body) = send(app(), get_request("/api/v1/industries")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.as_array().unwrap().len() >= 8);

        let request = get_request("/api/v1/industries/real-estate/keywords");
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["industry"], "real_estate");
        assert!(body["keywords"]
            .as_array()
            .unwrap()
            .contains(&json!("mortgage")));

        let (status, _) = send(app(), get_request("/api/v1/industries/astrology/keywords")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
