//! HTTP API gateway for weatherchat.
//!
//! Two routes under `/api`: a liveness probe and the chat endpoint that
//! hands the message list to [`WeatherChat`].

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::extract::rejection::JsonRejection;
use axum::{
    Router,
    extract::State,
    http::{HeaderValue, StatusCode},
    response::Json,
    routing::{get, post},
};
use serde::Serialize;
use serde_json::Value;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

use weatherchat_agent::{ChatError, WeatherChat};
use weatherchat_config::{AppConfig, GatewayConfig};

type SharedChat = Arc<WeatherChat>;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
}

#[derive(Serialize)]
struct ChatResponse {
    reply: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
}

/// Build the router with CORS, body limit and trace layers applied.
pub fn build_router(chat: SharedChat, config: &GatewayConfig) -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/weather-chat", post(weather_chat_handler))
        .with_state(chat)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(cors_layer(&config.allowed_origins))
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

/// Any origin when the list is empty, otherwise exactly the listed ones.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(origins))
}

/// Start the gateway HTTP server.
pub async fn start(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let chat = Arc::new(WeatherChat::from_config(&config));
    let app = build_router(chat, &config.gateway);

    if !config.has_api_key() {
        warn!("OPENAI_API_KEY is not set; weather questions will get a configuration notice");
    }

    info!(addr = %addr, model = %config.chat.model, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Handlers ---

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "Server is running",
    })
}

async fn weather_chat_handler(
    State(chat): State<SharedChat>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        warn!(status = %rejection.status(), "Rejected chat request body");
        api_error(rejection.status(), rejection.body_text())
    })?;

    match chat.handle(body.get("messages")).await {
        Ok(reply) => Ok(Json(ChatResponse { reply: reply.reply })),
        Err(err @ ChatError::InvalidRequest(_)) => {
            Err(api_error(StatusCode::BAD_REQUEST, err.to_string()))
        }
        Err(err @ ChatError::EmptyCompletion) => {
            Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, header};
    use http_body_util::BodyExt;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;
    use weatherchat_agent::ChatSettings;
    use weatherchat_agent::replies::{
        CREDENTIAL_MISSING_REPLY, OFF_TOPIC_REPLY, UNKNOWN_FAILURE_REPLY,
    };
    use weatherchat_core::error::ProviderError;
    use weatherchat_core::provider::{Provider, ProviderRequest, ProviderResponse, ProviderSource};

    struct CannedProvider {
        content: Option<String>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Provider for CannedProvider {
        fn name(&self) -> &str {
            "canned"
        }

        async fn complete(
            &self,
            _request: ProviderRequest,
        ) -> Result<ProviderResponse, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(ProviderResponse {
                content: self.content.clone(),
                usage: None,
                model: "canned".into(),
            })
        }
    }

    struct CannedSource(Arc<CannedProvider>);

    impl ProviderSource for CannedSource {
        fn get_client(&self) -> Result<Arc<dyn Provider>, ProviderError> {
            Ok(self.0.clone())
        }
    }

    struct NoKey;

    impl ProviderSource for NoKey {
        fn get_client(&self) -> Result<Arc<dyn Provider>, ProviderError> {
            Err(ProviderError::MissingCredential)
        }
    }

    fn canned(content: Option<&str>) -> Arc<CannedProvider> {
        Arc::new(CannedProvider {
            content: content.map(String::from),
            calls: AtomicUsize::new(0),
        })
    }

    fn app_with(source: Arc<dyn ProviderSource>) -> Router {
        let chat = Arc::new(WeatherChat::new(source, ChatSettings::default()));
        build_router(chat, &GatewayConfig::default())
    }

    fn chat_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/weather-chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_endpoint() {
        let app = app_with(Arc::new(NoKey));

        let req = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["message"], "Server is running");
    }

    #[tokio::test]
    async fn weather_question_returns_model_reply() {
        let provider = canned(Some("Lahore is 24°C in October."));
        let app = app_with(Arc::new(CannedSource(provider.clone())));

        let response = app
            .oneshot(chat_request(
                r#"{"messages":[{"role":"user","content":"Lahore weather?"}]}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["reply"], "Lahore is 24°C in October.");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn off_topic_returns_redirect_without_provider_call() {
        let provider = canned(Some("unused"));
        let app = app_with(Arc::new(CannedSource(provider.clone())));

        let response = app
            .oneshot(chat_request(
                r#"{"messages":[{"role":"user","content":"Tell me a joke"}]}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["reply"], OFF_TOPIC_REPLY);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_messages_is_bad_request() {
        for body in [r#"{}"#, r#"{"messages":null}"#, r#"{"messages":"hi"}"#] {
            let response = app_with(Arc::new(NoKey))
                .oneshot(chat_request(body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                json_body(response).await["error"],
                "Invalid request. 'messages' array is required."
            );
        }
    }

    #[tokio::test]
    async fn last_message_not_from_user_is_bad_request() {
        for body in [
            r#"{"messages":[]}"#,
            r#"{"messages":[{"role":"assistant","content":"hi"}]}"#,
        ] {
            let response = app_with(Arc::new(NoKey))
                .oneshot(chat_request(body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                json_body(response).await["error"],
                "Last message must be from user."
            );
        }
    }

    #[tokio::test]
    async fn mistyped_message_content_is_ok_with_generic_reply() {
        for body in [
            r#"{"messages":[{"role":"user","content":42}]}"#,
            r#"{"messages":[{"role":"user"}]}"#,
        ] {
            let provider = canned(Some("unused"));
            let response = app_with(Arc::new(CannedSource(provider.clone())))
                .oneshot(chat_request(body))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(json_body(response).await["reply"], UNKNOWN_FAILURE_REPLY);
            assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test]
    async fn malformed_json_is_rejected_with_error_body() {
        let response = app_with(Arc::new(NoKey))
            .oneshot(chat_request("{not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn missing_credential_is_ok_with_notice() {
        let response = app_with(Arc::new(NoKey))
            .oneshot(chat_request(
                r#"{"messages":[{"role":"user","content":"Rain in Multan?"}]}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["reply"], CREDENTIAL_MISSING_REPLY);
    }

    #[tokio::test]
    async fn empty_completion_is_server_error() {
        let provider = canned(None);
        let response = app_with(Arc::new(CannedSource(provider)))
            .oneshot(chat_request(
                r#"{"messages":[{"role":"user","content":"Rain in Multan?"}]}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await["error"], "No response from AI model.");
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let chat = Arc::new(WeatherChat::new(Arc::new(NoKey), ChatSettings::default()));
        let config = GatewayConfig {
            max_body_bytes: 16,
            ..GatewayConfig::default()
        };
        let app = build_router(chat, &config);

        let response = app
            .oneshot(chat_request(
                r#"{"messages":[{"role":"user","content":"a long weather question"}]}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn cors_allows_any_origin_by_default() {
        let req = Request::builder()
            .uri("/api/health")
            .header(header::ORIGIN, "http://example.com")
            .body(Body::empty())
            .unwrap();

        let response = app_with(Arc::new(NoKey)).oneshot(req).await.unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn cors_restricts_to_configured_origins() {
        let chat = Arc::new(WeatherChat::new(Arc::new(NoKey), ChatSettings::default()));
        let config = GatewayConfig {
            allowed_origins: vec!["http://localhost:5173".into()],
            ..GatewayConfig::default()
        };

        let req = Request::builder()
            .uri("/api/health")
            .header(header::ORIGIN, "http://evil.example")
            .body(Body::empty())
            .unwrap();
        let response = build_router(chat, &config).oneshot(req).await.unwrap();
        assert!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_none()
        );
    }
}
