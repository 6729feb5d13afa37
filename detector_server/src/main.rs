pub mod handlers;

use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use handlers::{emotion_detector, render_index_page, AppState};
use lib::config::ServerConfig;
use lib::service::CommonService;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};


#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.default_log_filter())))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let service = CommonService::new(&config.classifier)?;
    let state = AppState {
        service,
        strict_status: config.strict_status,
    };

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Error binding {}", address))?;
    tracing::info!(address = %address, debug = config.debug, "emotion detector listening");

    axum::serve(listener, app(state)).await?;
    Ok(())
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/emotionDetector", get(emotion_detector))
        .route("/", get(render_index_page))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}


#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use anyhow::bail;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
    use lib::service::common_structs::EmotionScores;
    use lib::service::emotion_service::EmotionClassifier;
    use tower::ServiceExt;

    use super::*;
    use crate::handlers::INVALID_TEXT_MESSAGE;

    #[derive(Debug)]
    struct StubClassifier;

    #[async_trait]
    impl EmotionClassifier for StubClassifier {
        async fn classify(&self, text: &str) -> Result<EmotionScores> {
            match text {
                "" => Ok(EmotionScores::unclassified()),
                "offline" => bail!("connection refused"),
                "I love this new technology" => Ok(EmotionScores::new(0.01, 0.01, 0.01, 0.85, 0.02)),
                _ => Ok(EmotionScores::new(0.6, 0.1, 0.2, 0.0, 0.6)),
            }
        }
    }

    fn test_app(strict_status: bool) -> Router {
        app(AppState {
            service: CommonService::with_classifier(Arc::new(StubClassifier)),
            strict_status,
        })
    }

    async fn get_path(app: Router, uri: &str) -> (StatusCode, String, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response.headers()
            .get(CONTENT_TYPE)
            .map(|value| value.to_str().unwrap().to_owned())
            .unwrap_or_default();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn detector_uri(text: &str) -> String {
        format!("/emotionDetector?textToAnalyze={}", urlencoding::encode(text))
    }

    #[tokio::test]
    async fn reports_dominant_emotion() {
        let (status, _, body) = get_path(test_app(false), &detector_uri("I love this new technology")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("For the given statement, the system response is"));
        assert!(body.contains("'joy': 0.85 and"));
        assert!(body.ends_with("The dominant emotion is <b>joy</b>."));
    }

    #[tokio::test]
    async fn duplicated_text_uses_first_value() {
        let uri = "/emotionDetector?textToAnalyze=I%20love%20this%20new%20technology&textToAnalyze=x";
        let (status, _, body) = get_path(test_app(false), uri).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.ends_with("The dominant emotion is <b>joy</b>."));
    }

    #[tokio::test]
    async fn tie_uses_first_category() {
        let (_, _, body) = get_path(test_app(false), &detector_uri("so angry and sad")).await;
        assert!(body.ends_with("The dominant emotion is <b>anger</b>."));
    }

    #[tokio::test]
    async fn empty_text_is_invalid() {
        let (status, _, body) = get_path(test_app(false), &detector_uri("")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INVALID_TEXT_MESSAGE);
    }

    #[tokio::test]
    async fn missing_parameter_is_invalid() {
        let (status, _, body) = get_path(test_app(false), "/emotionDetector").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INVALID_TEXT_MESSAGE);
    }

    #[tokio::test]
    async fn strict_status_rejects_invalid_text() {
        let (status, _, body) = get_path(test_app(true), "/emotionDetector").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, INVALID_TEXT_MESSAGE);
    }

    #[tokio::test]
    async fn classifier_failure_is_server_error() {
        let (status, _, body) = get_path(test_app(false), &detector_uri("offline")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.contains("connection refused"));
    }

    #[tokio::test]
    async fn repeated_calls_are_identical() {
        let uri = detector_uri("I love this new technology");
        let first = get_path(test_app(false), &uri).await;
        let second = get_path(test_app(false), &uri).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn serves_index_page() {
        let (status, content_type, body) = get_path(test_app(false), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/html"));
        assert!(body.contains("Emotion Detector"));
    }
}
