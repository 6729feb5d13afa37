use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use url::form_urlencoded;

use lib::service::common_structs::EmotionScores;
use lib::service::CommonService;
use lib::utilities::format_score;

pub const TEXT_PARAM: &str = "textToAnalyze";
pub const INVALID_TEXT_MESSAGE: &str = "Invalid text! Please try again!";

static INDEX_PAGE: &str = include_str!("../static/index.html");


#[derive(Debug, Clone)]
pub struct AppState {
    pub service: CommonService,
    pub strict_status: bool,
}


/// Classifier failure, answered with a 500.
#[derive(Debug)]
pub struct ClassifierFailure(anyhow::Error);

impl IntoResponse for ClassifierFailure {
    fn into_response(self) -> Response {
        tracing::error!(error = ?self.0, "emotion classifier failed");
        build_text_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_owned())
    }
}

impl From<anyhow::Error> for ClassifierFailure {
    fn from(error: anyhow::Error) -> Self {
        Self(error)
    }
}


// first `textToAnalyze` wins, missing is empty
pub fn text_to_analyze(query: Option<&str>) -> String {
    query
        .and_then(|query| {
            form_urlencoded::parse(query.as_bytes())
                .find(|(key, _)| key == TEXT_PARAM)
                .map(|(_, value)| value.into_owned())
        })
        .unwrap_or_default()
}

fn build_text_response(status: StatusCode, body: String) -> Response {
    (status, Html(body)).into_response()
}

pub fn render_scores(scores: &EmotionScores, dominant_emotion: &str) -> String {
    format!("For the given statement, the system response is
            'anger': {},
            'disgust': {},
            'fear': {},
            'joy': {} and
            'sadness': {}.
            The dominant emotion is <b>{}</b>.",
        format_score(scores.anger),
        format_score(scores.disgust),
        format_score(scores.fear),
        format_score(scores.joy),
        format_score(scores.sadness),
        dominant_emotion,
    )
}


pub async fn emotion_detector(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, ClassifierFailure> {
    let text = text_to_analyze(query.as_deref());
    tracing::debug!(text = %text, "textToAnalyze");

    let scores = state.service.emotion.classify(&text).await?;

    let Some(dominant_emotion) = scores.dominant_emotion.as_deref() else {
        let status = if state.strict_status { StatusCode::BAD_REQUEST } else { StatusCode::OK };
        return Ok(build_text_response(status, INVALID_TEXT_MESSAGE.to_owned()));
    };

    Ok(build_text_response(StatusCode::OK, render_scores(&scores, dominant_emotion)))
}

pub async fn render_index_page() -> Html<&'static str> {
    Html(INDEX_PAGE)
}
