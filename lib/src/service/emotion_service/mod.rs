pub mod structs;

use std::fmt::Debug;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tokio_retry::strategy::FixedInterval;
use tokio_retry::Retry;

use structs::{EmotionPredictRequest, EmotionPredictResponse};
use crate::config::ClassifierConfig;
use super::common_structs::EmotionScores;

const MODEL_ID_HEADER: &str = "grpc-metadata-mm-model-id";
const RETRY_DELAY: Duration = Duration::from_millis(200);
const MAX_RETRIES: usize = 1;


#[async_trait]
pub trait EmotionClassifier: Debug + Send + Sync {
    /// Scores `text`. Unclassifiable text is `Ok` with no dominant emotion;
    /// `Err` means the classifier itself could not be reached or understood.
    async fn classify(&self, text: &str) -> Result<EmotionScores>;
}


#[derive(Debug, Clone)]
pub struct EmotionService {
    client: Client,
    url: String,
    model_id: String,
}

impl EmotionService {
    pub fn new(config: &ClassifierConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Error building classifier http client")?;

        Ok(Self {
            client,
            url: config.url.to_owned(),
            model_id: config.model_id.to_owned(),
        })
    }

    // transport errors and 5xx are retried
    async fn send(&self, text: &str) -> reqwest::Result<Response> {
        let strategy = FixedInterval::new(RETRY_DELAY).take(MAX_RETRIES);
        Retry::spawn(strategy, || async {
            let response = self.client
                .post(&self.url)
                .header(MODEL_ID_HEADER, &self.model_id)
                .json(&EmotionPredictRequest::new(text))
                .send()
                .await
                .inspect_err(|error| tracing::warn!(%error, "classifier request failed"))?;

            if response.status().is_server_error() {
                tracing::warn!(status = %response.status(), "classifier answered with server error");
                return response.error_for_status();
            }
            Ok::<Response, reqwest::Error>(response)
        }).await
    }

    fn process_emotion_output(&self, response: EmotionPredictResponse) -> Result<EmotionScores> {
        let prediction = response.emotion_predictions
            .into_iter()
            .next()
            .context("Classifier response has no emotion predictions")?;

        let emotion = prediction.emotion;
        Ok(EmotionScores::new(emotion.anger, emotion.disgust, emotion.fear, emotion.joy, emotion.sadness))
    }
}

#[async_trait]
impl EmotionClassifier for EmotionService {
    async fn classify(&self, text: &str) -> Result<EmotionScores> {
        if text.trim().is_empty() {
            tracing::debug!("blank text, skipping classifier call");
            return Ok(EmotionScores::unclassified());
        }

        let response = self.send(text).await.context("Error calling emotion classifier")?;
        let status = response.status();

        if status == StatusCode::BAD_REQUEST {
            tracing::debug!("classifier rejected text");
            return Ok(EmotionScores::unclassified());
        }
        if !status.is_success() {
            bail!("Emotion classifier returned status {}", status);
        }

        let body = response.json::<EmotionPredictResponse>()
            .await
            .context("Error decoding classifier response")?;
        let scores = self.process_emotion_output(body)?;

        tracing::debug!(?scores, "classifier scores");
        Ok(scores)
    }
}
