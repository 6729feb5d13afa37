use serde::{Deserialize, Serialize};


#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct EmotionPredictRequest<'a> {
    pub raw_document: RawDocument<'a>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct RawDocument<'a> {
    pub text: &'a str,
}

impl<'a> EmotionPredictRequest<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { raw_document: RawDocument { text } }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmotionPredictResponse {
    #[serde(default)]
    pub emotion_predictions: Vec<EmotionPrediction>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EmotionPrediction {
    pub emotion: PredictedEmotion,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PredictedEmotion {
    pub anger: f64,
    pub disgust: f64,
    pub fear: f64,
    pub joy: f64,
    pub sadness: f64,
}
