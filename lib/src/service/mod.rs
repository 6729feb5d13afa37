pub mod emotion_service;
pub mod common_structs;

use std::sync::Arc;

use anyhow::Result;

use crate::config::ClassifierConfig;
use emotion_service::{EmotionClassifier, EmotionService};


#[derive(Debug, Clone)]
pub struct CommonService {
    pub emotion: Arc<dyn EmotionClassifier>,
}

impl CommonService {
    pub fn new(config: &ClassifierConfig) -> Result<Self> {
        let emotion_service = EmotionService::new(config)?;
        Ok(Self::with_classifier(Arc::new(emotion_service)))
    }

    pub fn with_classifier(classifier: Arc<dyn EmotionClassifier>) -> Self {
        Self { emotion: classifier }
    }
}
