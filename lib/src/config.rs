use std::time::Duration;

use anyhow::{Context, Result};

use crate::env_keys::{CLASSIFIER_MODEL_ID, CLASSIFIER_TIMEOUT_SECS, CLASSIFIER_URL, DEBUG, HOST, PORT, STRICT_STATUS};
use crate::utilities::parse_flag;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_CLASSIFIER_URL: &str = "https://sn-watson-emotion.labs.skills.network/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";
pub const DEFAULT_CLASSIFIER_MODEL_ID: &str = "emotion_aggregated-workflow_lang_en_stock";
pub const DEFAULT_CLASSIFIER_TIMEOUT_SECS: u64 = 10;


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub debug: bool,
    /// Answer invalid text with 400 instead of 200.
    pub strict_status: bool,
    pub classifier: ClassifierConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierConfig {
    pub url: String,
    pub model_id: String,
    pub timeout: Duration,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CLASSIFIER_URL.to_owned(),
            model_id: DEFAULT_CLASSIFIER_MODEL_ID.to_owned(),
            timeout: Duration::from_secs(DEFAULT_CLASSIFIER_TIMEOUT_SECS),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            debug: true,
            strict_status: false,
            classifier: ClassifierConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST) {
            config.host = host;
        }
        if let Some(port) = lookup(PORT) {
            config.port = port.trim().parse().with_context(|| format!("{} is not a port: {:?}", PORT, port))?;
        }
        if let Some(debug) = lookup(DEBUG) {
            config.debug = parse_flag(DEBUG, &debug)?;
        }
        if let Some(strict) = lookup(STRICT_STATUS) {
            config.strict_status = parse_flag(STRICT_STATUS, &strict)?;
        }
        if let Some(url) = lookup(CLASSIFIER_URL) {
            config.classifier.url = url;
        }
        if let Some(model_id) = lookup(CLASSIFIER_MODEL_ID) {
            config.classifier.model_id = model_id;
        }
        if let Some(timeout) = lookup(CLASSIFIER_TIMEOUT_SECS) {
            let seconds: u64 = timeout.trim().parse()
                .with_context(|| format!("{} is not a number of seconds: {:?}", CLASSIFIER_TIMEOUT_SECS, timeout))?;
            config.classifier.timeout = Duration::from_secs(seconds);
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn default_log_filter(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}
