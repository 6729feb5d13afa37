pub static HOST: &str = "HOST";
pub static PORT: &str = "PORT";
pub static DEBUG: &str = "DEBUG";
pub static STRICT_STATUS: &str = "STRICT_STATUS";

pub static CLASSIFIER_URL: &str = "CLASSIFIER_URL";
pub static CLASSIFIER_MODEL_ID: &str = "CLASSIFIER_MODEL_ID";
pub static CLASSIFIER_TIMEOUT_SECS: &str = "CLASSIFIER_TIMEOUT_SECS";
