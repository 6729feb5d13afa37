use serde::{Deserialize, Serialize};

pub const EMOTION_CATEGORIES: [&str; 5] = ["anger", "disgust", "fear", "joy", "sadness"];


#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EmotionScores {
    pub anger: f64,
    pub disgust: f64,
    pub fear: f64,
    pub joy: f64,
    pub sadness: f64,
    /// `None` when the text could not be classified.
    pub dominant_emotion: Option<String>,
}

impl EmotionScores {
    pub fn new(anger: f64, disgust: f64, fear: f64, joy: f64, sadness: f64) -> Self {
        let mut scores = Self { anger, disgust, fear, joy, sadness, dominant_emotion: None };
        scores.dominant_emotion = Some(scores.find_dominant().to_owned());
        scores
    }

    pub fn unclassified() -> Self {
        Self { anger: 0.0, disgust: 0.0, fear: 0.0, joy: 0.0, sadness: 0.0, dominant_emotion: None }
    }

    pub fn is_classified(&self) -> bool {
        self.dominant_emotion.is_some()
    }

    /// Scores in `EMOTION_CATEGORIES` order.
    pub fn ordered(&self) -> [(&'static str, f64); 5] {
        [
            (EMOTION_CATEGORIES[0], self.anger),
            (EMOTION_CATEGORIES[1], self.disgust),
            (EMOTION_CATEGORIES[2], self.fear),
            (EMOTION_CATEGORIES[3], self.joy),
            (EMOTION_CATEGORIES[4], self.sadness),
        ]
    }

    // ties go to the earliest category
    fn find_dominant(&self) -> &'static str {
        let mut best = self.ordered()[0];
        for candidate in self.ordered().into_iter().skip(1) {
            if candidate.1 > best.1 {
                best = candidate;
            }
        }
        best.0
    }
}
