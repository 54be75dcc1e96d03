//! Sentiment scoring seam. The classifier in `mood.rs` only consumes a
//! polarity/subjectivity pair, so the analyzer itself sits behind a trait
//! and can be swapped (tests inject fixed scores to hit exact thresholds).

/// Sentiment of a piece of text.
/// Polarity runs from -1 (very negative) to +1 (very positive);
/// subjectivity from 0 (objective) to 1 (subjective).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScore {
    pub polarity: f64,
    pub subjectivity: f64,
}

pub trait SentimentAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> SentimentScore;
}

const POSITIVE_WORDS: [&str; 22] = [
    "happy", "great", "good", "excellent", "amazing", "awesome", "love",
    "loved", "excited", "fun", "enjoy", "enjoyed", "wonderful", "fantastic",
    "confident", "motivated", "proud", "ready", "nice", "best", "easy",
    "relaxed",
];

const NEGATIVE_WORDS: [&str; 22] = [
    "sad", "bad", "awful", "terrible", "hate", "hated", "tired", "exhausted",
    "stressed", "anxious", "worried", "hard", "difficult", "failed", "fail",
    "lost", "bored", "boring", "overwhelmed", "frustrated", "angry", "worst",
];

/// Word-list sentiment scorer used as the default analyzer.
///
/// Polarity is the signed fraction of sentiment-bearing words among the
/// matched ones; subjectivity is the fraction of all words that carry
/// sentiment. Deliberately small: the mood classifier does not depend on
/// this implementation, only on the score shape.
pub struct LexiconAnalyzer;

impl LexiconAnalyzer {
    pub fn new() -> Self {
        LexiconAnalyzer
    }
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer for LexiconAnalyzer {
    fn analyze(&self, text: &str) -> SentimentScore {
        let mut positive = 0u32;
        let mut negative = 0u32;
        let mut total = 0u32;

        for word in text
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|w| !w.is_empty())
        {
            total += 1;
            let lower = word.to_lowercase();
            if POSITIVE_WORDS.contains(&lower.as_str()) {
                positive += 1;
            } else if NEGATIVE_WORDS.contains(&lower.as_str()) {
                negative += 1;
            }
        }

        let hits = positive + negative;
        if hits == 0 || total == 0 {
            return SentimentScore { polarity: 0.0, subjectivity: 0.0 };
        }

        SentimentScore {
            polarity: (positive as f64 - negative as f64) / hits as f64,
            subjectivity: hits as f64 / total as f64,
        }
    }
}
