//! Rule-based sentiment and priority classification
//!
//! Classification is a pair of keyword-set lookups over the lowercased email
//! body: sentiment compares how many negative vs. positive keywords appear,
//! priority checks whether any urgent phrase appears at all. Matching is
//! plain substring containment, not word-boundary matching, so "cannot"
//! also matches inside longer words; the overlap between the negative and
//! urgent sets is intentional.

use crate::config::ClassificationConfig;
use crate::models::{Classification, Priority, Sentiment};
use once_cell::sync::Lazy;

/// Keywords that pull sentiment toward Negative
pub static DEFAULT_NEGATIVE_WORDS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "cannot",
        "can't",
        "unable",
        "failed",
        "error",
        "urgent",
        "immediately",
        "angry",
        "frustrated",
        "damage",
        "damaged",
        "refund",
    ]
});

/// Keywords that pull sentiment toward Positive
pub static DEFAULT_POSITIVE_WORDS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "thank",
        "thanks",
        "great",
        "good",
        "happy",
        "appreciate",
        "resolved",
    ]
});

/// Phrases whose presence marks an email Urgent
pub static DEFAULT_URGENT_PHRASES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "urgent",
        "immediately",
        "asap",
        "can't access",
        "cannot access",
        "down",
        "critical",
        "failed payment",
        "lost access",
        "cannot",
    ]
});

/// Truncation marker appended by [`summarize`]
pub const SUMMARY_MARKER: &str = "...";

/// Stateless rule-based email classifier.
///
/// The keyword sets are fixed at construction time; there is no mutable
/// state and every operation is total and deterministic.
#[derive(Debug, Clone)]
pub struct Classifier {
    negative_words: Vec<String>,
    positive_words: Vec<String>,
    urgent_phrases: Vec<String>,
}

impl Classifier {
    /// Classifier with the built-in default keyword sets
    pub fn new() -> Self {
        Self {
            negative_words: DEFAULT_NEGATIVE_WORDS.iter().map(|w| w.to_string()).collect(),
            positive_words: DEFAULT_POSITIVE_WORDS.iter().map(|w| w.to_string()).collect(),
            urgent_phrases: DEFAULT_URGENT_PHRASES.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Classifier with keyword sets taken from configuration
    pub fn from_config(config: &ClassificationConfig) -> Self {
        Self {
            negative_words: config.negative_words.clone(),
            positive_words: config.positive_words.clone(),
            urgent_phrases: config.urgent_phrases.clone(),
        }
    }

    /// Detect sentiment by comparing negative vs. positive keyword hits.
    ///
    /// Each keyword counts at most once regardless of how often it occurs.
    /// Ties, including zero-zero, resolve to Neutral.
    pub fn sentiment(&self, text: &str) -> Sentiment {
        let text_lower = text.to_lowercase();

        let negative = count_matches(&text_lower, &self.negative_words);
        let positive = count_matches(&text_lower, &self.positive_words);

        if negative > positive {
            Sentiment::Negative
        } else if positive > negative {
            Sentiment::Positive
        } else {
            Sentiment::Neutral
        }
    }

    /// Urgent if any urgent phrase appears as a case-insensitive substring
    pub fn priority(&self, text: &str) -> Priority {
        let text_lower = text.to_lowercase();

        if self.urgent_phrases.iter().any(|p| text_lower.contains(p.as_str())) {
            Priority::Urgent
        } else {
            Priority::Normal
        }
    }

    /// Classify an email body into sentiment and priority
    pub fn classify(&self, text: &str) -> Classification {
        Classification {
            sentiment: self.sentiment(text),
            priority: self.priority(text),
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of keywords from `words` present in `text` (already lowercased)
fn count_matches(text: &str, words: &[String]) -> usize {
    words.iter().filter(|w| text.contains(w.as_str())).count()
}

/// Produce a bounded-length single-line summary of an email body.
///
/// Newlines become spaces and surrounding whitespace is trimmed. When the
/// normalized text exceeds `max_chars` characters it is cut at `max_chars`
/// and the truncation marker is appended, so the result is never longer
/// than `max_chars + 3` characters.
///
/// # Panics
///
/// Panics if `max_chars` is zero; that is a caller programming error, not a
/// recoverable condition.
pub fn summarize(text: &str, max_chars: usize) -> String {
    assert!(max_chars > 0, "summarize: max_chars must be positive");

    let normalized = text.trim().replace('\n', " ");

    if normalized.chars().count() > max_chars {
        let truncated: String = normalized.chars().take(max_chars).collect();
        format!("{}{}", truncated, SUMMARY_MARKER)
    } else {
        normalized
    }
}
