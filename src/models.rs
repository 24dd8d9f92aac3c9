use serde::{Deserialize, Serialize};

/// A single support email in the demo inbox.
///
/// `sentiment`, `priority` and the summary are never stored on the record;
/// they are derived on demand by the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub id: u32,
    pub sender: String,
    pub subject: String,
    pub body: String,
    /// Sortable timestamp string, `YYYY-MM-DD HH:MM`
    pub received_at: String,
    pub status: EmailStatus,
    /// Set exactly once, when the email transitions to `Sent`
    pub sent_at: Option<String>,
}

impl Email {
    pub fn is_pending(&self) -> bool {
        self.status == EmailStatus::Pending
    }

    /// Sender display name: the local part before `@`, capitalized
    /// ("bob@company.com" -> "Bob").
    pub fn sender_name(&self) -> String {
        let local = self.sender.split('@').next().unwrap_or(&self.sender);
        capitalize(local)
    }
}

/// Send status of an email; `Pending -> Sent` happens exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailStatus {
    Pending,
    Sent,
}

/// Coarse emotional polarity derived from keyword counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Negative,
    Positive,
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Negative => write!(f, "Negative"),
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Binary urgency derived from keyword presence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Urgent,
    Normal,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Urgent => write!(f, "Urgent"),
            Priority::Normal => write!(f, "Normal"),
        }
    }
}

/// Result of classifying one email body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub sentiment: Sentiment,
    pub priority: Priority,
}

/// Inbox counters shown by the stats command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboxStats {
    pub total: usize,
    pub pending: usize,
    pub sent: usize,
    pub urgent: usize,
}

/// Uppercase the first character, lowercase the rest
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
