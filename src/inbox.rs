//! Inbox ordering and session state
//!
//! The classifier and draft generator stay pure; everything mutable in the
//! demo (email list, selection, drafts, send status) lives in
//! [`TriageSession`], which the caller owns for the lifetime of one run.

use chrono::{DateTime, Local, Utc};
use std::collections::HashMap;

use crate::classifier::{summarize, Classifier};
use crate::config::Config;
use crate::draft::DraftGenerator;
use crate::error::{Result, TriageError};
use crate::models::{Classification, Email, EmailStatus, InboxStats, Priority};

/// The hardcoded demo inbox
pub fn seed_inbox() -> Vec<Email> {
    vec![
        Email {
            id: 1,
            sender: "alice@example.com".to_string(),
            subject: "Cannot access my account - urgent".to_string(),
            body: "I cannot access my account since yesterday. It says login failed. \
                   Please help immediately, this is urgent."
                .to_string(),
            received_at: "2025-09-06 08:12".to_string(),
            status: EmailStatus::Pending,
            sent_at: None,
        },
        Email {
            id: 2,
            sender: "bob@company.com".to_string(),
            subject: "Query about enterprise plan pricing".to_string(),
            body: "Hi team, could you share enterprise pricing and SLAs? We're evaluating vendors."
                .to_string(),
            received_at: "2025-09-06 09:05".to_string(),
            status: EmailStatus::Pending,
            sent_at: None,
        },
        Email {
            id: 3,
            sender: "charlie@shop.com".to_string(),
            subject: "Request refund for order #1234".to_string(),
            body: "My order arrived damaged. I need a refund or replacement. \
                   Please advise the process."
                .to_string(),
            received_at: "2025-09-05 17:42".to_string(),
            status: EmailStatus::Pending,
            sent_at: None,
        },
    ]
}

/// Filter and order the inbox for display.
///
/// An email passes the filter when `subject + sender` contains the filter
/// text case-insensitively. Ordering: urgent emails first, then newest
/// `received_at` within each band (string comparison; timestamps are
/// `YYYY-MM-DD HH:MM`). Recomputed on every call, never persisted.
pub fn filter_and_sort<'a>(
    emails: &'a [Email],
    classifier: &Classifier,
    filter: Option<&str>,
    pending_only: bool,
) -> Vec<&'a Email> {
    let needle = filter
        .map(|f| f.to_lowercase())
        .filter(|f| !f.is_empty());

    let mut filtered: Vec<&Email> = emails
        .iter()
        .filter(|e| {
            if let Some(needle) = &needle {
                let haystack = format!("{}{}", e.subject, e.sender).to_lowercase();
                if !haystack.contains(needle.as_str()) {
                    return false;
                }
            }
            !pending_only || e.is_pending()
        })
        .collect();

    filtered.sort_by(|a, b| {
        let rank = |e: &Email| match classifier.priority(&e.body) {
            Priority::Urgent => 0,
            Priority::Normal => 1,
        };
        rank(a)
            .cmp(&rank(b))
            .then_with(|| b.received_at.cmp(&a.received_at))
    });

    filtered
}

/// Session-scoped state for one triage run.
///
/// Owns the email list, the current selection and the per-email reply
/// drafts. Drafts are transient: regenerating overwrites, and nothing
/// survives the process.
pub struct TriageSession {
    session_id: String,
    started_at: DateTime<Utc>,
    emails: Vec<Email>,
    selected_id: Option<u32>,
    drafts: HashMap<u32, String>,
    classifier: Classifier,
    generator: DraftGenerator,
    summary_max_chars: usize,
}

impl TriageSession {
    /// New session over the seed inbox
    pub fn new(config: &Config) -> Self {
        Self::with_emails(seed_inbox(), config)
    }

    /// New session over a caller-supplied inbox
    pub fn with_emails(emails: Vec<Email>, config: &Config) -> Self {
        let classifier = Classifier::from_config(&config.classification);
        let generator = DraftGenerator::new(classifier.clone(), &config.draft);

        let session = Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            emails,
            selected_id: None,
            drafts: HashMap::new(),
            classifier,
            generator,
            summary_max_chars: config.classification.summary_max_chars,
        };

        tracing::debug!(
            "Started triage session {} with {} emails",
            session.session_id,
            session.emails.len()
        );
        session
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Look up an email by id
    pub fn email(&self, id: u32) -> Result<&Email> {
        self.emails
            .iter()
            .find(|e| e.id == id)
            .ok_or(TriageError::EmailNotFound(id))
    }

    /// Mark an email as selected
    pub fn select(&mut self, id: u32) -> Result<()> {
        self.email(id)?;
        self.selected_id = Some(id);
        Ok(())
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.selected_id
    }

    /// The selected email, or `NoSelection`
    pub fn selected_email(&self) -> Result<&Email> {
        let id = self.selected_id.ok_or(TriageError::NoSelection)?;
        self.email(id)
    }

    /// Derived labels for one email
    pub fn classify(&self, id: u32) -> Result<Classification> {
        let email = self.email(id)?;
        Ok(self.classifier.classify(&email.body))
    }

    /// Bounded summary of one email body (configured length)
    pub fn summary(&self, id: u32) -> Result<String> {
        let email = self.email(id)?;
        Ok(summarize(&email.body, self.summary_max_chars))
    }

    /// Generate (or regenerate) the reply draft for an email.
    ///
    /// Any previously stored or edited draft for the id is overwritten.
    pub fn generate_draft(&mut self, id: u32) -> Result<String> {
        let email = self.email(id)?;
        let draft = self.generator.generate(email);
        self.drafts.insert(id, draft.clone());
        tracing::debug!("Generated draft for email {}", id);
        Ok(draft)
    }

    /// Current draft text for an email, if one exists
    pub fn draft(&self, id: u32) -> Option<&str> {
        self.drafts.get(&id).map(String::as_str)
    }

    /// Replace the stored draft with edited text
    pub fn edit_draft(&mut self, id: u32, text: String) -> Result<()> {
        self.email(id)?;
        self.drafts.insert(id, text);
        Ok(())
    }

    /// Dispatch the draft for an email: the simulated send.
    ///
    /// Pure in-memory transition, `Pending -> Sent`, exactly once. Requires
    /// a draft to dispatch; repeating the send is an error. Returns the
    /// `sent_at` timestamp that was stamped on the email.
    pub fn send(&mut self, id: u32) -> Result<String> {
        if !self.drafts.contains_key(&id) {
            return Err(TriageError::DraftMissing(id));
        }

        let email = self
            .emails
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(TriageError::EmailNotFound(id))?;

        if email.status == EmailStatus::Sent {
            return Err(TriageError::AlreadySent(id));
        }

        let sent_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        email.status = EmailStatus::Sent;
        email.sent_at = Some(sent_at.clone());

        tracing::info!("Email {} marked as sent (simulated)", id);
        Ok(sent_at)
    }

    /// Filtered, ordered inbox view
    pub fn list(&self, filter: Option<&str>, pending_only: bool) -> Vec<&Email> {
        filter_and_sort(&self.emails, &self.classifier, filter, pending_only)
    }

    /// Inbox counters for the stats view
    pub fn stats(&self) -> InboxStats {
        InboxStats {
            total: self.emails.len(),
            pending: self.emails.iter().filter(|e| e.is_pending()).count(),
            sent: self.emails.iter().filter(|e| !e.is_pending()).count(),
            urgent: self
                .emails
                .iter()
                .filter(|e| self.classifier.priority(&e.body) == Priority::Urgent)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sentiment;

    fn session() -> TriageSession {
        TriageSession::new(&Config::default())
    }

    #[test]
    fn test_seed_inbox_contents() {
        let emails = seed_inbox();

        assert_eq!(emails.len(), 3);
        assert_eq!(emails[0].sender, "alice@example.com");
        assert_eq!(emails[1].subject, "Query about enterprise plan pricing");
        assert!(emails.iter().all(|e| e.is_pending()));
        assert!(emails.iter().all(|e| e.sent_at.is_none()));
    }

    #[test]
    fn test_seed_classifications() {
        let session = session();

        let first = session.classify(1).unwrap();
        assert_eq!(first.sentiment, Sentiment::Negative);
        assert_eq!(first.priority, Priority::Urgent);

        let second = session.classify(2).unwrap();
        assert_eq!(second.priority, Priority::Normal);
    }

    #[test]
    fn test_list_orders_urgent_first_then_newest() {
        let session = session();

        let ids: Vec<u32> = session.list(None, true).iter().map(|e| e.id).collect();
        // Email 1 is urgent; 2 and 3 are normal with 2 received later
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_list_filter_matches_subject_and_sender() {
        let session = session();

        let ids: Vec<u32> = session
            .list(Some("refund"), true)
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![3]);

        // Case-insensitive, matching the sender address
        let ids: Vec<u32> = session
            .list(Some("BOB"), true)
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![2]);

        assert!(session.list(Some("no such text"), true).is_empty());
    }

    #[test]
    fn test_list_pending_only_hides_sent() {
        let mut session = session();

        session.generate_draft(2).unwrap();
        session.send(2).unwrap();

        let pending_ids: Vec<u32> = session.list(None, true).iter().map(|e| e.id).collect();
        assert_eq!(pending_ids, vec![1, 3]);

        let all_ids: Vec<u32> = session.list(None, false).iter().map(|e| e.id).collect();
        assert_eq!(all_ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_select_and_selected_email() {
        let mut session = session();

        assert!(matches!(
            session.selected_email(),
            Err(TriageError::NoSelection)
        ));

        session.select(2).unwrap();
        assert_eq!(session.selected_id(), Some(2));
        assert_eq!(session.selected_email().unwrap().id, 2);

        assert!(matches!(
            session.select(99),
            Err(TriageError::EmailNotFound(99))
        ));
    }

    #[test]
    fn test_generate_draft_overwrites_edits() {
        let mut session = session();

        let original = session.generate_draft(3).unwrap();
        session
            .edit_draft(3, "custom reply text".to_string())
            .unwrap();
        assert_eq!(session.draft(3), Some("custom reply text"));

        // Regenerating discards the edit
        let regenerated = session.generate_draft(3).unwrap();
        assert_eq!(regenerated, original);
        assert_eq!(session.draft(3), Some(original.as_str()));
    }

    #[test]
    fn test_edit_draft_unknown_email() {
        let mut session = session();
        assert!(matches!(
            session.edit_draft(42, "text".to_string()),
            Err(TriageError::EmailNotFound(42))
        ));
    }

    #[test]
    fn test_send_requires_draft() {
        let mut session = session();
        assert!(matches!(session.send(1), Err(TriageError::DraftMissing(1))));
    }

    #[test]
    fn test_send_transitions_exactly_once() {
        let mut session = session();
        session.generate_draft(1).unwrap();

        let sent_at = session.send(1).unwrap();
        let email = session.email(1).unwrap();
        assert_eq!(email.status, EmailStatus::Sent);
        assert_eq!(email.sent_at.as_deref(), Some(sent_at.as_str()));

        // Irreversible: a second send is an error and nothing changes
        assert!(matches!(session.send(1), Err(TriageError::AlreadySent(1))));
        assert_eq!(session.email(1).unwrap().sent_at.as_deref(), Some(sent_at.as_str()));
    }

    #[test]
    fn test_stats() {
        let mut session = session();

        let stats = session.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.pending, 3);
        assert_eq!(stats.sent, 0);
        assert_eq!(stats.urgent, 1);

        session.generate_draft(3).unwrap();
        session.send(3).unwrap();

        let stats = session.stats();
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.sent, 1);
        assert_eq!(stats.urgent, 1);
    }

    #[test]
    fn test_summary_uses_configured_length() {
        let mut config = Config::default();
        config.classification.summary_max_chars = 10;

        let mut emails = seed_inbox();
        emails[0].body = "0123456789ABCDEF".to_string();
        let session = TriageSession::with_emails(emails, &config);

        assert_eq!(session.summary(1).unwrap(), "0123456789...");
    }

    #[test]
    fn test_sessions_have_distinct_ids() {
        let a = session();
        let b = session();
        assert_ne!(a.session_id(), b.session_id());
    }
}
