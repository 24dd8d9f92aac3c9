//! Templated reply-draft generation
//!
//! A draft is assembled purely from the email's fields and the classifier's
//! labels; generating twice for the same email yields the same string.

use crate::classifier::{summarize, Classifier};
use crate::config::DraftConfig;
use crate::models::{Email, Priority, Sentiment};

/// The body excerpt quoted back in a draft is truncated independently of the
/// configurable inbox summary length.
pub const DRAFT_SUMMARY_MAX_CHARS: usize = 200;

/// Generates reply drafts from classified emails
#[derive(Debug, Clone)]
pub struct DraftGenerator {
    classifier: Classifier,
    signature: String,
}

impl DraftGenerator {
    pub fn new(classifier: Classifier, draft_config: &DraftConfig) -> Self {
        Self {
            classifier,
            signature: draft_config.signature.clone(),
        }
    }

    /// Generator with default keyword sets and signature
    pub fn with_defaults() -> Self {
        Self::new(Classifier::new(), &DraftConfig::default())
    }

    /// Produce the reply draft for an email.
    ///
    /// Greeting from the sender's capitalized local part, apology or thanks
    /// keyed on sentiment, and a response-time promise appended only for
    /// urgent emails.
    pub fn generate(&self, email: &Email) -> String {
        let sentiment = self.classifier.sentiment(&email.body);
        let urgent = self.classifier.priority(&email.body) == Priority::Urgent;

        let ack = if sentiment == Sentiment::Negative {
            "We're sorry you're facing this"
        } else {
            "Thanks for reaching out"
        };
        let urgency_line = if urgent {
            " We will prioritize this and respond within 1 business hour."
        } else {
            ""
        };

        format!(
            "Hi {},\n\n\
             {} regarding \"{}\". {}\n\n\
             Our team is looking into this now.{}\n\n\
             Could you please confirm any order/username/reference if applicable? This helps us resolve faster.\n\n\
             Regards,\n{}",
            email.sender_name(),
            ack,
            email.subject,
            summarize(&email.body, DRAFT_SUMMARY_MAX_CHARS),
            urgency_line,
            self.signature,
        )
    }
}

impl Default for DraftGenerator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmailStatus;

    fn test_email(sender: &str, subject: &str, body: &str) -> Email {
        Email {
            id: 1,
            sender: sender.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
            received_at: "2025-09-06 08:12".to_string(),
            status: EmailStatus::Pending,
            sent_at: None,
        }
    }

    #[test]
    fn test_greeting_uses_capitalized_local_part() {
        let generator = DraftGenerator::with_defaults();
        let email = test_email("bob@company.com", "Pricing question", "Hi team");

        let draft = generator.generate(&email);
        assert!(draft.starts_with("Hi Bob,"));
    }

    #[test]
    fn test_negative_email_gets_apology_and_urgency_line() {
        let generator = DraftGenerator::with_defaults();
        let email = test_email(
            "alice@example.com",
            "Cannot access my account - urgent",
            "I cannot access my account since yesterday. Please help immediately, this is urgent.",
        );

        let draft = generator.generate(&email);
        assert!(draft.contains("We're sorry you're facing this"));
        assert!(draft.contains("respond within 1 business hour"));
        assert!(draft.contains("regarding \"Cannot access my account - urgent\""));
    }

    #[test]
    fn test_neutral_email_gets_thanks_without_urgency_line() {
        let generator = DraftGenerator::with_defaults();
        let email = test_email(
            "bob@company.com",
            "Query about enterprise plan pricing",
            "Hi team, could you share enterprise pricing and SLAs?",
        );

        let draft = generator.generate(&email);
        assert!(draft.contains("Thanks for reaching out"));
        assert!(!draft.contains("respond within 1 business hour"));
        assert!(draft.contains("Our team is looking into this now.\n"));
    }

    #[test]
    fn test_long_body_is_truncated_in_draft() {
        let generator = DraftGenerator::with_defaults();
        let body = "x".repeat(300);
        let email = test_email("carol@shop.com", "Long one", &body);

        let draft = generator.generate(&email);
        assert!(draft.contains(&format!("{}...", "x".repeat(DRAFT_SUMMARY_MAX_CHARS))));
        assert!(!draft.contains(&"x".repeat(DRAFT_SUMMARY_MAX_CHARS + 1)));
    }

    #[test]
    fn test_generate_is_idempotent() {
        let generator = DraftGenerator::with_defaults();
        let email = test_email(
            "charlie@shop.com",
            "Request refund for order #1234",
            "My order arrived damaged. I need a refund or replacement.",
        );

        assert_eq!(generator.generate(&email), generator.generate(&email));
    }

    #[test]
    fn test_configured_signature() {
        let config = DraftConfig {
            signature: "Customer Care".to_string(),
        };
        let generator = DraftGenerator::new(Classifier::new(), &config);
        let email = test_email("bob@company.com", "Hello", "just saying hi");

        let draft = generator.generate(&email);
        assert!(draft.ends_with("Regards,\nCustomer Care"));
    }
}
