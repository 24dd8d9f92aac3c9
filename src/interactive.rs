//! Interactive inbox review
//!
//! Terminal front-end over [`TriageSession`]: pick a pending email from the
//! ordered inbox, then generate, edit and send the reply draft. All state
//! changes go through the session; this module only prompts and prints.

use inquire::{Confirm, Select, Text};

use crate::cli::{render_email_detail, truncate_string};
use crate::error::Result;
use crate::inbox::TriageSession;
use crate::models::Email;

/// Counters reported after the review loop ends
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewSummary {
    pub drafts_generated: usize,
    pub emails_sent: usize,
}

/// One selectable inbox entry
struct EmailChoice {
    id: u32,
    label: String,
}

impl std::fmt::Display for EmailChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum EmailAction {
    GenerateDraft,
    EditDraft,
    SendDraft,
    Back,
}

impl std::fmt::Display for EmailAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmailAction::GenerateDraft => write!(f, "Generate draft"),
            EmailAction::EditDraft => write!(f, "Edit draft"),
            EmailAction::SendDraft => write!(f, "Send draft"),
            EmailAction::Back => write!(f, "Back to inbox"),
        }
    }
}

/// Interactive review loop over one session
pub struct ReviewLoop<'a> {
    session: &'a mut TriageSession,
    summary: ReviewSummary,
}

impl<'a> ReviewLoop<'a> {
    pub fn new(session: &'a mut TriageSession) -> Self {
        Self {
            session,
            summary: ReviewSummary::default(),
        }
    }

    /// Run until the inbox is drained or the user quits
    pub fn run(mut self) -> Result<ReviewSummary> {
        loop {
            let choices = self.pending_choices();
            if choices.is_empty() {
                println!("No pending emails left to review.");
                break;
            }

            let mut options = choices;
            let quit = EmailChoice {
                id: 0,
                label: "Quit review".to_string(),
            };
            options.push(quit);

            let picked = Select::new("Select an email:", options).prompt()?;
            if picked.id == 0 {
                break;
            }

            self.session.select(picked.id)?;
            self.review_selected()?;
        }

        tracing::debug!(
            "Review loop finished: {} drafts, {} sent",
            self.summary.drafts_generated,
            self.summary.emails_sent
        );
        Ok(self.summary)
    }

    fn pending_choices(&self) -> Vec<EmailChoice> {
        self.session
            .list(None, true)
            .into_iter()
            .map(|email| EmailChoice {
                id: email.id,
                label: choice_label(self.session, email),
            })
            .collect()
    }

    fn review_selected(&mut self) -> Result<()> {
        loop {
            let email = self.session.selected_email()?;
            let id = email.id;

            println!("\n{}\n", render_email_detail(self.session, email));
            if let Some(draft) = self.session.draft(id) {
                println!("--- Current draft ---\n{}\n", draft);
            }

            let actions = vec![
                EmailAction::GenerateDraft,
                EmailAction::EditDraft,
                EmailAction::SendDraft,
                EmailAction::Back,
            ];
            let action = Select::new("Action:", actions).prompt()?;

            match action {
                EmailAction::GenerateDraft => {
                    let draft = self.session.generate_draft(id)?;
                    self.summary.drafts_generated += 1;
                    println!("\n--- Generated draft ---\n{}\n", draft);
                }
                EmailAction::EditDraft => {
                    // Editing without a draft starts from a generated one
                    let current = match self.session.draft(id) {
                        Some(d) => d.to_string(),
                        None => {
                            self.summary.drafts_generated += 1;
                            self.session.generate_draft(id)?
                        }
                    };
                    let edited = Text::new("Draft (edit before send):")
                        .with_initial_value(&current)
                        .prompt()?;
                    self.session.edit_draft(id, edited)?;
                    println!("Draft updated.");
                }
                EmailAction::SendDraft => {
                    if self.session.draft(id).is_none() {
                        println!("No draft exists yet; generate one first.");
                        continue;
                    }
                    let confirmed = Confirm::new("Send this draft?")
                        .with_default(false)
                        .prompt()?;
                    if confirmed {
                        let sent_at = self.session.send(id)?;
                        self.summary.emails_sent += 1;
                        println!("Draft marked as SENT (simulated) at {}.", sent_at);
                        return Ok(());
                    }
                }
                EmailAction::Back => return Ok(()),
            }
        }
    }
}

fn choice_label(session: &TriageSession, email: &Email) -> String {
    let classification = session.classifier().classify(&email.body);
    format!(
        "[{}] {:<6} {}  {} — {}",
        email.id,
        classification.priority.to_string(),
        email.received_at,
        truncate_string(&email.subject, 40),
        email.sender,
    )
}
