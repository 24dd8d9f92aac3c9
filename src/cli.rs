//! Command-line interface

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use crate::inbox::TriageSession;
use crate::models::{Email, Priority, Sentiment};

#[derive(Parser, Debug)]
#[command(name = "inbox-triage")]
#[command(version = "0.1.0")]
#[command(about = "Demo support-inbox triage assistant", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the inbox, urgent emails first
    List {
        /// Substring filter matched against subject and sender
        #[arg(short, long)]
        filter: Option<String>,

        /// Include emails that have already been sent
        #[arg(long)]
        all: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one email together with its extracted info
    Show {
        /// Email id
        id: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the generated reply draft for an email
    Draft {
        /// Email id
        id: u32,
    },

    /// Review the inbox interactively: draft, edit and send replies
    Review,

    /// Show inbox counters
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate example configuration file
    InitConfig {
        /// Path to create config file
        #[arg(short, long, default_value = "config.toml")]
        output: PathBuf,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },
}

/// Truncate a string to max_len characters, adding "..." if truncated
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        format!(
            "{}...",
            s.chars()
                .take(max_len.saturating_sub(3))
                .collect::<String>()
        )
    }
}

/// One inbox row as shown by `list` (and serialized by `list --json`)
#[derive(Debug, Clone, Serialize)]
pub struct InboxRow {
    pub id: u32,
    pub sender: String,
    pub subject: String,
    pub received_at: String,
    pub status: String,
    pub sentiment: Sentiment,
    pub priority: Priority,
}

impl InboxRow {
    pub fn from_email(session: &TriageSession, email: &Email) -> Self {
        let classification = session.classifier().classify(&email.body);
        Self {
            id: email.id,
            sender: email.sender.clone(),
            subject: email.subject.clone(),
            received_at: email.received_at.clone(),
            status: if email.is_pending() { "pending" } else { "sent" }.to_string(),
            sentiment: classification.sentiment,
            priority: classification.priority,
        }
    }
}

/// Render the inbox as aligned plain-text lines
pub fn render_inbox(session: &TriageSession, emails: &[&Email]) -> String {
    if emails.is_empty() {
        return "Inbox is empty (no emails match).".to_string();
    }

    let mut out = String::new();
    for email in emails {
        let row = InboxRow::from_email(session, email);
        out.push_str(&format!(
            "[{}] {:<6} {:<8} {:<7} {}  {} — {}\n",
            row.id,
            row.priority.to_string(),
            row.sentiment.to_string(),
            row.status,
            row.received_at,
            truncate_string(&row.subject, 40),
            row.sender,
        ));
    }
    out.pop();
    out
}

/// Render one email with its extracted info, as in the detail pane
pub fn render_email_detail(session: &TriageSession, email: &Email) -> String {
    let classification = session.classifier().classify(&email.body);
    // Infallible: the email came out of this session
    let summary = session
        .summary(email.id)
        .unwrap_or_else(|_| String::new());

    let mut out = String::new();
    out.push_str(&format!("From:     {}\n", email.sender));
    out.push_str(&format!("Subject:  {}\n", email.subject));
    out.push_str(&format!("Received: {}\n", email.received_at));
    out.push_str(&format!(
        "Status:   {}",
        if email.is_pending() { "pending" } else { "sent" }
    ));
    if let Some(sent_at) = &email.sent_at {
        out.push_str(&format!(" (sent at {})", sent_at));
    }
    out.push_str("\n\n");
    out.push_str(&email.body);
    out.push_str("\n\n--- Extracted info ---\n");
    out.push_str(&format!("Sentiment: {}\n", classification.sentiment));
    out.push_str(&format!("Priority:  {}\n", classification.priority));
    out.push_str(&format!("Summary:   {}", summary));
    out
}
