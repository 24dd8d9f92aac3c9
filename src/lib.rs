//! Inbox Triage Demo
//!
//! A small support-inbox triage assistant: a seeded demo inbox is
//! classified with rule-based sentiment/priority heuristics, summarized,
//! and answered with templated reply drafts. Sending is simulated as a
//! pure in-memory state transition; there is no mail server, storage or
//! network anywhere in the crate.
//!
//! # Example Usage
//!
//! ```
//! use inbox_triage::{config::Config, inbox::TriageSession};
//!
//! let mut session = TriageSession::new(&Config::default());
//! let draft = session.generate_draft(1)?;
//! assert!(draft.starts_with("Hi Alice,"));
//! session.send(1)?;
//! # Ok::<(), inbox_triage::TriageError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`classifier`] - Rule-based sentiment/priority classification and summarization
//! - [`draft`] - Templated reply-draft generation
//! - [`inbox`] - Inbox ordering and session-scoped state
//! - [`cli`] - Command-line interface and rendering helpers
//! - [`interactive`] - Interactive review loop
//! - [`config`] - Configuration management
//! - [`error`] - Error types and result aliases
//! - [`models`] - Core data structures

pub mod classifier;
pub mod cli;
pub mod config;
pub mod draft;
pub mod error;
pub mod inbox;
pub mod interactive;
pub mod models;

// Re-export commonly used types for convenience
pub use error::{Result, TriageError};

// Core data models
pub use models::{Classification, Email, EmailStatus, InboxStats, Priority, Sentiment};

// Classifier types
pub use classifier::{summarize, Classifier};

// Draft generation
pub use draft::DraftGenerator;

// Inbox and session state
pub use inbox::{filter_and_sort, seed_inbox, TriageSession};

// Config types
pub use config::{ClassificationConfig, Config, DraftConfig};

// CLI types (for binary usage)
pub use cli::{Cli, Commands};

// Interactive review types
pub use interactive::{ReviewLoop, ReviewSummary};
