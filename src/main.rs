use anyhow::Result;
use clap::Parser;
use inbox_triage::cli::{render_email_detail, render_inbox, Cli, Commands, InboxRow};
use inbox_triage::config::Config;
use inbox_triage::error::TriageError;
use inbox_triage::inbox::TriageSession;
use inbox_triage::interactive::ReviewLoop;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Exit with proper code on error
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        eprintln!("\nFor help, run: inbox-triage --help");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing with level based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("inbox_triage=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("inbox_triage=info,warn,error"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Execute command
    match cli.command {
        Commands::List { filter, all, json } => {
            let config = Config::load(&cli.config)?;
            let session = TriageSession::new(&config);

            let emails = session.list(filter.as_deref(), !all);
            if json {
                let rows: Vec<InboxRow> = emails
                    .iter()
                    .map(|e| InboxRow::from_email(&session, e))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                println!("{}", render_inbox(&session, &emails));
            }

            Ok(())
        }

        Commands::Show { id, json } => {
            let config = Config::load(&cli.config)?;
            let session = TriageSession::new(&config);

            let email = session.email(id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&InboxRow::from_email(&session, email))?);
            } else {
                println!("{}", render_email_detail(&session, email));
            }

            Ok(())
        }

        Commands::Draft { id } => {
            let config = Config::load(&cli.config)?;
            let mut session = TriageSession::new(&config);

            let draft = session.generate_draft(id)?;
            println!("{}", draft);

            Ok(())
        }

        Commands::Review => {
            let config = Config::load(&cli.config)?;
            let mut session = TriageSession::new(&config);

            tracing::info!("Starting review session {}", session.session_id());
            let summary = ReviewLoop::new(&mut session).run()?;
            let stats = session.stats();

            println!("\n========================================");
            println!("Review Session Summary");
            println!("========================================");
            println!("Session ID: {}", session.session_id());
            println!("Drafts generated: {}", summary.drafts_generated);
            println!("Emails sent (simulated): {}", summary.emails_sent);
            println!("Still pending: {}", stats.pending);
            println!("========================================");

            Ok(())
        }

        Commands::Stats { json } => {
            let config = Config::load(&cli.config)?;
            let session = TriageSession::new(&config);

            let stats = session.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("\n========================================");
                println!("Inbox Stats");
                println!("========================================");
                println!("Total:   {}", stats.total);
                println!("Pending: {}", stats.pending);
                println!("Sent:    {}", stats.sent);
                println!("Urgent:  {}", stats.urgent);
                println!("========================================");
            }

            Ok(())
        }

        Commands::InitConfig { output, force } => {
            tracing::info!("Generating example configuration file");

            // Check if file exists
            if output.exists() && !force {
                return Err(TriageError::ConfigError(format!(
                    "Configuration file already exists at {:?}. Use --force to overwrite.",
                    output
                ))
                .into());
            }

            Config::create_example(&output)?;

            println!("Created example configuration file at: {:?}", output);
            println!("\nPlease edit this file to customize your settings.");
            println!("Key settings to review:");
            println!("  - classification.negative_words / positive_words: sentiment keywords");
            println!("  - classification.urgent_phrases: phrases that mark an email urgent");
            println!("  - classification.summary_max_chars: summary truncation length");
            println!("  - draft.signature: sign-off used in generated drafts");

            Ok(())
        }
    }
}
