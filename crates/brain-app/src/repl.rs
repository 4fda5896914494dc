//! Interactive terminal chat.
//!
//! Each stdin line becomes the session draft and is submitted. After every
//! submit the newly appended messages are rendered; a watcher task prints
//! the thinking indicator while the request is outstanding.

use std::io::Write;
use std::sync::Arc;

use brain_chat::{render_transcript, ChatSession, SkipReason, SubmitOutcome, TextRenderer};
use brain_common::{BrainError, Event};
use brain_config::BrainConfig;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tracing::debug;

use crate::commands::{build_client, build_renderer};

const QUIT_COMMAND: &str = "/quit";

pub async fn run(config: &BrainConfig) -> Result<(), BrainError> {
    let session = Arc::new(ChatSession::new(Arc::new(build_client(config)?)));
    let renderer = build_renderer(config);

    let watcher = tokio::spawn(watch_pending(session.clone(), renderer.clone()));

    println!(
        "Connected to {}. Ask about the project, or type 'Generate a door schedule'. {QUIT_COMMAND} exits.",
        config.backend.url
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut shown = 0;

    loop {
        prompt()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim() == QUIT_COMMAND {
            break;
        }

        session.update_draft(line);
        match session.submit_draft().await {
            SubmitOutcome::Skipped(SkipReason::EmptyInput) => continue,
            SubmitOutcome::Skipped(SkipReason::Busy) => {
                debug!("submit skipped, request outstanding");
                continue;
            }
            SubmitOutcome::Answered(_) | SubmitOutcome::Failed(_) => {}
        }

        shown = print_new_messages(&session, &renderer, shown);
    }

    watcher.abort();
    debug!(session = %session.id().short(), messages = session.message_count(), "chat ended");
    Ok(())
}

fn prompt() -> Result<(), BrainError> {
    let mut stdout = std::io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()?;
    Ok(())
}

/// Print messages appended since `shown`; returns the new count.
fn print_new_messages(session: &ChatSession, renderer: &TextRenderer, shown: usize) -> usize {
    let fresh = session.messages_since(shown);
    if !fresh.is_empty() {
        println!("{}", renderer.render(&render_transcript(&fresh, false)));
    }
    shown + fresh.len()
}

/// Print the thinking indicator whenever a request goes out.
async fn watch_pending(session: Arc<ChatSession>, renderer: TextRenderer) {
    let mut events = session.subscribe();
    loop {
        match events.recv().await {
            Ok(Event::PendingChanged { pending: true, .. }) if session.is_pending() => {
                println!("{}", renderer.render(&[brain_chat::Block::Thinking]));
            }
            Ok(_) => {}
            Err(RecvError::Lagged(skipped)) => debug!(skipped, "event watcher lagged"),
            Err(RecvError::Closed) => break,
        }
    }
}
