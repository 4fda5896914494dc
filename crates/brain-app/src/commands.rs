//! One-shot subcommands: ask, health, eval.

use std::sync::Arc;

use brain_chat::{
    render_transcript, ChatSession, HttpAnswerClient, HttpClientConfig, Message, SubmitOutcome,
    TextRenderer,
};
use brain_common::BrainError;
use brain_config::BrainConfig;

pub(crate) fn build_client(config: &BrainConfig) -> Result<HttpAnswerClient, BrainError> {
    let client_config = HttpClientConfig::new(config.backend.url.clone())
        .with_connect_timeout(config.backend.connect_timeout())
        .with_request_timeout(config.backend.request_timeout());
    Ok(HttpAnswerClient::new(client_config)?)
}

pub(crate) fn build_renderer(config: &BrainConfig) -> TextRenderer {
    let display = &config.display;
    TextRenderer::new(display.width as usize)
        .with_labels(display.user_label.clone(), display.assistant_label.clone())
        .with_thinking_text(display.thinking_text.clone())
}

/// Submit one question and print the resulting transcript.
pub async fn ask(config: &BrainConfig, question: &str, json: bool) -> Result<(), BrainError> {
    let session = ChatSession::new(Arc::new(build_client(config)?));
    let outcome = session.submit(question).await;
    println!("{}", format_transcript(config, &session.transcript(), json)?);

    match outcome {
        SubmitOutcome::Answered(_) => Ok(()),
        SubmitOutcome::Failed(_) => Err(BrainError::Backend(format!(
            "no answer from {}",
            config.backend.url
        ))),
        SubmitOutcome::Skipped(reason) => {
            Err(BrainError::Other(format!("question not sent: {reason:?}")))
        }
    }
}

/// The transcript as pretty JSON (`ask --json`) or as rendered text.
fn format_transcript(
    config: &BrainConfig,
    transcript: &[Message],
    json: bool,
) -> Result<String, BrainError> {
    if json {
        return serde_json::to_string_pretty(transcript)
            .map_err(|e| BrainError::Other(format!("failed to serialize transcript: {e}")));
    }
    Ok(build_renderer(config).render(&render_transcript(transcript, false)))
}

pub async fn health(config: &BrainConfig) -> Result<(), BrainError> {
    let status = build_client(config)?.health().await?;
    println!("{}: {status}", config.backend.url);
    Ok(())
}

pub async fn eval(config: &BrainConfig) -> Result<(), BrainError> {
    let report = build_client(config)?.evaluate().await?;

    for result in &report.results {
        let sources: Vec<String> = result.sources.iter().map(ToString::to_string).collect();
        println!("[{}] {}", result.label.as_str(), result.question);
        if !sources.is_empty() {
            println!("    Sources: {}", sources.join(", "));
        }
    }

    let summary = &report.summary;
    println!(
        "{} questions: {} looks correct, {} partially correct, {} wrong",
        summary.total(),
        summary.looks_correct,
        summary.partially_correct,
        summary.wrong
    );
    Ok(())
}
