use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Project Brain: ask questions about your project documents.
#[derive(Parser, Debug)]
#[command(name = "brain", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Answer service base URL (overrides config and BRAIN_BACKEND_URL).
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Log filter override (e.g. debug, brain_chat=trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive chat (the default).
    Chat,
    /// Ask a single question and print the exchange.
    Ask {
        /// Question text; multiple words are joined with spaces.
        #[arg(required = true)]
        question: Vec<String>,
        /// Print the transcript as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Check that the answer service is up.
    Health,
    /// Run the answer service's built-in evaluation questions.
    Eval,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_no_subcommand() {
        let args = Args::try_parse_from(["brain"]).unwrap();
        assert_eq!(args.command, None);
        assert!(args.url.is_none());
    }

    #[test]
    fn ask_collects_words() {
        let args =
            Args::try_parse_from(["brain", "ask", "Generate", "a", "door", "schedule", "--json"])
                .unwrap();
        assert_eq!(
            args.command,
            Some(Command::Ask {
                question: vec![
                    "Generate".into(),
                    "a".into(),
                    "door".into(),
                    "schedule".into()
                ],
                json: true,
            })
        );
    }

    #[test]
    fn ask_requires_a_question() {
        assert!(Args::try_parse_from(["brain", "ask"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["brain", "health", "--url", "http://10.0.0.2:8000"]).unwrap();
        assert_eq!(args.command, Some(Command::Health));
        assert_eq!(args.url.as_deref(), Some("http://10.0.0.2:8000"));
    }
}
