//! Interactive Commands and Rendering
//!
//! Parses user intents and renders a `SessionSnapshot` as text.
//! Holds no workflow logic.

use std::fmt::Write as _;
use thiserror::Error;

use crate::application::session_controller::SessionSnapshot;

pub const HELP: &str = "\
Commands:
  :text <statement>     replace the problem statement
  :generate             generate a first draft
  :answer <id> <text>   answer a clarification question
  :refine               refine the draft with your answers
  :show                 show the current session
  :help                 show this help
  :quit                 exit";

pub const BLOCKED_HINT: &str =
    "The assistant is waiting for required answers before proceeding.";

/// User intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Text(String),
    Generate,
    Answer { id: String, text: String },
    Refine,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty input")]
    Empty,

    #[error("commands start with ':' (try :help)")]
    NotACommand,

    #[error("unknown command :{0} (try :help)")]
    Unknown(String),

    #[error("missing {0}")]
    MissingArgument(&'static str),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }

        let Some(body) = line.strip_prefix(':') else {
            return Err(CommandError::NotACommand);
        };

        let (name, rest) = match body.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (body, ""),
        };

        match name {
            "text" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("statement"));
                }
                Ok(Command::Text(rest.to_string()))
            }
            "generate" | "g" => Ok(Command::Generate),
            "answer" | "a" => {
                let (id, text) = match rest.split_once(char::is_whitespace) {
                    Some((id, text)) => (id, text.trim()),
                    None => (rest, ""),
                };
                if id.is_empty() {
                    return Err(CommandError::MissingArgument("question id"));
                }
                Ok(Command::Answer {
                    id: id.to_string(),
                    text: text.to_string(),
                })
            }
            "refine" | "r" => Ok(Command::Refine),
            "show" | "s" => Ok(Command::Show),
            "help" | "h" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn pretty(value: &impl serde::Serialize) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("<unprintable: {}>", e))
}

/// Render the whole session as plain text
pub fn render(snapshot: &SessionSnapshot) -> String {
    let state = &snapshot.state;
    let mut out = String::new();

    // Status line
    let mut status = Vec::new();
    if snapshot.busy {
        status.push("Working...".to_string());
    }
    if let Some(result) = state.result() {
        status.push(format!("Confidence: {:.2}", result.drafting.confidence));
        status.push(format!("Next action: {}", result.clarification.next_action));
    }
    if !status.is_empty() {
        let _ = writeln!(out, "{}", status.join(" | "));
    }

    if let Some(error) = &snapshot.error {
        let _ = writeln!(out, "✗ Error\n{}", error);
    }

    let _ = writeln!(out, "\n== Intake ==\n{}", state.raw_input());

    let _ = writeln!(out, "\n== Clarification ==");
    if state.result().is_none() {
        let _ = writeln!(out, "Generate a first draft to see questions.");
    } else if state.question_set().is_empty() {
        let _ = writeln!(out, "No clarification questions right now.");
    } else {
        let unanswered: Vec<&str> = state
            .unanswered_required()
            .iter()
            .map(|q| q.id.as_str())
            .collect();

        for q in state.question_set() {
            let badge = match (q.required, unanswered.contains(&q.id.as_str())) {
                (true, true) => " [required, unanswered]",
                (true, false) => " [required]",
                _ => "",
            };
            let _ = writeln!(out, "[{}] {}{}", q.id, q.question, badge);
            if let Some(assumption) = q.default_assumption.as_deref().filter(|a| !a.is_empty()) {
                let _ = writeln!(out, "    Default assumption: {}", assumption);
            }
            let answer = state.answers().get(&q.id).unwrap_or("");
            let _ = writeln!(out, "    > {}", answer);
        }

        if state.is_blocked() {
            let _ = writeln!(out, "{}", BLOCKED_HINT);
        }
    }

    let _ = writeln!(out, "\n== Draft ==");
    match state.draft() {
        Some(draft) => {
            let _ = writeln!(out, "{}", pretty(draft));
        }
        None => {
            let _ = writeln!(out, "Your draft will appear here.");
        }
    }

    out
}
