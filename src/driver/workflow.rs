//! Workflow Orchestration
//!
//! 対話セッションの組み立てと入力ループ

use anyhow::{Context, Result};
use log::info;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::adapter::config::Config;
use crate::adapter::http::client::HttpDraftingEngine;
use crate::application::session_controller::{ActionOutcome, SessionController};
use crate::domain::repositories::drafting_engine::DraftingEngine;

use super::repl::{render, Command, CommandError, HELP};

/// Intake text used when none is given
pub const DEFAULT_INTAKE: &str = "We want to reduce onboarding time for new engineers on our lab software team. Today it takes ~6 weeks before someone can ship code.";

/// Resolve the initial problem statement from `--text` / `--input`
pub fn resolve_intake(text: Option<&str>, input: Option<&str>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }
    if let Some(path) = input {
        let expanded = shellexpand::tilde(path);
        return std::fs::read_to_string(expanded.as_ref())
            .with_context(|| format!("Failed to read intake file {}", path));
    }
    Ok(DEFAULT_INTAKE.to_string())
}

/// Interactive draft session
pub struct DraftSessionWorkflow<E: DraftingEngine> {
    base_address: String,
    controller: Arc<SessionController<E>>,
}

impl DraftSessionWorkflow<HttpDraftingEngine> {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config, raw_input: String) -> Self {
        let engine = Arc::new(HttpDraftingEngine::new(config.base_address.clone()));
        let controller = SessionController::new(engine, config.session_config(), raw_input);
        Self::with_controller(config.base_address, Arc::new(controller))
    }
}

impl<E: DraftingEngine> DraftSessionWorkflow<E> {
    pub fn with_controller(base_address: String, controller: Arc<SessionController<E>>) -> Self {
        Self {
            base_address,
            controller,
        }
    }

    pub fn controller(&self) -> &Arc<SessionController<E>> {
        &self.controller
    }

    /// Run the input loop until `:quit` or end of input
    pub async fn execute<R, W>(&self, generate_first: bool, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        info!(
            "Starting session {} against {}",
            self.controller.session_id(),
            self.base_address
        );
        writeln!(out, "✓ Drafting engine: {}", self.base_address)?;
        writeln!(out, "{}", HELP)?;

        if generate_first {
            self.dispatch(Command::Generate, out).await?;
        } else {
            writeln!(out, "{}", render(&self.controller.snapshot()))?;
        }

        let mut lines = input.lines();
        loop {
            write!(out, "lfd> ")?;
            out.flush()?;

            let Some(line) = lines.next_line().await.context("Failed to read input")? else {
                break;
            };

            match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.dispatch(command, out).await?,
                Err(CommandError::Empty) => continue,
                Err(e) => writeln!(out, "⚠ {}", e)?,
            }
        }

        writeln!(out, "Bye.")?;
        Ok(())
    }

    async fn dispatch<W: Write>(&self, command: Command, out: &mut W) -> Result<()> {
        match command {
            Command::Text(text) => {
                self.controller.set_raw_input(text);
                writeln!(out, "✓ Problem statement updated")?;
            }
            Command::Answer { id, text } => {
                if self.controller.set_answer(&id, text) {
                    writeln!(out, "✓ Answer recorded for {}", id)?;
                } else {
                    writeln!(out, "⚠ No active question {}, answer ignored", id)?;
                }
            }
            Command::Generate => {
                writeln!(out, "Working...")?;
                let outcome = self.controller.generate().await;
                self.report(outcome, out)?;
            }
            Command::Refine => {
                writeln!(out, "Working...")?;
                let outcome = self.controller.refine().await;
                self.report(outcome, out)?;
            }
            Command::Show => {
                writeln!(out, "{}", render(&self.controller.snapshot()))?;
            }
            Command::Help => {
                writeln!(out, "{}", HELP)?;
            }
            Command::Quit => {}
        }
        Ok(())
    }

    fn report<W: Write>(&self, outcome: ActionOutcome, out: &mut W) -> Result<()> {
        match outcome {
            ActionOutcome::Applied => writeln!(out, "✓ Draft updated")?,
            ActionOutcome::Failed => writeln!(out, "✗ Request failed")?,
            ActionOutcome::Busy => writeln!(out, "⚠ A request is already in flight")?,
            ActionOutcome::NotReady => {
                writeln!(out, "⚠ No questions to answer, nothing to refine")?;
                return Ok(());
            }
        }
        writeln!(out, "{}", render(&self.controller.snapshot()))?;
        Ok(())
    }
}
