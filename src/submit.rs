//! Submission boundary
//!
//! The core's contract ends at handing the full batch to a sink. The default
//! sink just logs the batch as JSON; a command sink pipes the JSON body to a
//! configured external program's stdin and lets it do the downstream work
//! (API call, persistence, whatever the deployment needs).

use crate::{Result, ScanError};
use log::{debug, info};
use serde::Serialize;
use std::io::Write;
use std::process::{Command, Stdio};

/// Batch payload handed to the sink (JSON format)
#[derive(Debug, Serialize)]
struct SubmitPayload<'a> {
    /// Codes in acceptance order
    codes: &'a [String],
}

/// External collaborator that receives a completed batch
pub trait SubmitSink {
    /// Accept an ordered batch of validated codes
    fn submit(&mut self, codes: &[String]) -> Result<()>;
}

/// Default sink: logs the JSON batch, performs no downstream action
pub struct LogSink;

impl SubmitSink for LogSink {
    fn submit(&mut self, codes: &[String]) -> Result<()> {
        let body = serde_json::to_string(&SubmitPayload { codes })?;
        info!("Batch submitted: {}", body);
        Ok(())
    }
}

/// Sink that pipes the JSON batch to an external command's stdin
pub struct CommandSink {
    command: String,
}

impl CommandSink {
    pub fn new(command: String) -> Self {
        Self { command }
    }
}

impl SubmitSink for CommandSink {
    fn submit(&mut self, codes: &[String]) -> Result<()> {
        let body = serde_json::to_string(&SubmitPayload { codes })?;
        debug!("Running submit command: {}", self.command);

        let mut child = Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ScanError::Submit(format!("Failed to spawn '{}': {}", self.command, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(body.as_bytes())?;
            stdin.write_all(b"\n")?;
        }

        let status = child
            .wait()
            .map_err(|e| ScanError::Submit(format!("Failed to wait for '{}': {}", self.command, e)))?;

        if !status.success() {
            return Err(ScanError::Submit(format!(
                "Submit command '{}' exited with {}",
                self.command, status
            )));
        }

        info!("Batch of {} codes submitted via command", codes.len());
        Ok(())
    }
}

/// Create the submission sink from configuration
///
/// A configured `[submit] command` gets a CommandSink; otherwise the batch
/// is only logged.
pub fn create_sink(command: Option<String>) -> Box<dyn SubmitSink> {
    match command {
        Some(cmd) if !cmd.trim().is_empty() => {
            info!("Using submit command: {}", cmd);
            Box::new(CommandSink::new(cmd))
        }
        _ => {
            info!("No submit command configured, batches will be logged");
            Box::new(LogSink)
        }
    }
}
