// Client for an external text-classification pipeline. The classifier runs
// as a separate process, typically a Python service wrapping a pretrained
// Arabic model; this side only invokes the configured command, parses its
// stdout, and degrades to neutral on failure. No model is ever loaded
// in-process.
use std::process::Command;

use anyhow::{anyhow, Result};

use super::types::Sentiment;

/// Invokes an external sentiment classifier command.
///
/// The text to classify is appended as the final argument. The command is
/// expected to print a `{"label": ..., "score": ...}` JSON object as the
/// last line of stdout; everything else it prints before that (model load
/// banners, progress chatter) is ignored.
#[derive(Debug, Clone)]
pub struct PipelineClient {
    program: String,
    args: Vec<String>,
}

impl PipelineClient {
    pub fn new(program: impl Into<String>) -> Self {
        PipelineClient {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a fixed argument, placed before the text.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append fixed arguments, placed before the text.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Parse a whitespace-separated command line, e.g.
    /// `"python3 ml_service/sentiment_service.py"`.
    pub fn from_command_line(command: &str) -> Result<Self> {
        let mut parts = command.split_whitespace();
        let program = parts.next().ok_or_else(|| anyhow!("empty pipeline command"))?;
        Ok(PipelineClient::new(program).args(parts))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Classify `text`, degrading to `{Neutral, 0.0}` on any failure.
    ///
    /// This is the total entry point: a missing binary, a non-zero exit,
    /// stderr output, or unparsable stdout all yield the neutral fallback,
    /// with the cause logged at warn level.
    pub fn classify(&self, text: &str) -> Sentiment {
        match self.try_classify(text) {
            Ok(sentiment) => sentiment,
            Err(e) => {
                tracing::warn!(error = %e, "sentiment pipeline degraded to neutral");
                Sentiment::neutral()
            }
        }
    }

    /// Classify `text`, surfacing the failure cause instead of degrading.
    pub fn try_classify(&self, text: &str) -> Result<Sentiment> {
        tracing::debug!(program = %self.program, "invoking sentiment pipeline");
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .output()
            .map_err(|e| anyhow!("failed to invoke {}: {}", self.program, e))?;

        // Any stderr output counts as a failed call even on exit code 0,
        // whitespace included.
        if !output.status.success() || !output.stderr.is_empty() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!(
                "{} failed ({}): {}",
                self.program,
                output.status,
                stderr.trim()
            ));
        }

        // The classifier may log startup banners first; only the last line
        // of stdout is the result object.
        let stdout = String::from_utf8_lossy(&output.stdout);
        let last_line = stdout
            .trim()
            .lines()
            .last()
            .ok_or_else(|| anyhow!("{} produced no output", self.program))?;

        serde_json::from_str(last_line)
            .map_err(|e| anyhow!("unparsable pipeline output {:?}: {}", last_line, e))
    }
}
