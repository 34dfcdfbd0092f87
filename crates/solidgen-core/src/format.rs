//! Best-effort source formatting via an external tool
//!
//! Formatting never fails a generation: any failure to run the external tool
//! is logged as a warning and the unformatted text is used instead. The
//! fallback is an explicit outcome arm rather than a swallowed error so the
//! path can be asserted in tests.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Outcome of a formatting attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatOutcome {
    /// The formatter ran successfully; its stdout is returned verbatim
    Formatted(String),
    /// The formatter could not run; the original text is returned unchanged
    Fallback(String),
}

impl FormatOutcome {
    /// The text to persist, formatted or not
    pub fn into_text(self) -> String {
        match self {
            FormatOutcome::Formatted(text) | FormatOutcome::Fallback(text) => text,
        }
    }
}

/// An external code formatter invoked over stdin/stdout
#[derive(Debug, Clone)]
pub struct Formatter {
    program: String,
    args: Vec<String>,
}

impl Formatter {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// The biome formatter, as run through pnpm. `stdin_file_name` tells
    /// biome which source type the piped text is (e.g. `Badge.tsx`).
    pub fn biome(stdin_file_name: &str) -> Self {
        Self::new(
            "pnpm",
            vec![
                "biome".to_string(),
                "check".to_string(),
                "--write".to_string(),
                "--stdin-file-path".to_string(),
                stdin_file_name.to_string(),
            ],
        )
    }

    /// Format `text`, falling back to the input unchanged on any failure.
    ///
    /// There is no timeout: a hang in the external tool hangs the invocation.
    pub async fn format(&self, text: &str) -> FormatOutcome {
        match self.run(text).await {
            Ok(formatted) => FormatOutcome::Formatted(formatted),
            Err(e) => {
                eprintln!(
                    "{} formatter failed, keeping unformatted output ({e:#})",
                    "Warning:".yellow()
                );
                FormatOutcome::Fallback(text.to_string())
            }
        }
    }

    async fn run(&self, text: &str) -> Result<String> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to spawn '{}'", self.program))?;

        let mut stdin = child
            .stdin
            .take()
            .context("Failed to open formatter stdin")?;

        // Write stdin from a task so stdout is drained concurrently; a
        // formatter that emits more than a pipe buffer before consuming its
        // input would otherwise deadlock.
        let input = text.to_owned();
        let writer = tokio::spawn(async move {
            stdin.write_all(input.as_bytes()).await?;
            stdin.shutdown().await
        });

        let output = child
            .wait_with_output()
            .await
            .context("Failed to wait for formatter")?;
        let write_result = writer
            .await
            .context("Failed to join formatter stdin writer")?;

        if output.status.success() {
            // A broken pipe only matters if the formatter claimed success
            write_result.context("Failed to write to formatter stdin")?;
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            anyhow::bail!(
                "'{}' exited with code {}",
                self.program,
                output.status.code().unwrap_or(-1)
            );
        }
    }
}
