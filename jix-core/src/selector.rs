//! Interactive fuzzy selection via an external subprocess.
//!
//! One subprocess per `select` call, speaking NUL-delimited records on both
//! stdin and stdout (fzf's `--read0`/`--print0` protocol). The subprocess
//! draws its UI on stderr, which stays inherited. A spawned writer task
//! streams candidates into the pipe so the selector can start rendering
//! before all candidates are sent; the main task blocks reading stdout until
//! the subprocess exits.
//!
//! The command itself is a constructor parameter, so tests (or alternative
//! selectors) can swap the external program without touching the pipeline.

use std::process::Stdio;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::Command;
use tracing::debug;

use crate::error::{JixError, Result};

/// Exit code fzf uses for an interactive abort (Esc / Ctrl-C)
pub const CANCEL_EXIT_CODE: i32 = 130;

const NUL: u8 = 0;

/// Outcome of one interactive selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Zero or more chosen display lines, in selector output order
    Chosen(Vec<String>),
    /// The operator aborted interactively; a normal terminal outcome
    Cancelled,
}

impl Selection {
    /// First chosen line, if any. Cancelled and empty both yield None.
    pub fn first(&self) -> Option<&str> {
        match self {
            Selection::Chosen(lines) => lines.first().map(String::as_str),
            Selection::Cancelled => None,
        }
    }
}

/// Driver for the external selection subprocess
pub struct FuzzySelector {
    program: String,
    args: Vec<String>,
}

impl FuzzySelector {
    /// The real thing: fzf with NUL-delimited records. When `preview_cmd`
    /// is given (normally the host binary itself), fzf re-invokes it with
    /// the key of the highlighted candidate in a lower preview pane.
    pub fn fzf(preview_cmd: Option<&str>) -> Self {
        let mut args = vec!["--read0".to_string(), "--print0".to_string()];
        if let Some(cmd) = preview_cmd {
            args.push("--preview".to_string());
            args.push(format!("{cmd} \"$(echo {{}} | cut -d' ' -f1)\""));
            args.push("--preview-window=down,70%".to_string());
            args.push("--height=80%".to_string());
        }
        Self {
            program: "fzf".to_string(),
            args,
        }
    }

    /// Run an arbitrary command as the selector (test seam)
    pub fn with_command(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Stream `lines` into the subprocess and block until it exits.
    ///
    /// Exit 0 parses stdout into chosen lines; exit 130 is a cancel; any
    /// other exit (or a failed spawn) is a selector error. The writer task
    /// stops silently on the first pipe error: the subprocess exiting before
    /// consuming every candidate is normal, not a pipeline failure.
    pub async fn select(&self, lines: &[String]) -> Result<Selection> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| {
                JixError::selector(format!("failed to start '{}': {e}", self.program))
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| JixError::selector("selector stdin not captured"))?;
        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| JixError::selector("selector stdout not captured"))?;

        let candidates: Vec<String> = lines.to_vec();
        let writer = tokio::spawn(async move {
            for line in &candidates {
                if stdin.write_all(line.as_bytes()).await.is_err() {
                    return;
                }
                if stdin.write_all(&[NUL]).await.is_err() {
                    return;
                }
            }
            // dropping stdin closes the pipe and signals end of candidates
        });

        let mut output = Vec::new();
        stdout.read_to_end(&mut output).await?;
        let status = child.wait().await?;
        // Writer completion is awaited for deterministic shutdown; its only
        // failure mode is a pipe error it has already swallowed.
        writer.await.ok();

        debug!(?status, bytes = output.len(), "selector exited");

        match status.code() {
            Some(0) => Ok(Selection::Chosen(parse_output(&output))),
            Some(CANCEL_EXIT_CODE) => Ok(Selection::Cancelled),
            Some(code) => Err(JixError::selector(format!(
                "'{}' exited with code {code}",
                self.program
            ))),
            None => Err(JixError::selector(format!(
                "'{}' terminated by signal",
                self.program
            ))),
        }
    }
}

/// Split NUL-delimited selector output, dropping a single trailing NUL.
fn parse_output(output: &[u8]) -> Vec<String> {
    let trimmed = output.strip_suffix(&[NUL]).unwrap_or(output);
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed
        .split(|b| *b == NUL)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect()
}
