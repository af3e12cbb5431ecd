//! # Launcher Layer
//!
//! Running the rendered pipeline command is abstracted behind the [`Launcher`]
//! trait so the command layer never touches `std::process` directly.
//!
//! ## Implementations
//!
//! - [`system::SystemLauncher`]: Production launcher
//!   - Blocks until the workflow engine exits; no timeout, no retry
//!   - stdin/stdout inherited; stderr echoed live and captured for the outcome
//!
//! - [`recording::RecordingLauncher`]: In-memory launcher for testing
//!   - Records every invocation it receives
//!   - Returns a scripted outcome without spawning anything
//!
//! ## Exec Modes
//!
//! - `ExecMode::Direct`: argv is handed to the OS process launcher as-is.
//!   Paths are never re-split or interpreted.
//! - `ExecMode::Shell`: the flat command line is handed to `sh -c`
//!   (`cmd /C` on Windows). This reproduces the historical behavior byte
//!   for byte, shell expansion included, and is opt-in only.

use crate::error::{PocketError, Result};
use crate::invocation::Invocation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod recording;
pub mod system;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecMode {
    #[default]
    Direct,
    Shell,
}

impl fmt::Display for ExecMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecMode::Direct => f.write_str("direct"),
            ExecMode::Shell => f.write_str("shell"),
        }
    }
}

impl FromStr for ExecMode {
    type Err = PocketError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(ExecMode::Direct),
            "shell" => Ok(ExecMode::Shell),
            other => Err(PocketError::Config(format!(
                "Unknown exec mode: {} (expected direct or shell)",
                other
            ))),
        }
    }
}

/// What came back from one finished pipeline process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExecOutcome {
    /// Exit code, `None` if the process was killed by a signal
    pub code: Option<i32>,
    /// Captured standard error
    pub stderr: String,
}

impl ExecOutcome {
    pub fn exited(code: i32) -> Self {
        Self {
            code: Some(code),
            stderr: String::new(),
        }
    }

    pub fn with_stderr(mut self, stderr: impl Into<String>) -> Self {
        self.stderr = stderr.into();
        self
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Abstract interface for running a pipeline invocation.
///
/// Implementations block until the process finishes. A process that starts
/// and exits non-zero is an `Ok` outcome; only failing to start it at all is
/// an error here.
pub trait Launcher {
    fn launch(&mut self, invocation: &Invocation, mode: ExecMode) -> Result<ExecOutcome>;
}
