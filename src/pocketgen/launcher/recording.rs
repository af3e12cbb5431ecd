use super::{ExecMode, ExecOutcome, Launcher};
use crate::error::Result;
use crate::invocation::Invocation;

/// A launcher that never spawns anything. Each call is recorded and
/// answered with the configured outcome.
#[derive(Debug, Clone)]
pub struct RecordingLauncher {
    outcome: ExecOutcome,
    launched: Vec<(Invocation, ExecMode)>,
}

impl Default for RecordingLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingLauncher {
    /// A launcher whose runs all exit 0.
    pub fn new() -> Self {
        Self::with_outcome(ExecOutcome::exited(0))
    }

    pub fn with_outcome(outcome: ExecOutcome) -> Self {
        Self {
            outcome,
            launched: Vec::new(),
        }
    }

    pub fn launched(&self) -> &[(Invocation, ExecMode)] {
        &self.launched
    }
}

impl Launcher for RecordingLauncher {
    fn launch(&mut self, invocation: &Invocation, mode: ExecMode) -> Result<ExecOutcome> {
        self.launched.push((invocation.clone(), mode));
        Ok(self.outcome.clone())
    }
}
