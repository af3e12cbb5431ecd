use crate::config::PipelineConfig;
use crate::invocation::Invocation;
use crate::launcher::ExecOutcome;
use serde::Serialize;

pub mod config;
pub mod init;
pub mod render;
pub mod run;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// The rendered command; `None` when no input was given
    pub invocation: Option<Invocation>,
    /// Set once the command has actually been launched
    pub outcome: Option<ExecOutcome>,
    pub config: Option<PipelineConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_invocation(mut self, invocation: Option<Invocation>) -> Self {
        self.invocation = invocation;
        self
    }

    pub fn with_outcome(mut self, outcome: ExecOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// The displayable command string. Empty when there is nothing to run.
    pub fn command_line(&self) -> String {
        self.invocation
            .as_ref()
            .map(Invocation::command_line)
            .unwrap_or_default()
    }
}
