use crate::model::Predictor;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PocketError {
    #[error("Provide either an input directory or a dataset file, but not both")]
    InputConflict,

    #[error("{predictor} does not support dataset-file input")]
    UnsupportedCombination { predictor: Predictor },

    #[error("Unknown model '{0}' (expected Alphafold or empty)")]
    InvalidModel(String),

    #[error("Unknown predictor '{0}' (expected P2Rank or Fpocket)")]
    InvalidPredictor(String),

    #[error("Failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{}", execution_failed_message(.code, .stderr))]
    ExecutionFailed { code: Option<i32>, stderr: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PocketError {
    /// True for the errors raised while checking a request, before anything is launched.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PocketError::InputConflict
                | PocketError::UnsupportedCombination { .. }
                | PocketError::InvalidModel(_)
                | PocketError::InvalidPredictor(_)
        )
    }
}

fn execution_failed_message(code: &Option<i32>, stderr: &str) -> String {
    let status = match code {
        Some(code) => format!("Pipeline exited with status {}", code),
        None => "Pipeline was terminated by a signal".to_string(),
    };
    let stderr = stderr.trim();
    if stderr.is_empty() {
        status
    } else {
        format!("{}:\n{}", status, stderr)
    }
}

pub type Result<T> = std::result::Result<T, PocketError>;
