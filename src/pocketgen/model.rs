use crate::error::{PocketError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The pocket prediction tool the pipeline runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Predictor {
    #[default]
    P2Rank,
    Fpocket,
}

impl Predictor {
    pub const ALL: [Predictor; 2] = [Predictor::P2Rank, Predictor::Fpocket];

    pub fn as_str(&self) -> &'static str {
        match self {
            Predictor::P2Rank => "P2Rank",
            Predictor::Fpocket => "Fpocket",
        }
    }

    /// Whether this predictor accepts a dataset file listing structures.
    pub fn supports_dataset(&self) -> bool {
        matches!(self, Predictor::P2Rank)
    }

    /// Whether `--model` means anything to this predictor.
    pub fn takes_model(&self) -> bool {
        matches!(self, Predictor::P2Rank)
    }
}

impl fmt::Display for Predictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Predictor {
    type Err = PocketError;

    fn from_str(s: &str) -> Result<Self> {
        Predictor::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PocketError::InvalidPredictor(s.to_string()))
    }
}

/// Structure-source qualifier passed through to P2Rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Model {
    Alphafold,
}

impl Model {
    pub const ALL: [Model; 1] = [Model::Alphafold];

    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Alphafold => "Alphafold",
        }
    }

    /// Parses a model field where the empty string means "no model".
    pub fn parse_optional(s: &str) -> Result<Option<Self>> {
        if s.is_empty() {
            return Ok(None);
        }
        s.parse().map(Some)
    }
}

impl FromStr for Model {
    type Err = PocketError;

    fn from_str(s: &str) -> Result<Self> {
        Model::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PocketError::InvalidModel(s.to_string()))
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw field values as a form or the command line hands them over.
/// Empty strings mean "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub input_dir: String,
    pub input_ds: String,
    pub output_dir: String,
    pub predictor: Predictor,
    pub model: String,
}

/// Where the pipeline reads structures from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Directory(String),
    Dataset(String),
}

impl InputSource {
    pub fn flag(&self) -> &'static str {
        match self {
            InputSource::Directory(_) => "--inputdir",
            InputSource::Dataset(_) => "--inputds",
        }
    }

    pub fn path(&self) -> &str {
        match self {
            InputSource::Directory(path) | InputSource::Dataset(path) => path,
        }
    }
}

/// One render cycle's worth of input. Rebuilt from the current field
/// values every time; nothing carries over between cycles.
///
/// The model stays a raw string until [`CommandRequest::model`] is asked for
/// it, so a bad model never masks an input conflict.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandRequest {
    pub input_dir: Option<String>,
    pub input_ds: Option<String>,
    pub output_dir: String,
    pub predictor: Predictor,
    pub model: Option<String>,
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

impl CommandRequest {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            input_dir: non_empty(&fields.input_dir),
            input_ds: non_empty(&fields.input_ds),
            output_dir: fields.output_dir.clone(),
            predictor: fields.predictor,
            model: non_empty(&fields.model),
        }
    }

    /// Parses the model field. Call after [`CommandRequest::validate`].
    pub fn model(&self) -> Result<Option<Model>> {
        self.model.as_deref().map(|m| m.parse::<Model>()).transpose()
    }

    /// Checks the request and returns the input mode it selects, if any.
    ///
    /// Rules run in order and the first failure wins:
    /// 1. directory and dataset are mutually exclusive
    /// 2. the predictor must accept the chosen input mode
    pub fn validate(&self) -> Result<Option<InputSource>> {
        match (&self.input_dir, &self.input_ds) {
            (Some(_), Some(_)) => Err(PocketError::InputConflict),
            (None, Some(_)) if !self.predictor.supports_dataset() => {
                Err(PocketError::UnsupportedCombination {
                    predictor: self.predictor,
                })
            }
            (Some(dir), None) => Ok(Some(InputSource::Directory(dir.clone()))),
            (None, Some(ds)) => Ok(Some(InputSource::Dataset(ds.clone()))),
            (None, None) => Ok(None),
        }
    }

    /// The model selector is only offered for P2Rank runs over a dataset file.
    pub fn model_is_solicited(&self) -> bool {
        self.input_ds.is_some() && self.predictor.supports_dataset()
    }
}
