//! # Invocation
//!
//! A pipeline run is kept as a program plus an argument list. The flat
//! command line shown to users is derived from it, never the other way
//! around, so paths containing spaces or shell metacharacters reach the
//! workflow engine as single arguments when launched directly.

use crate::config::PipelineConfig;
use crate::model::{CommandRequest, InputSource, Model};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Builds `<engine> run <pipeline> <input> --outdir .. --predictor .. [--model ..]`.
    ///
    /// `input` is the mode returned by [`CommandRequest::validate`] and
    /// `model` the already parsed model; the request's own input and model
    /// fields are not consulted again.
    pub fn for_request(
        config: &PipelineConfig,
        request: &CommandRequest,
        input: &InputSource,
        model: Option<Model>,
    ) -> Self {
        let mut args = vec![
            "run".to_string(),
            config.pipeline.clone(),
            input.flag().to_string(),
            input.path().to_string(),
            "--outdir".to_string(),
            request.output_dir.clone(),
            "--predictor".to_string(),
            request.predictor.to_string(),
        ];
        if let Some(model) = model {
            args.push("--model".to_string());
            args.push(model.to_string());
        }
        Self::new(config.engine.clone(), args)
    }

    /// The single-line form: program and arguments joined by one space each,
    /// with no quoting.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Program followed by arguments.
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}
