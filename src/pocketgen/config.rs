use crate::error::{PocketError, Result};
use crate::launcher::ExecMode;
use crate::model::Predictor;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_ENGINE: &str = "nextflow";
const DEFAULT_PIPELINE: &str = "P2RankPipeline.nf";

/// Settings for the generated command, stored in `<config dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Workflow engine executable (e.g. "nextflow")
    #[serde(default = "default_engine")]
    pub engine: String,

    /// Pipeline script handed to `<engine> run`
    #[serde(default = "default_pipeline")]
    pub pipeline: String,

    /// Predictor used when none is given on the command line
    #[serde(default)]
    pub predictor: Predictor,

    /// How `run` hands the command to the OS
    #[serde(default, rename = "exec-mode", alias = "exec_mode")]
    pub exec_mode: ExecMode,
}

fn default_engine() -> String {
    DEFAULT_ENGINE.to_string()
}

fn default_pipeline() -> String {
    DEFAULT_PIPELINE.to_string()
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            pipeline: default_pipeline(),
            predictor: Predictor::default(),
            exec_mode: ExecMode::default(),
        }
    }
}

impl PipelineConfig {
    pub const KEYS: [&'static str; 4] = ["engine", "pipeline", "predictor", "exec-mode"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: PipelineConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "engine" => Some(self.engine.clone()),
            "pipeline" => Some(self.pipeline.clone()),
            "predictor" => Some(self.predictor.to_string()),
            "exec-mode" => Some(self.exec_mode.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "engine" | "pipeline" if value.trim().is_empty() => {
                Err(PocketError::Config(format!("{} cannot be empty", key)))
            }
            "engine" => {
                self.engine = value.to_string();
                Ok(())
            }
            "pipeline" => {
                self.pipeline = value.to_string();
                Ok(())
            }
            "predictor" => {
                self.predictor = value.parse()?;
                Ok(())
            }
            "exec-mode" => {
                self.exec_mode = value.parse()?;
                Ok(())
            }
            _ => Err(PocketError::Config(format!(
                "Unknown config key: {} (expected one of {})",
                key,
                Self::KEYS.join(", ")
            ))),
        }
    }

    /// All keys with their current values, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        Self::KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}
