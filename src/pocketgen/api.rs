//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every UI (the CLI flags, the interactive form, tests).
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs** (raw form fields → [`CommandRequest`])
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and never exits the process.
//!
//! ## Generic Over Launcher
//!
//! `PocketApi<L: Launcher>` is generic over how commands are executed:
//! - Production: `PocketApi<SystemLauncher>`
//! - Testing: `PocketApi<RecordingLauncher>`

use crate::commands;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::launcher::{ExecMode, Launcher};
use crate::model::{CommandRequest, FormFields};
use std::path::{Path, PathBuf};

pub struct PocketApi<L: Launcher> {
    launcher: L,
    config: PipelineConfig,
    config_dir: PathBuf,
}

impl<L: Launcher> PocketApi<L> {
    pub fn new(launcher: L, config: PipelineConfig, config_dir: PathBuf) -> Self {
        Self {
            launcher,
            config,
            config_dir,
        }
    }

    /// Validates the fields and renders the command without running it.
    pub fn render(&self, fields: &FormFields) -> Result<CmdResult> {
        let request = CommandRequest::from_fields(fields);
        commands::render::run(&self.config, &request)
    }

    /// Renders and executes. `mode` overrides the configured exec mode.
    pub fn run(&mut self, fields: &FormFields, mode: Option<ExecMode>) -> Result<CmdResult> {
        let request = CommandRequest::from_fields(fields);
        let mode = mode.unwrap_or(self.config.exec_mode);
        commands::run::run(&mut self.launcher, &self.config, &request, mode)
    }

    /// Reads or updates the config file. A successful `Set` also updates the
    /// config this facade renders with.
    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.config_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    pub fn init(&self) -> Result<CmdResult> {
        commands::init::run(&self.config_dir)
    }

    pub fn pipeline_config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PocketError;
    use crate::launcher::recording::RecordingLauncher;
    use crate::model::Predictor;
    use tempfile::tempdir;

    fn api(dir: &Path) -> PocketApi<RecordingLauncher> {
        PocketApi::new(
            RecordingLauncher::new(),
            PipelineConfig::default(),
            dir.to_path_buf(),
        )
    }

    fn dir_fields() -> FormFields {
        FormFields {
            input_dir: "/data/pdbs".into(),
            output_dir: "/out".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_does_not_launch() {
        let dir = tempdir().unwrap();
        let api = api(dir.path());
        let result = api.render(&dir_fields()).unwrap();
        assert!(result.invocation.is_some());
        assert!(api.launcher().launched().is_empty());
    }

    #[test]
    fn test_run_uses_configured_exec_mode() {
        let dir = tempdir().unwrap();
        let mut api = api(dir.path());
        api.config(ConfigAction::Set("exec-mode".into(), "shell".into()))
            .unwrap();
        api.run(&dir_fields(), None).unwrap();
        assert_eq!(api.launcher().launched()[0].1, ExecMode::Shell);
    }

    #[test]
    fn test_run_mode_override_wins() {
        let dir = tempdir().unwrap();
        let mut api = api(dir.path());
        api.run(&dir_fields(), Some(ExecMode::Shell)).unwrap();
        assert_eq!(api.launcher().launched()[0].1, ExecMode::Shell);
    }

    #[test]
    fn test_config_set_changes_rendered_engine() {
        let dir = tempdir().unwrap();
        let mut api = api(dir.path());
        api.config(ConfigAction::Set("engine".into(), "nf".into()))
            .unwrap();
        let result = api.render(&dir_fields()).unwrap();
        assert!(result.command_line().starts_with("nf run "));
    }

    #[test]
    fn test_render_propagates_validation_errors() {
        let dir = tempdir().unwrap();
        let api = api(dir.path());
        let fields = FormFields {
            input_ds: "/data/set.csv".into(),
            predictor: Predictor::Fpocket,
            ..dir_fields()
        };
        assert!(matches!(
            api.render(&fields),
            Err(PocketError::InputConflict)
        ));
    }

    #[test]
    fn test_init_writes_into_config_dir() {
        let dir = tempdir().unwrap();
        let api = api(dir.path());
        api.init().unwrap();
        assert!(dir.path().join(crate::config::CONFIG_FILENAME).exists());
    }
}
