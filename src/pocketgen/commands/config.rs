use crate::commands::{CmdMessage, CmdResult};
use crate::config::PipelineConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = PipelineConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = PipelineConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = PipelineConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e.to_string()));
                return Ok(res);
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Predictor;
    use tempfile::tempdir;

    #[test]
    fn test_show_all_returns_defaults() {
        let dir = tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(PipelineConfig::default()));
    }

    #[test]
    fn test_set_persists_and_normalizes() {
        let dir = tempdir().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("predictor".into(), "fpocket".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "predictor set to Fpocket");

        let loaded = PipelineConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.predictor, Predictor::Fpocket);
    }

    #[test]
    fn test_show_key() {
        let dir = tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowKey("engine".into())).unwrap();
        assert_eq!(result.messages[0].content, "nextflow");
    }

    #[test]
    fn test_unknown_key_is_reported_not_saved() {
        let dir = tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::Set("colour".into(), "x".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join(crate::config::CONFIG_FILENAME).exists());

        let result = run(dir.path(), ConfigAction::ShowKey("colour".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
    }
}
