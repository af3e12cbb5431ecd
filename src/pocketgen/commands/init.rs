use crate::commands::{CmdMessage, CmdResult};
use crate::config::{PipelineConfig, CONFIG_FILENAME};
use crate::error::Result;
use std::path::Path;

/// Writes a config file with default values, leaving an existing one alone.
pub fn run(dir: &Path) -> Result<CmdResult> {
    let path = dir.join(CONFIG_FILENAME);
    let mut result = CmdResult::default();

    if path.exists() {
        let config = PipelineConfig::load(dir)?;
        result.add_message(CmdMessage::info(format!(
            "Config already exists at {}",
            path.display()
        )));
        return Ok(result.with_config(config));
    }

    let config = PipelineConfig::default();
    config.save(dir)?;
    result.add_message(CmdMessage::success(format!(
        "Initialized config at {}",
        path.display()
    )));
    Ok(result.with_config(config))
}
