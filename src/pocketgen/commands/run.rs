use crate::commands::{render, CmdMessage, CmdResult};
use crate::config::PipelineConfig;
use crate::error::{PocketError, Result};
use crate::launcher::{ExecMode, Launcher};
use crate::model::CommandRequest;
use tracing::warn;

/// Renders the request and, if that produced a command, launches it once.
///
/// A non-zero exit is returned as [`PocketError::ExecutionFailed`] so callers
/// can tell it apart from a request that never passed validation.
pub fn run<L: Launcher>(
    launcher: &mut L,
    config: &PipelineConfig,
    request: &CommandRequest,
    mode: ExecMode,
) -> Result<CmdResult> {
    let mut result = render::run(config, request)?;

    let Some(invocation) = result.invocation.clone() else {
        result.add_message(CmdMessage::info("Nothing to run"));
        return Ok(result);
    };

    let outcome = launcher.launch(&invocation, mode)?;
    if !outcome.success() {
        warn!(code = ?outcome.code, "pipeline failed");
        return Err(PocketError::ExecutionFailed {
            code: outcome.code,
            stderr: outcome.stderr,
        });
    }

    result.add_message(CmdMessage::success("Command executed successfully"));
    Ok(result.with_outcome(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::launcher::recording::RecordingLauncher;
    use crate::launcher::ExecOutcome;
    use crate::model::Predictor;

    fn directory_request() -> CommandRequest {
        CommandRequest {
            input_dir: Some("/data/pdbs".to_string()),
            output_dir: "/out".to_string(),
            predictor: Predictor::P2Rank,
            ..Default::default()
        }
    }

    #[test]
    fn test_launches_rendered_invocation() {
        let mut launcher = RecordingLauncher::new();
        let result = run(
            &mut launcher,
            &PipelineConfig::default(),
            &directory_request(),
            ExecMode::Direct,
        )
        .unwrap();

        assert_eq!(launcher.launched().len(), 1);
        let (invocation, mode) = &launcher.launched()[0];
        assert_eq!(mode, &ExecMode::Direct);
        assert_eq!(Some(invocation), result.invocation.as_ref());
        assert!(result.outcome.as_ref().is_some_and(|o| o.success()));
        assert_eq!(result.messages.last().unwrap().level, MessageLevel::Success);
    }

    #[test]
    fn test_passes_exec_mode_through() {
        let mut launcher = RecordingLauncher::new();
        run(
            &mut launcher,
            &PipelineConfig::default(),
            &directory_request(),
            ExecMode::Shell,
        )
        .unwrap();
        assert_eq!(launcher.launched()[0].1, ExecMode::Shell);
    }

    #[test]
    fn test_empty_request_launches_nothing() {
        let mut launcher = RecordingLauncher::new();
        let result = run(
            &mut launcher,
            &PipelineConfig::default(),
            &CommandRequest::default(),
            ExecMode::Direct,
        )
        .unwrap();

        assert!(launcher.launched().is_empty());
        assert!(result.outcome.is_none());
        assert!(result.messages.iter().any(|m| m.content == "Nothing to run"));
    }

    #[test]
    fn test_validation_error_launches_nothing() {
        let mut launcher = RecordingLauncher::new();
        let request = CommandRequest {
            input_ds: Some("/data/set.csv".to_string()),
            ..directory_request()
        };
        let err = run(
            &mut launcher,
            &PipelineConfig::default(),
            &request,
            ExecMode::Direct,
        )
        .unwrap_err();

        assert!(err.is_validation());
        assert!(launcher.launched().is_empty());
    }

    #[test]
    fn test_non_zero_exit_is_surfaced() {
        let mut launcher =
            RecordingLauncher::with_outcome(ExecOutcome::exited(1).with_stderr("N E X T F L O W failed"));
        let err = run(
            &mut launcher,
            &PipelineConfig::default(),
            &directory_request(),
            ExecMode::Direct,
        )
        .unwrap_err();

        match err {
            PocketError::ExecutionFailed { code, stderr } => {
                assert_eq!(code, Some(1));
                assert!(stderr.contains("failed"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
