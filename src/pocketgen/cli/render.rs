//! # Rendering Module
//!
//! Terminal output goes through minijinja templates (see `templates.rs`) with
//! a `style` filter backed by console styles. Color is decided per output
//! stream: off for pipes, `TERM=dumb`, or `--no-color`.
//!
//! JSON output skips templates entirely and serializes the result.

use super::styles::POCKETGEN_THEME;
use super::templates::{COMMAND_TEMPLATE, CONFIG_TEMPLATE, MESSAGES_TEMPLATE};
use console::Term;
use minijinja::{Environment, Value};
use pocketgen::api::{CmdMessage, CmdResult};
use pocketgen::config::PipelineConfig;
use pocketgen::error::PocketError;
use serde::Serialize;

/// Whether output written to `term` should carry ANSI styles.
pub fn use_color(no_color: bool, term: &Term) -> bool {
    !no_color && term.features().colors_supported()
}

fn environment(use_color: bool) -> Environment<'static> {
    let mut env = Environment::new();
    env.add_filter("style", move |value: Value, name: String| -> String {
        POCKETGEN_THEME.apply(&name, &value.to_string(), use_color)
    });
    env
}

fn render_template<T: Serialize>(template: &str, data: &T, use_color: bool) -> String {
    environment(use_color)
        .render_str(template, data)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

#[derive(Serialize)]
struct CommandData<'a> {
    label: &'a str,
    command: &'a str,
}

#[derive(Serialize)]
struct MessagesData<'a> {
    messages: &'a [CmdMessage],
}

#[derive(Serialize)]
struct ConfigEntry {
    key: &'static str,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

/// One line: optional label followed by the command. An empty command
/// renders as just the label (or an empty line).
pub fn render_command(label: &str, command: &str, use_color: bool) -> String {
    render_template(COMMAND_TEMPLATE, &CommandData { label, command }, use_color)
}

/// One line per message, styled by level.
pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }
    render_template(MESSAGES_TEMPLATE, &MessagesData { messages }, use_color)
}

pub fn render_config(config: &PipelineConfig, use_color: bool) -> String {
    let entries = config
        .entries()
        .into_iter()
        .map(|(key, value)| ConfigEntry { key, value })
        .collect();
    render_template(CONFIG_TEMPLATE, &ConfigData { entries }, use_color)
}

#[derive(Serialize)]
struct ResultJson<'a> {
    command: String,
    argv: Option<Vec<&'a str>>,
    exit_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stderr: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<&'a PipelineConfig>,
    messages: &'a [CmdMessage],
}

impl<'a> ResultJson<'a> {
    fn new(result: &'a CmdResult) -> Self {
        Self {
            command: result.command_line(),
            argv: result.invocation.as_ref().map(|inv| inv.argv()),
            exit_code: result.outcome.as_ref().and_then(|o| o.code),
            stderr: result.outcome.as_ref().map(|o| o.stderr.as_str()),
            error: None,
            config: result.config.as_ref(),
            messages: &result.messages,
        }
    }

    fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}

pub fn render_json(result: &CmdResult) -> String {
    ResultJson::new(result).to_json()
}

/// JSON for a run that never finished cleanly. `rendered` is the command
/// that was (or would have been) launched.
pub fn render_json_failure<'a>(rendered: &'a CmdResult, error: &'a PocketError) -> String {
    let mut data = ResultJson::new(rendered);
    if let PocketError::ExecutionFailed { code, stderr } = error {
        data.exit_code = *code;
        data.stderr = Some(stderr.as_str());
    }
    data.error = Some(error.to_string());
    data.to_json()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocketgen::invocation::Invocation;
    use pocketgen::launcher::ExecOutcome;

    #[test]
    fn test_render_command_plain() {
        let out = render_command("", "nextflow run P2RankPipeline.nf", false);
        assert_eq!(out, "nextflow run P2RankPipeline.nf");
    }

    #[test]
    fn test_render_command_with_label() {
        let out = render_command("Running: ", "nextflow run x.nf", false);
        assert_eq!(out, "Running: nextflow run x.nf");
    }

    #[test]
    fn test_render_empty_command_is_empty() {
        assert_eq!(render_command("", "", false), "");
    }

    #[test]
    fn test_render_messages_one_per_line() {
        let messages = vec![
            CmdMessage::warning("No output directory given"),
            CmdMessage::success("Command executed successfully"),
        ];
        let out = render_messages(&messages, false);
        assert_eq!(
            out,
            "No output directory given\nCommand executed successfully\n"
        );
    }

    #[test]
    fn test_render_messages_colored() {
        let out = render_messages(&[CmdMessage::error("bad")], true);
        assert!(out.contains("\u{1b}["));
        assert!(!out.contains("(!?)"));
    }

    #[test]
    fn test_render_config_lists_all_keys() {
        let out = render_config(&PipelineConfig::default(), false);
        assert!(out.contains("engine = nextflow\n"));
        assert!(out.contains("pipeline = P2RankPipeline.nf\n"));
        assert!(out.contains("predictor = P2Rank\n"));
        assert!(out.contains("exec-mode = direct\n"));
    }

    #[test]
    fn test_render_json_includes_argv_and_exit_code() {
        let result = CmdResult::default()
            .with_invocation(Some(Invocation::new(
                "nextflow",
                vec!["run".to_string(), "a b.nf".to_string()],
            )))
            .with_outcome(ExecOutcome::exited(0));
        let json: serde_json::Value = serde_json::from_str(&render_json(&result)).unwrap();
        assert_eq!(json["command"], "nextflow run a b.nf");
        assert_eq!(json["argv"][2], "a b.nf");
        assert_eq!(json["exit_code"], 0);
        assert_eq!(json["stderr"], "");
        assert!(json.get("config").is_none());
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_render_json_keeps_stderr_of_successful_run() {
        let result = CmdResult::default()
            .with_outcome(ExecOutcome::exited(0).with_stderr("WARN: pipeline-warning\n"));
        let json: serde_json::Value = serde_json::from_str(&render_json(&result)).unwrap();
        assert_eq!(json["stderr"], "WARN: pipeline-warning\n");
    }

    #[test]
    fn test_render_json_failure_reports_exit_code() {
        let rendered = CmdResult::default().with_invocation(Some(Invocation::new(
            "nextflow",
            vec!["run".to_string()],
        )));
        let err = PocketError::ExecutionFailed {
            code: Some(3),
            stderr: "ERROR ~ boom".to_string(),
        };
        let json: serde_json::Value =
            serde_json::from_str(&render_json_failure(&rendered, &err)).unwrap();
        assert_eq!(json["command"], "nextflow run");
        assert_eq!(json["exit_code"], 3);
        assert_eq!(json["stderr"], "ERROR ~ boom");
        assert!(json["error"].as_str().unwrap().contains("status 3"));
    }

    #[test]
    fn test_render_json_failure_for_launch_error() {
        let err = PocketError::Launch {
            program: "nf".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let json: serde_json::Value =
            serde_json::from_str(&render_json_failure(&CmdResult::default(), &err)).unwrap();
        assert!(json["exit_code"].is_null());
        assert!(json["error"].as_str().unwrap().starts_with("Failed to launch 'nf'"));
    }

    #[test]
    fn test_no_color_flag_wins_for_both_streams() {
        assert!(!use_color(true, &Term::stdout()));
        assert!(!use_color(true, &Term::stderr()));
    }

    #[test]
    fn test_render_json_empty_command() {
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&CmdResult::default())).unwrap();
        assert_eq!(json["command"], "");
        assert!(json["argv"].is_null());
    }
}
