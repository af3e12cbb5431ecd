//! # CLI Dispatch
//!
//! Parses arguments, wires up the API with its config and launcher, calls
//! the matching API method and prints the result.
//!
//! Output streams:
//! - the command itself (and JSON output) go to stdout, so `pocketgen render
//!   ... | sh` works
//! - render/run messages go to stderr
//! - config/init messages go to stdout, they are the answer

use super::form::{collect_fields, confirm_run};
use super::render::{
    render_command, render_config, render_json, render_json_failure, render_messages, use_color,
};
use super::setup::{Cli, Commands, OutputFormat, RequestArgs};
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use pocketgen::api::{CmdResult, ConfigAction, PocketApi};
use pocketgen::config::PipelineConfig;
use pocketgen::error::{PocketError, Result};
use pocketgen::launcher::system::SystemLauncher;
use pocketgen::launcher::ExecMode;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const CONFIG_DIR_ENV: &str = "POCKETGEN_CONFIG_DIR";
const LOG_ENV: &str = "POCKETGEN_LOG";

struct AppContext {
    api: PocketApi<SystemLauncher>,
    output: OutputFormat,
    /// Styling is decided per stream
    color_out: bool,
    color_err: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Render { request }) => handle_render(&mut ctx, request),
        Some(Commands::Run { request, shell }) => handle_run(&mut ctx, request, shell),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        Some(Commands::Form) | None => handle_form(&mut ctx),
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "pocketgen=debug"
        } else {
            "pocketgen=warn"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// `--config-dir`, then `$POCKETGEN_CONFIG_DIR`, then the OS config directory.
fn resolve_config_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.config_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("org", "pocketgen", "pocketgen")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            PocketError::Config(format!(
                "Could not determine a config directory; pass --config-dir or set {}",
                CONFIG_DIR_ENV
            ))
        })
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = resolve_config_dir(cli)?;
    let config = PipelineConfig::load(&config_dir)?;
    debug!(config_dir = %config_dir.display(), ?config, "loaded config");

    Ok(AppContext {
        api: PocketApi::new(SystemLauncher::new(), config, config_dir),
        output: cli.output,
        color_out: use_color(cli.no_color, &Term::stdout()),
        color_err: use_color(cli.no_color, &Term::stderr()),
    })
}

fn default_predictor(ctx: &AppContext) -> pocketgen::model::Predictor {
    ctx.api.pipeline_config().predictor
}

fn handle_render(ctx: &mut AppContext, request: RequestArgs) -> Result<()> {
    let fields = request.into_fields(default_predictor(ctx));
    let result = ctx.api.render(&fields)?;
    print_command_result(ctx, "", &result);
    Ok(())
}

fn handle_run(ctx: &mut AppContext, request: RequestArgs, shell: bool) -> Result<()> {
    let fields = request.into_fields(default_predictor(ctx));
    let mode = shell.then_some(ExecMode::Shell);

    // Show the command before anything is launched.
    let preview = ctx.api.render(&fields)?;
    if ctx.output == OutputFormat::Text {
        println!(
            "{}",
            render_command("Running: ", &preview.command_line(), ctx.color_out)
        );
    }

    let result = match ctx.api.run(&fields, mode) {
        Ok(result) => result,
        Err(err) => {
            if ctx.output == OutputFormat::Json && !err.is_validation() {
                println!("{}", render_json_failure(&preview, &err));
            }
            return Err(err);
        }
    };
    match ctx.output {
        OutputFormat::Json => println!("{}", render_json(&result)),
        OutputFormat::Text => eprint!("{}", render_messages(&result.messages, ctx.color_err)),
    }
    Ok(())
}

fn handle_form(ctx: &mut AppContext) -> Result<()> {
    let fields = collect_fields(default_predictor(ctx))?;
    let result = ctx.api.render(&fields)?;
    print_command_result(ctx, "Generated command: ", &result);

    if result.invocation.is_none() || !confirm_run()? {
        return Ok(());
    }

    let result = ctx.api.run(&fields, None)?;
    eprint!("{}", render_messages(&result.messages, ctx.color_err));
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if ctx.output == OutputFormat::Json {
        println!("{}", render_json(&result));
        return Ok(());
    }
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config, ctx.color_out));
        }
    }
    print!("{}", render_messages(&result.messages, ctx.color_out));
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    match ctx.output {
        OutputFormat::Json => println!("{}", render_json(&result)),
        OutputFormat::Text => print!("{}", render_messages(&result.messages, ctx.color_out)),
    }
    Ok(())
}

/// The command always prints, even when empty; messages follow on stderr.
fn print_command_result(ctx: &AppContext, label: &str, result: &CmdResult) {
    match ctx.output {
        OutputFormat::Json => println!("{}", render_json(result)),
        OutputFormat::Text => {
            println!(
                "{}",
                render_command(label, &result.command_line(), ctx.color_out)
            );
            eprint!("{}", render_messages(&result.messages, ctx.color_err));
        }
    }
}
