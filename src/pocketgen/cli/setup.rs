use clap::{Args, Parser, Subcommand, ValueEnum};
use pocketgen::model::{FormFields, Predictor};
use std::path::PathBuf;

/// Returns the version string, with the git hash appended for non-release builds.
/// Format: "0.3.1" for releases, "0.3.1@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "pocketgen", bin_name = "pocketgen", version = get_version())]
#[command(
    about = "Build, check and launch binding-pocket prediction pipeline runs",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config.json (default: $POCKETGEN_CONFIG_DIR, then the OS config dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// The five form fields as flags. Omitted flags mean empty fields.
#[derive(Args, Debug, Clone, Default)]
pub struct RequestArgs {
    /// Directory of input structure files
    #[arg(long, value_name = "DIR")]
    pub input_dir: Option<String>,

    /// Dataset file listing structures (P2Rank only)
    #[arg(long, value_name = "FILE")]
    pub input_ds: Option<String>,

    /// Directory the pipeline writes pocket predictions to
    #[arg(long, visible_alias = "output-dir", value_name = "DIR")]
    pub outdir: Option<String>,

    /// Predictor to run: P2Rank or Fpocket (default from config)
    #[arg(short, long)]
    pub predictor: Option<Predictor>,

    /// Structure-source model, e.g. Alphafold (P2Rank only)
    #[arg(short, long)]
    pub model: Option<String>,
}

impl RequestArgs {
    pub fn into_fields(self, default_predictor: Predictor) -> FormFields {
        FormFields {
            input_dir: self.input_dir.unwrap_or_default(),
            input_ds: self.input_ds.unwrap_or_default(),
            output_dir: self.outdir.unwrap_or_default(),
            predictor: self.predictor.unwrap_or(default_predictor),
            model: self.model.unwrap_or_default(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fill in the fields interactively, review the command, then run it
    #[command(display_order = 1)]
    Form,

    /// Print the pipeline command without running it
    #[command(alias = "r", display_order = 2)]
    Render {
        #[command(flatten)]
        request: RequestArgs,
    },

    /// Print the pipeline command, then run it and wait for it to finish
    #[command(display_order = 3)]
    Run {
        #[command(flatten)]
        request: RequestArgs,

        /// Hand the command line to the system shell instead of launching it directly
        #[arg(long)]
        shell: bool,
    },

    /// Get or set configuration
    #[command(display_order = 4)]
    Config {
        /// Configuration key (engine, pipeline, predictor, exec-mode)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Write a default config file
    #[command(display_order = 5)]
    Init,
}
