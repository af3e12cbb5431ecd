//! # CLI Behavior
//!
//! This is **one possible UI client** for pocketgen, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation of the library.
//!
//! ## Naked Execution (`pocketgen`)
//!
//! Running `pocketgen` with no arguments opens the interactive form, the same
//! as `pocketgen form`.
//!
//! ## Render vs Run
//!
//! - `pocketgen render ...` prints the command and exits. An empty command
//!   (no input given) prints an empty line and still exits 0.
//! - `pocketgen run ...` prints the command, launches it, and waits. A
//!   non-zero exit from the pipeline makes `pocketgen` exit 1 with the
//!   pipeline's stderr in the error.
//!
//! Validation errors stop both before anything is launched.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch and per-command handlers
//! - `form`: Interactive prompts
//! - `render`: Output formatting (templates, colors, JSON)
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling
//! - `templates`: Output templates

mod commands;
mod form;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
