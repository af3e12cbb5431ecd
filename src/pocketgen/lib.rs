//! # Pocketgen Architecture
//!
//! Pocketgen builds and launches runs of a binding-pocket prediction pipeline
//! (P2Rank or Fpocket driven by a Nextflow script). It takes a handful of
//! mutually exclusive inputs, checks them, renders one command, shows it, and
//! runs it only when asked to.
//!
//! The library is UI-agnostic; the binary is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - clap flags, interactive form, templated terminal output  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Raw form fields → CommandRequest                         │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, rendering, execution policy                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Launcher Layer (launcher/)                                 │
//! │  - Launcher trait                                           │
//! │  - SystemLauncher (production), RecordingLauncher (testing) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Render Cycle
//!
//! Every render starts from the current field values. A [`model::CommandRequest`]
//! is built, validated, and turned into an [`invocation::Invocation`]; nothing
//! is cached between cycles, so rendering the same fields twice gives the same
//! command.
//!
//! Validation runs in a fixed order and the first failure wins:
//! 1. input directory and dataset file are mutually exclusive
//! 2. Fpocket cannot read a dataset file
//!
//! The model field is parsed only after both pass, and only for P2Rank.
//!
//! With neither input set the command is empty. That is not an error; there
//! is just nothing to show or run.
//!
//! ## Execution
//!
//! Commands are launched from an argument list, not a shell string, unless
//! the `shell` exec mode is selected. The pipeline's stderr is shown as it
//! arrives and also comes back to the caller with the exit status; a failed
//! run is a [`error::PocketError::ExecutionFailed`], kept separate from
//! validation errors.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for render, run, config and init
//! - [`launcher`]: Process execution abstraction and implementations
//! - [`model`]: Request types (`Predictor`, `Model`, `CommandRequest`)
//! - [`invocation`]: Structured program + argv form of a command
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod invocation;
pub mod launcher;
pub mod model;
