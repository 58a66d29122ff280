//! Command Line Interface (CLI) layer for iconcrop.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that resolves parameters, runs a
//! single crop, and prints the diagnostic line.
//!
//! If you are embedding iconcrop into another application, prefer the
//! high-level `iconcrop::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
