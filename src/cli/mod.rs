//! Command Line Interface (CLI) layer for the R0 -> DL1 driver.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that wires user-provided options
//! to the conversion seam exposed via `r0dl1::reco`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use errors::AppError;
pub use runner::run;
