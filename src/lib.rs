//! slowprint - print a few words slowly, then fill an ASCII progress bar.
//!
//! The library holds the render plan, the two-phase renderer and the CLI
//! shell used by the `slowprint` binary.

#![deny(missing_docs)]

/// Version string from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod config;
pub mod runner;

// Re-export key types for convenience
pub use config::RenderPlan;
pub use runner::{fill_length, Phase, RenderError, Renderer};
