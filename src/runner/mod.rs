//! Sequential console renderer.
//!
//! Runs the word phase and then the progress bar phase on the current thread,
//! writing to any `Write` sink and waiting through a `Pause` source.

mod bar;
mod pause;
mod renderer;

use std::io;

use crate::config::{PlanError, RenderPlan};

pub use bar::{bar_line, fill_length};
pub use pause::{Pause, RecordingPause, ThreadPause};
pub use renderer::Renderer;

/// Where a renderer is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Printing words.
    EmittingWords,
    /// Redrawing the progress bar.
    RenderingBar,
    /// Both phases finished.
    Done,
}

/// Error type for render operations.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Writing or flushing the output failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
    /// The plan cannot be rendered.
    #[error("Invalid render plan: {0}")]
    Plan(#[from] PlanError),
    /// A phase was started out of order.
    #[error("Cannot start {expected:?} while in {actual:?}")]
    OutOfOrder {
        /// Phase the operation needs.
        expected: Phase,
        /// Phase the renderer was in.
        actual: Phase,
    },
}

/// Run the default plan against standard output, sleeping for real.
///
/// Takes about 56 seconds.
pub fn run_to_stdout() -> Result<(), RenderError> {
    let stdout = io::stdout();
    let mut renderer = Renderer::new(stdout.lock(), ThreadPause, RenderPlan::default())?;
    renderer.run()
}
