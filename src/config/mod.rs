//! The render plan.
//!
//! A `RenderPlan` bundles everything the renderer needs to know: the words to
//! print, the bar geometry and the pause intervals. The binary only ever uses
//! `RenderPlan::default()`; other plans exist for tests and benchmarks.

mod validation;

use std::time::Duration;

pub use validation::PlanError;

/// Words printed during the first phase, in order.
pub const WORDS: [&str; 4] = ["this", "is", "one", "string"];
/// Pause after each word, in milliseconds.
pub const WORD_PAUSE_MS: u64 = 1500;
/// Width of a completely filled bar.
pub const BAR_WIDTH: usize = 22;
/// Number of bar redraws.
pub const TOTAL_STEPS: usize = 1000;
/// Pause after each bar redraw, in milliseconds.
pub const STEP_PAUSE_MS: u64 = 50;
/// Character used to draw the filled part of the bar.
pub const FILL_CHAR: char = '*';

/// Everything the renderer needs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    /// Words printed in the first phase.
    pub words: Vec<String>,
    /// Pause after each word, in milliseconds.
    pub word_pause_ms: u64,
    /// Width the bar would reach at `step == total_steps`.
    pub bar_width: usize,
    /// Number of redraws in the bar phase.
    pub total_steps: usize,
    /// Pause after each redraw, in milliseconds.
    pub step_pause_ms: u64,
    /// Character repeated to draw the bar.
    pub fill_char: char,
}

impl Default for RenderPlan {
    fn default() -> Self {
        Self {
            words: WORDS.iter().map(|w| (*w).to_string()).collect(),
            word_pause_ms: WORD_PAUSE_MS,
            bar_width: BAR_WIDTH,
            total_steps: TOTAL_STEPS,
            step_pause_ms: STEP_PAUSE_MS,
            fill_char: FILL_CHAR,
        }
    }
}

impl RenderPlan {
    /// Pause after each word.
    pub fn word_pause(&self) -> Duration {
        Duration::from_millis(self.word_pause_ms)
    }

    /// Pause after each bar redraw.
    pub fn step_pause(&self) -> Duration {
        Duration::from_millis(self.step_pause_ms)
    }

    /// Total time a run spends paused.
    ///
    /// For the default plan this is 4 x 1.5s + 1000 x 0.05s = 56s. Saturates
    /// at `u64::MAX` milliseconds for absurdly large plans.
    pub fn total_pause(&self) -> Duration {
        let words = self.word_pause_ms.saturating_mul(self.words.len() as u64);
        let steps = self.step_pause_ms.saturating_mul(self.total_steps as u64);
        Duration::from_millis(words.saturating_add(steps))
    }
}
