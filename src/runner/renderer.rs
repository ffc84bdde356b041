//! The two-phase renderer.

use std::io::Write;

use super::bar::{bar_line, fill_length};
use super::{Pause, Phase, RenderError};
use crate::config::RenderPlan;

/// Writes words, then an in-place progress bar, pausing between each write.
///
/// # Example
///
/// ```
/// use slowprint::config::RenderPlan;
/// use slowprint::runner::{RecordingPause, Renderer};
///
/// let mut renderer = Renderer::new(Vec::<u8>::new(), RecordingPause::new(), RenderPlan::default())?;
/// renderer.run()?;
/// let (out, pause) = renderer.into_parts();
/// assert!(out.starts_with(b"this is one string \n"));
/// assert_eq!(pause.total().as_secs(), 56);
/// # Ok::<(), slowprint::runner::RenderError>(())
/// ```
pub struct Renderer<W: Write, P: Pause> {
    out: W,
    pause: P,
    plan: RenderPlan,
    phase: Phase,
}

impl<W: Write, P: Pause> Renderer<W, P> {
    /// Create a renderer, rejecting plans that cannot be rendered.
    pub fn new(out: W, pause: P, plan: RenderPlan) -> Result<Self, RenderError> {
        plan.validate()?;
        Ok(Self {
            out,
            pause,
            plan,
            phase: Phase::EmittingWords,
        })
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The plan being rendered.
    pub fn plan(&self) -> &RenderPlan {
        &self.plan
    }

    /// Run both phases in order.
    ///
    /// Fails with `RenderError::OutOfOrder` unless the renderer is fresh.
    pub fn run(&mut self) -> Result<(), RenderError> {
        self.emit_words()?;
        self.render_bar()
    }

    /// Print each word followed by a space, pausing after each, then a newline.
    ///
    /// Only valid in `Phase::EmittingWords`.
    pub fn emit_words(&mut self) -> Result<(), RenderError> {
        self.expect_phase(Phase::EmittingWords)?;
        let pause = self.plan.word_pause();

        for word in &self.plan.words {
            write!(self.out, "{word} ")?;
            self.out.flush()?;
            self.pause.pause(pause);
        }
        writeln!(self.out)?;
        self.out.flush()?;

        self.phase = Phase::RenderingBar;
        Ok(())
    }

    /// Redraw the bar in place once per step, pausing after each, then a newline.
    ///
    /// Only valid in `Phase::RenderingBar`, i.e. after `emit_words`.
    pub fn render_bar(&mut self) -> Result<(), RenderError> {
        self.expect_phase(Phase::RenderingBar)?;
        let pause = self.plan.step_pause();

        for step in 0..self.plan.total_steps {
            let fill = fill_length(self.plan.bar_width, step, self.plan.total_steps);
            write!(self.out, "\r{}", bar_line(self.plan.fill_char, fill))?;
            self.out.flush()?;
            self.pause.pause(pause);
        }
        writeln!(self.out)?;
        self.out.flush()?;

        self.phase = Phase::Done;
        Ok(())
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), RenderError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(RenderError::OutOfOrder {
                expected,
                actual: self.phase,
            })
        }
    }

    /// Give back the output sink and pause source.
    pub fn into_parts(self) -> (W, P) {
        (self.out, self.pause)
    }
}
