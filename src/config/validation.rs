//! Plan validation.

use super::RenderPlan;

/// Error type for plans the renderer cannot run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// The bar phase needs at least one step to compute a fill length.
    #[error("Render plan has zero bar steps")]
    ZeroSteps,
}

impl RenderPlan {
    /// Check the plan can be rendered.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.total_steps == 0 {
            return Err(PlanError::ZeroSteps);
        }
        Ok(())
    }
}
