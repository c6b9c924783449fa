//! Onboarding state machine — tracks which stage the user is on.

use serde::{Deserialize, Serialize};

use crate::error::FlowError;
use crate::routes::Screen;

/// Number of numbered stages shown in the progress bar.
pub const TOTAL_STEPS: u8 = 4;

/// The stages of the onboarding flow.
///
/// Progresses linearly: Feeling → Goal → PlanSetup → Completion → Finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStage {
    Feeling,
    Goal,
    PlanSetup,
    Completion,
    Finished,
}

impl OnboardingStage {
    /// Check if a forward transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: OnboardingStage) -> bool {
        use OnboardingStage::*;
        matches!(
            (self, target),
            (Feeling, Goal) | (Goal, PlanSetup) | (PlanSetup, Completion) | (Completion, Finished)
        )
    }

    /// Whether this stage is terminal (user is on the dashboard).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished)
    }

    /// Get the next stage in the linear progression, if any.
    pub fn next(&self) -> Option<OnboardingStage> {
        use OnboardingStage::*;
        match self {
            Feeling => Some(Goal),
            Goal => Some(PlanSetup),
            PlanSetup => Some(Completion),
            Completion => Some(Finished),
            Finished => None,
        }
    }

    /// The stage a back press returns to. The first stage and the terminal
    /// stage have none.
    pub fn previous(&self) -> Option<OnboardingStage> {
        use OnboardingStage::*;
        match self {
            Feeling | Finished => None,
            Goal => Some(Feeling),
            PlanSetup => Some(Goal),
            Completion => Some(PlanSetup),
        }
    }

    /// 1-based position in the progress bar; `None` once finished.
    pub fn step_number(&self) -> Option<u8> {
        use OnboardingStage::*;
        match self {
            Feeling => Some(1),
            Goal => Some(2),
            PlanSetup => Some(3),
            Completion => Some(4),
            Finished => None,
        }
    }

    /// Screen that renders this stage.
    pub fn screen(&self) -> Screen {
        use OnboardingStage::*;
        match self {
            Feeling => Screen::Onboarding,
            Goal => Screen::OnboardingStep2,
            PlanSetup => Screen::PlanSetup,
            Completion => Screen::Completion,
            Finished => Screen::Dashboard,
        }
    }
}

impl Default for OnboardingStage {
    fn default() -> Self {
        Self::Feeling
    }
}

impl std::fmt::Display for OnboardingStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Feeling => "feeling",
            Self::Goal => "goal",
            Self::PlanSetup => "plan_setup",
            Self::Completion => "completion",
            Self::Finished => "finished",
        };
        write!(f, "{s}")
    }
}

/// Progress bar position for a numbered stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub step: u8,
    pub total: u8,
}

impl Progress {
    /// Progress for `stage`, or `None` for the terminal stage.
    pub fn for_stage(stage: OnboardingStage) -> Option<Self> {
        stage.step_number().map(|step| Self {
            step,
            total: TOTAL_STEPS,
        })
    }

    /// Label shown above the bar, e.g. "Paso 2 de 4".
    pub fn label(&self) -> String {
        format!("Paso {} de {}", self.step, self.total)
    }

    /// Bar fill, 0–100.
    pub fn percent(&self) -> f64 {
        f64::from(self.step) / f64::from(self.total) * 100.0
    }
}

/// Current position in the flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingState {
    pub stage: OnboardingStage,
}

impl OnboardingState {
    /// Advance to the next stage. Fails at the terminal stage.
    pub fn advance(&mut self) -> Result<OnboardingStage, FlowError> {
        let next = self.stage.next().ok_or(FlowError::AlreadyFinished)?;
        if !self.stage.can_transition_to(next) {
            return Err(FlowError::InvalidTransition {
                from: self.stage,
                to: next,
            });
        }
        self.stage = next;
        Ok(next)
    }

    /// Step back one stage.
    pub fn retreat(&mut self) -> Result<OnboardingStage, FlowError> {
        if self.stage.is_terminal() {
            return Err(FlowError::AlreadyFinished);
        }
        let previous = self
            .stage
            .previous()
            .ok_or(FlowError::NoPreviousStage { stage: self.stage })?;
        self.stage = previous;
        Ok(previous)
    }
}
