//! OnboardingFlow — holds the answers for each stage and only moves forward
//! when the current stage's answers are valid.

use chrono::Utc;
use tracing::{info, warn};

use crate::config::FlowConfig;
use crate::error::FlowError;
use crate::validation::{FieldErrors, PlanSetupForm, RegistrationForm, plan_setup_issues};

use super::model::{FeelingOption, GoalOption, OnboardingProfile};
use super::state::{OnboardingStage, OnboardingState, Progress};

/// State the onboarding screens share, owned by the caller.
#[derive(Debug, Clone)]
pub struct OnboardingFlow {
    state: OnboardingState,
    user_name: Option<String>,
    default_user_name: String,
    feeling: Option<FeelingOption>,
    goal: Option<GoalOption>,
    plan: PlanSetupForm,
    completed_at: Option<chrono::DateTime<Utc>>,
}

impl OnboardingFlow {
    /// Start a flow at the first stage. `user_name` comes from sign-up; login
    /// and social sign-in leave it unset.
    pub fn new(config: &FlowConfig, user_name: Option<String>) -> Self {
        Self {
            state: OnboardingState::default(),
            user_name: user_name.filter(|n| !n.is_empty()),
            default_user_name: config.default_user_name.clone(),
            feeling: None,
            goal: None,
            plan: PlanSetupForm::default(),
            completed_at: None,
        }
    }

    /// Start a flow for a user who just registered.
    pub fn for_registration(config: &FlowConfig, form: &RegistrationForm) -> Self {
        Self::new(config, Some(form.name.clone()))
    }

    pub fn stage(&self) -> OnboardingStage {
        self.state.stage
    }

    pub fn feeling(&self) -> Option<FeelingOption> {
        self.feeling
    }

    pub fn goal(&self) -> Option<GoalOption> {
        self.goal
    }

    pub fn plan(&self) -> &PlanSetupForm {
        &self.plan
    }

    /// Progress bar position for the current stage.
    pub fn progress(&self) -> Option<Progress> {
        Progress::for_stage(self.state.stage)
    }

    pub fn select_feeling(&mut self, feeling: FeelingOption) -> Result<(), FlowError> {
        self.expect_stage(OnboardingStage::Feeling)?;
        self.feeling = Some(feeling);
        Ok(())
    }

    /// Deselect the current feeling.
    pub fn clear_feeling(&mut self) -> Result<(), FlowError> {
        self.expect_stage(OnboardingStage::Feeling)?;
        self.feeling = None;
        Ok(())
    }

    pub fn select_goal(&mut self, goal: GoalOption) -> Result<(), FlowError> {
        self.expect_stage(OnboardingStage::Goal)?;
        self.goal = Some(goal);
        Ok(())
    }

    /// Edit the plan form in place, e.g.
    /// `flow.update_plan(|p| p.set_income_input("5,000"))`.
    pub fn update_plan<F>(&mut self, edit: F) -> Result<(), FlowError>
    where
        F: FnOnce(&mut PlanSetupForm),
    {
        self.expect_stage(OnboardingStage::PlanSetup)?;
        edit(&mut self.plan);
        Ok(())
    }

    /// Plan screen issues, for explaining a disabled Continue button.
    pub fn plan_issues(&self) -> FieldErrors {
        plan_setup_issues(&self.plan)
    }

    /// Whether the current stage's Continue action is enabled.
    pub fn can_continue(&self) -> bool {
        self.incomplete_reason().is_none()
    }

    /// Move to the next stage if the current one is satisfied.
    pub fn continue_to_next(&mut self) -> Result<OnboardingStage, FlowError> {
        let from = self.state.stage;
        if from.is_terminal() {
            return Err(FlowError::AlreadyFinished);
        }
        if let Some(reason) = self.incomplete_reason() {
            warn!(stage = %from, %reason, "Continue rejected");
            return Err(FlowError::StageIncomplete { stage: from, reason });
        }

        let to = self.state.advance()?;
        match from {
            OnboardingStage::Feeling => {
                info!(stage = %to, feeling = ?self.feeling, "Feeling selected");
            }
            OnboardingStage::Goal => {
                info!(stage = %to, goal = ?self.goal, "Goal selected");
            }
            OnboardingStage::PlanSetup => {
                info!(
                    stage = %to,
                    income = ?self.plan.income,
                    income_frequency = ?self.plan.income_frequency,
                    saving_goal = ?self.plan.saving_goal,
                    saving_frequency = ?self.plan.saving_frequency,
                    "Plan data"
                );
            }
            OnboardingStage::Completion => {
                self.completed_at = Some(Utc::now());
                info!(name = %self.display_name(), "Onboarding complete");
            }
            // Terminal stage returned above.
            OnboardingStage::Finished => {}
        }
        Ok(to)
    }

    /// Go back one stage. Answers are kept and later stages are not
    /// re-checked.
    pub fn back(&mut self) -> Result<OnboardingStage, FlowError> {
        let to = self.state.retreat()?;
        info!(stage = %to, "Went back");
        Ok(to)
    }

    /// Name used in the completion greeting.
    pub fn display_name(&self) -> &str {
        self.user_name.as_deref().unwrap_or(&self.default_user_name)
    }

    /// Headline on the completion screen.
    pub fn completion_greeting(&self) -> String {
        format!("¡Perfecto, {}!", self.display_name())
    }

    /// The collected answers, once the flow has finished.
    pub fn profile(&self) -> Result<OnboardingProfile, FlowError> {
        let not_finished = || FlowError::NotFinished {
            stage: self.state.stage,
        };
        if !self.state.stage.is_terminal() {
            return Err(not_finished());
        }
        Ok(OnboardingProfile {
            name: self.display_name().to_string(),
            feeling: self.feeling.ok_or_else(not_finished)?,
            goal: self.goal.ok_or_else(not_finished)?,
            plan: self.plan.clone(),
            completed_at: self.completed_at.ok_or_else(not_finished)?,
        })
    }

    fn expect_stage(&self, expected: OnboardingStage) -> Result<(), FlowError> {
        if self.state.stage == expected {
            Ok(())
        } else {
            Err(FlowError::WrongStage {
                expected,
                actual: self.state.stage,
            })
        }
    }

    fn incomplete_reason(&self) -> Option<String> {
        match self.state.stage {
            OnboardingStage::Feeling if self.feeling.is_none() => {
                Some("no feeling selected".to_string())
            }
            OnboardingStage::Goal if self.goal.is_none() => Some("no goal selected".to_string()),
            OnboardingStage::PlanSetup => {
                let issues = plan_setup_issues(&self.plan);
                if issues.is_empty() {
                    None
                } else {
                    let fields: Vec<String> = issues.iter().map(|(f, _)| f.to_string()).collect();
                    Some(format!("invalid fields: {}", fields.join(", ")))
                }
            }
            OnboardingStage::Finished => Some("already finished".to_string()),
            _ => None,
        }
    }
}
