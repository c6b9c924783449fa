//! Onboarding flow — the four stages a new user walks through after signing
//! in: how they feel about money, what they want from the app, their plan
//! (income and saving goal), and the completion screen.
//!
//! Stages only move forward when the current stage's answers are valid.

pub mod flow;
pub mod model;
pub mod state;

pub use flow::OnboardingFlow;
pub use model::{FeelingOption, GoalOption, OnboardingProfile};
pub use state::{OnboardingStage, OnboardingState, Progress, TOTAL_STEPS};
