//! Screens of the app and their route paths.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::FlowConfig;

/// One full-page view in the navigation flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Splash,
    Welcome,
    Auth,
    Login,
    Onboarding,
    OnboardingStep2,
    PlanSetup,
    Completion,
    Dashboard,
}

impl Screen {
    /// Route path the navigator uses for this screen.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Splash => "/",
            Self::Welcome => "/welcome",
            Self::Auth => "/auth",
            Self::Login => "/login",
            Self::Onboarding => "/onboarding",
            Self::OnboardingStep2 => "/onboarding-step2",
            Self::PlanSetup => "/plan-setup",
            Self::Completion => "/completion",
            Self::Dashboard => "/(tabs)",
        }
    }

    /// Look up a screen by route path.
    pub fn from_path(path: &str) -> Option<Self> {
        use Screen::*;
        [
            Splash,
            Welcome,
            Auth,
            Login,
            Onboarding,
            OnboardingStep2,
            PlanSetup,
            Completion,
            Dashboard,
        ]
        .into_iter()
        .find(|screen| screen.path() == path)
    }
}

/// The splash screen replaces itself with the welcome screen after the
/// configured delay.
pub fn splash_handoff(config: &FlowConfig) -> (Duration, Screen) {
    (config.splash_delay, Screen::Welcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::OnboardingStage;

    #[test]
    fn paths_roundtrip() {
        for path in ["/", "/welcome", "/auth", "/login", "/onboarding-step2", "/(tabs)"] {
            assert_eq!(Screen::from_path(path).unwrap().path(), path);
        }
        assert!(Screen::from_path("/modal").is_none());
    }

    #[test]
    fn splash_hands_off_to_welcome() {
        let (delay, next) = splash_handoff(&FlowConfig::default());
        assert_eq!(delay, Duration::from_millis(4000));
        assert_eq!(next, Screen::Welcome);
    }

    #[test]
    fn stages_map_to_screens() {
        assert_eq!(OnboardingStage::Feeling.screen(), Screen::Onboarding);
        assert_eq!(OnboardingStage::Goal.screen().path(), "/onboarding-step2");
        assert_eq!(OnboardingStage::PlanSetup.screen(), Screen::PlanSetup);
        assert_eq!(OnboardingStage::Finished.screen(), Screen::Dashboard);
    }
}
