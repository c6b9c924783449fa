//! Scripted walk through auth and onboarding, used by the demo binary.
//!
//! A session is a JSON document holding what a user would type on each
//! screen. Running it validates the auth form, then drives an
//! `OnboardingFlow` as far as the answers allow.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::FlowConfig;
use crate::error::{self, SessionError};
use crate::onboarding::{
    FeelingOption, GoalOption, OnboardingFlow, OnboardingProfile, OnboardingStage,
};
use crate::routes::Screen;
use crate::validation::{
    FieldErrors, FormValidator, Frequency, LoginForm, RegistrationForm, ValidationOutcome,
};

/// Raw plan screen inputs, as typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanInput {
    #[serde(default)]
    pub income: String,
    #[serde(default)]
    pub income_frequency: Option<String>,
    #[serde(default)]
    pub saving_goal: String,
    #[serde(default)]
    pub saving_frequency: Option<String>,
}

/// A scripted session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub register: Option<RegistrationForm>,
    #[serde(default)]
    pub login: Option<LoginForm>,
    #[serde(default)]
    pub feeling: Option<FeelingOption>,
    #[serde(default)]
    pub goal: Option<GoalOption>,
    #[serde(default)]
    pub plan: Option<PlanInput>,
}

impl Session {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SessionError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, SessionError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }
}

/// Where a session ended up.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub auth: ValidationOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub announcement: Option<String>,
    pub screen: Screen,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<OnboardingStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked: Option<String>,
    #[serde(skip_serializing_if = "FieldErrors::is_empty")]
    pub plan_errors: FieldErrors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greeting: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<OnboardingProfile>,
}

/// Run a session to completion or to the first screen it cannot pass.
pub fn run(config: &FlowConfig, session: &Session) -> Result<SessionReport, SessionError> {
    let validator = FormValidator::from_config(config);

    let (auth, auth_screen, user_name) = match (&session.register, &session.login) {
        (Some(form), _) => (
            validator.validate_registration(form),
            Screen::Auth,
            Some(form.name.clone()),
        ),
        (None, Some(form)) => (validator.validate_login(form), Screen::Login, None),
        (None, None) => return Err(SessionError::MissingAuth),
    };

    if !auth.valid {
        warn!(screen = auth_screen.path(), errors = auth.errors.len(), "Auth form rejected");
        return Ok(SessionReport {
            announcement: auth.accessibility_announcement(),
            auth,
            screen: auth_screen,
            stage: None,
            blocked: None,
            plan_errors: FieldErrors::new(),
            greeting: None,
            profile: None,
        });
    }
    info!(screen = auth_screen.path(), "Auth form accepted");

    let mut flow = OnboardingFlow::new(config, user_name);
    let blocked = drive(&mut flow, session).err();

    let stage = flow.stage();
    let greeting = matches!(stage, OnboardingStage::Completion | OnboardingStage::Finished)
        .then(|| flow.completion_greeting());
    let plan_errors = if stage == OnboardingStage::PlanSetup {
        flow.plan_issues()
    } else {
        FieldErrors::new()
    };

    Ok(SessionReport {
        auth,
        announcement: None,
        screen: stage.screen(),
        stage: Some(stage),
        blocked: blocked.map(|e| e.to_string()),
        plan_errors,
        greeting,
        profile: flow.profile().ok(),
    })
}

/// Load configuration from the environment, read the session script from
/// `path` (stdin when `None`) and run it.
pub fn run_from_env(path: Option<&Path>) -> error::Result<SessionReport> {
    let config = FlowConfig::from_env()?;
    debug!(
        min_password_len = config.min_password_len,
        splash_delay_ms = u64::try_from(config.splash_delay.as_millis()).unwrap_or(u64::MAX),
        "Flow config"
    );

    let session = match path {
        Some(path) => Session::from_path(path)?,
        None => Session::from_reader(std::io::stdin().lock())?,
    };
    Ok(run(&config, &session)?)
}

fn drive(flow: &mut OnboardingFlow, session: &Session) -> Result<(), crate::error::FlowError> {
    if let Some(feeling) = session.feeling {
        flow.select_feeling(feeling)?;
    }
    flow.continue_to_next()?;

    if let Some(goal) = session.goal {
        flow.select_goal(goal)?;
    }
    flow.continue_to_next()?;

    let plan = session.plan.clone().unwrap_or_default();
    flow.update_plan(|form| {
        form.set_income_input(&plan.income);
        form.income_frequency = parse_frequency(plan.income_frequency.as_deref());
        form.set_saving_goal_input(&plan.saving_goal);
        form.saving_frequency = parse_frequency(plan.saving_frequency.as_deref());
    })?;
    flow.continue_to_next()?;

    // Completion screen: "go to dashboard".
    flow.continue_to_next()?;
    Ok(())
}

fn parse_frequency(raw: Option<&str>) -> Option<Frequency> {
    let raw = raw?;
    match raw.parse() {
        Ok(freq) => Some(freq),
        Err(e) => {
            warn!("Ignoring frequency: {}", e);
            None
        }
    }
}
