//! Form validation — the predicates each screen runs before letting the user
//! continue.
//!
//! Validators are pure: they never fail and never keep state. Every failing
//! field is reported at once as a `FieldIssue`, keyed by `Field`, so a screen
//! can render the message next to the matching input.

pub mod currency;
pub mod email;
pub mod forms;
pub mod plan;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use currency::{format_currency, parse_currency_input};
pub use email::validate_email;
pub use forms::{
    FormValidator, LoginForm, RegistrationForm, validate_login_form, validate_registration_form,
};
pub use plan::{Frequency, PlanSetupForm, is_plan_setup_valid, plan_setup_issues};

/// An input field on one of the validated screens.
///
/// Declaration order is the order fields appear on screen, which is also the
/// order errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Password,
    Income,
    IncomeFrequency,
    SavingGoal,
    SavingFrequency,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::Income => "income",
            Self::IncomeFrequency => "income_frequency",
            Self::SavingGoal => "saving_goal",
            Self::SavingFrequency => "saving_frequency",
        };
        write!(f, "{s}")
    }
}

/// Why a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Value absent or empty.
    MissingField,
    /// Value present but fails a format or range check.
    FormatInvalid,
}

/// One failing field: the kind of failure and the user-facing hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub kind: IssueKind,
    pub message: String,
}

impl FieldIssue {
    pub fn missing(field: Field) -> Self {
        Self {
            kind: IssueKind::MissingField,
            message: missing_message(field).to_string(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            kind: IssueKind::FormatInvalid,
            message: message.into(),
        }
    }
}

fn missing_message(field: Field) -> &'static str {
    match field {
        Field::Name => "El nombre es requerido",
        Field::Email => "El email es requerido",
        Field::Password => "La contraseña es requerida",
        Field::Income => "Tus ingresos son requeridos",
        Field::IncomeFrequency => "Selecciona la frecuencia de tus ingresos",
        Field::SavingGoal => "Tu meta de ahorro es requerida",
        Field::SavingFrequency => "Selecciona la frecuencia de tu ahorro",
    }
}

/// Field → issue map for one screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, FieldIssue>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, issue: FieldIssue) {
        self.0.insert(field, issue);
    }

    pub fn get(&self, field: Field) -> Option<&FieldIssue> {
        self.0.get(&field)
    }

    /// Message to render next to `field`, if it failed.
    pub fn message(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(|issue| issue.message.as_str())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Drop the error for one field. Screens call this when the user edits
    /// that input; errors on other fields stay until the next submit.
    pub fn clear(&mut self, field: Field) -> Option<FieldIssue> {
        self.0.remove(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldIssue)> {
        self.0.iter().map(|(field, issue)| (*field, issue))
    }
}

/// Result of validating a whole form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub errors: FieldErrors,
}

impl From<FieldErrors> for ValidationOutcome {
    fn from(errors: FieldErrors) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

impl ValidationOutcome {
    /// Screen-reader text announced after a failed submit, e.g.
    /// `Error de validación: Email inválido. La contraseña es requerida`.
    pub fn accessibility_announcement(&self) -> Option<String> {
        if self.valid {
            return None;
        }
        let joined = self
            .errors
            .iter()
            .map(|(_, issue)| issue.message.as_str())
            .collect::<Vec<_>>()
            .join(". ");
        Some(format!("Error de validación: {joined}"))
    }
}
