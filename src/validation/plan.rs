//! Plan setup form: income and saving goal, each with a frequency.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currency::parse_currency_input;
use super::{Field, FieldErrors, FieldIssue};

/// How often an amount recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Weekly,
    Biweekly,
    Monthly,
}

impl Frequency {
    /// All options, in picker order.
    pub const ALL: [Frequency; 3] = [Self::Weekly, Self::Biweekly, Self::Monthly];

    /// Picker label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Weekly => "Semanal",
            Self::Biweekly => "Quincenal",
            Self::Monthly => "Mensual",
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl std::str::FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|freq| freq.id() == s)
            .ok_or_else(|| format!("Unknown frequency: {s}"))
    }
}

/// Plan setup answers. Every field starts empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSetupForm {
    #[serde(default)]
    pub income: Option<Decimal>,
    #[serde(default)]
    pub income_frequency: Option<Frequency>,
    #[serde(default)]
    pub saving_goal: Option<Decimal>,
    #[serde(default)]
    pub saving_frequency: Option<Frequency>,
}

impl PlanSetupForm {
    /// Apply raw text typed into the income input.
    pub fn set_income_input(&mut self, raw: &str) {
        self.income = parse_currency_input(raw);
    }

    /// Apply raw text typed into the saving goal input.
    pub fn set_saving_goal_input(&mut self, raw: &str) {
        self.saving_goal = parse_currency_input(raw);
    }
}

/// Per-field report for the plan screen.
pub fn plan_setup_issues(form: &PlanSetupForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    check_amount(
        form.income,
        Field::Income,
        "Tus ingresos deben ser mayores a 0",
        &mut errors,
    );
    if form.income_frequency.is_none() {
        errors.insert(
            Field::IncomeFrequency,
            FieldIssue::missing(Field::IncomeFrequency),
        );
    }

    check_amount(
        form.saving_goal,
        Field::SavingGoal,
        "Tu meta de ahorro debe ser mayor a 0",
        &mut errors,
    );
    if form.saving_frequency.is_none() {
        errors.insert(
            Field::SavingFrequency,
            FieldIssue::missing(Field::SavingFrequency),
        );
    }

    errors
}

fn check_amount(amount: Option<Decimal>, field: Field, message: &str, errors: &mut FieldErrors) {
    match amount {
        None => errors.insert(field, FieldIssue::missing(field)),
        Some(value) if value <= Decimal::ZERO => errors.insert(field, FieldIssue::invalid(message)),
        Some(_) => {}
    }
}

/// Whether the plan screen's Continue button is enabled.
pub fn is_plan_setup_valid(form: &PlanSetupForm) -> bool {
    plan_setup_issues(form).is_empty()
}
