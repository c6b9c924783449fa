//! Onboarding answer options and the completed profile.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::PlanSetupForm;

/// How the user feels about their money (stage 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeelingOption {
    Overwhelmed,
    Curious,
    Optimistic,
    Insecure,
}

impl FeelingOption {
    /// All options, in display order.
    pub const ALL: [FeelingOption; 4] = [
        Self::Overwhelmed,
        Self::Curious,
        Self::Optimistic,
        Self::Insecure,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Overwhelmed => "Abrumado/a",
            Self::Curious => "Curioso/a",
            Self::Optimistic => "Optimista",
            Self::Insecure => "Inseguro/a",
        }
    }
}

impl std::fmt::Display for FeelingOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overwhelmed => write!(f, "overwhelmed"),
            Self::Curious => write!(f, "curious"),
            Self::Optimistic => write!(f, "optimistic"),
            Self::Insecure => write!(f, "insecure"),
        }
    }
}

/// What the user wants from the app (stage 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalOption {
    Understand,
    Emergency,
    Save,
    Organize,
}

impl GoalOption {
    /// All options, in display order.
    pub const ALL: [GoalOption; 4] = [
        Self::Understand,
        Self::Emergency,
        Self::Save,
        Self::Organize,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Understand => "Entender a dónde va mi dinero",
            Self::Emergency => "Crear un fondo de tranquilidad",
            Self::Save => "Ahorrar para algo especial",
            Self::Organize => "Simplemente organizarme",
        }
    }
}

impl std::fmt::Display for GoalOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Understand => write!(f, "understand"),
            Self::Emergency => write!(f, "emergency"),
            Self::Save => write!(f, "save"),
            Self::Organize => write!(f, "organize"),
        }
    }
}

/// Answers collected by a finished onboarding flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingProfile {
    pub name: String,
    pub feeling: FeelingOption,
    pub goal: GoalOption,
    pub plan: PlanSetupForm,
    pub completed_at: DateTime<Utc>,
}
