//! finwell-flow — form validation and onboarding progression for the
//! personal-finance wellness app.

pub mod config;
pub mod error;
pub mod onboarding;
pub mod routes;
pub mod session;
pub mod validation;
