//! Registration and login forms.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::email::validate_email;
use super::{Field, FieldErrors, FieldIssue, ValidationOutcome};
use crate::config::{DEFAULT_MIN_PASSWORD_LEN, FlowConfig};

/// Fields on the sign-up screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Fields on the login screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Auth form validator. Holds only the password length policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormValidator {
    min_password_len: usize,
}

impl Default for FormValidator {
    fn default() -> Self {
        Self {
            min_password_len: DEFAULT_MIN_PASSWORD_LEN,
        }
    }
}

impl FormValidator {
    pub fn new(min_password_len: usize) -> Self {
        Self { min_password_len }
    }

    pub fn from_config(config: &FlowConfig) -> Self {
        Self::new(config.min_password_len)
    }

    pub fn min_password_len(&self) -> usize {
        self.min_password_len
    }

    /// Name, email and password are all required; every failing field is
    /// reported.
    pub fn validate_registration(&self, form: &RegistrationForm) -> ValidationOutcome {
        let mut errors = FieldErrors::new();
        self.check_credentials(&form.email, &form.password, &mut errors);
        if form.name.is_empty() {
            errors.insert(Field::Name, FieldIssue::missing(Field::Name));
        }
        log_outcome("registration", &errors);
        errors.into()
    }

    /// Same rules as registration, without the name.
    pub fn validate_login(&self, form: &LoginForm) -> ValidationOutcome {
        let mut errors = FieldErrors::new();
        self.check_credentials(&form.email, &form.password, &mut errors);
        log_outcome("login", &errors);
        errors.into()
    }

    fn check_credentials(&self, email: &str, password: &str, errors: &mut FieldErrors) {
        if email.is_empty() {
            errors.insert(Field::Email, FieldIssue::missing(Field::Email));
        } else if !validate_email(email) {
            errors.insert(Field::Email, FieldIssue::invalid("Email inválido"));
        }

        if password.is_empty() {
            errors.insert(Field::Password, FieldIssue::missing(Field::Password));
        } else if password.encode_utf16().count() < self.min_password_len {
            errors.insert(
                Field::Password,
                FieldIssue::invalid(format!(
                    "La contraseña debe tener al menos {} caracteres",
                    self.min_password_len
                )),
            );
        }
    }
}

fn log_outcome(form: &str, errors: &FieldErrors) {
    if !errors.is_empty() {
        let fields: Vec<String> = errors.iter().map(|(f, _)| f.to_string()).collect();
        debug!(form, failing = %fields.join(","), "Form validation failed");
    }
}

/// Validate a registration form with the default password policy.
pub fn validate_registration_form(form: &RegistrationForm) -> ValidationOutcome {
    FormValidator::default().validate_registration(form)
}

/// Validate a login form with the default password policy.
pub fn validate_login_form(form: &LoginForm) -> ValidationOutcome {
    FormValidator::default().validate_login(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::IssueKind;

    fn registration(name: &str, email: &str, password: &str) -> RegistrationForm {
        RegistrationForm {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn registration_reports_every_field() {
        let outcome = validate_registration_form(&registration("", "bad", "123"));
        assert!(!outcome.valid);
        assert_eq!(outcome.errors.len(), 3);
        assert_eq!(
            outcome.errors.get(Field::Name).unwrap().kind,
            IssueKind::MissingField
        );
        assert_eq!(outcome.errors.message(Field::Email), Some("Email inválido"));
        assert_eq!(
            outcome.errors.message(Field::Password),
            Some("La contraseña debe tener al menos 6 caracteres")
        );
        assert_eq!(
            outcome.errors.get(Field::Password).unwrap().kind,
            IssueKind::FormatInvalid
        );
    }

    #[test]
    fn registration_all_empty_is_all_missing() {
        let outcome = validate_registration_form(&RegistrationForm::default());
        assert!(!outcome.valid);
        for (field, issue) in outcome.errors.iter() {
            assert_eq!(issue.kind, IssueKind::MissingField, "{field}");
        }
        assert_eq!(outcome.errors.message(Field::Email), Some("El email es requerido"));
        assert_eq!(
            outcome.errors.message(Field::Password),
            Some("La contraseña es requerida")
        );
    }

    #[test]
    fn registration_valid() {
        let outcome = validate_registration_form(&registration("Ana", "ana@correo.mx", "secreto"));
        assert!(outcome.valid);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn password_boundary() {
        let five = validate_registration_form(&registration("Ana", "ana@correo.mx", "12345"));
        assert!(five.errors.contains(Field::Password));
        let six = validate_registration_form(&registration("Ana", "ana@correo.mx", "123456"));
        assert!(six.valid);
        // Counted in UTF-16 code units, like the screen's text input.
        let emoji = validate_registration_form(&registration("Ana", "ana@correo.mx", "😀😀😀"));
        assert!(emoji.valid);
        let emoji = validate_registration_form(&registration("Ana", "ana@correo.mx", "😀😀"));
        assert!(emoji.errors.contains(Field::Password));
        let accented = validate_registration_form(&registration("Ana", "ana@correo.mx", "ñññññ"));
        assert!(accented.errors.contains(Field::Password));
    }

    #[test]
    fn login_ignores_name() {
        let outcome = validate_login_form(&LoginForm {
            email: "ana@correo.mx".to_string(),
            password: "secreto".to_string(),
        });
        assert!(outcome.valid);

        let outcome = validate_login_form(&LoginForm::default());
        assert!(!outcome.valid);
        assert!(!outcome.errors.contains(Field::Name));
        assert_eq!(outcome.errors.len(), 2);
    }

    #[test]
    fn custom_min_length_changes_message() {
        let validator = FormValidator::new(8);
        let outcome = validator.validate_login(&LoginForm {
            email: "ana@correo.mx".to_string(),
            password: "1234567".to_string(),
        });
        assert_eq!(
            outcome.errors.message(Field::Password),
            Some("La contraseña debe tener al menos 8 caracteres")
        );
    }

    #[test]
    fn validation_is_idempotent() {
        let form = registration("", "ana@", "abc");
        let first = validate_registration_form(&form);
        let second = validate_registration_form(&form);
        assert_eq!(first, second);

        let login = LoginForm {
            email: "ana@correo".to_string(),
            password: "12".to_string(),
        };
        assert_eq!(validate_login_form(&login), validate_login_form(&login));
        for email in ["a@b.c", "bad", ""] {
            assert_eq!(validate_email(email), validate_email(email));
        }
    }
}
