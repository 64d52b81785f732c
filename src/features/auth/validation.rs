//! Field validators for the login and registration forms. Every check is a pure
//! function of its input; the submission flow and the live field hints share
//! them so both report the same rules.

use regex::Regex;
use std::fmt;

/// Domains accepted for portal accounts.
pub const INSTITUTIONAL_SUFFIXES: [&str; 3] =
    ["@inacap.cl", "@alumnos.inacap.cl", "@profesor.inacap.cl"];
/// Minimum name length after trimming.
pub const MIN_NAME_LENGTH: usize = 3;
/// Minimum password length enforced by the client for early UX feedback.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Normalizes emails before validation and submission.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Basic `local@domain.tld` shape check: a single `@`, no whitespace, and a
/// dot somewhere after the `@`.
pub fn is_valid_email(email: &str) -> bool {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").is_ok_and(|regex| regex.is_match(email))
}

/// Domain allow-list check. Only the suffix comparison ignores case.
pub fn is_institutional_email(email: &str) -> bool {
    let lowered = email.to_lowercase();
    INSTITUTIONAL_SUFFIXES
        .iter()
        .any(|suffix| lowered.ends_with(suffix))
}

pub fn is_valid_name(name: &str) -> bool {
    name.trim().chars().count() >= MIN_NAME_LENGTH
}

pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    password == confirmation
}

/// A single failed field rule, rendered as the message shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    NameTooShort,
    MissingEmail,
    InvalidEmail,
    NonInstitutionalEmail,
    MissingPassword,
    PasswordTooShort,
    PasswordMismatch,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ValidationError::NameTooShort => "El nombre debe tener al menos 3 caracteres",
            ValidationError::MissingEmail => "Ingresa tu correo electrónico",
            ValidationError::InvalidEmail => "Correo electrónico inválido",
            ValidationError::NonInstitutionalEmail => {
                "Debe ser un correo institucional INACAP (@inacap.cl, @alumnos.inacap.cl, @profesor.inacap.cl)"
            }
            ValidationError::MissingPassword => "Ingresa tu contraseña",
            ValidationError::PasswordTooShort => "La contraseña debe tener al menos 6 caracteres",
            ValidationError::PasswordMismatch => "Las contraseñas no coinciden",
        };
        formatter.write_str(message)
    }
}

impl std::error::Error for ValidationError {}

/// Every rule a form failed, in field order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `error` unless `passed` holds.
    pub fn check(&mut self, passed: bool, error: ValidationError) {
        if !passed {
            self.0.push(error);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn first(&self) -> Option<ValidationError> {
        self.0.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Converts into `Ok(())` when nothing failed.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                formatter.write_str(" | ")?;
            }
            write!(formatter, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Live feedback state for a single input, shown as the field's border colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldValidity {
    #[default]
    Untouched,
    Valid,
    Invalid,
}

impl FieldValidity {
    pub fn from_check(passed: bool) -> Self {
        if passed {
            FieldValidity::Valid
        } else {
            FieldValidity::Invalid
        }
    }

    /// Border colour for the input, or `None` to keep the stylesheet default.
    pub fn border_color(self) -> Option<&'static str> {
        match self {
            FieldValidity::Untouched => None,
            FieldValidity::Valid => Some("#28a745"),
            FieldValidity::Invalid => Some("#dc3545"),
        }
    }
}
