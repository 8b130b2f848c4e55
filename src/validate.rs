//! Form validation rules gating the submit buttons.
//!
//! DESIGN
//! ======
//! Every form is a plain struct and `validate()` is a pure function of it, so
//! the view can recompute validity on each keystroke and tests can check the
//! rules without rendering anything.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

pub const LOGIN_PASSWORD_MIN: usize = 3;
pub const REGISTER_PASSWORD_MIN: usize = 3;
pub const DESCRIPTION_MAX: usize = 2000;

const EMAIL_MAX: usize = 254;
const EMAIL_LOCAL_MAX: usize = 64;

// Dot-atom local part, then at least two dot-separated host labels.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email pattern compiles")
});

/// Why a single field is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("required")]
    Required,
    #[error("not a valid email address")]
    InvalidEmail,
    #[error("not a valid date")]
    InvalidDate,
    #[error("must be at least {min} characters")]
    TooShort { min: usize },
    #[error("must be at most {max} characters")]
    TooLong { max: usize },
}

/// Field name to first failing rule. Empty means the form may be submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<&'static str, FieldError>);

impl FormErrors {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<FieldError> {
        self.0.get(field).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, FieldError)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    fn check(&mut self, field: &'static str, result: Result<(), FieldError>) {
        if let Err(e) = result {
            self.0.insert(field, e);
        }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {error}")?;
            first = false;
        }
        Ok(())
    }
}

// =============================================================================
// RULES
// =============================================================================

fn required(value: &str) -> Result<(), FieldError> {
    if value.is_empty() { Err(FieldError::Required) } else { Ok(()) }
}

fn min_len(value: &str, min: usize) -> Result<(), FieldError> {
    if value.chars().count() < min { Err(FieldError::TooShort { min }) } else { Ok(()) }
}

fn max_len(value: &str, max: usize) -> Result<(), FieldError> {
    if value.chars().count() > max { Err(FieldError::TooLong { max }) } else { Ok(()) }
}

/// `local@domain.tld` shape check.
#[must_use]
pub fn is_email(value: &str) -> bool {
    if value.len() > EMAIL_MAX {
        return false;
    }
    let Some((local, _)) = value.split_once('@') else {
        return false;
    };
    local.len() <= EMAIL_LOCAL_MAX && EMAIL_SHAPE.is_match(value)
}

fn email(value: &str) -> Result<(), FieldError> {
    required(value)?;
    if is_email(value) { Ok(()) } else { Err(FieldError::InvalidEmail) }
}

fn calendar_date(value: &str) -> Result<(), FieldError> {
    required(value)?;
    crate::format::parse_date(value)
        .map(|_| ())
        .map_err(|_| FieldError::InvalidDate)
}

// =============================================================================
// FORMS
// =============================================================================

pub mod field {
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const NAME: &str = "name";
    pub const DATE: &str = "date";
    pub const TEACHER: &str = "teacher_id";
    pub const DESCRIPTION: &str = "description";
}

/// Login form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    #[must_use]
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        errors.check(field::EMAIL, email(&self.email));
        errors.check(
            field::PASSWORD,
            required(&self.password).and_then(|()| min_len(&self.password, LOGIN_PASSWORD_MIN)),
        );
        errors
    }
}

/// Registration form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

impl RegisterForm {
    #[must_use]
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        errors.check(field::EMAIL, email(&self.email));
        errors.check(field::FIRST_NAME, required(&self.first_name));
        errors.check(field::LAST_NAME, required(&self.last_name));
        errors.check(
            field::PASSWORD,
            required(&self.password).and_then(|()| min_len(&self.password, REGISTER_PASSWORD_MIN)),
        );
        errors
    }
}

/// Create/update form for a yoga session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionForm {
    pub name: String,
    /// `YYYY-MM-DD`, as produced by a date input.
    pub date: String,
    pub teacher_id: Option<u64>,
    pub description: String,
}

impl SessionForm {
    #[must_use]
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        errors.check(field::NAME, required(&self.name));
        errors.check(field::DATE, calendar_date(&self.date));
        errors.check(field::TEACHER, self.teacher_id.map(|_| ()).ok_or(FieldError::Required));
        errors.check(
            field::DESCRIPTION,
            required(&self.description).and_then(|()| max_len(&self.description, DESCRIPTION_MAX)),
        );
        errors
    }
}
