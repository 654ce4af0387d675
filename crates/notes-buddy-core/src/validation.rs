//! Login and registration form validation.
//!
//! Each field reports at most one message, the first rule it fails.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::MIN_PASSWORD_LEN;

/// `local@domain.tld` with no whitespace. ASCII whitespace is spelled out
/// because `\s` needs the `unicode-perl` regex feature.
const EMAIL_PATTERN: &str = r"^[^ \t\r\n\x0B\x0C@]+@[^ \t\r\n\x0B\x0C@]+\.[^ \t\r\n\x0B\x0C@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// Form field an error is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

/// Per-field error messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn check(&mut self, field: Field, result: Result<(), &'static str>) {
        if let Err(message) = result {
            self.0.insert(field, message);
        }
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.check(Field::Email, check_email(&self.email));
        errors.check(
            Field::Password,
            required(&self.password, "Password is required"),
        );
        errors.into_result()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.check(Field::Name, required(&self.name, "Name is required"));
        errors.check(Field::Email, check_email(&self.email));
        errors.check(Field::Password, check_new_password(&self.password));
        errors.check(
            Field::ConfirmPassword,
            required(&self.confirm_password, "Please confirm your password").and_then(|_| {
                if self.confirm_password == self.password {
                    Ok(())
                } else {
                    Err("Passwords do not match")
                }
            }),
        );
        errors.into_result()
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

fn required(value: &str, message: &'static str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        Err(message)
    } else {
        Ok(())
    }
}

fn check_email(email: &str) -> Result<(), &'static str> {
    required(email, "Email is required")?;
    if is_valid_email(email) {
        Ok(())
    } else {
        Err("Enter a valid email address")
    }
}

fn check_new_password(password: &str) -> Result<(), &'static str> {
    required(password, "Password is required")?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        Err("Password must be at least 6 characters")
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register() -> RegisterForm {
        RegisterForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
        }
    }

    #[test]
    fn test_empty_login_reports_both_fields() {
        let errors = LoginForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Password), Some("Password is required"));
    }

    #[test]
    fn test_login_rejects_malformed_email() {
        let form = LoginForm {
            email: "not-an-email".into(),
            password: "x".into(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(Field::Email), Some("Enter a valid email address"));
        assert_eq!(errors.get(Field::Password), None);
    }

    #[test]
    fn test_valid_register() {
        assert_eq!(register().validate(), Ok(()));
    }

    #[test]
    fn test_register_short_password() {
        let form = RegisterForm {
            password: "abc".into(),
            confirm_password: "abc".into(),
            ..register()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get(Field::Password),
            Some("Password must be at least 6 characters")
        );
        assert_eq!(errors.get(Field::ConfirmPassword), None);
    }

    #[test]
    fn test_register_mismatch_and_missing_confirm() {
        let mismatch = RegisterForm {
            confirm_password: "secret2".into(),
            ..register()
        };
        assert_eq!(
            mismatch.validate().unwrap_err().get(Field::ConfirmPassword),
            Some("Passwords do not match")
        );

        let missing = RegisterForm {
            name: " ".into(),
            confirm_password: String::new(),
            ..register()
        };
        let errors = missing.validate().unwrap_err();
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(
            errors.get(Field::ConfirmPassword),
            Some("Please confirm your password")
        );
    }

    #[test]
    fn test_email_pattern_compiles() {
        assert!(Regex::new(EMAIL_PATTERN).is_ok());
    }

    #[test]
    fn test_valid_login_passes() {
        let form = LoginForm {
            email: "ada@example.com".into(),
            password: "x".into(),
        };
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a\tb@c.de"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(is_valid_email("  first.last@uni.example.edu "));
    }
}
