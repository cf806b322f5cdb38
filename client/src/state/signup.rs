//! Signup form model and its wholesale validation.
//!
//! Validation is synchronous and re-run from scratch on every submit; errors
//! are keyed by field so the form can render them inline.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use std::collections::BTreeMap;

use crate::util::validate::{is_blank, is_valid_email};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Role choices offered by the signup form as `(value, label)`.
pub const ROLE_OPTIONS: &[(&str, &str)] = &[
    ("admin", "Administrator"),
    ("manager", "Sales Manager"),
    ("sales", "Sales Representative"),
    ("marketing", "Marketing"),
    ("support", "Customer Support"),
];

/// Signup fields that can carry a validation error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SignupField {
    Name,
    Email,
    Role,
    Password,
    ConfirmPassword,
    Terms,
}

impl SignupField {
    /// Stable key used for form element ids.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Role => "role",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Terms => "terms",
        }
    }
}

/// Field-keyed validation messages.
pub type FieldErrors = BTreeMap<SignupField, &'static str>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub company: String,
    /// One of the `ROLE_OPTIONS` values; empty until chosen.
    pub role: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

impl SignupForm {
    /// Check every field and collect all failures.
    ///
    /// # Errors
    ///
    /// Returns the non-empty error map when any field is invalid.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if is_blank(&self.name) {
            errors.insert(SignupField::Name, "Name is required");
        }

        if is_blank(&self.email) {
            errors.insert(SignupField::Email, "Email is required");
        } else if !is_valid_email(&self.email) {
            errors.insert(SignupField::Email, "Enter a valid email address");
        }

        if !ROLE_OPTIONS.iter().any(|(value, _)| *value == self.role) {
            errors.insert(SignupField::Role, "Select a role");
        }

        if self.password.is_empty() {
            errors.insert(SignupField::Password, "Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.insert(SignupField::Password, "Password must be at least 8 characters");
        }

        if self.confirm_password != self.password {
            errors.insert(SignupField::ConfirmPassword, "Passwords do not match");
        }

        if !self.accept_terms {
            errors.insert(SignupField::Terms, "You must accept the terms and conditions");
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
