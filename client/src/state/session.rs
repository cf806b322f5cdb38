//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root switches between the login/signup view and the dashboard
//! shell on `SessionState::is_logged_in`. There is no credential check: any
//! non-empty email/password pair opens a demo session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::state::signup::{FieldErrors, SignupField, SignupForm};

/// Display name given to every demo session.
pub const DEMO_DISPLAY_NAME: &str = "John Doe";

/// Role given to every demo session.
pub const DEMO_ROLE: &str = "Admin";

/// Display identity of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Reasons the login form refuses to submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginError {
    MissingEmail,
    MissingPassword,
}

impl LoginError {
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingEmail => "Enter your email.",
            Self::MissingPassword => "Enter your password.",
        }
    }
}

/// Whether a user is signed in, and who.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<User>,
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Open a demo session for `email`.
    ///
    /// # Errors
    ///
    /// Returns a [`LoginError`] when either field is empty. Whitespace counts
    /// as input; the password is otherwise ignored.
    pub fn login(&mut self, email: &str, password: &str) -> Result<&User, LoginError> {
        if email.is_empty() {
            return Err(LoginError::MissingEmail);
        }
        if password.is_empty() {
            return Err(LoginError::MissingPassword);
        }

        let user = User {
            name: DEMO_DISPLAY_NAME.to_owned(),
            email: email.trim().to_owned(),
            role: DEMO_ROLE.to_owned(),
        };
        log::info!("session opened for {}", user.email);
        Ok(&*self.user.insert(user))
    }

    /// Validate the signup form and, if clean, log in with its credentials.
    ///
    /// # Errors
    ///
    /// Returns every field error found; the session is left untouched.
    pub fn signup(&mut self, form: &SignupForm) -> Result<&User, FieldErrors> {
        form.validate()?;
        log::info!("signup accepted for {}", form.email.trim());
        self.login(&form.email, &form.password).map_err(|err| {
            let field = match err {
                LoginError::MissingEmail => SignupField::Email,
                LoginError::MissingPassword => SignupField::Password,
            };
            FieldErrors::from([(field, err.message())])
        })
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            log::info!("session closed for {}", user.email);
        }
    }
}
