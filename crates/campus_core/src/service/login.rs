//! Login form input validation.
//!
//! # Responsibility
//! - Check that the login form carries a student id and a password.
//!
//! # Invariants
//! - Fields are checked in order: student id first, then password.
//! - No authentication happens here.
//! - Credentials never reach the log; only field names and lengths do.

use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Navigation target after a successful login.
pub const HOME_ROUTE: &str = "/(tabs)/(home)/";

/// Validation failure with the user-facing alert text as `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginValidationError {
    MissingStudentId,
    MissingPassword,
}

impl LoginValidationError {
    /// Form field that failed validation.
    pub fn field(self) -> &'static str {
        match self {
            Self::MissingStudentId => "student_id",
            Self::MissingPassword => "password",
        }
    }
}

impl Display for LoginValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingStudentId => f.write_str("학번을 입력해주세요."),
            Self::MissingPassword => f.write_str("비밀번호를 입력해주세요."),
        }
    }
}

impl Error for LoginValidationError {}

/// Raw text-field values of the login screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub student_id: String,
    pub password: String,
}

/// Login input that passed local validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedLogin {
    /// Student id with surrounding whitespace removed.
    pub student_id: String,
}

impl LoginForm {
    pub fn new(student_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            password: password.into(),
        }
    }

    /// Checks both fields are non-blank after trimming.
    pub fn validate(&self) -> Result<ValidatedLogin, LoginValidationError> {
        let student_id = self.student_id.trim();
        let result = if student_id.is_empty() {
            Err(LoginValidationError::MissingStudentId)
        } else if self.password.trim().is_empty() {
            Err(LoginValidationError::MissingPassword)
        } else {
            Ok(ValidatedLogin {
                student_id: student_id.to_string(),
            })
        };

        match &result {
            Ok(_) => info!(
                "event=login_validate module=login status=ok student_id_len={}",
                student_id.chars().count()
            ),
            Err(err) => debug!(
                "event=login_validate module=login status=rejected field={}",
                err.field()
            ),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::{LoginForm, LoginValidationError};

    #[test]
    fn blank_student_id_is_reported_first() {
        let err = LoginForm::new("   ", "").validate().unwrap_err();
        assert_eq!(err, LoginValidationError::MissingStudentId);
        assert_eq!(err.to_string(), "학번을 입력해주세요.");
    }

    #[test]
    fn blank_password_is_rejected() {
        let err = LoginForm::new("20220001", " \t").validate().unwrap_err();
        assert_eq!(err, LoginValidationError::MissingPassword);
        assert_eq!(err.to_string(), "비밀번호를 입력해주세요.");
    }

    #[test]
    fn valid_form_trims_student_id() {
        let login = LoginForm::new(" 20220001 ", "secret").validate().unwrap();
        assert_eq!(login.student_id, "20220001");
    }
}
