use once_cell::sync::Lazy;
use regex::Regex;

use crate::form::RegisterFormData;

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("EMAIL_REGEX: invalid regex pattern")
});

/// First rule a registration form broke. Display gives the message shown to
/// the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Username must be at least 3 characters long.")]
    UsernameTooShort,
    #[error("Password must be at least 6 characters long.")]
    PasswordTooShort,
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

/// Length in UTF-16 code units, the unit browsers report for input values.
fn input_len(value: &str) -> usize {
    value.encode_utf16().count()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Checks email, username, password and confirmation in that order, stopping
/// at the first failure.
pub fn validate(form: &RegisterFormData) -> Result<(), ValidationError> {
    let form = form.normalized();

    if !is_valid_email(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if input_len(&form.username) < MIN_USERNAME_LEN {
        return Err(ValidationError::UsernameTooShort);
    }
    if input_len(&form.password) < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, username: &str, password: &str, confirm: &str) -> RegisterFormData {
        RegisterFormData::new(email, username, password, confirm)
    }

    #[test]
    fn accepts_valid_input() {
        assert_eq!(validate(&form("a@b.com", "abc", "secret", "secret")), Ok(()));
        assert_eq!(
            validate(&form("  first.last+tag@mail.example.org ", " bob ", "hunter22", "hunter22")),
            Ok(())
        );
    }

    #[test]
    fn email_pattern() {
        for ok in ["a@b.co", "A_Z%x@sub-domain.example.io", "x-y@1.2.3.com"] {
            assert!(is_valid_email(ok), "{ok} should be valid");
        }
        for bad in [
            "",
            "plainaddress",
            "@b.com",
            "a@.c",
            "a@b.c",
            "a@b",
            "a b@c.com",
            "a@b.c0m",
            "a@b.com ",
            "ä@b.com",
            "a@b.com\nx",
        ] {
            assert!(!is_valid_email(bad), "{bad:?} should be invalid");
        }
    }

    #[test]
    fn invalid_email_wins_over_every_other_failure() {
        assert_eq!(
            validate(&form("nope", "", "", "x")),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn username_is_trimmed_before_length_check() {
        assert_eq!(
            validate(&form("a@b.com", "  ab  ", "secret", "secret")),
            Err(ValidationError::UsernameTooShort)
        );
        assert_eq!(
            validate(&form("a@b.com", "", "secret", "secret")),
            Err(ValidationError::UsernameTooShort)
        );
        assert_eq!(validate(&form("a@b.com", "éèà", "secret", "secret")), Ok(()));
    }

    #[test]
    fn astral_characters_count_twice() {
        assert_eq!(validate(&form("a@b.com", "abc", "🔑🔑🔑", "🔑🔑🔑")), Ok(()));
        assert_eq!(validate(&form("a@b.com", "😀😀", "secret", "secret")), Ok(()));
        assert_eq!(
            validate(&form("a@b.com", "😀", "secret", "secret")),
            Err(ValidationError::UsernameTooShort)
        );
        assert_eq!(
            validate(&form("a@b.com", "abc", "🔑🔑x", "🔑🔑x")),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn short_username_wins_over_password_failures() {
        assert_eq!(
            validate(&form("a@b.com", "ab", "123", "456")),
            Err(ValidationError::UsernameTooShort)
        );
        assert_eq!(
            validate(&form("a@b.com", " a ", "secret", "terces")),
            Err(ValidationError::UsernameTooShort)
        );
    }

    #[test]
    fn short_password_is_rejected_before_mismatch() {
        assert_eq!(
            validate(&form("a@b.com", "abc", "12345", "54321")),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn passwords_must_match_exactly() {
        assert_eq!(
            validate(&form("a@b.com", "abc", "secret", "secret ")),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(
            validate(&form("a@b.com", "abc", "Secret", "secret")),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn passwords_are_not_trimmed() {
        assert_eq!(
            validate(&form("a@b.com", "abc", "  abc ", "  abc ")),
            Ok(())
        );
    }

    #[test]
    fn messages() {
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address."
        );
        assert_eq!(
            ValidationError::UsernameTooShort.to_string(),
            "Username must be at least 3 characters long."
        );
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters long."
        );
        assert_eq!(ValidationError::PasswordMismatch.to_string(), "Passwords do not match.");
    }
}
