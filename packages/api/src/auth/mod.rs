//! Authentication module: session key, credential validation, password hashing.

#[cfg(feature = "server")]
mod password;

#[cfg(feature = "server")]
pub use password::{hash_password, verify_password};

/// Key for storing the user ID in the cookie session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Credential validation failures. These are the user-facing, retryable errors
/// of the sign-up/sign-in forms; the same checks run client-side before the
/// request and server-side before touching the database.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort,
    #[error("Full name is required")]
    NameRequired,
}

/// Normalize an email for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validate sign-in credentials. Only shape checks; whether the credentials
/// match an account is the server's call.
pub fn validate_sign_in(email: &str, password: &str) -> Result<(), ValidationError> {
    let email = normalize_email(email);
    if email.is_empty() || !email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    if password.is_empty() {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Validate sign-up input.
pub fn validate_sign_up(
    email: &str,
    password: &str,
    full_name: &str,
) -> Result<(), ValidationError> {
    let email = normalize_email(email);
    if email.is_empty() || !email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    if full_name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize_email("  Jane@Example.COM "), "jane@example.com");
    }

    #[test]
    fn sign_up_rejects_bad_input() {
        assert_eq!(
            validate_sign_up("not-an-email", "longenough", "Jane"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_sign_up("jane@example.com", "short", "Jane"),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(
            validate_sign_up("jane@example.com", "longenough", "   "),
            Err(ValidationError::NameRequired)
        );
        assert!(validate_sign_up("jane@example.com", "longenough", "Jane").is_ok());
    }

    #[test]
    fn sign_in_only_checks_shape() {
        assert!(validate_sign_in("jane@example.com", "x").is_ok());
        assert_eq!(
            validate_sign_in("", "password"),
            Err(ValidationError::InvalidEmail)
        );
    }
}
