//! Local form validation applied before a request is built.
//!
//! These checks mirror what the backend enforces for sign-up and account
//! management; they exist to reject obviously invalid input without a
//! round trip, not to replace server-side validation.

use wayfarer_core::{ClientError, ClientResult};

/// Minimum account identifier length.
pub const ACCOUNT_MIN_LENGTH: usize = 4;

/// Maximum account identifier length.
pub const ACCOUNT_MAX_LENGTH: usize = 20;

/// Minimum password length.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Maximum password length.
pub const PASSWORD_MAX_LENGTH: usize = 20;

/// Minimum nickname length.
pub const NICKNAME_MIN_LENGTH: usize = 4;

/// Maximum nickname length.
pub const NICKNAME_MAX_LENGTH: usize = 20;

/// Specials a password may contain.
const PASSWORD_ALLOWED_SPECIALS: &[char] = &['@', '!', '%', '*', '#', '?', '&'];

/// Specials of which a password must contain at least one.
const PASSWORD_REQUIRED_SPECIALS: &[char] = &['!', '@', '#', '$', '%'];

/// Specials a nickname must not contain; everything except `_`.
const NICKNAME_FORBIDDEN_SPECIALS: &[char] = &[
    '{', '}', '[', ']', '/', '?', '.', ',', ';', ':', '|', ')', '*', '~', '`', '!', '^', '-', '+',
    '<', '>', '@', '#', '$', '%', '&', '\\', '=', '(', '\'', '"',
];

/// Validates an account identifier.
///
/// Between 4 and 20 characters, ASCII letters and digits plus `-` and
/// `_`. Whitespace is rejected by the character rule.
pub fn validate_account(account: &str) -> ClientResult<()> {
    let char_count = account.chars().count();
    if char_count < ACCOUNT_MIN_LENGTH || char_count > ACCOUNT_MAX_LENGTH {
        return Err(ClientError::Validation(format!(
            "account must be between {ACCOUNT_MIN_LENGTH} and {ACCOUNT_MAX_LENGTH} characters"
        )));
    }

    if !account
        .chars()
        .all(|character| character.is_ascii_alphanumeric() || character == '-' || character == '_')
    {
        return Err(ClientError::Validation(
            "account may only contain digits, letters, '-' and '_'".to_owned(),
        ));
    }

    Ok(())
}

/// Validates a plaintext password.
///
/// Between 8 and 20 characters drawn from ASCII letters, digits and
/// `@ ! % * # ? &`, with at least one letter, one digit and one special
/// from `! @ # $ %`. The `$` requirement can never be met because `$` is
/// not in the allowed set; the rule is kept as the backend enforces it.
pub fn validate_password(password: &str) -> ClientResult<()> {
    let char_count = password.chars().count();
    if char_count < PASSWORD_MIN_LENGTH || char_count > PASSWORD_MAX_LENGTH {
        return Err(ClientError::Validation(format!(
            "password must be between {PASSWORD_MIN_LENGTH} and {PASSWORD_MAX_LENGTH} characters"
        )));
    }

    if !password.chars().all(|character| {
        character.is_ascii_alphanumeric() || PASSWORD_ALLOWED_SPECIALS.contains(&character)
    }) {
        return Err(ClientError::Validation(
            "password contains a character that is not allowed".to_owned(),
        ));
    }

    let has_letter = password.chars().any(|character| character.is_ascii_alphabetic());
    let has_digit = password.chars().any(|character| character.is_ascii_digit());
    let has_special = password
        .chars()
        .any(|character| PASSWORD_REQUIRED_SPECIALS.contains(&character));

    if !(has_letter && has_digit && has_special) {
        return Err(ClientError::Validation(
            "password must include at least one letter, one digit, and one of '!', '@', '#', '$', '%'"
                .to_owned(),
        ));
    }

    Ok(())
}

/// Validates a display nickname.
///
/// Between 4 and 20 characters, no whitespace, and no specials other than
/// `_`. Non-ASCII letters are allowed.
pub fn validate_nickname(nickname: &str) -> ClientResult<()> {
    let char_count = nickname.chars().count();
    if char_count < NICKNAME_MIN_LENGTH || char_count > NICKNAME_MAX_LENGTH {
        return Err(ClientError::Validation(format!(
            "nickname must be between {NICKNAME_MIN_LENGTH} and {NICKNAME_MAX_LENGTH} characters"
        )));
    }

    if nickname.chars().any(char::is_whitespace) {
        return Err(ClientError::Validation(
            "nickname must not contain whitespace".to_owned(),
        ));
    }

    if nickname
        .chars()
        .any(|character| NICKNAME_FORBIDDEN_SPECIALS.contains(&character))
    {
        return Err(ClientError::Validation(
            "nickname may not contain specials other than '_'".to_owned(),
        ));
    }

    Ok(())
}
