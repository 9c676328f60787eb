//! Username and phone number rules for generated users.
//!
//! # Validation Rules
//!
//! Usernames:
//! - Minimum length: 3 characters
//! - Maximum length: 32 characters
//! - ASCII letters and digits only
//!
//! Phone numbers: exactly 11 ASCII digits with a leading `0`.

/// Minimum allowed length for a username.
pub const USERNAME_MIN: usize = 3;

/// Maximum allowed length for a username.
pub const USERNAME_MAX: usize = 32;

/// Length of a local phone number including the leading `0`.
pub const PHONE_NUMBER_LEN: usize = 11;

/// Validates a generated username.
///
/// # Examples
///
/// ```
/// use example_data::is_valid_username;
///
/// assert!(is_valid_username("GraceEffiom"));
/// assert!(!is_valid_username("ab"));
/// assert!(!is_valid_username("Grace Effiom"));
/// assert!(!is_valid_username("O'Brien"));
/// ```
#[must_use]
pub fn is_valid_username(name: &str) -> bool {
    let length = name.chars().count();
    (USERNAME_MIN..=USERNAME_MAX).contains(&length)
        && name.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Validates a local phone number.
///
/// # Examples
///
/// ```
/// use example_data::is_valid_phone_number;
///
/// assert!(is_valid_phone_number("07060780922"));
/// assert!(!is_valid_phone_number("7060780922"));
/// assert!(!is_valid_phone_number("0706-078-0922"));
/// ```
#[must_use]
pub fn is_valid_phone_number(phone: &str) -> bool {
    phone.len() == PHONE_NUMBER_LEN
        && phone.starts_with('0')
        && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Strips everything but ASCII letters and digits from a name part.
#[must_use]
pub(crate) fn sanitize_name_part(part: &str) -> String {
    part.chars().filter(char::is_ascii_alphanumeric).collect()
}
