//! Field-level schema checks applied at the API boundary.
//!
//! Each check appends a human-readable violation; handlers turn a non-empty
//! list into a 422.

use chirp_core::domain::User;

pub fn check_email(errors: &mut Vec<String>, email: &str) {
    if email.is_empty() || !email.contains('@') {
        errors.push("email must be a valid address".to_string());
    }
}

pub fn check_password(errors: &mut Vec<String>, password: &str) {
    if !(8..=64).contains(&password.chars().count()) {
        errors.push("password must be 8-64 characters".to_string());
    }
}

pub fn check_name(errors: &mut Vec<String>, field: &str, value: &str) {
    if !(1..=50).contains(&value.chars().count()) {
        errors.push(format!("{field} must be 1-50 characters"));
    }
}

pub fn check_content(errors: &mut Vec<String>, content: &str) {
    if !(1..=256).contains(&content.chars().count()) {
        errors.push("content must be 1-256 characters".to_string());
    }
}

/// The embedded author snapshot follows the same field rules as a stored
/// user profile.
pub fn check_author(errors: &mut Vec<String>, author: &User) {
    check_email(errors, &author.email);
    check_name(errors, "author.first_name", &author.first_name);
    check_name(errors, "author.last_name", &author.last_name);
}
