// Input validation rules, enforced in the inbound layer before any handler
// runs. Name: starts uppercase, alphabetic only. Surname: one or two such
// tokens separated by a single space. Email: syntactic check only. The error
// variants carry the user-facing wording.

use crate::modules::ticketing::core::receipt::SECTION_CAPACITY;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Z][a-zA-Z]*$").expect("name pattern is valid"));

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email pattern is valid")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The user name must start with uppercase and contain only alphabetic characters")]
    InvalidName,

    #[error(
        "Each surname must start with uppercase and contain only alphabetic characters, up to two surnames separated by space"
    )]
    InvalidSurname,

    #[error("Must be a valid email format, e.g. 'example@mail.com'")]
    InvalidEmail,

    #[error("The seat must be a number between 1 and 10")]
    InvalidSeatNumber,
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err(ValidationError::InvalidName)
    }
}

pub fn validate_surname(surname: &str) -> Result<(), ValidationError> {
    let tokens: Vec<&str> = surname.split(' ').collect();
    if tokens.is_empty() || tokens.len() > 2 {
        return Err(ValidationError::InvalidSurname);
    }
    if tokens.iter().all(|token| NAME_RE.is_match(token)) {
        Ok(())
    } else {
        Err(ValidationError::InvalidSurname)
    }
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

pub fn validate_seat_number(seat_number: u8) -> Result<(), ValidationError> {
    if (1..=SECTION_CAPACITY).contains(&seat_number) {
        Ok(())
    } else {
        Err(ValidationError::InvalidSeatNumber)
    }
}

/// Validates the full passenger payload of a purchase request.
pub fn validate_passenger(name: &str, surname: &str, email: &str) -> Result<(), ValidationError> {
    validate_name(name)?;
    validate_surname(surname)?;
    validate_email(email)?;
    Ok(())
}
