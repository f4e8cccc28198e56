// Domain data for the ticketing context: the Receipt entity, the Section
// enum, and the fixed trip defaults.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const SECTION_CAPACITY: u8 = 10;

pub const DEFAULT_ORIGIN: &str = "London";
pub const DEFAULT_DESTINATION: &str = "France";
pub const DEFAULT_PRICE: f64 = 20.00;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    A,
    B,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::A, Section::B];
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::A => write!(f, "A"),
            Section::B => write!(f, "B"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("The ticket section must be either A or B")]
pub struct InvalidSection;

impl FromStr for Section {
    type Err = InvalidSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Section::A),
            "B" => Ok(Section::B),
            _ => Err(InvalidSection),
        }
    }
}

/// A persisted ticket purchase. The id is assigned by the store and never
/// reused; only section and seat_number may change after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub id: i64,
    pub origin: String,
    pub destination: String,
    pub price: f64,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub section: Section,
    pub seat_number: u8,
}

/// Receipt data before the store has assigned an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReceipt {
    pub origin: String,
    pub destination: String,
    pub price: f64,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub section: Section,
    pub seat_number: u8,
}

impl NewReceipt {
    /// Builds a receipt for the fixed London -> France trip with the default
    /// fare, leaving seat assignment to the allocator's choice.
    pub fn with_trip_defaults(
        name: impl Into<String>,
        surname: impl Into<String>,
        email: impl Into<String>,
        section: Section,
        seat_number: u8,
    ) -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            destination: DEFAULT_DESTINATION.to_string(),
            price: DEFAULT_PRICE,
            name: name.into(),
            surname: surname.into(),
            email: email.into(),
            section,
            seat_number,
        }
    }

    pub fn into_receipt(self, id: i64) -> Receipt {
        Receipt {
            id,
            origin: self.origin,
            destination: self.destination,
            price: self.price,
            name: self.name,
            surname: self.surname,
            email: self.email,
            section: self.section,
            seat_number: self.seat_number,
        }
    }
}

#[cfg(test)]
mod receipt_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_parse_valid_sections() {
        assert_eq!("A".parse::<Section>(), Ok(Section::A));
        assert_eq!("B".parse::<Section>(), Ok(Section::B));
    }

    #[rstest]
    #[case("C")]
    #[case("a")]
    #[case("")]
    #[case("AB")]
    fn it_should_reject_invalid_sections(#[case] raw: &str) {
        assert_eq!(raw.parse::<Section>(), Err(InvalidSection));
    }

    #[rstest]
    fn it_should_apply_the_trip_defaults() {
        let new_receipt =
            NewReceipt::with_trip_defaults("John", "Doe", "john.doe@example.com", Section::A, 1);
        assert_eq!(new_receipt.origin, "London");
        assert_eq!(new_receipt.destination, "France");
        assert_eq!(new_receipt.price, 20.00);
        assert_ne!(new_receipt.origin, new_receipt.destination);
    }

    #[rstest]
    fn it_should_keep_all_fields_when_the_id_is_assigned() {
        let receipt = NewReceipt::with_trip_defaults(
            "Jane",
            "Doe Smith",
            "jane@example.com",
            Section::B,
            7,
        )
        .into_receipt(42);
        assert_eq!(receipt.id, 42);
        assert_eq!(receipt.name, "Jane");
        assert_eq!(receipt.surname, "Doe Smith");
        assert_eq!(receipt.section, Section::B);
        assert_eq!(receipt.seat_number, 7);
    }

    #[rstest]
    fn it_should_serialize_with_camel_case_wire_names() {
        let receipt = NewReceipt::with_trip_defaults(
            "John",
            "Doe",
            "john.doe@example.com",
            Section::A,
            1,
        )
        .into_receipt(1);
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["seatNumber"], 1);
        assert_eq!(json["section"], "A");
        assert_eq!(json["origin"], "London");
    }
}
