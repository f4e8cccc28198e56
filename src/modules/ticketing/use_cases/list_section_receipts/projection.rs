// Passenger-and-seat projection used by the section listing.

use crate::modules::ticketing::core::receipt::{Receipt, Section};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSeatView {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub section: Section,
    pub seat_number: u8,
}

impl From<Receipt> for UserSeatView {
    fn from(receipt: Receipt) -> Self {
        Self {
            name: receipt.name,
            surname: receipt.surname,
            email: receipt.email,
            section: receipt.section,
            seat_number: receipt.seat_number,
        }
    }
}

#[cfg(test)]
mod user_seat_view_tests {
    use super::*;
    use crate::modules::ticketing::core::receipt::NewReceipt;
    use rstest::rstest;

    #[rstest]
    fn it_should_project_passenger_and_seat_fields_only() {
        let receipt = NewReceipt::with_trip_defaults(
            "Jane",
            "Doe",
            "jane@example.com",
            Section::B,
            9,
        )
        .into_receipt(3);
        let view = UserSeatView::from(receipt);
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("price").is_none());
        assert!(json.get("origin").is_none());
        assert_eq!(json["surname"], "Doe");
        assert_eq!(json["section"], "B");
        assert_eq!(json["seatNumber"], 9);
    }
}
