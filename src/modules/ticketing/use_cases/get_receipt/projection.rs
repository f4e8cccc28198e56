// Public projection of a receipt, as returned by the get-by-id endpoint.
// Carries everything except the internal id.

use crate::modules::ticketing::core::receipt::{Receipt, Section};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptView {
    pub origin: String,
    pub destination: String,
    pub price: f64,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub section: Section,
    pub seat_number: u8,
}

impl From<Receipt> for ReceiptView {
    fn from(receipt: Receipt) -> Self {
        Self {
            origin: receipt.origin,
            destination: receipt.destination,
            price: receipt.price,
            name: receipt.name,
            surname: receipt.surname,
            email: receipt.email,
            section: receipt.section,
            seat_number: receipt.seat_number,
        }
    }
}

#[cfg(test)]
mod receipt_view_tests {
    use super::*;
    use crate::modules::ticketing::core::receipt::NewReceipt;
    use rstest::rstest;

    #[rstest]
    fn it_should_project_every_field_except_the_id() {
        let receipt = NewReceipt::with_trip_defaults(
            "John",
            "Doe",
            "john.doe@example.com",
            Section::A,
            3,
        )
        .into_receipt(7);
        let view = ReceiptView::from(receipt);
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["name"], "John");
        assert_eq!(json["seatNumber"], 3);
        assert_eq!(json["price"], 20.0);
    }
}
