// Application-level error taxonomy, translated 1:1 to HTTP at the inbound
// layer. Two distinct not-found variants exist because delete/reassign and
// get-by-id report the condition separately on the wire.

use crate::modules::ticketing::core::ports::StoreError;
use crate::modules::ticketing::core::receipt::Section;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TicketingError {
    #[error("There are no available seats in the selected section")]
    NoAvailableSeats,

    #[error("No receipt exists with id {0}")]
    ReceiptNotFound(i64),

    #[error("No receipt could be fetched with id {0}")]
    ReceiptNotFoundById(i64),

    #[error("Seat {seat_number} in section {section} is already occupied")]
    SeatAlreadyOccupied { section: Section, seat_number: u8 },

    #[error("No receipts found for section {0}")]
    NoReceiptsFound(Section),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl TicketingError {
    /// Stable machine-readable kind carried in error responses.
    pub fn code(&self) -> &'static str {
        match self {
            TicketingError::NoAvailableSeats => "NO_AVAILABLE_SEATS",
            TicketingError::ReceiptNotFound(_) => "RECEIPT_NOT_FOUND",
            TicketingError::ReceiptNotFoundById(_) => "RECEIPT_NOT_FOUND_BY_ID",
            TicketingError::SeatAlreadyOccupied { .. } => "SEAT_ALREADY_OCCUPIED",
            TicketingError::NoReceiptsFound(_) => "NO_RECEIPTS_FOUND",
            TicketingError::Store(_) => "UNEXPECTED",
        }
    }
}

#[cfg(test)]
mod ticketing_error_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_expose_a_stable_code_per_variant() {
        assert_eq!(TicketingError::NoAvailableSeats.code(), "NO_AVAILABLE_SEATS");
        assert_eq!(TicketingError::ReceiptNotFound(1).code(), "RECEIPT_NOT_FOUND");
        assert_eq!(
            TicketingError::ReceiptNotFoundById(1).code(),
            "RECEIPT_NOT_FOUND_BY_ID"
        );
        assert_eq!(
            TicketingError::SeatAlreadyOccupied {
                section: Section::A,
                seat_number: 1
            }
            .code(),
            "SEAT_ALREADY_OCCUPIED"
        );
        assert_eq!(
            TicketingError::NoReceiptsFound(Section::B).code(),
            "NO_RECEIPTS_FOUND"
        );
        assert_eq!(
            TicketingError::Store(StoreError::Backend("down".into())).code(),
            "UNEXPECTED"
        );
    }

    #[rstest]
    fn it_should_wrap_store_errors_transparently() {
        let err: TicketingError = StoreError::Backend("receipt store offline".into()).into();
        assert_eq!(err.to_string(), "backend error: receipt store offline");
    }
}
