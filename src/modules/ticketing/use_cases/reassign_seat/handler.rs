// Seat reassignment command handler. Changes only section and seat number.
//
// The occupancy check counts every receipt, including the one being moved, so
// reassigning a receipt to the seat it already holds is rejected. Runs under
// the shared allocation lock together with purchases.

use crate::modules::ticketing::core::ports::ReceiptStore;
use crate::modules::ticketing::errors::TicketingError;
use crate::modules::ticketing::use_cases::reassign_seat::command::ReassignSeat;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct ReassignSeatHandler<TStore>
where
    TStore: ReceiptStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
    allocation_lock: Arc<Mutex<()>>,
}

impl<TStore> ReassignSeatHandler<TStore>
where
    TStore: ReceiptStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, allocation_lock: Arc<Mutex<()>>) -> Self {
        Self {
            store,
            allocation_lock,
        }
    }

    pub async fn handle(&self, command: ReassignSeat) -> Result<(), TicketingError> {
        let _guard = self.allocation_lock.lock().await;

        if self.store.find_by_id(command.id).await?.is_none() {
            tracing::warn!(receipt_id = command.id, "receipt to reassign not found");
            return Err(TicketingError::ReceiptNotFound(command.id));
        }

        if self
            .store
            .slot_occupied(command.section, command.seat_number)
            .await?
        {
            tracing::warn!(
                section = %command.section,
                seat_number = command.seat_number,
                "target seat already occupied"
            );
            return Err(TicketingError::SeatAlreadyOccupied {
                section: command.section,
                seat_number: command.seat_number,
            });
        }

        self.store
            .update_seat(command.id, command.section, command.seat_number)
            .await?;
        tracing::info!(receipt_id = command.id, "receipt seat updated");
        Ok(())
    }
}

#[cfg(test)]
mod reassign_seat_handler_tests {
    use super::*;
    use crate::modules::ticketing::adapters::in_memory_receipt_store::InMemoryReceiptStore;
    use crate::modules::ticketing::core::receipt::{NewReceipt, Receipt, Section};
    use rstest::rstest;

    async fn seed(store: &InMemoryReceiptStore, section: Section, seat_number: u8) -> Receipt {
        store
            .insert(NewReceipt::with_trip_defaults(
                "John",
                "Doe",
                "john.doe@example.com",
                section,
                seat_number,
            ))
            .await
            .unwrap()
    }

    fn handler(store: Arc<InMemoryReceiptStore>) -> ReassignSeatHandler<InMemoryReceiptStore> {
        ReassignSeatHandler::new(store, Arc::new(Mutex::new(())))
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_move_a_receipt_and_change_nothing_else() {
        let store = Arc::new(InMemoryReceiptStore::new());
        let receipt = seed(&store, Section::A, 1).await;
        handler(store.clone())
            .handle(ReassignSeat {
                id: receipt.id,
                section: Section::B,
                seat_number: 5,
            })
            .await
            .unwrap();
        let moved = store.find_by_id(receipt.id).await.unwrap().unwrap();
        assert_eq!(moved.section, Section::B);
        assert_eq!(moved.seat_number, 5);
        assert_eq!(moved.name, receipt.name);
        assert_eq!(moved.surname, receipt.surname);
        assert_eq!(moved.email, receipt.email);
        assert_eq!(moved.origin, receipt.origin);
        assert_eq!(moved.destination, receipt.destination);
        assert_eq!(moved.price, receipt.price);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_for_a_missing_receipt_without_mutating() {
        let store = Arc::new(InMemoryReceiptStore::new());
        let receipt = seed(&store, Section::A, 1).await;
        let result = handler(store.clone())
            .handle(ReassignSeat {
                id: 99,
                section: Section::B,
                seat_number: 5,
            })
            .await;
        assert!(matches!(result, Err(TicketingError::ReceiptNotFound(99))));
        let untouched = store.find_by_id(receipt.id).await.unwrap().unwrap();
        assert_eq!((untouched.section, untouched.seat_number), (Section::A, 1));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_when_the_target_seat_is_occupied() {
        let store = Arc::new(InMemoryReceiptStore::new());
        let first = seed(&store, Section::A, 1).await;
        seed(&store, Section::B, 5).await;
        let result = handler(store.clone())
            .handle(ReassignSeat {
                id: first.id,
                section: Section::B,
                seat_number: 5,
            })
            .await;
        assert!(matches!(
            result,
            Err(TicketingError::SeatAlreadyOccupied {
                section: Section::B,
                seat_number: 5
            })
        ));
        let untouched = store.find_by_id(first.id).await.unwrap().unwrap();
        assert_eq!((untouched.section, untouched.seat_number), (Section::A, 1));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_reassigning_a_receipt_to_its_own_seat() {
        // The occupancy check does not exclude the receipt being moved.
        let store = Arc::new(InMemoryReceiptStore::new());
        let receipt = seed(&store, Section::A, 1).await;
        let result = handler(store)
            .handle(ReassignSeat {
                id: receipt.id,
                section: Section::A,
                seat_number: 1,
            })
            .await;
        assert!(matches!(
            result,
            Err(TicketingError::SeatAlreadyOccupied {
                section: Section::A,
                seat_number: 1
            })
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_propagate_store_failures() {
        let mut store = InMemoryReceiptStore::new();
        store.toggle_offline();
        let result = handler(Arc::new(store))
            .handle(ReassignSeat {
                id: 1,
                section: Section::A,
                seat_number: 1,
            })
            .await;
        assert!(matches!(result, Err(TicketingError::Store(_))));
    }
}
