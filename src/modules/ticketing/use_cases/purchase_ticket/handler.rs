// Purchase command handler orchestrates the write flow.
//
// Responsibilities
// - Read per-section counts and pick the least occupied section.
// - Pick the first free seat in it, or fail with NoAvailableSeats.
// - Persist the receipt with the fixed trip defaults and return it.
//
// The whole read-decide-write sequence runs under the shared allocation lock,
// so two concurrent purchases cannot pick the same slot. The store's
// SlotTaken check remains as a backstop and surfaces as a store error.

use crate::modules::ticketing::core::allocator::{select_seat, select_section};
use crate::modules::ticketing::core::ports::ReceiptStore;
use crate::modules::ticketing::core::receipt::{NewReceipt, Receipt, Section};
use crate::modules::ticketing::errors::TicketingError;
use crate::modules::ticketing::use_cases::purchase_ticket::command::PurchaseTicket;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct PurchaseTicketHandler<TStore>
where
    TStore: ReceiptStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
    allocation_lock: Arc<Mutex<()>>,
}

impl<TStore> PurchaseTicketHandler<TStore>
where
    TStore: ReceiptStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, allocation_lock: Arc<Mutex<()>>) -> Self {
        Self {
            store,
            allocation_lock,
        }
    }

    pub async fn handle(&self, command: PurchaseTicket) -> Result<Receipt, TicketingError> {
        let _guard = self.allocation_lock.lock().await;

        let count_a = self.store.count_by_section(Section::A).await?;
        let count_b = self.store.count_by_section(Section::B).await?;
        let section = select_section(count_a, count_b);
        tracing::info!(%section, count_a, count_b, "selected section with fewest receipts");

        let occupied = self.store.occupied_seats(section).await?;
        let Some(seat_number) = select_seat(&occupied) else {
            tracing::warn!(%section, "no seats left in the selected section");
            return Err(TicketingError::NoAvailableSeats);
        };

        let receipt = self
            .store
            .insert(NewReceipt::with_trip_defaults(
                command.name,
                command.surname,
                command.email,
                section,
                seat_number,
            ))
            .await?;
        tracing::info!(receipt_id = receipt.id, %section, seat_number, "receipt saved");
        Ok(receipt)
    }
}
