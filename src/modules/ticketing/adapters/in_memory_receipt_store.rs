// In memory implementation of the ReceiptStore port.
//
// Purpose
// - Back tests and local development without a database.
//
// Responsibilities
// - Assign sequential ids starting at 1, never reusing one after a delete.
// - Enforce the one-receipt-per-slot invariant inside its own critical
//   section, so a double booking fails even if a caller skips the
//   allocation lock.

use crate::modules::ticketing::core::ports::{ReceiptStore, StoreError};
use crate::modules::ticketing::core::receipt::{NewReceipt, Receipt, Section};
use std::collections::BTreeMap;
use tokio::sync::Mutex;

#[derive(Default)]
struct Inner {
    next_id: i64,
    receipts: BTreeMap<i64, Receipt>,
}

#[derive(Default)]
pub struct InMemoryReceiptStore {
    inner: Mutex<Inner>,
    offline: bool,
}

impl InMemoryReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every operation fail with a backend error, for 500-path tests.
    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline {
            return Err(StoreError::Backend("receipt store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ReceiptStore for InMemoryReceiptStore {
    async fn insert(&self, receipt: NewReceipt) -> Result<Receipt, StoreError> {
        self.check_online()?;
        let mut guard = self.inner.lock().await;
        let slot_taken = guard
            .receipts
            .values()
            .any(|r| r.section == receipt.section && r.seat_number == receipt.seat_number);
        if slot_taken {
            return Err(StoreError::SlotTaken {
                section: receipt.section,
                seat_number: receipt.seat_number,
            });
        }
        guard.next_id += 1;
        let id = guard.next_id;
        let persisted = receipt.into_receipt(id);
        guard.receipts.insert(id, persisted.clone());
        Ok(persisted)
    }

    async fn update_seat(
        &self,
        id: i64,
        section: Section,
        seat_number: u8,
    ) -> Result<(), StoreError> {
        self.check_online()?;
        let mut guard = self.inner.lock().await;
        let taken_by_other = guard
            .receipts
            .values()
            .any(|r| r.id != id && r.section == section && r.seat_number == seat_number);
        if taken_by_other {
            return Err(StoreError::SlotTaken {
                section,
                seat_number,
            });
        }
        match guard.receipts.get_mut(&id) {
            Some(receipt) => {
                receipt.section = section;
                receipt.seat_number = seat_number;
                Ok(())
            }
            None => Err(StoreError::Backend(format!("no receipt with id {id}"))),
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Receipt>, StoreError> {
        self.check_online()?;
        let guard = self.inner.lock().await;
        Ok(guard.receipts.get(&id).cloned())
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        self.check_online()?;
        let mut guard = self.inner.lock().await;
        Ok(guard.receipts.remove(&id).is_some())
    }

    async fn count_by_section(&self, section: Section) -> Result<u32, StoreError> {
        self.check_online()?;
        let guard = self.inner.lock().await;
        Ok(guard.receipts.values().filter(|r| r.section == section).count() as u32)
    }

    async fn occupied_seats(&self, section: Section) -> Result<Vec<u8>, StoreError> {
        self.check_online()?;
        let guard = self.inner.lock().await;
        let mut seats: Vec<u8> = guard
            .receipts
            .values()
            .filter(|r| r.section == section)
            .map(|r| r.seat_number)
            .collect();
        seats.sort_unstable();
        Ok(seats)
    }

    async fn slot_occupied(&self, section: Section, seat_number: u8) -> Result<bool, StoreError> {
        self.check_online()?;
        let guard = self.inner.lock().await;
        Ok(guard
            .receipts
            .values()
            .any(|r| r.section == section && r.seat_number == seat_number))
    }

    async fn list_by_section(&self, section: Section) -> Result<Vec<Receipt>, StoreError> {
        self.check_online()?;
        let guard = self.inner.lock().await;
        Ok(guard
            .receipts
            .values()
            .filter(|r| r.section == section)
            .cloned()
            .collect())
    }
}
