// Ports define what the ticketing core needs from the outside world.
//
// Purpose
// - Describe the receipt store as a trait so handlers stay independent of any
//   concrete database.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits.
//
// Testing guidance
// - The in-memory adapter backs both tests and local development.

use crate::modules::ticketing::core::receipt::{NewReceipt, Receipt, Section};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The (section, seat) slot is already held by another receipt. This is
    /// the uniqueness backstop; under the allocation lock it should never
    /// surface.
    #[error("seat {seat_number} in section {section} is already taken")]
    SlotTaken { section: Section, seat_number: u8 },

    #[error("backend error: {0}")]
    Backend(String),
}

/// Persistence port for receipts. Implementations must guarantee that at most
/// one receipt holds a given (section, seat) slot and that ids are never
/// reused.
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    /// Persists a new receipt, assigning the next id. Fails with `SlotTaken`
    /// if the slot is occupied.
    async fn insert(&self, receipt: NewReceipt) -> Result<Receipt, StoreError>;

    /// Moves a receipt to a new slot, leaving every other field untouched.
    /// Fails with `SlotTaken` if a different receipt holds the slot.
    async fn update_seat(
        &self,
        id: i64,
        section: Section,
        seat_number: u8,
    ) -> Result<(), StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Receipt>, StoreError>;

    /// Removes the receipt, returning whether it existed.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;

    async fn count_by_section(&self, section: Section) -> Result<u32, StoreError>;

    /// Occupied seat numbers in the section, ascending.
    async fn occupied_seats(&self, section: Section) -> Result<Vec<u8>, StoreError>;

    /// Whether any receipt holds the slot. Deliberately does not exclude a
    /// particular receipt; the reassignment rule counts a receipt's own seat
    /// as occupied.
    async fn slot_occupied(&self, section: Section, seat_number: u8) -> Result<bool, StoreError>;

    /// Receipts in the section, in insertion (id) order.
    async fn list_by_section(&self, section: Section) -> Result<Vec<Receipt>, StoreError>;
}
