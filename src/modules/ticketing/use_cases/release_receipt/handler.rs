// Receipt deletion handler. Frees the seat by removing the record.

use crate::modules::ticketing::core::ports::ReceiptStore;
use crate::modules::ticketing::errors::TicketingError;
use std::sync::Arc;

pub struct ReleaseReceiptHandler<TStore>
where
    TStore: ReceiptStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ReleaseReceiptHandler<TStore>
where
    TStore: ReceiptStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, receipt_id: i64) -> Result<(), TicketingError> {
        if !self.store.delete(receipt_id).await? {
            tracing::warn!(receipt_id, "receipt to delete not found");
            return Err(TicketingError::ReceiptNotFound(receipt_id));
        }
        tracing::info!(receipt_id, "receipt deleted");
        Ok(())
    }
}
