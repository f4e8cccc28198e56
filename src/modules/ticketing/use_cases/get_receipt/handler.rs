// Get-by-id query handler, a thin passthrough over the store.

use crate::modules::ticketing::core::ports::ReceiptStore;
use crate::modules::ticketing::errors::TicketingError;
use crate::modules::ticketing::use_cases::get_receipt::projection::ReceiptView;
use std::sync::Arc;

pub struct GetReceiptHandler<TStore>
where
    TStore: ReceiptStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> GetReceiptHandler<TStore>
where
    TStore: ReceiptStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, receipt_id: i64) -> Result<ReceiptView, TicketingError> {
        match self.store.find_by_id(receipt_id).await? {
            Some(receipt) => Ok(ReceiptView::from(receipt)),
            None => {
                tracing::warn!(receipt_id, "receipt not found by id");
                Err(TicketingError::ReceiptNotFoundById(receipt_id))
            }
        }
    }
}
