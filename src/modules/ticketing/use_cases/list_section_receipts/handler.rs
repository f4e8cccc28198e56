// Section listing query handler. An empty section is an error, not an empty
// list; the behavior is externally observable as a 404 and kept that way.

use crate::modules::ticketing::core::ports::ReceiptStore;
use crate::modules::ticketing::core::receipt::Section;
use crate::modules::ticketing::errors::TicketingError;
use crate::modules::ticketing::use_cases::list_section_receipts::projection::UserSeatView;
use std::sync::Arc;

pub struct ListSectionReceiptsHandler<TStore>
where
    TStore: ReceiptStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListSectionReceiptsHandler<TStore>
where
    TStore: ReceiptStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, section: Section) -> Result<Vec<UserSeatView>, TicketingError> {
        let receipts = self.store.list_by_section(section).await?;
        if receipts.is_empty() {
            tracing::warn!(%section, "no receipts found for section");
            return Err(TicketingError::NoReceiptsFound(section));
        }
        tracing::info!(%section, count = receipts.len(), "receipts fetched for section");
        Ok(receipts.into_iter().map(UserSeatView::from).collect())
    }
}
