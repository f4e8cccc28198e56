// Composition root state: one receipt store, one allocation lock, and the
// use case handlers wired over them.

use crate::modules::ticketing::adapters::in_memory_receipt_store::InMemoryReceiptStore;
use crate::modules::ticketing::use_cases::get_receipt::handler::GetReceiptHandler;
use crate::modules::ticketing::use_cases::list_section_receipts::handler::ListSectionReceiptsHandler;
use crate::modules::ticketing::use_cases::purchase_ticket::handler::PurchaseTicketHandler;
use crate::modules::ticketing::use_cases::reassign_seat::handler::ReassignSeatHandler;
use crate::modules::ticketing::use_cases::release_receipt::handler::ReleaseReceiptHandler;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub purchase_handler: Arc<PurchaseTicketHandler<InMemoryReceiptStore>>,
    pub reassign_handler: Arc<ReassignSeatHandler<InMemoryReceiptStore>>,
    pub release_handler: Arc<ReleaseReceiptHandler<InMemoryReceiptStore>>,
    pub get_receipt_handler: Arc<GetReceiptHandler<InMemoryReceiptStore>>,
    pub list_section_handler: Arc<ListSectionReceiptsHandler<InMemoryReceiptStore>>,
}

impl AppState {
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(InMemoryReceiptStore::new()))
    }

    pub fn with_store(store: Arc<InMemoryReceiptStore>) -> Self {
        // purchase and reassignment share the lock so their read-decide-write
        // sequences serialize against each other
        let allocation_lock = Arc::new(Mutex::new(()));
        Self {
            purchase_handler: Arc::new(PurchaseTicketHandler::new(
                store.clone(),
                allocation_lock.clone(),
            )),
            reassign_handler: Arc::new(ReassignSeatHandler::new(store.clone(), allocation_lock)),
            release_handler: Arc::new(ReleaseReceiptHandler::new(store.clone())),
            get_receipt_handler: Arc::new(GetReceiptHandler::new(store.clone())),
            list_section_handler: Arc::new(ListSectionReceiptsHandler::new(store)),
        }
    }
}
