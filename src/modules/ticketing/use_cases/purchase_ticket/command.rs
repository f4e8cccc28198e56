// Command data type for purchasing a ticket. Section and seat are chosen by
// the allocator, never by the caller.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseTicket {
    pub name: String,
    pub surname: String,
    pub email: String,
}
