// Command data type for moving a receipt to another seat.

use crate::modules::ticketing::core::receipt::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReassignSeat {
    pub id: i64,
    pub section: Section,
    pub seat_number: u8,
}
