// Pure seat allocation decisions. No input or output here.
//
// The section rules are an ordered list; rules 2 and 3 are deliberate special
// cases on top of the general comparison, so the tie and
// only-one-section-occupied behavior must not collapse into a single `<`.

use crate::modules::ticketing::core::receipt::{SECTION_CAPACITY, Section};

/// Picks the section with the fewest receipts. Evaluated in order, first
/// match wins:
/// 1. empty system -> A
/// 2. only A occupied -> B
/// 3. only B occupied -> A
/// 4. A has fewer -> A
/// 5. otherwise (ties included) -> B
pub fn select_section(count_a: u32, count_b: u32) -> Section {
    if count_a == 0 && count_b == 0 {
        return Section::A;
    }
    if count_b == 0 {
        return Section::B;
    }
    if count_a == 0 {
        return Section::A;
    }
    if count_a < count_b {
        Section::A
    } else {
        Section::B
    }
}

/// Returns the lowest free seat number in 1..=10, scanning ascending, or
/// `None` when the section is full. There is no fallback to the other
/// section; the caller reports the failure as-is.
pub fn select_seat(occupied: &[u8]) -> Option<u8> {
    (1..=SECTION_CAPACITY).find(|seat| !occupied.contains(seat))
}
