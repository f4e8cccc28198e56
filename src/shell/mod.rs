// Composition root for the ticketing bounded context.
//
// Responsibilities
// - Wire the in-memory store and the allocation lock into the handlers.
// - Assemble the HTTP router and the shared response envelope.

pub mod http;
pub mod response;
pub mod state;
