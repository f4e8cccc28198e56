use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::modules::ticketing::use_cases::get_receipt::inbound::http as get_receipt_http;
use crate::modules::ticketing::use_cases::list_section_receipts::inbound::http as list_section_http;
use crate::modules::ticketing::use_cases::purchase_ticket::inbound::http as purchase_http;
use crate::modules::ticketing::use_cases::reassign_seat::inbound::http as reassign_http;
use crate::modules::ticketing::use_cases::release_receipt::inbound::http as release_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/trains/purchase", post(purchase_http::handle))
        .route("/api/trains/delete/{id}", delete(release_http::handle))
        .route("/api/trains/update-seat", put(reassign_http::handle))
        .route(
            "/api/trains/receipts/section/{section}",
            get(list_section_http::handle),
        )
        .route("/api/trains/receipt/{id}", get(get_receipt_http::handle))
        .with_state(state)
}
