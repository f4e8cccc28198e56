use axum::{Json, extract::State, extract::rejection::JsonRejection, response::Response};
use serde::Deserialize;

use crate::modules::ticketing::core::validation::validate_passenger;
use crate::modules::ticketing::use_cases::purchase_ticket::command::PurchaseTicket;
use crate::shell::response::{ApiResponse, error_response};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct PurchaseTicketBody {
    pub name: String,
    pub surname: String,
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<PurchaseTicketBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return ApiResponse::unprocessable(rejection.body_text()),
    };

    if let Err(err) = validate_passenger(&body.name, &body.surname, &body.email) {
        return ApiResponse::unprocessable(err.to_string());
    }

    let command = PurchaseTicket {
        name: body.name,
        surname: body.surname,
        email: body.email,
    };

    match state.purchase_handler.handle(command).await {
        Ok(receipt) => ApiResponse::created("Receipt created successfully.", receipt),
        Err(err) => error_response(err),
    }
}
