use axum::{Json, extract::State, extract::rejection::JsonRejection, response::Response};
use serde::Deserialize;

use crate::modules::ticketing::core::receipt::Section;
use crate::modules::ticketing::core::validation::validate_seat_number;
use crate::modules::ticketing::use_cases::reassign_seat::command::ReassignSeat;
use crate::shell::response::{ApiResponse, error_response};
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReassignSeatBody {
    pub id: i64,
    pub section: String,
    pub seat_number: u8,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ReassignSeatBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return ApiResponse::unprocessable(rejection.body_text()),
    };

    let section: Section = match body.section.parse() {
        Ok(section) => section,
        Err(err) => return ApiResponse::unprocessable(err.to_string()),
    };
    if let Err(err) = validate_seat_number(body.seat_number) {
        return ApiResponse::unprocessable(err.to_string());
    }

    let command = ReassignSeat {
        id: body.id,
        section,
        seat_number: body.seat_number,
    };

    match state.reassign_handler.handle(command).await {
        Ok(()) => ApiResponse::ok_empty("Receipt updated successfully."),
        Err(err) => error_response(err),
    }
}
