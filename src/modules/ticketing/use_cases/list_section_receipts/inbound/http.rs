use axum::{extract::Path, extract::State, response::Response};

use crate::modules::ticketing::core::receipt::Section;
use crate::shell::response::{ApiResponse, error_response};
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(section): Path<String>) -> Response {
    let section: Section = match section.parse() {
        Ok(section) => section,
        Err(err) => return ApiResponse::bad_request(err.to_string()),
    };

    match state.list_section_handler.handle(section).await {
        Ok(views) => ApiResponse::ok("Receipts fetched successfully.", views),
        Err(err) => error_response(err),
    }
}
