use axum::{extract::Path, extract::State, response::Response};

use crate::shell::response::{ApiResponse, error_response};
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(receipt_id): Path<i64>) -> Response {
    match state.get_receipt_handler.handle(receipt_id).await {
        Ok(view) => ApiResponse::ok("Receipt fetched successfully.", view),
        Err(err) => error_response(err),
    }
}
