//! Status endpoint

use axum::Json;
use hexfuel_core::{BOARD_RADIUS, STARTING_FUEL};
use serde::Serialize;

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub game: &'static str,
    pub version: &'static str,
    pub engine: &'static str,
    pub board_radius: i32,
    pub starting_fuel: i32,
}

pub async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        game: "hexfuel",
        version: env!("CARGO_PKG_VERSION"),
        engine: "rust",
        board_radius: BOARD_RADIUS,
        starting_fuel: STARTING_FUEL,
    })
}
