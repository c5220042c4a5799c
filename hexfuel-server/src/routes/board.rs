//! Board geometry endpoint

use axum::Json;
use hexfuel_core::{hex::hexagon, Hex, BOARD_RADIUS, DIRECTIONS};
use serde::Serialize;

#[derive(Serialize)]
pub struct BoardInfo {
    pub radius: i32,
    pub hexes: Vec<Hex>,
    pub directions: Vec<Hex>,
    pub direction_names: Vec<&'static str>,
}

/// Get board geometry
pub async fn get_board() -> Json<BoardInfo> {
    Json(BoardInfo {
        radius: BOARD_RADIUS,
        hexes: hexagon(BOARD_RADIUS).collect(),
        directions: DIRECTIONS.iter().map(|d| d.vector()).collect(),
        direction_names: DIRECTIONS.iter().map(|d| d.name()).collect(),
    })
}
