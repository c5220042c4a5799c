//! Game API endpoints
//!
//! The front end moves the human, then calls `ai-move` when it is ready to
//! show the AI's reply.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use hexfuel_core::{GameError, Hex, IllegalMove, MoveApplied, Side, Snapshot, TurnReport};
use serde::Serialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::ServerState;

#[derive(Serialize)]
pub struct MoveResponse {
    pub applied: MoveApplied,
    pub state: Snapshot,
}

#[derive(Serialize)]
pub struct AiMoveResponse {
    pub report: TurnReport,
    pub state: Snapshot,
}

/// Current session snapshot
pub async fn get_game(State(state): State<Arc<ServerState>>) -> Result<Json<Snapshot>, ApiError> {
    let game = state.read_game()?;
    Ok(Json(game.snapshot()))
}

/// Apply the human's move to the requested cell
pub async fn make_player_move(
    State(state): State<Arc<ServerState>>,
    body: Result<Json<Hex>, JsonRejection>,
) -> Result<Json<MoveResponse>, ApiError> {
    let Json(destination) = body?;
    let mut game = state.write_game()?;
    let applied = game.request_move(Side::Human, destination)?;

    Ok(Json(MoveResponse {
        applied,
        state: game.snapshot(),
    }))
}

/// Let the AI play its turn
pub async fn make_ai_move(
    State(state): State<Arc<ServerState>>,
) -> Result<Json<AiMoveResponse>, ApiError> {
    let mut game = state.write_game()?;
    if !game.is_over() && game.turn() != Side::Ai {
        return Err(GameError::from(IllegalMove::NotYourTurn(Side::Ai)).into());
    }
    let report = game.play_turn(&state.ai)?;

    Ok(Json(AiMoveResponse {
        report,
        state: game.snapshot(),
    }))
}

/// Replace the session with a fresh game
pub async fn restart_game(
    State(state): State<Arc<ServerState>>,
) -> Result<Json<Snapshot>, ApiError> {
    let mut game = state.write_game()?;
    game.restart()?;
    Ok(Json(game.snapshot()))
}
