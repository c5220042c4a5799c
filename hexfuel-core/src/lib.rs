//! HEXFUEL Core - Game engine and AI
//!
//! This crate provides the core game logic for HEXFUEL:
//! - Board geometry (hex grid with cube coordinates, ray directions)
//! - Board generation with signed fuel values per cell
//! - Move legality (straight rays, fuel range, open cells)
//! - Game state, turn order and end-of-game detection
//! - Greedy heuristic AI with pluggable scoring

pub mod ai;
pub mod board;
pub mod error;
pub mod eval;
pub mod game;
pub mod hex;
pub mod rules;

// Re-exports for convenient access
pub use ai::{GreedyAi, MoveSelector};
pub use board::{Board, Cell};
pub use error::{GameError, IllegalMove, NoMoves, RayError};
pub use eval::{Heuristics, MoveScorer};
pub use game::{
    EndReason, GameConfig, GameState, MoveApplied, Mover, Outcome, Phase, Side, Snapshot,
    TurnReport, Winner, STARTING_FUEL,
};
pub use hex::{Direction, Hex, BOARD_RADIUS, DIRECTIONS};
