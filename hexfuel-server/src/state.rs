//! Server state management
//!
//! One live game session shared by all requests.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use hexfuel_core::{GameConfig, GameError, GameState, GreedyAi};

use crate::error::ApiError;

/// Server-wide shared state
pub struct ServerState {
    game: RwLock<GameState>,
    /// Opponent used for the AI's turns
    pub ai: GreedyAi,
}

impl ServerState {
    pub fn new(seed: Option<u64>) -> Result<Self, GameError> {
        let game = GameState::new(&GameConfig { seed })?;
        Ok(Self::with_game(game))
    }

    /// Serve an already prepared session
    pub fn with_game(game: GameState) -> Self {
        Self {
            game: RwLock::new(game),
            ai: GreedyAi::default(),
        }
    }

    pub(crate) fn read_game(&self) -> Result<RwLockReadGuard<'_, GameState>, ApiError> {
        self.game.read().map_err(|_| ApiError::Poisoned)
    }

    pub(crate) fn write_game(&self) -> Result<RwLockWriteGuard<'_, GameState>, ApiError> {
        self.game.write().map_err(|_| ApiError::Poisoned)
    }
}
