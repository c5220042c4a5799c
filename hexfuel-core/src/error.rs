//! Error types for the game engine

use crate::game::Side;
use crate::hex::Hex;

/// A cube triple off the `q + r + s = 0` plane
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("cube coordinate ({q}, {r}, {s}) does not sum to zero")]
pub struct InvalidCube {
    pub q: i32,
    pub r: i32,
    pub s: i32,
}

/// Why a vector between two hexes is not a ray move
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RayError {
    #[error("destination is the current position")]
    NoMovement,

    #[error("destination is not on a straight line")]
    NotStraight,
}

/// A rejected move request. State is left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("{0} is not on the board")]
    OffBoard(Hex),

    #[error("{0} has already been destroyed")]
    Inactive(Hex),

    #[error("{0} is occupied")]
    Occupied(Hex),

    #[error("not enough fuel: distance {distance}, fuel {fuel}")]
    InsufficientFuel { distance: i32, fuel: i32 },

    #[error(transparent)]
    Ray(#[from] RayError),

    #[error("it is not {0:?}'s turn")]
    NotYourTurn(Side),

    #[error("the game is over")]
    GameOver,
}

/// The mover has no legal destination. Ends the game, never an internal fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no legal moves")]
pub struct NoMoves;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GameError {
    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),

    #[error("starting cell {coord} missing from radius-{radius} board")]
    MalformedBoard { coord: Hex, radius: i32 },

    #[error("cell {coord} has value {value}, expected -9..=-5 or 5..=9")]
    InvalidCellValue { coord: Hex, value: i32 },
}
