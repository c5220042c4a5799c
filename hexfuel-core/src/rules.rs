//! Move legality
//!
//! A destination is legal when it is active, unoccupied, within fuel range
//! and on one of the six rays from the mover. Rays are not blocked: cells
//! between origin and destination may be destroyed or occupied.

use crate::board::{Board, Cell};
use crate::error::IllegalMove;
use crate::game::Mover;
use crate::hex::Hex;

/// Validate a single destination, returning the travel distance when legal
pub fn check_move(mover: &Mover, destination: Hex, board: &Board) -> Result<i32, IllegalMove> {
    let cell = board
        .find_cell(destination)
        .ok_or(IllegalMove::OffBoard(destination))?;
    check_cell(mover, cell)
}

/// Single-target legality; `None` (nothing selected) is never legal
pub fn is_legal(mover: &Mover, destination: Option<Hex>, board: &Board) -> bool {
    destination.is_some_and(|dest| check_move(mover, dest, board).is_ok())
}

/// Every legal destination in canonical board order
pub fn legal_destinations(mover: &Mover, board: &Board) -> Vec<Hex> {
    board
        .cells()
        .filter(|cell| check_cell(mover, cell).is_ok())
        .map(|cell| cell.coord)
        .collect()
}

/// Cheaper than [`legal_destinations`] when only emptiness matters
pub fn has_legal_move(mover: &Mover, board: &Board) -> bool {
    board.cells().any(|cell| check_cell(mover, cell).is_ok())
}

fn check_cell(mover: &Mover, cell: &Cell) -> Result<i32, IllegalMove> {
    if !cell.active {
        return Err(IllegalMove::Inactive(cell.coord));
    }
    if cell.occupant.is_some() {
        return Err(IllegalMove::Occupied(cell.coord));
    }

    let distance = mover.position.distance_to(cell.coord);
    if distance > mover.fuel {
        return Err(IllegalMove::InsufficientFuel {
            distance,
            fuel: mover.fuel,
        });
    }

    mover.position.direction_to(cell.coord)?;
    Ok(distance)
}
