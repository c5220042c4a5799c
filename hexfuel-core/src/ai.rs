//! Heuristic move selection

use crate::board::Board;
use crate::error::NoMoves;
use crate::eval::{Heuristics, MoveScorer};
use crate::game::Mover;
use crate::hex::Hex;
use crate::rules::legal_destinations;

/// Anything that can pick a destination for a mover
pub trait MoveSelector {
    fn choose_move(&self, mover: &Mover, board: &Board) -> Result<Hex, NoMoves>;
}

/// One-ply greedy AI: scores every legal destination and takes the best.
///
/// Ties keep the first candidate in canonical board order, so the choice is
/// a pure function of the board and mover.
#[derive(Clone, Debug)]
pub struct GreedyAi<S = Heuristics> {
    pub scorer: S,
}

impl Default for GreedyAi<Heuristics> {
    fn default() -> Self {
        Self::new(Heuristics::default())
    }
}

impl<S: MoveScorer> GreedyAi<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Score all legal destinations, in canonical order
    pub fn score_moves(&self, mover: &Mover, board: &Board) -> Vec<(Hex, f64)> {
        legal_destinations(mover, board)
            .into_iter()
            .filter_map(|dest| {
                let cell = board.find_cell(dest)?;
                let distance = mover.position.distance_to(dest);
                Some((dest, self.scorer.score(mover, board, cell, distance)))
            })
            .collect()
    }
}

impl<S: MoveScorer> MoveSelector for GreedyAi<S> {
    fn choose_move(&self, mover: &Mover, board: &Board) -> Result<Hex, NoMoves> {
        let scored = self.score_moves(mover, board);

        let mut best: Option<(Hex, f64)> = None;
        for (dest, score) in scored {
            tracing::trace!(%dest, score, "Candidate");
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((dest, score));
            }
        }

        let (dest, score) = best.ok_or(NoMoves)?;
        tracing::debug!(%dest, score, "AI chose move");
        Ok(dest)
    }
}

// ============================================================================
// TESTS
// ============================================================================
