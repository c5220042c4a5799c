//! Move evaluation

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell};
use crate::game::Mover;

/// Scores a candidate destination for a mover. Higher is better.
pub trait MoveScorer {
    fn score(&self, mover: &Mover, board: &Board, candidate: &Cell, distance: i32) -> f64;
}

/// Heuristic weights for move evaluation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Heuristics {
    /// Weight for the destination's fuel value
    pub value_weight: f64,
    /// Weight for value gained per step travelled
    pub efficiency_weight: f64,
    /// Penalty per ring away from the center
    pub center_weight: f64,
    /// Weight for cells still reachable after the move
    pub mobility_weight: f64,
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            value_weight: 2.0,
            efficiency_weight: 10.0,
            center_weight: 0.5,
            mobility_weight: 0.3,
        }
    }
}

impl Heuristics {
    /// Load weights from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save weights as pretty JSON
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl MoveScorer for Heuristics {
    fn score(&self, mover: &Mover, board: &Board, candidate: &Cell, distance: i32) -> f64 {
        let value = candidate.value as f64;
        let projected_fuel = mover.fuel - distance + candidate.value;

        let mut score = value * self.value_weight;
        score += (value / distance as f64) * self.efficiency_weight;
        score -= candidate.coord.length() as f64 * self.center_weight;
        score += future_options(board, candidate, projected_fuel) as f64 * self.mobility_weight;
        score
    }
}

/// Open cells within `fuel` of `candidate`, excluding the candidate itself.
///
/// A one-ply mobility estimate: ray direction is not checked.
pub fn future_options(board: &Board, candidate: &Cell, fuel: i32) -> usize {
    board
        .cells()
        .filter(|h| h.is_open() && h.coord != candidate.coord)
        .filter(|h| h.coord.distance_to(candidate.coord) <= fuel)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::{Hex, BOARD_RADIUS};

    fn mover_at(position: Hex, fuel: i32) -> Mover {
        Mover {
            position,
            facing: 0.0,
            fuel,
        }
    }

    #[test]
    fn test_default_heuristics() {
        let h = Heuristics::default();
        assert_eq!(h.value_weight, 2.0);
        assert_eq!(h.efficiency_weight, 10.0);
        assert_eq!(h.center_weight, 0.5);
        assert_eq!(h.mobility_weight, 0.3);
    }

    #[test]
    fn test_future_options_counts_open_cells_in_range() {
        let mut board = Board::from_fn(BOARD_RADIUS, |_| 5).unwrap();
        let candidate = *board.find_cell(Hex::ORIGIN).unwrap();

        // Radius 1 around the center holds 6 cells besides the candidate
        assert_eq!(future_options(&board, &candidate, 1), 6);
        assert_eq!(future_options(&board, &candidate, 0), 0);

        board.cell_mut(Hex::new(1, 0)).unwrap().active = false;
        board.cell_mut(Hex::new(0, 1)).unwrap().occupant = Some(crate::game::Side::Ai);
        assert_eq!(future_options(&board, &candidate, 1), 4);
        // Negative projected fuel reaches nothing
        assert_eq!(future_options(&board, &candidate, -3), 0);
    }

    #[test]
    fn test_score_formula() {
        let board = Board::from_fn(BOARD_RADIUS, |_| 6).unwrap();
        let mover = mover_at(Hex::new(2, -4), 12);
        let candidate = *board.find_cell(Hex::new(2, -1)).unwrap();

        // Projected fuel 12 - 3 + 6 = 15 reaches every other cell
        let expected = 2.0 * 6.0 + 10.0 * (6.0 / 3.0) - 0.5 * 2.0 + 0.3 * 60.0;
        let score = Heuristics::default().score(&mover, &board, &candidate, 3);
        assert!((score - expected).abs() < 1e-9, "{} != {}", score, expected);
    }

    #[test]
    fn test_heuristics_roundtrip_file() {
        let path = std::env::temp_dir().join("hexfuel_heuristics_test.json");
        let custom = Heuristics {
            mobility_weight: 1.5,
            ..Heuristics::default()
        };
        custom.save(&path).unwrap();
        let loaded = Heuristics::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, custom);
    }
}
