//! Board cells: generation, lookup and per-cell state

use rand::Rng;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::GameError;
use crate::game::Side;
use crate::hex::{hexagon, Hex};

/// Smallest magnitude a cell value can have
pub const MIN_CELL_VALUE: i32 = 5;
/// Largest magnitude a cell value can have
pub const MAX_CELL_VALUE: i32 = 9;

/// A single platform on the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Cell {
    #[serde(flatten)]
    pub coord: Hex,
    /// Fuel gained (or lost) by landing here
    pub value: i32,
    pub occupant: Option<Side>,
    /// False once a mover has departed; never reset
    pub active: bool,
}

impl Cell {
    fn new(coord: Hex, value: i32) -> Self {
        Self {
            coord,
            value,
            occupant: None,
            active: true,
        }
    }

    /// Active and unoccupied
    pub fn is_open(&self) -> bool {
        self.active && self.occupant.is_none()
    }
}

/// All cells of a hexagonal board, stored in canonical enumeration order
#[derive(Clone, Debug)]
pub struct Board {
    radius: i32,
    cells: Vec<Cell>,
    index: FxHashMap<Hex, usize>,
}

impl Board {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Generate a board with random cell values
    pub fn generate<R: Rng + ?Sized>(radius: i32, rng: &mut R) -> Self {
        let cells = hexagon(radius)
            .map(|coord| Cell::new(coord, random_value(rng)))
            .collect();
        Self::from_cells(radius, cells)
    }

    /// Build a board with caller-chosen values
    pub fn from_fn(radius: i32, mut value_of: impl FnMut(Hex) -> i32) -> Result<Self, GameError> {
        let cells = hexagon(radius)
            .map(|coord| {
                let value = value_of(coord);
                if is_valid_value(value) {
                    Ok(Cell::new(coord, value))
                } else {
                    Err(GameError::InvalidCellValue { coord, value })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_cells(radius, cells))
    }

    fn from_cells(radius: i32, cells: Vec<Cell>) -> Self {
        let index = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (cell.coord, i))
            .collect();
        Self {
            radius,
            cells,
            index,
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Total number of cells, destroyed ones included
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate cells in canonical order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Exact-match lookup. Destroyed cells are still returned.
    pub fn find_cell(&self, coord: Hex) -> Option<&Cell> {
        self.index.get(&coord).map(|&i| &self.cells[i])
    }

    pub fn contains(&self, coord: Hex) -> bool {
        self.index.contains_key(&coord)
    }

    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|c| c.active).count()
    }

    pub(crate) fn cell_mut(&mut self, coord: Hex) -> Option<&mut Cell> {
        let i = *self.index.get(&coord)?;
        Some(&mut self.cells[i])
    }
}

/// Value drawn for a new cell: a coin flip picks the sign, then a uniform magnitude
pub fn random_value<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    let magnitude = rng.gen_range(MIN_CELL_VALUE..=MAX_CELL_VALUE);
    if rng.gen_bool(0.5) {
        -magnitude
    } else {
        magnitude
    }
}

pub fn is_valid_value(value: i32) -> bool {
    (MIN_CELL_VALUE..=MAX_CELL_VALUE).contains(&value.abs())
}
