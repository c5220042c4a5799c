//! Game state: movers, turn order, move resolution and termination

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::ai::MoveSelector;
use crate::board::{Board, Cell};
use crate::error::{GameError, IllegalMove, NoMoves};
use crate::hex::{Hex, BOARD_RADIUS};
use crate::rules::{check_move, has_legal_move, legal_destinations};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Fuel each mover starts with
pub const STARTING_FUEL: i32 = 12;

pub const HUMAN_START: Hex = Hex::new(-2, 4);
pub const AI_START: Hex = Hex::new(2, -4);

/// The game ends once this few active cells remain
const ENDGAME_CELLS: usize = 2;

// ============================================================================
// CORE TYPES
// ============================================================================

/// One of the two participants
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Human,
    Ai,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Ai,
            Side::Ai => Side::Human,
        }
    }

    /// Fixed starting cell
    pub fn start(self) -> Hex {
        match self {
            Side::Human => HUMAN_START,
            Side::Ai => AI_START,
        }
    }

    /// Initial sprite facing in degrees
    fn initial_facing(self) -> f32 {
        match self {
            Side::Human => 30.0,
            Side::Ai => 210.0,
        }
    }
}

/// A piece on the board. `position` is a key into the [`Board`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Mover {
    pub position: Hex,
    /// Degrees; presentation only, the rules never read it
    pub facing: f32,
    pub fuel: i32,
}

impl Mover {
    fn new(side: Side) -> Self {
        Self {
            position: side.start(),
            facing: side.initial_facing(),
            fuel: STARTING_FUEL,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Human,
    Ai,
    Draw,
}

impl From<Side> for Winner {
    fn from(side: Side) -> Self {
        match side {
            Side::Human => Winner::Human,
            Side::Ai => Winner::Ai,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// A mover had no legal destination
    NoMoves,
    /// Only two active cells were left
    TwoCellsRemain,
}

/// Final result of a session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: Winner,
    pub human_fuel: i32,
    pub ai_fuel: i32,
    pub reason: EndReason,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "outcome")]
pub enum Phase {
    InProgress,
    Over(Outcome),
}

/// Emitted for every applied move
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MoveApplied {
    pub side: Side,
    pub from: Hex,
    pub to: Hex,
    pub distance: i32,
    /// Mover's fuel after the move
    pub fuel: i32,
    /// Set when this move ended the game
    pub outcome: Option<Outcome>,
}

/// Result of letting a [`MoveSelector`] play the current turn
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum TurnReport {
    Moved(MoveApplied),
    /// The selector found no destination; the game is now over
    Stalled(Outcome),
}

/// Read-only view handed to presentation layers
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub radius: i32,
    pub cells: Vec<Cell>,
    pub active_cells: usize,
    pub human: Mover,
    pub ai: Mover,
    pub turn: Side,
    pub phase: Phase,
}

/// Session configuration
#[derive(Clone, Debug, Default)]
pub struct GameConfig {
    /// Seed for board generation (None = from entropy)
    pub seed: Option<u64>,
}

// ============================================================================
// GAME STATE
// ============================================================================

/// One live session. Owns the board and both movers.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    human: Mover,
    ai: Mover,
    turn: Side,
    phase: Phase,
    rng: ChaCha8Rng,
}

impl GameState {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Start a session on a freshly generated board
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let board = Board::generate(BOARD_RADIUS, &mut rng);
        Self::assemble(board, rng)
    }

    /// Start a session on a prepared board
    pub fn with_board(board: Board) -> Result<Self, GameError> {
        Self::assemble(board, ChaCha8Rng::from_entropy())
    }

    fn assemble(mut board: Board, rng: ChaCha8Rng) -> Result<Self, GameError> {
        let radius = board.radius();
        for side in [Side::Human, Side::Ai] {
            let coord = side.start();
            let cell = board
                .cell_mut(coord)
                .ok_or(GameError::MalformedBoard { coord, radius })?;
            cell.occupant = Some(side);
        }

        Ok(Self {
            board,
            human: Mover::new(Side::Human),
            ai: Mover::new(Side::Ai),
            turn: Side::Human,
            phase: Phase::InProgress,
            rng,
        })
    }

    /// Replace the whole session: new board values, movers back at their starts
    pub fn restart(&mut self) -> Result<(), GameError> {
        let board = Board::generate(BOARD_RADIUS, &mut self.rng);
        *self = Self::assemble(board, self.rng.clone())?;
        tracing::info!("Game restarted");
        Ok(())
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mover(&self, side: Side) -> &Mover {
        match side {
            Side::Human => &self.human,
            Side::Ai => &self.ai,
        }
    }

    pub fn human(&self) -> &Mover {
        &self.human
    }

    pub fn ai(&self) -> &Mover {
        &self.ai
    }

    /// Side to move (or the side that moved last, once over)
    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Over(outcome) => Some(outcome),
            Phase::InProgress => None,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over(_))
    }

    /// Legal destinations for either side
    pub fn legal_destinations(&self, side: Side) -> Vec<Hex> {
        legal_destinations(self.mover(side), &self.board)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            radius: self.board.radius(),
            cells: self.board.cells().copied().collect(),
            active_cells: self.board.active_count(),
            human: self.human,
            ai: self.ai,
            turn: self.turn,
            phase: self.phase,
        }
    }

    // ========================================================================
    // MOVES
    // ========================================================================

    /// Validate and apply a move for `actor`.
    ///
    /// Rejections leave the state untouched and the turn where it was.
    pub fn request_move(
        &mut self,
        actor: Side,
        destination: Hex,
    ) -> Result<MoveApplied, GameError> {
        if self.is_over() {
            return Err(IllegalMove::GameOver.into());
        }
        if actor != self.turn {
            return Err(IllegalMove::NotYourTurn(actor).into());
        }

        let distance = check_move(self.mover(actor), destination, &self.board).map_err(|reason| {
            tracing::debug!(?actor, %destination, %reason, "Rejected move");
            reason
        })?;

        self.apply_move(actor, destination, distance)
    }

    /// Let `selector` choose and play the move for the side on turn
    pub fn play_turn(&mut self, selector: &dyn MoveSelector) -> Result<TurnReport, GameError> {
        if self.is_over() {
            return Err(IllegalMove::GameOver.into());
        }

        let side = self.turn;
        match selector.choose_move(self.mover(side), &self.board) {
            Ok(destination) => self.request_move(side, destination).map(TurnReport::Moved),
            Err(NoMoves) => {
                let outcome = self.stalled_outcome(side);
                tracing::info!(?side, ?outcome, "No legal moves, game over");
                self.phase = Phase::Over(outcome);
                Ok(TurnReport::Stalled(outcome))
            }
        }
    }

    fn apply_move(&mut self, side: Side, to: Hex, distance: i32) -> Result<MoveApplied, GameError> {
        let from = self.mover(side).position;

        let dest = self
            .board
            .cell_mut(to)
            .ok_or(IllegalMove::OffBoard(to))?;
        dest.occupant = Some(side);
        let value = dest.value;

        // The departed cell leaves play for good
        if let Some(origin) = self.board.cell_mut(from) {
            origin.occupant = None;
            origin.active = false;
        }

        let mover = self.mover_mut(side);
        mover.fuel = mover.fuel - distance + value;
        mover.position = to;
        let fuel = mover.fuel;

        tracing::info!(?side, %from, %to, distance, value, fuel, "Move applied");

        let outcome = self.check_termination();
        match outcome {
            Some(outcome) => {
                tracing::info!(?outcome, "Game over");
                self.phase = Phase::Over(outcome);
            }
            None => self.turn = side.opponent(),
        }

        Ok(MoveApplied {
            side,
            from,
            to,
            distance,
            fuel,
            outcome,
        })
    }

    fn mover_mut(&mut self, side: Side) -> &mut Mover {
        match side {
            Side::Human => &mut self.human,
            Side::Ai => &mut self.ai,
        }
    }

    // ========================================================================
    // TERMINATION
    // ========================================================================

    /// Evaluated after every applied move, before the turn switches
    fn check_termination(&self) -> Option<Outcome> {
        if self.board.active_count() <= ENDGAME_CELLS {
            return Some(self.fuel_outcome());
        }
        if !has_legal_move(&self.human, &self.board) {
            return Some(self.stalled_outcome(Side::Human));
        }
        if !has_legal_move(&self.ai, &self.board) {
            return Some(self.stalled_outcome(Side::Ai));
        }
        None
    }

    /// Higher fuel wins; equal fuel is a draw
    fn fuel_outcome(&self) -> Outcome {
        let winner = match self.human.fuel.cmp(&self.ai.fuel) {
            std::cmp::Ordering::Greater => Winner::Human,
            std::cmp::Ordering::Less => Winner::Ai,
            std::cmp::Ordering::Equal => Winner::Draw,
        };
        self.outcome_with(winner, EndReason::TwoCellsRemain)
    }

    /// `stuck` cannot move, so the other side wins regardless of fuel
    fn stalled_outcome(&self, stuck: Side) -> Outcome {
        self.outcome_with(stuck.opponent().into(), EndReason::NoMoves)
    }

    fn outcome_with(&self, winner: Winner, reason: EndReason) -> Outcome {
        Outcome {
            winner,
            human_fuel: self.human.fuel,
            ai_fuel: self.ai.fuel,
            reason,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
