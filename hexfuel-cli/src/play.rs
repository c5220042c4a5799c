//! Play command - human against the greedy AI in the terminal
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: run_session() - the read/apply/reply loop
//! - Level 3: human_turn(), ai_turn()
//! - Level 4: parse_command(), render_board(), describe_outcome()

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};

use hexfuel_core::{
    EndReason, GameConfig, GameState, GreedyAi, Hex, MoveSelector, Outcome, Side, TurnReport,
    Winner,
};

/// One line of player input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Move(Hex),
    Restart,
    Quit,
    Help,
}

const HELP: &str = "\
Enter a destination as `q r s` or `q r`.
Moves go in a straight line and cost one fuel per step.
Commands: restart, quit, help";

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command against stdin/stdout
pub fn run(seed: Option<u64>) -> Result<()> {
    let mut game = GameState::new(&GameConfig { seed })?;
    let ai: GreedyAi = GreedyAi::default();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut game, &ai, stdin.lock(), stdout.lock())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Drive one terminal session until `quit` or end of input
fn run_session<R: BufRead, W: Write>(
    game: &mut GameState,
    ai: &dyn MoveSelector,
    input: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "{}\n", HELP)?;
    show_position(game, &mut out)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(out, "{}", HELP)?,
            Ok(Command::Restart) => {
                game.restart()?;
                writeln!(out, "New game.")?;
                show_position(game, &mut out)?;
            }
            Ok(Command::Move(destination)) => {
                if human_turn(game, destination, &mut out)? && !game.is_over() {
                    ai_turn(game, ai, &mut out)?;
                }
                show_position(game, &mut out)?;
            }
            Err(e) => writeln!(out, "{}", e)?,
        }
    }

    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Apply the player's move; returns whether it was accepted
fn human_turn<W: Write>(game: &mut GameState, destination: Hex, out: &mut W) -> Result<bool> {
    match game.request_move(Side::Human, destination) {
        Ok(applied) => {
            writeln!(
                out,
                "You move {} -> {} ({} steps), fuel {}",
                applied.from, applied.to, applied.distance, applied.fuel
            )?;
            Ok(true)
        }
        Err(e) => {
            writeln!(out, "Rejected: {}", e)?;
            Ok(false)
        }
    }
}

fn ai_turn<W: Write>(game: &mut GameState, ai: &dyn MoveSelector, out: &mut W) -> Result<()> {
    match game.play_turn(ai)? {
        TurnReport::Moved(applied) => writeln!(
            out,
            "AI moves {} -> {} ({} steps), fuel {}",
            applied.from, applied.to, applied.distance, applied.fuel
        )?,
        TurnReport::Stalled(_) => writeln!(out, "AI has no legal move.")?,
    }
    Ok(())
}

fn show_position<W: Write>(game: &GameState, out: &mut W) -> Result<()> {
    writeln!(out, "\n{}", render_board(game))?;
    writeln!(
        out,
        "You {} fuel {} | AI {} fuel {} | {} cells left",
        game.human().position,
        game.human().fuel,
        game.ai().position,
        game.ai().fuel,
        game.board().active_count()
    )?;

    match game.outcome() {
        Some(outcome) => writeln!(out, "{}\nType restart or quit.", describe_outcome(&outcome))?,
        None => write!(out, "> ")?,
    }
    out.flush()?;
    Ok(())
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Parse `q r s`, `q r`, or a command word
fn parse_command(line: &str) -> Result<Command> {
    let words: Vec<&str> = line.split_whitespace().collect();

    match words.as_slice() {
        ["quit"] | ["exit"] | ["q"] => return Ok(Command::Quit),
        ["restart"] | ["new"] => return Ok(Command::Restart),
        ["help"] | ["?"] => return Ok(Command::Help),
        _ => {}
    }

    let numbers = words
        .iter()
        .map(|w| w.trim_matches(|c| c == ',' || c == '(' || c == ')').parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Not a coordinate or command: {:?} (try help)", line.trim()))?;

    let hex = match numbers.as_slice() {
        [q, r] => Hex::from_axial(*q, *r)?,
        [q, r, s] => Hex::from_cube(*q, *r, *s)?,
        _ => bail!("Expected two or three numbers, got {}", numbers.len()),
    };
    Ok(Command::Move(hex))
}

/// Draw the board as rows of constant `r`, top to bottom.
///
/// `H`/`A` mark the movers, `.` a destroyed cell, otherwise the cell value.
fn render_board(game: &GameState) -> String {
    let board = game.board();
    let radius = board.radius();
    let mut rows = Vec::new();

    for r in -radius..=radius {
        let q_min = (-radius).max(-r - radius);
        let q_max = radius.min(-r + radius);

        let cells: Vec<String> = (q_min..=q_max)
            .map(|q| match board.find_cell(Hex::new(q, r)) {
                Some(cell) => match cell.occupant {
                    Some(Side::Human) => "  H".to_string(),
                    Some(Side::Ai) => "  A".to_string(),
                    None if !cell.active => "  .".to_string(),
                    None => format!("{:>3}", cell.value),
                },
                None => "   ".to_string(),
            })
            .collect();

        let indent = " ".repeat((r.unsigned_abs() as usize) * 3 / 2);
        rows.push(format!("{}{}", indent, cells.join(" ")));
    }

    rows.join("\n")
}

fn describe_outcome(outcome: &Outcome) -> String {
    let headline = match outcome.winner {
        Winner::Human => "You win!",
        Winner::Ai => "The AI wins.",
        Winner::Draw => "Draw.",
    };
    let reason = match outcome.reason {
        EndReason::NoMoves => "a mover ran out of moves",
        EndReason::TwoCellsRemain => "only two cells remain",
    };
    format!(
        "Game over: {} ({}; fuel {} vs {})",
        headline, reason, outcome.human_fuel, outcome.ai_fuel
    )
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use hexfuel_core::{Board, BOARD_RADIUS};

    fn fixed_game() -> GameState {
        let board =
            Board::from_fn(BOARD_RADIUS, |h| if h == Hex::new(-2, 1) { 7 } else { 5 }).unwrap();
        GameState::with_board(board).unwrap()
    }

    fn session(game: &mut GameState, script: &str) -> String {
        let ai: GreedyAi = GreedyAi::default();
        let mut out = Vec::new();
        run_session(game, &ai, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(
            parse_command("-2 1 1").unwrap(),
            Command::Move(Hex::new(-2, 1))
        );
        assert_eq!(parse_command("  3 -1 ").unwrap(), Command::Move(Hex::new(3, -1)));
        assert_eq!(
            parse_command("(1, -1, 0)").unwrap(),
            Command::Move(Hex::new(1, -1))
        );
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert_eq!(parse_command("restart").unwrap(), Command::Restart);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        // Cube components must sum to zero
        assert!(parse_command("1 1 1").is_err());
        assert!(parse_command("1").is_err());
        assert!(parse_command("1 2 3 4").is_err());
        assert!(parse_command("north").is_err());
        // Third component would not fit in an i32
        assert!(parse_command("-2147483648 0").is_err());
    }

    #[test]
    fn test_render_board_shape() {
        let game = fixed_game();
        let text = render_board(&game);
        let rows: Vec<&str> = text.lines().collect();

        assert_eq!(rows.len(), 9);
        assert_eq!(rows[4].split_whitespace().count(), 9);
        assert_eq!(rows[0].split_whitespace().count(), 5);
        // AI starts at r = -4, human at r = 4
        assert!(rows[0].contains('A'));
        assert!(rows[8].contains('H'));
        assert!(rows[5].contains('7'));
    }

    #[test]
    fn test_session_move_and_ai_reply() {
        let mut game = fixed_game();
        let output = session(&mut game, "-2 1 1\nquit\n");

        assert!(output.contains("You move (-2, 4, -2) -> (-2, 1, 1) (3 steps), fuel 16"));
        assert!(output.contains("AI moves (2, -4, 2)"));
        assert_eq!(game.human().position, Hex::new(-2, 1));
        assert_eq!(game.turn(), Side::Human);
        assert_eq!(game.board().active_count(), 59);
    }

    #[test]
    fn test_session_rejected_move_keeps_state() {
        let mut game = fixed_game();
        let output = session(&mut game, "-1 2 -1\n");

        assert!(output.contains("Rejected:"));
        assert_eq!(game.human().position, Hex::new(-2, 4));
        assert_eq!(game.board().active_count(), 61);
    }

    #[test]
    fn test_session_restart() {
        let mut game = fixed_game();
        let output = session(&mut game, "-2 1 1\nrestart\n");

        assert!(output.contains("New game."));
        assert_eq!(game.human().position, Hex::new(-2, 4));
        assert_eq!(game.board().active_count(), 61);
    }

    #[test]
    fn test_describe_outcome() {
        let outcome = Outcome {
            winner: Winner::Draw,
            human_fuel: 9,
            ai_fuel: 9,
            reason: EndReason::TwoCellsRemain,
        };
        assert_eq!(
            describe_outcome(&outcome),
            "Game over: Draw. (only two cells remain; fuel 9 vs 9)"
        );
    }
}
