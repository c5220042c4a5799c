//! Selfplay command - the greedy AI plays both sides
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_players(), play_match(), report_results()
//! - Level 3: play_single_game(), compute_statistics()
//! - Level 4: formatting utilities

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use hexfuel_core::{
    EndReason, GameConfig, GameState, GreedyAi, Heuristics, MoveSelector, Side, TurnReport, Winner,
};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct SelfplayArgs {
    /// Number of games to play
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Heuristic weights (JSON) for the side moving first
    #[arg(long, value_name = "FILE")]
    pub human_heuristics: Option<PathBuf>,

    /// Heuristic weights (JSON) for the side moving second
    #[arg(long, value_name = "FILE")]
    pub ai_heuristics: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of a single game
#[derive(Clone, Debug)]
struct GameRecord {
    game_number: usize,
    winner: Winner,
    reason: EndReason,
    moves: usize,
    human_fuel: i32,
    ai_fuel: i32,
}

/// Aggregated match results
#[derive(Clone, Debug)]
struct MatchResults {
    games: Vec<GameRecord>,
    human_wins: usize,
    ai_wins: usize,
    draws: usize,
    avg_moves: f32,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run selfplay command
///
/// 1. Load both players' heuristics
/// 2. Play the match (multiple games)
/// 3. Report results
pub fn run(args: SelfplayArgs, seed: Option<u64>) -> Result<()> {
    let (human, ai) = load_players(&args)?;

    tracing::info!("Starting selfplay: {} games", args.games);

    let results = play_match(&human, &ai, args.games, seed)?;

    report_results(&results, &args);

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Build one greedy player per side
fn load_players(args: &SelfplayArgs) -> Result<(GreedyAi, GreedyAi)> {
    let human = load_heuristics(args.human_heuristics.as_ref())?;
    let ai = load_heuristics(args.ai_heuristics.as_ref())?;
    Ok((GreedyAi::new(human), GreedyAi::new(ai)))
}

/// Play all games in the match
fn play_match(
    human: &dyn MoveSelector,
    ai: &dyn MoveSelector,
    games: usize,
    seed: Option<u64>,
) -> Result<MatchResults> {
    let mut rng = create_rng(seed);
    let mut records = Vec::with_capacity(games);

    for game_num in 0..games {
        let record = play_single_game(human, ai, game_num + 1, rng.gen())?;

        tracing::info!(
            "Game {}: {:?} by {:?} ({} moves, fuel {} vs {})",
            record.game_number,
            record.winner,
            record.reason,
            record.moves,
            record.human_fuel,
            record.ai_fuel
        );

        records.push(record);
    }

    Ok(compute_match_statistics(records))
}

/// Report match results
fn report_results(results: &MatchResults, args: &SelfplayArgs) {
    if args.json {
        print_json_results(results);
    } else {
        print_text_results(results);
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Play one game to completion on a board generated from `game_seed`
fn play_single_game(
    human: &dyn MoveSelector,
    ai: &dyn MoveSelector,
    game_number: usize,
    game_seed: u64,
) -> Result<GameRecord> {
    let mut state = GameState::new(&GameConfig {
        seed: Some(game_seed),
    })?;
    let mut moves = 0;

    let outcome = loop {
        if let Some(outcome) = state.outcome() {
            break outcome;
        }
        let selector = match state.turn() {
            Side::Human => human,
            Side::Ai => ai,
        };
        match state.play_turn(selector)? {
            TurnReport::Moved(_) => moves += 1,
            TurnReport::Stalled(outcome) => break outcome,
        }
    };

    Ok(GameRecord {
        game_number,
        winner: outcome.winner,
        reason: outcome.reason,
        moves,
        human_fuel: outcome.human_fuel,
        ai_fuel: outcome.ai_fuel,
    })
}

/// Compute aggregate statistics from game records
fn compute_match_statistics(games: Vec<GameRecord>) -> MatchResults {
    let count = |winner: Winner| games.iter().filter(|g| g.winner == winner).count();
    let human_wins = count(Winner::Human);
    let ai_wins = count(Winner::Ai);
    let draws = count(Winner::Draw);

    let total_moves: usize = games.iter().map(|g| g.moves).sum();
    let avg_moves = if games.is_empty() {
        0.0
    } else {
        total_moves as f32 / games.len() as f32
    };

    MatchResults {
        games,
        human_wins,
        ai_wins,
        draws,
        avg_moves,
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Load heuristics from file, or the defaults
fn load_heuristics(path: Option<&PathBuf>) -> Result<Heuristics> {
    match path {
        Some(path) => Heuristics::load(path)
            .with_context(|| format!("Failed to load heuristics: {}", path.display())),
        None => Ok(Heuristics::default()),
    }
}

/// Create RNG from seed or random
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn percent(part: usize, total: usize) -> f32 {
    if total > 0 {
        part as f32 / total as f32 * 100.0
    } else {
        0.0
    }
}

/// Print results as JSON
fn print_json_results(results: &MatchResults) {
    #[derive(serde::Serialize)]
    struct JsonGame {
        game_number: usize,
        winner: Winner,
        reason: EndReason,
        moves: usize,
        human_fuel: i32,
        ai_fuel: i32,
    }

    #[derive(serde::Serialize)]
    struct JsonOutput {
        total_games: usize,
        human_wins: usize,
        ai_wins: usize,
        draws: usize,
        avg_moves: f32,
        games: Vec<JsonGame>,
    }

    let output = JsonOutput {
        total_games: results.games.len(),
        human_wins: results.human_wins,
        ai_wins: results.ai_wins,
        draws: results.draws,
        avg_moves: results.avg_moves,
        games: results
            .games
            .iter()
            .map(|g| JsonGame {
                game_number: g.game_number,
                winner: g.winner,
                reason: g.reason,
                moves: g.moves,
                human_fuel: g.human_fuel,
                ai_fuel: g.ai_fuel,
            })
            .collect(),
    };

    if let Ok(json) = serde_json::to_string_pretty(&output) {
        println!("{}", json);
    }
}

/// Print results as text
fn print_text_results(results: &MatchResults) {
    let total = results.games.len();

    println!("\n=== Selfplay Results ===");
    println!("Total games: {}", total);
    println!(
        "First wins:  {} ({:.1}%)",
        results.human_wins,
        percent(results.human_wins, total)
    );
    println!(
        "Second wins: {} ({:.1}%)",
        results.ai_wins,
        percent(results.ai_wins, total)
    );
    println!(
        "Draws:       {} ({:.1}%)",
        results.draws,
        percent(results.draws, total)
    );
    println!("Avg moves:   {:.1}", results.avg_moves);

    println!("\nGame details:");
    for game in &results.games {
        println!(
            "  Game {}: {:?} by {:?} in {} moves ({} vs {} fuel)",
            game.game_number, game.winner, game.reason, game.moves, game.human_fuel, game.ai_fuel
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================
