//! Integration tests for HEXFUEL
//!
//! Tests the full stack: core game logic, AI players with loaded weights, and
//! the `hexfuel` binary itself

use hexfuel_core::{
    GameConfig, GameState, GreedyAi, Heuristics, MoveSelector, Side, TurnReport, Winner,
};
use serde_json::Value;
use std::process::Command;
use std::time::Instant;

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn hexfuel() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hexfuel"))
}

/// Play a whole game, returning the winner and number of moves
fn play_game(seed: u64, human: &dyn MoveSelector, ai: &dyn MoveSelector) -> (Winner, usize) {
    let mut game = GameState::new(&GameConfig { seed: Some(seed) }).unwrap();
    let mut moves = 0;

    while !game.is_over() {
        let selector = match game.turn() {
            Side::Human => human,
            Side::Ai => ai,
        };
        if let TurnReport::Moved(_) = game.play_turn(selector).unwrap() {
            moves += 1;
        }
    }

    (game.outcome().unwrap().winner, moves)
}

// ============================================================================
// AI TESTS
// ============================================================================

#[test]
fn test_loaded_heuristics_drive_play() {
    let path = std::env::temp_dir().join("hexfuel_integration_weights.json");
    let weights = Heuristics {
        value_weight: 5.0,
        efficiency_weight: 0.0,
        center_weight: 0.0,
        mobility_weight: 0.0,
    };
    weights.save(&path).unwrap();

    let loaded = Heuristics::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded, weights);

    let greedy_values = GreedyAi::new(loaded);
    let default: GreedyAi = GreedyAi::default();
    let (_, moves) = play_game(3, &greedy_values, &default);
    assert!(moves > 0);
}

#[test]
fn test_selfplay_performance() {
    let ai: GreedyAi = GreedyAi::default();
    let start = Instant::now();
    for seed in 0..20 {
        play_game(seed, &ai, &ai);
    }
    let elapsed = start.elapsed();
    println!("20 greedy games in {:?}", elapsed);
    assert!(elapsed.as_secs() < 30);
}

// ============================================================================
// BINARY TESTS
// ============================================================================

#[test]
fn test_selfplay_json_output() {
    let output = hexfuel()
        .args(["selfplay", "--games", "3", "--seed", "11", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_games"], 3);
    let wins = json["human_wins"].as_u64().unwrap()
        + json["ai_wins"].as_u64().unwrap()
        + json["draws"].as_u64().unwrap();
    assert_eq!(wins, 3);
    assert_eq!(json["games"].as_array().unwrap().len(), 3);
}

#[test]
fn test_selfplay_seed_is_reproducible() {
    let run = || {
        hexfuel()
            .args(["--seed", "5", "selfplay", "--games", "2", "--json"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_selfplay_missing_heuristics_fails() {
    let output = hexfuel()
        .args(["selfplay", "--human-heuristics", "/nonexistent/weights.json"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_play_quits_on_command() {
    use std::io::Write;
    use std::process::Stdio;

    let mut child = hexfuel()
        .args(["play", "--seed", "1"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"quit\n").unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("cells left"));
}
