//! Field behavior tests on the reference board.
//!
//! Every player rolls the same outcome each round, so all players follow the
//! same path. Paths that hop from match to match avoid all match fees, which
//! isolates the effect of the final field.

use std::cell::RefCell;
use std::rc::Rc;

use worldcup_board::{FixedDie, PlayerStatus, RecordingScoreBoard, TurnSummary, WorldCup, ZeroDie};

/// Play `rolls.len() + extra_rounds` rounds with `players` players all
/// following `rolls`, and return the turn summaries of the last round.
fn last_round(players: usize, rolls: &[u32], extra_rounds: u32) -> Vec<TurnSummary> {
    let mut game = WorldCup::new();
    game.add_die(Some(Box::new(FixedDie::repeated(rolls, players))));
    game.add_die(Some(Box::new(ZeroDie)));
    for i in 1..=players {
        game.add_player(format!("Player-{i}"));
    }
    let recorder = Rc::new(RefCell::new(RecordingScoreBoard::new()));
    game.set_scoreboard(Some(Box::new(Rc::clone(&recorder))));

    game.play(rolls.len() as u32 + extra_rounds).unwrap();

    let recorder = recorder.borrow();
    let turns: Vec<_> = recorder.turns().cloned().collect();
    turns[turns.len() - players..].to_vec()
}

fn assert_all(turns: &[TurnSummary], field: &str, status: PlayerStatus, money: &[u64]) {
    assert_eq!(turns.len(), money.len());
    for (turn, &expected) in turns.iter().zip(money) {
        assert_eq!(turn.field, field, "{}", turn.player);
        assert_eq!(turn.status, status, "{}", turn.player);
        assert_eq!(turn.money, expected, "{}", turn.player);
    }
}

// Match-to-match hops from the start: 0 -> 1 -> 3 -> 5 -> 6 -> 8 -> 10
const TO_FRANCE: [u32; 6] = [1, 2, 2, 1, 2, 2];

#[test]
fn test_landing_on_season_start() {
    let mut rolls = TO_FRANCE.to_vec();
    rolls.push(2);
    let turns = last_round(2, &rolls, 0);
    assert_all(&turns, "Season start", PlayerStatus::InPlay, &[1050, 1050]);
}

#[test]
fn test_passing_season_start() {
    // 10 -> 1 passes the penalty kick and the season start
    let mut rolls = TO_FRANCE.to_vec();
    rolls.push(3);
    let turns = last_round(2, &rolls, 0);
    assert_all(&turns, "Match vs San Marino", PlayerStatus::InPlay, &[1050, 1050]);
}

#[test]
fn test_landing_on_rest_day() {
    let turns = last_round(2, &[1, 1], 0);
    assert_all(&turns, "Rest day", PlayerStatus::InPlay, &[1000, 1000]);
}

#[test]
fn test_landing_on_goal() {
    let turns = last_round(2, &[1, 2, 2, 1, 2, 1], 0);
    assert_all(&turns, "Goal", PlayerStatus::InPlay, &[1120, 1120]);
}

#[test]
fn test_passing_goal() {
    let turns = last_round(2, &[1, 2, 2, 1, 2, 2], 0);
    assert_all(&turns, "Match vs France", PlayerStatus::InPlay, &[1000, 1000]);
}

#[test]
fn test_landing_on_penalty_kick() {
    let mut rolls = TO_FRANCE.to_vec();
    rolls.push(1);
    let turns = last_round(2, &rolls, 0);
    assert_all(&turns, "Penalty kick", PlayerStatus::InPlay, &[820, 820]);
}

#[test]
fn test_landing_on_bookmaker() {
    let turns = last_round(4, &[1, 2, 2, 1, 1], 0);
    assert_eq!(turns.len(), 4);
    let money: Vec<_> = turns.iter().map(|turn| turn.money).collect();
    assert_eq!(money, vec![1100, 900, 900, 1100]);
    assert!(turns.iter().all(|turn| turn.field == "Bookmaker"));
}

#[test]
fn test_passing_bookmaker() {
    let turns = last_round(2, &[1, 2, 2, 1, 2], 0);
    assert_all(&turns, "Match vs Argentina", PlayerStatus::InPlay, &[1000, 1000]);
}

#[test]
fn test_landing_on_yellow_card() {
    let rolls = [1, 2, 1];
    assert_all(
        &last_round(2, &rolls, 0),
        "Yellow card",
        PlayerStatus::Waiting(3),
        &[1000, 1000],
    );
    assert_all(
        &last_round(2, &rolls, 1),
        "Yellow card",
        PlayerStatus::Waiting(2),
        &[1000, 1000],
    );
    assert_all(
        &last_round(2, &rolls, 2),
        "Yellow card",
        PlayerStatus::Waiting(1),
        &[1000, 1000],
    );
}

#[test]
fn test_passing_yellow_card() {
    let turns = last_round(2, &[1, 2, 2], 0);
    assert_all(&turns, "Match vs Mexico", PlayerStatus::InPlay, &[1000, 1000]);
}

#[test]
fn test_landing_on_matches_without_passers() {
    for (rolls, field) in [
        (vec![1], "Match vs San Marino"),
        (vec![1, 2], "Match vs Liechtenstein"),
        (vec![1, 2, 2], "Match vs Mexico"),
        (vec![1, 2, 2, 1], "Match vs Saudi Arabia"),
        (vec![1, 2, 2, 1, 2], "Match vs Argentina"),
        (TO_FRANCE.to_vec(), "Match vs France"),
    ] {
        let turns = last_round(2, &rolls, 0);
        assert_all(&turns, field, PlayerStatus::InPlay, &[1000, 1000]);
    }
}

#[test]
fn test_passing_single_matches() {
    // (hops to the match before, steps to the match after, fee, destination)
    for (before, steps, money, field) in [
        (vec![], 3, 840, "Match vs Liechtenstein"),
        (vec![1], 4, 780, "Match vs Mexico"),
        (vec![1, 2], 3, 700, "Match vs Saudi Arabia"),
        (vec![1, 2, 2], 3, 720, "Match vs Argentina"),
        (vec![1, 2, 2, 1], 4, 750, "Match vs France"),
    ] {
        let mut rolls: Vec<u32> = before;
        rolls.push(steps);
        let turns = last_round(2, &rolls, 0);
        assert_all(&turns, field, PlayerStatus::InPlay, &[money, money]);
    }
}

#[test]
fn test_passing_france_and_season_start() {
    // 8 -> 1: -400 for France, +50 for the season start
    let turns = last_round(2, &[1, 2, 2, 1, 2, 5], 0);
    assert_all(&turns, "Match vs San Marino", PlayerStatus::InPlay, &[650, 650]);
}
