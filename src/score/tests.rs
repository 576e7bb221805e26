//! Score domain: tests for the score sink.

use bevy::prelude::Entity;

use super::{CoinCollected, Score, ScoreSink, credit_coins};

/// Sink that only remembers what it was given.
#[derive(Default)]
struct Ledger(Vec<u32>);

impl ScoreSink for Ledger {
    fn add_points(&mut self, points: u32) {
        self.0.push(points);
    }

    fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

fn coin(value: u32) -> CoinCollected {
    CoinCollected {
        coin: Entity::PLACEHOLDER,
        value,
    }
}

#[test]
fn test_score_starts_empty() {
    let score = Score::default();
    assert_eq!(score.total(), 0);
    assert_eq!(score.pickups, 0);
}

#[test]
fn test_score_counts_points_and_pickups() {
    let mut score = Score::default();
    score.add_points(10);
    score.add_points(5);
    assert_eq!(score.total(), 15);
    assert_eq!(score.pickups, 2);
}

#[test]
fn test_score_saturates() {
    let mut score = Score {
        points: u32::MAX - 1,
        pickups: 0,
    };
    score.add_points(10);
    assert_eq!(score.total(), u32::MAX);
}

#[test]
fn test_credit_coins_feeds_any_sink() {
    let events = [coin(10), coin(1), coin(25)];
    let mut ledger = Ledger::default();

    assert_eq!(credit_coins(&mut ledger, &events), 36);
    assert_eq!(ledger.0, vec![10, 1, 25]);
    assert_eq!(ledger.total(), 36);
}
