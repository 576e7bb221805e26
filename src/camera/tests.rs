//! Camera domain: tests for the follow smoothing.

use bevy::math::Vec2;

use super::follow_step;

#[test]
fn test_zero_dt_does_not_move() {
    let current = Vec2::new(10.0, -5.0);
    assert_eq!(follow_step(current, Vec2::ZERO, 6.0, 0.0), current);
}

#[test]
fn test_step_moves_part_of_the_way() {
    let next = follow_step(Vec2::ZERO, Vec2::new(100.0, 0.0), 6.0, 1.0 / 60.0);
    assert!(next.x > 0.0 && next.x < 100.0);
    assert_eq!(next.y, 0.0);
}

#[test]
fn test_long_step_arrives() {
    let target = Vec2::new(100.0, 40.0);
    let next = follow_step(Vec2::ZERO, target, 6.0, 10.0);
    assert!(next.distance(target) < 0.01);
}
