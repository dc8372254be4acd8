//! Snaked - A slither-style circular arena game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (locomotion, growth, orbs, session state)
//! - `platform`: Input sampling and the browser binding
//! - `highscores`: Best score across sessions
//! - `skin`: Cosmetic snake selection

pub mod highscores;
pub mod platform;
pub mod sim;
pub mod skin;

pub use highscores::HighScore;
pub use skin::{Pattern, Skin};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions
    pub const ARENA_RADIUS: f32 = 3000.0;
    /// Width of the flame ring drawn on the arena edge
    pub const FLAME_RING_WIDTH: f32 = 40.0;

    /// Snake defaults
    pub const SNAKE_INIT_LEN: usize = 8;
    pub const SNAKE_MIN_LEN: usize = 6;
    pub const SNAKE_INIT_SPEED: f32 = 2.2;
    pub const SNAKE_BOOST_SPEED: f32 = 4.3;
    /// Maximum heading change per tick (radians)
    pub const TURN_SPEED: f32 = 0.13;
    pub const SEGMENT_SPACING: f32 = 14.0;
    pub const SEGMENT_SIZE: f32 = 16.0;

    /// Length lost per tick while boosting, before length scaling
    pub const SNAKE_BOOST_LOSS_BASE: f32 = 0.008;
    /// Floor for the per-tick boost loss
    pub const SNAKE_BOOST_LOSS_MIN: f32 = 0.002;
    /// How strongly length slows the boost loss
    pub const SNAKE_BOOST_LOSS_FACTOR: f32 = 0.33;

    /// Small orb population kept on the field
    pub const ORB_FREQ: usize = 700;
    pub const ORB_MINI_SIZE: f32 = 4.0;
    pub const ORB_LARGE_SIZE: f32 = 20.0;
    /// Keeps spawned orbs off the flame ring
    pub const ORB_SPAWN_MARGIN: f32 = 80.0;
    /// Small orbs needed for one new segment
    pub const SMALL_ORBS_PER_SEGMENT: u32 = 3;
    pub const SMALL_ORB_SCORE: u64 = 1;
    pub const LARGE_ORB_SCORE: u64 = 10;

    /// Boost trail
    pub const BOOST_ORB_TRAIL_SIZE: f32 = 2.5;
    /// Distance the head travels between trail drops
    pub const BOOST_ORB_TRAIL_DIST: f32 = 12.0;
    /// Duration of a double-click boost pulse (ms)
    pub const BOOST_PULSE_MS: f64 = 300.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Shortest signed rotation that takes `from` onto `to`
#[inline]
pub fn angle_diff(to: f32, from: f32) -> f32 {
    normalize_angle(to - from)
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
