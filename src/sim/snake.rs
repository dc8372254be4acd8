//! The player snake: heading, segment chain, length accounting
//!
//! Segments are a positional constraint chain rather than physics bodies:
//! each one is dragged to sit exactly `SEGMENT_SPACING` behind the one ahead.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::skin::Skin;
use crate::{angle_diff, normalize_angle};

/// Per-tick length lost while boosting with `segment_count` segments
///
/// Shrinks logarithmically with length so long snakes decay slower, never
/// dropping below `SNAKE_BOOST_LOSS_MIN`.
pub fn boost_loss(segment_count: usize) -> f32 {
    let len_factor = segment_count.max(1) as f32;
    let loss =
        SNAKE_BOOST_LOSS_BASE * (1.0 - SNAKE_BOOST_LOSS_FACTOR * len_factor.log10() / 2.0);
    loss.max(SNAKE_BOOST_LOSS_MIN)
}

/// Rotate `dir` toward `target` by at most `max_step`, snapping when close
pub fn steer_toward(dir: f32, target: f32, max_step: f32) -> f32 {
    let diff = angle_diff(target, dir);
    if diff.abs() > max_step {
        normalize_angle(dir + max_step * diff.signum())
    } else {
        target
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snake {
    pub head: Vec2,
    /// Heading in radians
    pub dir: f32,
    /// Body chain, index 0 sits on the head
    pub segments: Vec<Vec2>,
    /// Fractional target length; segment count follows its floor
    pub len: f32,
    /// Actually boosting (requested and long enough)
    pub boosting: bool,
    pub skin: Skin,
}

impl Snake {
    pub fn new(initial_length: usize, skin: Skin) -> Self {
        debug_assert!(initial_length >= 1, "snake needs at least a head segment");
        Self {
            head: Vec2::ZERO,
            dir: 0.0,
            segments: vec![Vec2::ZERO; initial_length],
            len: initial_length as f32,
            boosting: false,
            skin,
        }
    }

    pub fn tail(&self) -> Vec2 {
        self.segments.last().copied().unwrap_or(self.head)
    }

    /// Whether there is length to spend on a boost
    pub fn can_boost(&self) -> bool {
        self.segments.len() > SNAKE_MIN_LEN
    }

    /// Turn toward the target heading; `None` holds the current heading
    pub fn steer(&mut self, target: Option<f32>) {
        if let Some(target) = target {
            self.dir = steer_toward(self.dir, target, TURN_SPEED);
        }
    }

    /// Move the head forward along the heading
    pub fn advance(&mut self, speed: f32) {
        self.head += Vec2::from_angle(self.dir) * speed;
    }

    /// Pin segment 0 to the head and pull every follower to fixed spacing
    ///
    /// A segment stacked on its predecessor (fresh spawn or newly grown tail)
    /// has no direction of its own; it is laid out in line with the link
    /// ahead of it, or straight behind the heading for the first link.
    pub fn relax_chain(&mut self) {
        let Some(first) = self.segments.first_mut() else {
            return;
        };
        let mut prev_before = std::mem::replace(first, self.head);

        let mut lead = Vec2::from_angle(self.dir);
        for i in 1..self.segments.len() {
            let prev = self.segments[i - 1];
            let curr = self.segments[i];
            if prev.distance(curr) != SEGMENT_SPACING {
                let toward_prev = if curr == prev_before {
                    lead
                } else {
                    (prev - curr).try_normalize().unwrap_or(lead)
                };
                self.segments[i] = prev - toward_prev * SEGMENT_SPACING;
            }
            lead = (prev - self.segments[i]).try_normalize().unwrap_or(lead);
            prev_before = curr;
        }
    }

    /// Add one whole segment at the tail
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.len += 1.0;
        self.segments.push(tail);
    }

    /// Spend length for one boosting tick, returning segments removed
    pub fn decay(&mut self) -> usize {
        let before = self.segments.len();
        if before > SNAKE_MIN_LEN {
            self.len -= boost_loss(before);
            let target = self.len.floor().max(0.0) as usize;
            if target < SNAKE_MIN_LEN {
                self.len = SNAKE_MIN_LEN as f32;
            }
            self.segments.truncate(target.max(SNAKE_MIN_LEN));
        }
        debug_assert!(
            self.segments.len() >= SNAKE_MIN_LEN,
            "segment chain fell below the minimum length"
        );
        before - self.segments.len()
    }
}
