//! Session state and core simulation types
//!
//! One `Session` is the whole live game: restarting builds a fresh one.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::orbs::{LargeOrb, Orb, OrbField};
use super::snake::Snake;
use crate::consts::*;
use crate::skin::Skin;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Snake alive, ticks advance the simulation
    Playing,
    /// Snake burned in the flame ring; ticks are ignored
    GameOver,
}

/// Side effects of a tick, reported to the host in order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Score changed (running total)
    ScoreChanged { score: u64 },
    /// A whole segment was added
    Grew { segments: usize },
    /// Boost decay removed segments
    Shrank { segments: usize },
    /// A trail orb was dropped at the tail
    TrailOrbDropped { pos: Vec2 },
    /// Session ended at the given head position
    Died { score: u64, pos: Vec2 },
}

/// Distance accumulator driving boost trail drops
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoostTrail {
    /// Distance banked toward the next drop
    pub distance: f32,
    /// Head position distance is measured from
    pub anchor: Option<Vec2>,
}

impl BoostTrail {
    /// Bank the head's distance from the anchor, returning how many orbs to drop
    pub fn advance(&mut self, head: Vec2) -> usize {
        let anchor = *self.anchor.get_or_insert(head);
        self.distance += head.distance(anchor);
        let mut drops = 0;
        while self.distance > BOOST_ORB_TRAIL_DIST {
            self.distance -= BOOST_ORB_TRAIL_DIST;
            self.anchor = Some(head);
            drops += 1;
        }
        drops
    }

    pub fn reset(&mut self) {
        self.distance = 0.0;
        self.anchor = None;
    }
}

/// Complete session state (deterministic from its seed)
#[derive(Debug, Clone)]
pub struct Session {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub snake: Snake,
    pub field: OrbField,
    pub score: u64,
    pub phase: SessionPhase,
    /// Small orbs eaten toward the next segment
    pub pending_growth: u32,
    pub trail: BoostTrail,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl Session {
    /// Start a new session with the given seed and skin
    pub fn new(seed: u64, skin: Skin) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let field = OrbField::new(&mut rng);
        log::info!(
            "Session start: seed={} skin={} {}",
            seed,
            skin.color,
            skin.pattern.as_str()
        );
        Self {
            seed,
            rng,
            snake: Snake::new(SNAKE_INIT_LEN, skin),
            field,
            score: 0,
            phase: SessionPhase::Playing,
            pending_growth: 0,
            trail: BoostTrail::default(),
            time_ticks: 0,
        }
    }

    /// Throw away all state and start over with the same skin
    pub fn restart(&mut self, seed: u64) {
        *self = Self::new(seed, self.snake.skin.clone());
    }

    /// Refill the small orb population from the session RNG
    pub fn replenish_orbs(&mut self) -> usize {
        self.field.replenish(&mut self.rng)
    }

    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Playing
    }

    pub fn is_over(&self) -> bool {
        self.phase == SessionPhase::GameOver
    }

    /// End the session, leaving a large orb where the head burned
    ///
    /// Returns the death event, or `None` if the session already ended.
    pub fn end(&mut self) -> Option<GameEvent> {
        if self.is_over() {
            return None;
        }
        self.phase = SessionPhase::GameOver;
        let pos = self.snake.head;
        self.field.drop_large(pos);
        log::info!(
            "Session over: score={} segments={} ticks={}",
            self.score,
            self.snake.segments.len(),
            self.time_ticks
        );
        Some(GameEvent::Died {
            score: self.score,
            pos,
        })
    }

    /// Count one small orb toward growth, returning true when a segment was added
    pub fn eat_small(&mut self) -> bool {
        self.score += SMALL_ORB_SCORE;
        self.pending_growth += 1;
        if self.pending_growth >= SMALL_ORBS_PER_SEGMENT {
            self.pending_growth -= SMALL_ORBS_PER_SEGMENT;
            self.snake.grow();
            true
        } else {
            false
        }
    }

    /// Large orbs grow one segment immediately
    pub fn eat_large(&mut self) {
        self.score += LARGE_ORB_SCORE;
        self.snake.grow();
    }

    /// Read-only view handed to renderers after a tick settles
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            snake: &self.snake,
            orbs: &self.field.orbs,
            large_orbs: &self.field.large_orbs,
            arena_radius: ARENA_RADIUS,
            ring_width: FLAME_RING_WIDTH,
            score: self.score,
            active: self.is_active(),
            game_over: self.is_over(),
        }
    }
}

/// Borrowed per-frame view of a session
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub snake: &'a Snake,
    pub orbs: &'a [Orb],
    pub large_orbs: &'a [LargeOrb],
    pub arena_radius: f32,
    pub ring_width: f32,
    pub score: u64,
    pub active: bool,
    pub game_over: bool,
}
