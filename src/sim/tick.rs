//! Per-frame simulation tick
//!
//! Core game loop step: one call per display refresh while the session is
//! active.

use super::collision::{absorbs_large, absorbs_small, outside_arena};
use super::state::{GameEvent, Session};
use crate::consts::*;

/// Input sampled once per tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Heading the player is pointing at; `None` until the pointer first moves
    pub target_angle: Option<f32>,
    /// Boost key held
    pub boost_key: bool,
    /// Primary button held over the arena
    pub boost_button: bool,
    /// Short timed boost (double-click)
    pub boost_pulse: bool,
}

impl TickInput {
    /// Any boost source asking for speed
    pub fn boost_requested(&self) -> bool {
        self.boost_key || self.boost_button || self.boost_pulse
    }
}

/// Advance the session by one frame, returning what happened
pub fn tick(session: &mut Session, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !session.is_active() {
        return events;
    }
    session.time_ticks += 1;

    let requested = input.boost_requested();

    // --- Locomotion ---
    session.snake.steer(input.target_angle);
    let speed = if requested || session.snake.boosting {
        SNAKE_BOOST_SPEED
    } else {
        SNAKE_INIT_SPEED
    };
    session.snake.advance(speed);
    session.snake.boosting = requested && session.snake.can_boost();

    // --- Boost trail ---
    if session.snake.boosting {
        let drops = session.trail.advance(session.snake.head);
        for _ in 0..drops {
            let pos = session.snake.tail();
            session.field.drop_trail(pos);
            events.push(GameEvent::TrailOrbDropped { pos });
        }
    } else {
        session.trail.reset();
    }

    session.snake.relax_chain();

    // --- Decay ---
    if session.snake.boosting {
        let removed = session.snake.decay();
        if removed > 0 {
            events.push(GameEvent::Shrank {
                segments: session.snake.segments.len(),
            });
        }
        session.snake.boosting &= session.snake.can_boost();
    }

    // --- Boundary ---
    if outside_arena(session.snake.head) {
        events.extend(session.end());
        return events;
    }

    // --- Consumption ---
    let head = session.snake.head;
    let small = session.field.take_small(|orb| absorbs_small(head, orb));
    for _ in 0..small {
        let grew = session.eat_small();
        events.push(GameEvent::ScoreChanged {
            score: session.score,
        });
        if grew {
            log::debug!("Grew to {} segments", session.snake.segments.len());
            events.push(GameEvent::Grew {
                segments: session.snake.segments.len(),
            });
        }
    }

    let large = session.field.take_large(|orb| absorbs_large(head, orb));
    for _ in 0..large {
        session.eat_large();
        events.push(GameEvent::ScoreChanged {
            score: session.score,
        });
        events.push(GameEvent::Grew {
            segments: session.snake.segments.len(),
        });
    }

    // --- Orb field ---
    session.replenish_orbs();

    events
}
