//! Asynchronous input flags sampled into a `TickInput` each frame
//!
//! Event handlers write here whenever the browser delivers something; the
//! game loop reads one snapshot per tick. Last write wins.

use crate::consts::BOOST_PULSE_MS;
use crate::sim::TickInput;

#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Latest pointer heading relative to the arena center
    pub target_angle: Option<f32>,
    /// Boost key currently held
    pub boost_key: bool,
    /// Primary button currently held
    pub boost_button: bool,
    /// Host clock time (ms) the double-click pulse runs until
    pulse_until: Option<f64>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer moved: aim at it from the canvas center
    ///
    /// `dx`/`dy` are screen offsets from the center of the canvas, with y
    /// pointing down exactly like arena space.
    pub fn point_at(&mut self, dx: f32, dy: f32) {
        self.target_angle = Some(dy.atan2(dx));
    }

    pub fn set_boost_key(&mut self, held: bool) {
        self.boost_key = held;
    }

    pub fn set_boost_button(&mut self, held: bool) {
        self.boost_button = held;
    }

    /// Start (or extend) a short timed boost
    pub fn pulse_boost(&mut self, now_ms: f64) {
        self.pulse_until = Some(now_ms + BOOST_PULSE_MS);
    }

    pub fn pulse_active(&self, now_ms: f64) -> bool {
        self.pulse_until.is_some_and(|until| now_ms < until)
    }

    /// Drop everything (new session)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Snapshot for one simulation tick
    pub fn sample(&mut self, now_ms: f64) -> TickInput {
        let boost_pulse = self.pulse_active(now_ms);
        if !boost_pulse {
            self.pulse_until = None;
        }
        TickInput {
            target_angle: self.target_angle,
            boost_key: self.boost_key,
            boost_button: self.boost_button,
            boost_pulse,
        }
    }
}
