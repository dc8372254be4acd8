//! Browser binding
//!
//! The page owns the canvas, DOM screens and `requestAnimationFrame`; it
//! forwards input here and calls `frame` once per animation frame, drawing
//! from `snapshot_json` afterwards.

use wasm_bindgen::prelude::*;

use super::input::InputState;
use crate::highscores::HighScore;
use crate::sim::{GameEvent, Session, tick};
use crate::skin::Skin;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
    log::info!("Snaked (web) starting...");
}

/// One player's game as seen from JavaScript
#[wasm_bindgen]
pub struct WebGame {
    session: Session,
    input: InputState,
    high_score: HighScore,
}

#[wasm_bindgen]
impl WebGame {
    /// Start a session with the skin picked on the home screen
    #[wasm_bindgen(constructor)]
    pub fn new(seed: f64, color: &str, pattern: &str) -> WebGame {
        WebGame {
            session: Session::new(seed as u64, Skin::from_form(color, pattern)),
            input: InputState::new(),
            high_score: HighScore::load(),
        }
    }

    /// Fresh session, optionally with a new skin
    pub fn restart(&mut self, seed: f64, color: &str, pattern: &str) {
        self.session = Session::new(seed as u64, Skin::from_form(color, pattern));
        self.input.clear();
    }

    pub fn pointer_move(&mut self, dx: f32, dy: f32) {
        if self.session.is_active() {
            self.input.point_at(dx, dy);
        }
    }

    pub fn boost_key(&mut self, held: bool) {
        if self.session.is_active() {
            self.input.set_boost_key(held);
        }
    }

    pub fn boost_button(&mut self, held: bool) {
        self.input.set_boost_button(held);
    }

    pub fn double_click(&mut self) {
        self.input.pulse_boost(js_sys::Date::now());
    }

    /// Run one simulation tick; returns the tick's events as JSON
    pub fn frame(&mut self) -> String {
        if !self.session.is_active() {
            return "[]".to_string();
        }
        let input = self.input.sample(js_sys::Date::now());
        let events = tick(&mut self.session, &input);
        for event in &events {
            if let GameEvent::Died { score, .. } = event {
                if self.high_score.submit(*score) {
                    log::info!("New high score: {}", score);
                }
                self.high_score.save();
            }
        }
        serde_json::to_string(&events).unwrap_or_else(|e| {
            log::warn!("Event encode failed: {:?}", e);
            "[]".to_string()
        })
    }

    /// Render view of the current state
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.session.snapshot()).unwrap_or_else(|e| {
            log::warn!("Snapshot encode failed: {:?}", e);
            "{}".to_string()
        })
    }

    pub fn score(&self) -> f64 {
        self.session.score as f64
    }

    pub fn high_score(&self) -> f64 {
        self.high_score.best as f64
    }

    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }

    pub fn is_over(&self) -> bool {
        self.session.is_over()
    }
}
