//! Best score across sessions
//!
//! Persisted to LocalStorage as a bare integer.

use serde::{Deserialize, Serialize};

/// Running maximum of final scores
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct HighScore {
    pub best: u64,
}

impl HighScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "snaked_highscore";

    pub fn new() -> Self {
        Self { best: 0 }
    }

    /// Fold a finished session's score in, returning true on a new best
    pub fn submit(&mut self, score: u64) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }

    /// Parse the stored value; anything unreadable counts as no score
    pub fn parse(raw: &str) -> Self {
        let best = serde_json::from_str::<u64>(raw.trim()).unwrap_or_else(|_| {
            if !raw.trim().is_empty() {
                log::warn!("Ignoring unreadable high score {:?}", raw);
            }
            0
        });
        Self { best }
    }

    /// Load the high score from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(raw)) = storage.get_item(Self::STORAGE_KEY) {
                let score = Self::parse(&raw);
                log::info!("Loaded high score {}", score.best);
                return score;
            }
        }

        log::info!("No high score found, starting fresh");
        Self::new()
    }

    /// Save the high score to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(raw) = serde_json::to_string(&self.best) {
                let _ = storage.set_item(Self::STORAGE_KEY, &raw);
                log::info!("High score saved ({})", self.best);
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
