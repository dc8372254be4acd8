//! Platform layer
//!
//! Handles the boundary between the simulation and its host:
//! - Input flags written asynchronously, sampled per tick
//! - Browser binding (wasm32 only)

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::InputState;
