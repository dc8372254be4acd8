//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, no wall clock
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod orbs;
pub mod snake;
pub mod state;
pub mod tick;

pub use collision::{absorbs_large, absorbs_small, boundary_radius, outside_arena};
pub use geometry::{dist, rand_in_disk};
pub use orbs::{LargeOrb, Orb, OrbField};
pub use snake::{Snake, boost_loss, steer_toward};
pub use state::{BoostTrail, GameEvent, Session, SessionPhase, Snapshot};
pub use tick::{TickInput, tick};
