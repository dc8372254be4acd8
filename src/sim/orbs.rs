//! Orb field: small food orbs kept at a fixed population plus large orbs
//! dropped where snakes die.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::rand_in_disk;
use crate::consts::*;

/// Glow given to trail drops and large orbs
pub const DROP_GLOW: f32 = 1.2;

/// A small consumable orb
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orb {
    pub pos: Vec2,
    pub size: f32,
    /// Glow intensity for rendering
    pub glow: f32,
    /// Dropped behind a boosting snake (render color only)
    pub is_boost_trail: bool,
}

impl Orb {
    /// Random field orb inside the spawn disk
    pub fn spawn<R: Rng>(rng: &mut R) -> Self {
        Self {
            pos: rand_in_disk(rng, ARENA_RADIUS - ORB_SPAWN_MARGIN),
            size: ORB_MINI_SIZE,
            glow: rng.random::<f32>() * 0.8 + 0.5,
            is_boost_trail: false,
        }
    }

    pub fn trail(pos: Vec2) -> Self {
        Self {
            pos,
            size: BOOST_ORB_TRAIL_SIZE,
            glow: DROP_GLOW,
            is_boost_trail: true,
        }
    }
}

/// High value orb left at a death point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LargeOrb {
    pub pos: Vec2,
    pub size: f32,
    pub glow: f32,
}

impl LargeOrb {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: ORB_LARGE_SIZE,
            glow: DROP_GLOW,
        }
    }
}

/// All orbs in the arena
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrbField {
    pub orbs: Vec<Orb>,
    pub large_orbs: Vec<LargeOrb>,
}

impl OrbField {
    /// Empty field filled to the target population
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut field = Self::default();
        field.replenish(rng);
        field
    }

    /// Top small orbs back up to `ORB_FREQ`, returning how many were added
    pub fn replenish<R: Rng>(&mut self, rng: &mut R) -> usize {
        let missing = ORB_FREQ.saturating_sub(self.orbs.len());
        self.orbs.extend((0..missing).map(|_| Orb::spawn(rng)));
        missing
    }

    pub fn drop_trail(&mut self, pos: Vec2) {
        self.orbs.push(Orb::trail(pos));
    }

    pub fn drop_large(&mut self, pos: Vec2) {
        self.large_orbs.push(LargeOrb::new(pos));
    }

    /// Remove every small orb the predicate accepts, returning the count
    pub fn take_small(&mut self, mut eaten: impl FnMut(&Orb) -> bool) -> usize {
        let before = self.orbs.len();
        self.orbs.retain(|o| !eaten(o));
        before - self.orbs.len()
    }

    /// Remove every large orb the predicate accepts, returning the count
    pub fn take_large(&mut self, mut eaten: impl FnMut(&LargeOrb) -> bool) -> usize {
        let before = self.large_orbs.len();
        self.large_orbs.retain(|o| !eaten(o));
        before - self.large_orbs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_new_field_is_full() {
        let mut rng = Pcg32::seed_from_u64(1);
        let field = OrbField::new(&mut rng);
        assert_eq!(field.orbs.len(), ORB_FREQ);
        assert!(field.large_orbs.is_empty());
        for orb in &field.orbs {
            assert!(orb.pos.length() <= ARENA_RADIUS - ORB_SPAWN_MARGIN + 1e-2);
            assert!((0.5..=1.3).contains(&orb.glow));
            assert!(!orb.is_boost_trail);
            assert_eq!(orb.size, ORB_MINI_SIZE);
        }
    }

    #[test]
    fn test_replenish_after_removal() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut field = OrbField::new(&mut rng);
        let taken = field.take_small(|o| o.pos.x > 0.0);
        assert!(taken > 0);
        assert_eq!(field.replenish(&mut rng), taken);
        assert_eq!(field.orbs.len(), ORB_FREQ);
        assert_eq!(field.replenish(&mut rng), 0);
    }

    #[test]
    fn test_trail_orbs_do_not_count_against_refill() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut field = OrbField::new(&mut rng);
        field.drop_trail(Vec2::new(5.0, 5.0));
        assert_eq!(field.replenish(&mut rng), 0);
        assert_eq!(field.orbs.len(), ORB_FREQ + 1);
        let last = field.orbs.last().copied().unwrap();
        assert!(last.is_boost_trail);
        assert_eq!(last.size, BOOST_ORB_TRAIL_SIZE);
    }

    #[test]
    fn test_large_orbs_accumulate_until_taken() {
        let mut field = OrbField::default();
        field.drop_large(Vec2::new(1.0, 0.0));
        field.drop_large(Vec2::new(-1.0, 0.0));
        assert_eq!(field.large_orbs.len(), 2);
        assert_eq!(field.take_large(|o| o.pos.x > 0.0), 1);
        assert_eq!(field.large_orbs[0].pos, Vec2::new(-1.0, 0.0));
        assert_eq!(field.large_orbs[0].size, ORB_LARGE_SIZE);
    }
}
