//! Boundary and absorption checks
//!
//! Only the head is ever tested: orbs against the head, the head against the
//! flame ring. Body segments never collide with anything.

use glam::Vec2;

use super::geometry::dist;
use super::orbs::{LargeOrb, Orb};
use crate::consts::*;

/// Distance from center beyond which the head burns in the flame ring
#[inline]
pub fn boundary_radius() -> f32 {
    ARENA_RADIUS - FLAME_RING_WIDTH / 2.0
}

/// Head has crossed into the flame ring (strictly past the threshold)
#[inline]
pub fn outside_arena(head: Vec2) -> bool {
    head.length() > boundary_radius()
}

/// Pickup radius for small orbs, measured from head center
#[inline]
pub fn small_absorb_radius() -> f32 {
    (5.0 / 3.0) * SEGMENT_SIZE
}

#[inline]
pub fn absorbs_small(head: Vec2, orb: &Orb) -> bool {
    dist(head, orb.pos) < small_absorb_radius()
}

/// Large orbs use their own size plus most of a segment radius
#[inline]
pub fn absorbs_large(head: Vec2, orb: &LargeOrb) -> bool {
    dist(head, orb.pos) < orb.size + SEGMENT_SIZE * 0.7
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_threshold_is_exclusive() {
        let r = boundary_radius();
        assert_eq!(r, 2980.0);
        assert!(!outside_arena(Vec2::new(r, 0.0)));
        assert!(!outside_arena(Vec2::new(0.0, -r)));
        assert!(outside_arena(Vec2::new(r + 0.01, 0.0)));
        assert!(!outside_arena(Vec2::ZERO));
    }

    #[test]
    fn test_small_orb_absorption_radius() {
        let orb = |x| Orb {
            pos: Vec2::new(x, 0.0),
            size: ORB_MINI_SIZE,
            glow: 1.0,
            is_boost_trail: false,
        };
        assert!(absorbs_small(Vec2::ZERO, &orb(26.0)));
        assert!(!absorbs_small(Vec2::ZERO, &orb(27.0)));
        // Trail orbs absorb exactly like field orbs
        let trail = Orb::trail(Vec2::new(10.0, 0.0));
        assert!(absorbs_small(Vec2::ZERO, &trail));
    }

    #[test]
    fn test_large_orb_absorption_radius() {
        // 20 + 16 * 0.7 = 31.2
        let near = LargeOrb::new(Vec2::new(31.0, 0.0));
        let far = LargeOrb::new(Vec2::new(0.0, 31.5));
        assert!(absorbs_large(Vec2::ZERO, &near));
        assert!(!absorbs_large(Vec2::ZERO, &far));
    }
}
