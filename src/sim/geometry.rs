//! Sampling and distance helpers for the circular arena

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use crate::polar_to_cartesian;

/// Uniform random point inside a disk of `radius` centered on the origin
///
/// Uses the square root of the radial sample so area density is uniform
/// rather than clustered toward the center.
pub fn rand_in_disk<R: Rng>(rng: &mut R, radius: f32) -> Vec2 {
    let theta = TAU * rng.random::<f32>();
    let r = radius * rng.random::<f32>().sqrt();
    polar_to_cartesian(r, theta)
}

#[inline]
pub fn dist(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_rand_in_disk_stays_inside() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..5000 {
            let p = rand_in_disk(&mut rng, 100.0);
            assert!(p.length() <= 100.0 + 1e-3);
        }
    }

    #[test]
    fn test_rand_in_disk_is_area_uniform() {
        // Half the area of a disk lies outside r / sqrt(2)
        let mut rng = Pcg32::seed_from_u64(42);
        let n = 20_000;
        let inner = 100.0 / 2.0_f32.sqrt();
        let outside = (0..n)
            .filter(|_| rand_in_disk(&mut rng, 100.0).length() > inner)
            .count();
        let frac = outside as f32 / n as f32;
        assert!((frac - 0.5).abs() < 0.03, "outer fraction {}", frac);
    }

    #[test]
    fn test_dist() {
        assert_eq!(dist(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)), 5.0);
    }
}
