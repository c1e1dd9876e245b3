//! Velocity jitter and speed band clamping

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Per-axis speed limits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedBand {
    pub min: f32,
    pub max: f32,
}

impl SpeedBand {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamp one velocity component into `[-max, max]`, then push it out to
    /// at least `min` in magnitude. Zero is pushed to `+min`.
    #[inline]
    pub fn clamp_axis(&self, v: f32) -> f32 {
        let v = v.clamp(-self.max, self.max);
        if v.abs() < self.min {
            if v < 0.0 { -self.min } else { self.min }
        } else {
            v
        }
    }

    /// Apply `clamp_axis` to both components
    #[inline]
    pub fn clamp(&self, vel: Vec2) -> Vec2 {
        Vec2::new(self.clamp_axis(vel.x), self.clamp_axis(vel.y))
    }

    /// Whether both components are inside the band
    pub fn contains(&self, vel: Vec2) -> bool {
        let ok = |v: f32| (self.min..=self.max).contains(&v.abs());
        ok(vel.x) && ok(vel.y)
    }
}

/// Nudge each component by a uniform draw from `[-amount, amount)`
pub fn jitter<R: Rng>(vel: Vec2, amount: f32, rng: &mut R) -> Vec2 {
    if amount <= 0.0 {
        return vel;
    }
    vel + Vec2::new(
        rng.random_range(-amount..amount),
        rng.random_range(-amount..amount),
    )
}

/// Jitter a velocity, then bring it back inside the speed band
pub fn jitter_and_clamp<R: Rng>(
    vel: Vec2,
    amount: f32,
    band: &SpeedBand,
    rng: &mut R,
) -> Vec2 {
    band.clamp(jitter(vel, amount, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_clamp_axis_caps_fast() {
        let band = SpeedBand::new(10.0, 20.0);
        assert_eq!(band.clamp_axis(25.0), 20.0);
        assert_eq!(band.clamp_axis(-31.0), -20.0);
        assert_eq!(band.clamp_axis(15.5), 15.5);
    }

    #[test]
    fn test_clamp_axis_lifts_slow_keeping_sign() {
        let band = SpeedBand::new(10.0, 20.0);
        assert_eq!(band.clamp_axis(8.0), 10.0);
        assert_eq!(band.clamp_axis(-8.0), -10.0);
        assert_eq!(band.clamp_axis(-0.001), -10.0);
    }

    #[test]
    fn test_clamp_axis_zero_goes_positive() {
        let band = SpeedBand::new(10.0, 20.0);
        assert_eq!(band.clamp_axis(0.0), 10.0);
        assert_eq!(band.clamp_axis(-0.0), 10.0);
    }

    #[test]
    fn test_jitter_is_small_and_seeded() {
        let vel = Vec2::new(12.0, -12.0);
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);

        let ja = jitter(vel, 0.005, &mut a);
        let jb = jitter(vel, 0.005, &mut b);
        assert_eq!(ja, jb);
        assert!((ja - vel).abs().max_element() <= 0.0051);
    }

    #[test]
    fn test_zero_jitter_is_identity() {
        let mut rng = Pcg32::seed_from_u64(1);
        let vel = Vec2::new(12.0, -12.0);
        assert_eq!(jitter(vel, 0.0, &mut rng), vel);
    }

    proptest! {
        #[test]
        fn prop_jitter_and_clamp_stays_in_band(
            x in -100.0f32..100.0,
            y in -100.0f32..100.0,
            seed in any::<u64>(),
        ) {
            let band = SpeedBand::new(10.0, 20.0);
            let mut rng = Pcg32::seed_from_u64(seed);
            let vel = jitter_and_clamp(Vec2::new(x, y), 0.005, &band, &mut rng);
            prop_assert!(band.contains(vel), "{:?} escaped band", vel);
        }
    }
}
