//! Test data generators for shape classification
//!
//! Seeded samples with a known shape, shared by the unit and integration
//! tests so every run sees the same data.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Exp, Normal};

/// Standard test distributions with a known histogram shape
pub struct TestDistributions;

impl TestDistributions {
    /// Symmetric bell shape
    ///
    /// Returns 5000 samples from N(10, 0.5)
    pub fn symmetric_normal() -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(42);
        let normal = Normal::<f64>::new(10.0, 0.5).unwrap();
        (0..5000).map(|_| normal.sample(&mut rng)).collect()
    }

    /// Long right tail
    ///
    /// Returns 5000 samples from 10 + Exp(1)
    pub fn right_tailed() -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(42);
        let exp = Exp::<f64>::new(1.0).unwrap();
        (0..5000).map(|_| 10.0 + exp.sample(&mut rng)).collect()
    }

    /// Long left tail, the mirror image of [`Self::right_tailed`]
    pub fn left_tailed() -> Vec<f64> {
        Self::right_tailed().into_iter().map(|x| 20.0 - x).collect()
    }

    /// Two well separated modes of equal weight
    ///
    /// Returns 5002 samples: 2500 from N(8, 0.4), 2500 from N(12, 0.4) and
    /// the two anchors 5.5 and 14.5, so the range is exactly `[5.5, 14.5]`
    /// and nine bins of width 1 are centred on the modes.
    pub fn twin_peak() -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(42);
        let low = Normal::<f64>::new(8.0, 0.4).unwrap();
        let high = Normal::<f64>::new(12.0, 0.4).unwrap();

        let mut data = Vec::with_capacity(5002);
        data.push(5.5);
        for _ in 0..2500 {
            data.push(low.sample(&mut rng).clamp(5.5, 14.5));
        }
        for _ in 0..2500 {
            data.push(high.sample(&mut rng).clamp(5.5, 14.5));
        }
        data.push(14.5);
        data
    }
}
