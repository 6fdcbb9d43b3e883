//! Normal-curve overlay for histogram charts
//!
//! The curve is the Gaussian density of the sample's mean and standard
//! deviation, evaluated at evenly spaced points across `[min, max]` and
//! rescaled so its tallest sampled point equals the tallest bin. It is a
//! visual overlay, not a density in absolute units.

use qc_core::utils::min_max;
use qc_histogram::FrequencyTable;
use serde::{Deserialize, Serialize};
use statrs::distribution::{Continuous, Normal};
use tracing::debug;

/// Default number of equal increments between `min` and `max`
pub const DEFAULT_INCREMENTS: usize = 50;

/// Largest number of increments a curve is sampled with
pub const MAX_INCREMENTS: usize = 10_000;

/// One point of the overlay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// A scaled normal curve sampled over a closed interval
///
/// The curve is a plain value: [`NormalCurve::iter`] can be called any
/// number of times and always yields the same points.
#[derive(Debug, Clone)]
pub struct NormalCurve {
    normal: Normal,
    min: f64,
    max: f64,
    increments: usize,
    scale: f64,
}

impl NormalCurve {
    /// Create a curve over `[min, max]` whose tallest sampled point is
    /// `peak_height`
    ///
    /// Returns `None` when the standard deviation is zero or the parameters
    /// do not describe a normal distribution. `increments` is clamped to
    /// `1..=MAX_INCREMENTS`.
    pub fn new(
        mean: f64,
        std_dev: f64,
        min: f64,
        max: f64,
        peak_height: f64,
        increments: usize,
    ) -> Option<Self> {
        if std_dev == 0.0 {
            return None;
        }
        let normal = Normal::new(mean, std_dev).ok()?;
        let mut curve = Self {
            normal,
            min,
            max,
            increments: increments.clamp(1, MAX_INCREMENTS),
            scale: 0.0,
        };

        let max_fx = curve.densities().fold(0.0, f64::max);
        curve.scale = if max_fx > 0.0 { peak_height / max_fx } else { 0.0 };
        Some(curve)
    }

    /// Number of points produced, `increments + 1`
    pub fn len(&self) -> usize {
        self.increments + 1
    }

    /// Always false; a curve has at least two points
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over the curve points from `min` to `max`
    pub fn iter(&self) -> impl Iterator<Item = CurvePoint> + '_ {
        self.xs().map(move |x| CurvePoint {
            x,
            y: self.normal.pdf(x) * self.scale,
        })
    }

    /// Collect the points into a vector
    pub fn points(&self) -> Vec<CurvePoint> {
        self.iter().collect()
    }

    fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        let step = (self.max - self.min) / self.increments as f64;
        // The last point is pinned to max so rounding never overshoots it
        (0..=self.increments).map(move |i| {
            if i == self.increments {
                self.max
            } else {
                self.min + i as f64 * step
            }
        })
    }

    fn densities(&self) -> impl Iterator<Item = f64> + '_ {
        self.xs().map(move |x| self.normal.pdf(x))
    }
}

impl<'a> IntoIterator for &'a NormalCurve {
    type Item = CurvePoint;
    type IntoIter = Box<dyn Iterator<Item = CurvePoint> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Generate the overlay for a sample and its frequency table
///
/// Produces [`DEFAULT_INCREMENTS`]` + 1` points, or nothing when the sample
/// is empty or has zero standard deviation.
///
/// # Examples
///
/// ```rust
/// use qc_histogram::fixed_histogram;
/// use qc_shape::generate;
///
/// let data = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 5.0];
/// let table = fixed_histogram(&data, 5);
/// let curve = generate(&data, 3.0, 1.2247, &table);
///
/// assert_eq!(curve.len(), 51);
/// assert_eq!(curve[0].x, 1.0);
/// assert_eq!(curve[50].x, 5.0);
/// ```
pub fn generate(data: &[f64], mean: f64, std_dev: f64, table: &FrequencyTable) -> Vec<CurvePoint> {
    generate_with(data, mean, std_dev, table.max_count() as f64, DEFAULT_INCREMENTS)
}

/// Generate an overlay with an explicit peak height and increment count
pub fn generate_with(
    data: &[f64],
    mean: f64,
    std_dev: f64,
    peak_height: f64,
    increments: usize,
) -> Vec<CurvePoint> {
    let Some((min, max)) = min_max(data) else {
        return vec![];
    };
    match NormalCurve::new(mean, std_dev, min, max, peak_height, increments) {
        Some(curve) => curve.points(),
        None => {
            debug!(std_dev, "no normal curve for this sample");
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use qc_histogram::fixed_histogram;

    fn one_to_ten() -> Vec<f64> {
        (1..=10).map(|x| x as f64).collect()
    }

    #[test]
    fn test_curve_spans_sample_and_peaks_at_tallest_bin() {
        let data = one_to_ten();
        let table = fixed_histogram(&data, 3);
        let curve = generate(&data, 5.5, 3.0277, &table);

        assert_eq!(curve.len(), 51);
        assert_eq!(curve.first().unwrap().x, 1.0);
        assert_eq!(curve.last().unwrap().x, 10.0);

        // x = 5.5 is sampled exactly at i = 25
        let peak = curve.iter().map(|p| p.y).fold(0.0, f64::max);
        assert_relative_eq!(peak, 4.0, epsilon = 1e-9);
        assert_relative_eq!(curve[25].x, 5.5, epsilon = 1e-12);
        assert_relative_eq!(curve[25].y, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_curve_is_symmetric_about_centered_mean() {
        let data = one_to_ten();
        let curve = generate(&data, 5.5, 2.0, &fixed_histogram(&data, 4));
        for i in 0..=25 {
            assert_relative_eq!(curve[i].y, curve[50 - i].y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_no_curve_for_degenerate_input() {
        let table = fixed_histogram(&[2.0, 2.0], 1);
        assert!(generate(&[2.0, 2.0], 2.0, 0.0, &table).is_empty());
        assert!(generate(&[], 0.0, 1.0, &FrequencyTable::empty()).is_empty());
        assert!(generate(&[1.0, 2.0], 1.5, f64::NAN, &table).is_empty());
    }

    #[test]
    fn test_curve_is_restartable() {
        let curve = NormalCurve::new(0.0, 1.0, -3.0, 3.0, 10.0, 6).unwrap();
        let first: Vec<_> = curve.iter().collect();
        let second: Vec<_> = (&curve).into_iter().collect();

        assert_eq!(curve.len(), 7);
        assert_eq!(first, second);
        assert_eq!(first[3].x, 0.0);
        assert_relative_eq!(first[3].y, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_increments_clamped() {
        let curve = NormalCurve::new(0.0, 1.0, -1.0, 1.0, 1.0, usize::MAX).unwrap();
        assert_eq!(curve.len(), MAX_INCREMENTS + 1);
        assert_eq!(NormalCurve::new(0.0, 1.0, -1.0, 1.0, 1.0, 0).unwrap().len(), 2);
    }

    #[test]
    fn test_peak_off_center() {
        // Mean outside the sampled interval: the tallest sampled point is
        // the one nearest the mean, and it is scaled to the peak height
        let curve = generate_with(&[0.0, 1.0], 5.0, 1.0, 7.0, 10);
        assert_relative_eq!(curve.last().unwrap().y, 7.0, epsilon = 1e-12);
        assert!(curve[0].y < curve[10].y);
    }
}
