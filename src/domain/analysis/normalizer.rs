//! Response Normalizer - maps response times onto the 1-7 intensity scale.

use crate::domain::foundation::Intensity;

/// Linear rescaling of observed response times into intensities.
pub struct ResponseNormalizer;

impl ResponseNormalizer {
    /// Maps every time onto [1, 7]: the fastest becomes 1, the slowest 7.
    ///
    /// # Algorithm
    /// intensity = 1 + (t − min) / (max − min) · 6
    ///
    /// The slower the response, the higher the intensity. This is the
    /// direction the survey has always scored in; it is kept as-is even though
    /// faster choices are usually read as more confident.
    ///
    /// # Edge Cases
    /// - Empty input: Returns empty Vec
    /// - All times equal (including a single time): every value is 1
    pub fn normalize(times: &[f64]) -> Vec<Intensity> {
        let Some((min, max)) = Self::bounds(times) else {
            return Vec::new();
        };

        if min == max {
            return vec![Intensity::NEUTRAL; times.len()];
        }

        let span = Intensity::MAX_VALUE - Intensity::MIN_VALUE;
        times
            .iter()
            .map(|&t| Intensity::new(Intensity::MIN_VALUE + (t - min) / (max - min) * span))
            .collect()
    }

    fn bounds(times: &[f64]) -> Option<(f64, f64)> {
        let first = *times.first()?;
        Some(
            times
                .iter()
                .fold((first, first), |(lo, hi), &t| (lo.min(t), hi.max(t))),
        )
    }
}
