//! Genome mappings.

use super::types::GenomeMapping;
use crate::error::{Result, SearchError};

/// Decodes a bit vector into real coordinates inside per-dimension bounds.
///
/// The bits are split into `lower.len()` equal cells. Cell `i`, read as an
/// unsigned big-endian integer `v` of `k` bits, maps to
/// `lower[i] + v * (upper[i] - lower[i]) / (2^k - 1)`.
///
/// # Examples
///
/// ```
/// use u_blackbox::fitness::{BinaryToInterval, GenomeMapping};
///
/// let mapping = BinaryToInterval::new(vec![0.0, -1.0], vec![3.0, 1.0]);
/// let x: Vec<f64> = mapping.map(&vec![1u8, 1, 0, 0]).unwrap();
/// assert_eq!(x, vec![3.0, -1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryToInterval {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl BinaryToInterval {
    /// Creates a mapping for the given bounds.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Self {
        Self { lower, upper }
    }

    /// Number of real coordinates produced.
    pub fn dimension(&self) -> usize {
        self.lower.len()
    }
}

impl GenomeMapping<Vec<u8>, Vec<f64>> for BinaryToInterval {
    fn map(&self, bits: &Vec<u8>) -> Result<Vec<f64>> {
        if self.lower.len() != self.upper.len() {
            return Err(SearchError::DimensionMismatch {
                expected: self.lower.len(),
                actual: self.upper.len(),
            });
        }
        let dim = self.lower.len();
        if dim == 0 || bits.is_empty() || bits.len() % dim != 0 {
            return Err(SearchError::InvalidDomain(format!(
                "{} bits cannot be split into {dim} equal cells",
                bits.len()
            )));
        }
        if let Some(bad) = bits.iter().find(|&&b| b > 1) {
            return Err(SearchError::InvalidDomain(format!(
                "binary genome contains {bad}"
            )));
        }

        let cell = bits.len() / dim;
        let denominator = 2f64.powi(cell as i32) - 1.0;

        Ok(bits
            .chunks(cell)
            .zip(self.lower.iter().zip(&self.upper))
            .map(|(chunk, (&lo, &hi))| {
                let value = chunk.iter().fold(0.0, |acc, &b| acc * 2.0 + b as f64);
                lo + value * (hi - lo) / denominator
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "binary-to-interval"
    }
}
