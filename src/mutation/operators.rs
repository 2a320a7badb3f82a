//! Built-in perturbations.
//!
//! - [`BitflipSingle`]: flip exactly one random bit
//! - [`BitflipMultiple`]: flip each bit independently with probability `p`
//! - [`Gaussian`]: add `N(0, sigma)` noise to every component
//! - [`SwapPositions`]: exchange two random positions (permutations)

use super::types::{ParameterKind, Perturbation};
use crate::error::{Result, SearchError};
use rand::{Rng, RngCore};
use rand_distr::{Distribution, Normal};

fn flip(bit: u8) -> u8 {
    if bit == 0 {
        1
    } else {
        0
    }
}

/// Flips exactly one uniformly chosen bit. The parameter is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitflipSingle;

impl Perturbation<Vec<u8>> for BitflipSingle {
    fn perturb(&self, bits: &Vec<u8>, _parameter: f64, rng: &mut dyn RngCore) -> Result<Vec<u8>> {
        if bits.is_empty() {
            return Err(SearchError::InvalidDomain(
                "cannot flip a bit of an empty genome".into(),
            ));
        }
        let mut flipped = bits.clone();
        let idx = rng.random_range(0..flipped.len());
        flipped[idx] = flip(flipped[idx]);
        Ok(flipped)
    }

    fn name(&self) -> &'static str {
        "bitflip-single"
    }
}

/// Flips every bit independently with the given probability.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitflipMultiple;

impl Perturbation<Vec<u8>> for BitflipMultiple {
    fn perturb(&self, bits: &Vec<u8>, probability: f64, rng: &mut dyn RngCore) -> Result<Vec<u8>> {
        Ok(bits
            .iter()
            .map(|&b| {
                if rng.random::<f64>() < probability {
                    flip(b)
                } else {
                    b
                }
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "bitflip-multiple"
    }
}

/// Adds independent `N(0, deviation)` noise to every component.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gaussian;

impl Perturbation<Vec<f64>> for Gaussian {
    fn perturb(&self, x: &Vec<f64>, deviation: f64, rng: &mut dyn RngCore) -> Result<Vec<f64>> {
        if !deviation.is_finite() || deviation < 0.0 {
            return Err(SearchError::InvalidDomain(format!(
                "gaussian deviation must be finite and non-negative, got {deviation}"
            )));
        }
        let normal = Normal::new(0.0, deviation).map_err(|e| {
            SearchError::InvalidDomain(format!("gaussian deviation {deviation}: {e}"))
        })?;
        Ok(x.iter().map(|v| v + normal.sample(&mut *rng)).collect())
    }

    fn parameter_kind(&self) -> ParameterKind {
        ParameterKind::Deviation
    }

    fn name(&self) -> &'static str {
        "gaussian"
    }
}

/// Swaps two random positions. The parameter is ignored.
///
/// Keeps permutations valid, so it suits tour-like genomes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwapPositions;

impl<T: Clone> Perturbation<Vec<T>> for SwapPositions {
    fn perturb(&self, perm: &Vec<T>, _parameter: f64, rng: &mut dyn RngCore) -> Result<Vec<T>> {
        let mut swapped = perm.clone();
        let n = swapped.len();
        if n < 2 {
            return Ok(swapped);
        }
        let i = rng.random_range(0..n);
        let j = rng.random_range(0..n);
        swapped.swap(i, j);
        Ok(swapped)
    }

    fn name(&self) -> &'static str {
        "swap-positions"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bitflip_single_flips_exactly_one() {
        let mut rng = StdRng::seed_from_u64(42);
        let parent = vec![1u8; 8];
        for _ in 0..50 {
            let child = BitflipSingle.perturb(&parent, 0.5, &mut rng).unwrap();
            let diff = child.iter().zip(&parent).filter(|(a, b)| a != b).count();
            assert_eq!(diff, 1);
        }
        assert_eq!(parent, vec![1u8; 8]);
    }

    #[test]
    fn test_bitflip_single_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(BitflipSingle.perturb(&vec![], 0.5, &mut rng).is_err());
    }

    #[test]
    fn test_bitflip_multiple_extremes() {
        let mut rng = StdRng::seed_from_u64(42);
        let bits = vec![0u8, 1, 0, 1];
        assert_eq!(BitflipMultiple.perturb(&bits, 0.0, &mut rng).unwrap(), bits);
        assert_eq!(
            BitflipMultiple.perturb(&bits, 1.0, &mut rng).unwrap(),
            vec![1, 0, 1, 0]
        );
    }

    #[test]
    fn test_gaussian_spread() {
        let mut rng = StdRng::seed_from_u64(42);
        let x = vec![0.0; 2000];
        let y = Gaussian.perturb(&x, 0.5, &mut rng).unwrap();
        let mean = y.iter().sum::<f64>() / y.len() as f64;
        let var = y.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / y.len() as f64;
        assert!(mean.abs() < 0.05, "mean {mean}");
        assert!((var.sqrt() - 0.5).abs() < 0.05, "std {}", var.sqrt());
        assert_eq!(Gaussian.parameter_kind(), ParameterKind::Deviation);
    }

    #[test]
    fn test_gaussian_rejects_negative_deviation() {
        let mut rng = StdRng::seed_from_u64(42);
        for deviation in [-1.0, -1e-9, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    Gaussian.perturb(&vec![1.0], deviation, &mut rng),
                    Err(SearchError::InvalidDomain(_))
                ),
                "deviation {deviation}"
            );
        }
    }

    #[test]
    fn test_gaussian_zero_deviation_is_identity() {
        let mut rng = StdRng::seed_from_u64(42);
        let x = vec![1.0, -2.0];
        assert_eq!(Gaussian.perturb(&x, 0.0, &mut rng).unwrap(), x);
    }

    #[test]
    fn test_swap_keeps_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let perm: Vec<usize> = (0..10).collect();
        for _ in 0..20 {
            let mut child = SwapPositions.perturb(&perm, 0.0, &mut rng).unwrap();
            child.sort_unstable();
            assert_eq!(child, perm);
        }
    }
}
