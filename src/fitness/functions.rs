//! Benchmark objectives.
//!
//! Standard test functions for black-box optimizers, all lower-is-better.
//! Binary objectives operate on `Vec<u8>` genomes holding 0/1, real-valued
//! ones on `Vec<f64>`, and [`TourLength`] on permutations `Vec<usize>`.
//!
//! # References
//!
//! - Rosenbrock (1960), "An Automatic Method for Finding the Greatest or
//!   Least Value of a Function"
//! - Rastrigin (1974), *Systems of Extremal Control*
//! - Griewank (1981), "Generalized Descent for Global Optimization"
//! - Schwefel (1981), *Numerical Optimization of Computer Models*
//! - Golay (1982), "The merit factor of long low autocorrelation binary
//!   sequences" (LABS)

use super::types::{Objective, ObjectiveParams};
use crate::error::{Result, SearchError};
use std::f64::consts::PI;

fn ensure_binary(bits: &[u8]) -> Result<()> {
    match bits.iter().find(|&&b| b > 1) {
        Some(bad) => Err(SearchError::InvalidDomain(format!(
            "binary genome contains {bad}"
        ))),
        None => Ok(()),
    }
}

/// Number of set bits. Minimized by the all-zero genome.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneMax;

impl Objective<Vec<u8>> for OneMax {
    fn evaluate(&self, bits: &Vec<u8>, _params: &ObjectiveParams) -> Result<f64> {
        Ok(bits.iter().map(|&b| b as f64).sum())
    }

    fn name(&self) -> &'static str {
        "one-max"
    }
}

/// Low-autocorrelation binary sequence energy.
///
/// Bits are read as ±1 spins; the energy is `sum_k C_k^2` over all
/// aperiodic autocorrelations `C_k`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Labs;

impl Objective<Vec<u8>> for Labs {
    fn evaluate(&self, bits: &Vec<u8>, _params: &ObjectiveParams) -> Result<f64> {
        ensure_binary(bits)?;
        let spins: Vec<i64> = bits.iter().map(|&b| if b == 0 { -1 } else { 1 }).collect();
        let n = spins.len();
        let energy: i64 = (1..n)
            .map(|k| {
                let corr: i64 = (0..n - k).map(|i| spins[i] * spins[i + k]).sum();
                corr * corr
            })
            .sum();
        Ok(energy as f64)
    }

    fn name(&self) -> &'static str {
        "labs"
    }
}

/// Sum of squared deviations from an offset.
///
/// The offset is taken from the evaluator coefficients and must match the
/// genome length.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sphere;

impl Objective<Vec<f64>> for Sphere {
    fn evaluate(&self, x: &Vec<f64>, params: &ObjectiveParams) -> Result<f64> {
        let offset = params.require_coefficients("sphere", x.len())?;
        Ok(x.iter().zip(offset).map(|(v, o)| (v - o) * (v - o)).sum())
    }

    fn name(&self) -> &'static str {
        "sphere"
    }
}

/// Rosenbrock's banana function. Minimum 0 at `(1, ..., 1)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rosenbrock;

impl Objective<Vec<f64>> for Rosenbrock {
    fn evaluate(&self, x: &Vec<f64>, _params: &ObjectiveParams) -> Result<f64> {
        Ok(x.windows(2)
            .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
            .sum())
    }

    fn name(&self) -> &'static str {
        "rosenbrock"
    }
}

/// `bias + sum(c_i * x_i)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Linear;

impl Objective<Vec<f64>> for Linear {
    fn evaluate(&self, x: &Vec<f64>, params: &ObjectiveParams) -> Result<f64> {
        let coefficients = params.require_coefficients("linear", x.len())?;
        let bias = params.require_bias("linear")?;
        Ok(bias + x.iter().zip(coefficients).map(|(v, c)| v * c).sum::<f64>())
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}

/// `bias + sum(floor(c_i * x_i))`: a linear function without gradient.
#[derive(Debug, Clone, Copy, Default)]
pub struct Step;

impl Objective<Vec<f64>> for Step {
    fn evaluate(&self, x: &Vec<f64>, params: &ObjectiveParams) -> Result<f64> {
        let coefficients = params.require_coefficients("step", x.len())?;
        let bias = params.require_bias("step")?;
        Ok(bias
            + x.iter()
                .zip(coefficients)
                .map(|(v, c)| (v * c).floor())
                .sum::<f64>())
    }

    fn name(&self) -> &'static str {
        "step"
    }
}

/// Rastrigin: `10n + sum(x_i^2 - 10 cos(2 pi x_i))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rastrigin;

impl Objective<Vec<f64>> for Rastrigin {
    fn evaluate(&self, x: &Vec<f64>, _params: &ObjectiveParams) -> Result<f64> {
        Ok(10.0 * x.len() as f64
            + x.iter()
                .map(|v| v * v - 10.0 * (2.0 * PI * v).cos())
                .sum::<f64>())
    }

    fn name(&self) -> &'static str {
        "rastrigin"
    }
}

/// Griewank: `1 + sum(x_i^2) / 4000 - prod(cos(x_i / sqrt(i + 1)))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Griewank;

impl Objective<Vec<f64>> for Griewank {
    fn evaluate(&self, x: &Vec<f64>, _params: &ObjectiveParams) -> Result<f64> {
        let sum: f64 = x.iter().map(|v| v * v).sum();
        let product: f64 = x
            .iter()
            .enumerate()
            .map(|(i, v)| (v / ((i + 1) as f64).sqrt()).cos())
            .product();
        Ok(sum / 4000.0 + 1.0 - product)
    }

    fn name(&self) -> &'static str {
        "griewank"
    }
}

/// Schwefel: `-sum(x_i sin(sqrt(|x_i|)))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Schwefel;

impl Objective<Vec<f64>> for Schwefel {
    fn evaluate(&self, x: &Vec<f64>, _params: &ObjectiveParams) -> Result<f64> {
        Ok(-x.iter().map(|v| v * v.abs().sqrt().sin()).sum::<f64>())
    }

    fn name(&self) -> &'static str {
        "schwefel"
    }
}

/// A named point in the plane.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    /// Label as given by the problem instance.
    pub name: String,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl City {
    /// Creates a city.
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &City) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Length of the closed tour visiting cities in genome order.
#[derive(Debug, Clone, Default)]
pub struct TourLength {
    cities: Vec<City>,
}

impl TourLength {
    /// Creates the objective over `cities`.
    pub fn new(cities: Vec<City>) -> Self {
        Self { cities }
    }

    /// Number of cities in the instance.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Whether the instance has no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl Objective<Vec<usize>> for TourLength {
    fn evaluate(&self, tour: &Vec<usize>, _params: &ObjectiveParams) -> Result<f64> {
        if let Some(&bad) = tour.iter().find(|&&c| c >= self.cities.len()) {
            return Err(SearchError::InvalidDomain(format!(
                "tour visits unknown city {bad}"
            )));
        }
        let n = tour.len();
        Ok((0..n)
            .map(|i| self.cities[tour[i]].distance(&self.cities[tour[(i + 1) % n]]))
            .sum())
    }

    fn name(&self) -> &'static str {
        "tour-length"
    }
}
