//! Objective and mapping contracts.
//!
//! An [`Objective`] turns a genome into a scalar fitness. A
//! [`GenomeMapping`] translates the searched representation into the one
//! the objective understands (e.g. bits into real coordinates).
//!
//! Lower fitness is always better. Objectives that are natively
//! maximize-oriented are wrapped in [`Maximize`].

use crate::error::Result;
use std::marker::PhantomData;

/// Optional extra arguments forwarded to every objective call.
///
/// Objectives that need neither field simply ignore them.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectiveParams {
    /// Additive constant (used by e.g. linear and step objectives).
    pub bias: Option<f64>,

    /// Per-dimension coefficients or offsets.
    pub coefficients: Option<Vec<f64>>,
}

impl ObjectiveParams {
    /// Returns the bias or an error naming the objective that needed it.
    pub fn require_bias(&self, objective: &str) -> Result<f64> {
        self.bias.ok_or_else(|| {
            crate::SearchError::InvalidConfig(format!("{objective} requires a bias"))
        })
    }

    /// Returns coefficients of length `len`, or an error.
    pub fn require_coefficients(&self, objective: &str, len: usize) -> Result<&[f64]> {
        let coefficients = self.coefficients.as_deref().ok_or_else(|| {
            crate::SearchError::InvalidConfig(format!("{objective} requires coefficients"))
        })?;
        if coefficients.len() != len {
            return Err(crate::SearchError::DimensionMismatch {
                expected: coefficients.len(),
                actual: len,
            });
        }
        Ok(coefficients)
    }
}

/// A raw objective function. Lower is better.
///
/// Closures of the form `Fn(&G, &ObjectiveParams) -> Result<f64>`
/// implement this trait automatically.
///
/// # Examples
///
/// ```
/// use u_blackbox::fitness::{Objective, ObjectiveParams};
///
/// let count_ones = |bits: &Vec<u8>, _: &ObjectiveParams| -> u_blackbox::Result<f64> {
///     Ok(bits.iter().map(|&b| b as f64).sum())
/// };
/// let f = count_ones.evaluate(&vec![1, 0, 1], &ObjectiveParams::default()).unwrap();
/// assert_eq!(f, 2.0);
/// ```
pub trait Objective<G> {
    /// Computes the fitness of `genome`.
    fn evaluate(&self, genome: &G, params: &ObjectiveParams) -> Result<f64>;

    /// Human-readable name used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<G, F> Objective<G> for F
where
    F: Fn(&G, &ObjectiveParams) -> Result<f64>,
{
    fn evaluate(&self, genome: &G, params: &ObjectiveParams) -> Result<f64> {
        self(genome, params)
    }
}

/// Translates a genome of type `G` into the objective's input type `P`.
///
/// Closures `Fn(&G) -> Result<P>` implement this trait automatically.
pub trait GenomeMapping<G, P> {
    /// Maps one genome.
    fn map(&self, genome: &G) -> Result<P>;

    /// Human-readable name used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<G, P, F> GenomeMapping<G, P> for F
where
    F: Fn(&G) -> Result<P>,
{
    fn map(&self, genome: &G) -> Result<P> {
        self(genome)
    }
}

/// Objective composed with a mapping: `objective(mapping(genome))`.
pub struct Mapped<O, M, P> {
    objective: O,
    mapping: M,
    _mapped: PhantomData<fn() -> P>,
}

impl<O, M, P> Mapped<O, M, P> {
    /// Composes `objective` after `mapping`.
    pub fn new(objective: O, mapping: M) -> Self {
        Self {
            objective,
            mapping,
            _mapped: PhantomData,
        }
    }
}

impl<G, P, O, M> Objective<G> for Mapped<O, M, P>
where
    O: Objective<P>,
    M: GenomeMapping<G, P>,
{
    fn evaluate(&self, genome: &G, params: &ObjectiveParams) -> Result<f64> {
        let mapped = self.mapping.map(genome)?;
        self.objective.evaluate(&mapped, params)
    }

    fn name(&self) -> &'static str {
        self.objective.name()
    }
}

/// Sign-inverting adapter for maximize-oriented objectives.
///
/// ```
/// use u_blackbox::fitness::{Maximize, Objective, ObjectiveParams};
/// use u_blackbox::fitness::functions::OneMax;
///
/// let most_ones = Maximize(OneMax);
/// let f = most_ones.evaluate(&vec![1u8, 1, 0], &ObjectiveParams::default()).unwrap();
/// assert_eq!(f, -2.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Maximize<O>(pub O);

impl<G, O: Objective<G>> Objective<G> for Maximize<O> {
    fn evaluate(&self, genome: &G, params: &ObjectiveParams) -> Result<f64> {
        Ok(-self.0.evaluate(genome, params)?)
    }

    fn name(&self) -> &'static str {
        self.0.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchError;

    fn sum(values: &Vec<f64>, _: &ObjectiveParams) -> Result<f64> {
        Ok(values.iter().sum())
    }

    #[test]
    fn test_closure_objective() {
        let f = |x: &f64, p: &ObjectiveParams| -> Result<f64> { Ok(x + p.bias.unwrap_or(0.0)) };
        let params = ObjectiveParams {
            bias: Some(2.0),
            coefficients: None,
        };
        assert_eq!(f.evaluate(&1.0, &params).unwrap(), 3.0);
    }

    #[test]
    fn test_mapped_objective() {
        let double = |x: &Vec<u8>| -> Result<Vec<f64>> { Ok(x.iter().map(|&b| 2.0 * b as f64).collect()) };
        let mapped: Mapped<_, _, Vec<f64>> = Mapped::new(sum, double);
        let f = mapped
            .evaluate(&vec![1u8, 0, 1], &ObjectiveParams::default())
            .unwrap();
        assert_eq!(f, 4.0);
    }

    #[test]
    fn test_mapping_error_propagates() {
        let failing = |_: &Vec<u8>| -> Result<Vec<f64>> { Err(SearchError::InvalidDomain("bad".into())) };
        let mapped: Mapped<_, _, Vec<f64>> = Mapped::new(sum, failing);
        let err = mapped.evaluate(&vec![1u8], &ObjectiveParams::default());
        assert_eq!(err, Err(SearchError::InvalidDomain("bad".into())));
    }

    #[test]
    fn test_maximize_negates() {
        let f = Maximize(sum);
        assert_eq!(
            f.evaluate(&vec![1.0, 2.5], &ObjectiveParams::default()).unwrap(),
            -3.5
        );
    }

    #[test]
    fn test_require_coefficients() {
        let params = ObjectiveParams {
            bias: None,
            coefficients: Some(vec![1.0, 2.0]),
        };
        assert!(params.require_coefficients("linear", 2).is_ok());
        assert_eq!(
            params.require_coefficients("linear", 3),
            Err(SearchError::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        );
        assert!(params.require_bias("linear").is_err());
    }
}
