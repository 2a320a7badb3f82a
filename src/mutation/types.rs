//! Core trait for perturbation strategies.

use crate::error::Result;
use rand::RngCore;

/// Which configured value a perturbation consumes as its parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParameterKind {
    /// A per-gene probability in `[0, 1]`.
    #[default]
    Probability,

    /// A step size, e.g. a Gaussian standard deviation.
    Deviation,
}

/// A pure perturbation `(genome, parameter) -> genome'`.
///
/// Implementations must not modify the input and must draw all randomness
/// from `rng` so that seeded runs are reproducible.
///
/// Closures `Fn(&G, f64, &mut dyn RngCore) -> Result<G>` implement this
/// trait with [`ParameterKind::Probability`].
///
/// # Examples
///
/// ```
/// use rand::{Rng, RngCore, SeedableRng};
/// use u_blackbox::mutation::Perturbation;
///
/// let nudge = |x: &Vec<f64>, p: f64, rng: &mut dyn RngCore| -> u_blackbox::Result<Vec<f64>> {
///     Ok(x.iter().map(|v| v + p * rng.random_range(-1.0..1.0)).collect())
/// };
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let y = nudge.perturb(&vec![0.0, 0.0], 0.1, &mut rng).unwrap();
/// assert!(y.iter().all(|v| v.abs() <= 0.1));
/// ```
pub trait Perturbation<G> {
    /// Returns a perturbed copy of `genome`.
    fn perturb(&self, genome: &G, parameter: f64, rng: &mut dyn RngCore) -> Result<G>;

    /// The parameter this perturbation expects.
    fn parameter_kind(&self) -> ParameterKind {
        ParameterKind::Probability
    }

    /// Human-readable name used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<G, F> Perturbation<G> for F
where
    F: Fn(&G, f64, &mut dyn RngCore) -> Result<G>,
{
    fn perturb(&self, genome: &G, parameter: f64, rng: &mut dyn RngCore) -> Result<G> {
        self(genome, parameter, rng)
    }
}
