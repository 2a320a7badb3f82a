//! The mutator wrapper used by the engine.

use super::config::MutatorConfig;
use super::types::{ParameterKind, Perturbation};
use crate::error::Result;
use rand::RngCore;

/// Applies one perturbation strategy with a configured parameter.
///
/// The mutator supplies the probability or deviation (whichever the
/// perturbation asks for) and never inspects the perturbation itself.
/// Inputs are borrowed and left untouched.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_blackbox::mutation::{BitflipSingle, Mutator};
///
/// let mutator = Mutator::new(BitflipSingle);
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let parent = vec![0u8; 6];
/// let child = mutator.mutate_single(&parent, &mut rng).unwrap();
/// assert_eq!(child.iter().filter(|&&b| b == 1).count(), 1);
/// assert_eq!(parent, vec![0u8; 6]);
/// ```
pub struct Mutator<G> {
    perturbation: Box<dyn Perturbation<G>>,
    config: MutatorConfig,
}

impl<G> Mutator<G> {
    /// Wraps `perturbation` with the default configuration.
    pub fn new(perturbation: impl Perturbation<G> + 'static) -> Self {
        Self {
            perturbation: Box::new(perturbation),
            config: MutatorConfig::default(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: MutatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &MutatorConfig {
        &self.config
    }

    /// Mutable access, e.g. to raise the probability between runs.
    pub fn config_mut(&mut self) -> &mut MutatorConfig {
        &mut self.config
    }

    /// Which parameter the wrapped perturbation consumes.
    pub fn parameter_kind(&self) -> ParameterKind {
        self.perturbation.parameter_kind()
    }

    /// The configured value passed to the perturbation.
    pub fn parameter(&self) -> f64 {
        match self.parameter_kind() {
            ParameterKind::Probability => self.config.probability,
            ParameterKind::Deviation => self.config.deviation,
        }
    }

    /// Perturbs one genome with the configured parameter.
    ///
    /// Fails with [`InvalidConfig`](crate::SearchError::InvalidConfig) if
    /// the configuration does not validate.
    pub fn mutate_single(&self, genome: &G, rng: &mut dyn RngCore) -> Result<G> {
        self.config.validate()?;
        self.perturbation.perturb(genome, self.parameter(), rng)
    }

    /// Perturbs one genome with an explicit parameter, overriding the
    /// configured one. Used by adaptive step-size control.
    pub fn mutate_with(&self, genome: &G, parameter: f64, rng: &mut dyn RngCore) -> Result<G> {
        self.perturbation.perturb(genome, parameter, rng)
    }

    /// Perturbs every member independently, preserving order and length.
    pub fn mutate_population(&self, population: &[G], rng: &mut dyn RngCore) -> Result<Vec<G>> {
        self.config.validate()?;
        let parameter = self.parameter();
        population
            .iter()
            .map(|genome| self.perturbation.perturb(genome, parameter, rng))
            .collect()
    }

    /// Name of the wrapped perturbation.
    pub fn name(&self) -> &'static str {
        self.perturbation.name()
    }
}

impl<G> std::fmt::Debug for Mutator<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mutator")
            .field("perturbation", &self.perturbation.name())
            .field("config", &self.config)
            .finish()
    }
}
