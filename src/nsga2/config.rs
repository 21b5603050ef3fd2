//! NSGA-II configuration.

/// Configuration for the NSGA-II engine.
///
/// # Defaults
///
/// ```
/// use motsp::nsga2::Nsga2Config;
///
/// let config = Nsga2Config::default();
/// assert_eq!(config.population_size, 150);
/// assert_eq!(config.generations, 100);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nsga2Config {
    /// Number of tours per generation.
    pub population_size: usize,

    /// Number of generations to run.
    pub generations: usize,

    /// Probability of applying swap mutation to an offspring (0.0-1.0).
    ///
    /// Applied once per offspring, not per gene.
    pub mutation_prob: f64,

    /// Tournament size for parent selection.
    ///
    /// Clamped to the population size at selection time; 2 gives the
    /// light binary-tournament pressure NSGA-II typically uses.
    pub tournament_size: usize,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for Nsga2Config {
    fn default() -> Self {
        Self {
            population_size: 150,
            generations: 100,
            mutation_prob: 0.2,
            tournament_size: 2,
            seed: None,
        }
    }
}

impl Nsga2Config {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation probability, clamped to `0.0..=1.0`.
    pub fn with_mutation_prob(mut self, prob: f64) -> Self {
        self.mutation_prob = prob.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.generations == 0 {
            return Err("generations must be at least 1".into());
        }
        Ok(())
    }
}
