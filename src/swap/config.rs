//! Simulation configuration.

/// Which candidate pool a node samples swap partners from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionPolicy {
    /// Sample among the node's direct neighbors only.
    Local,
    /// Sample uniformly over the entire graph.
    Random,
    /// Try the neighborhood first; fall back to a uniform sample when no
    /// neighbor clears the acceptance bar.
    Hybrid,
}

/// Configuration for a swap simulation run.
///
/// The defaults reproduce the reference experiment: 1000 rounds starting at
/// temperature 2.0, cooling by 0.003 per round, benefit exponent 2.0, hybrid
/// partner selection with 3 neighbor candidates and 6 uniform candidates.
///
/// # Examples
///
/// ```
/// use graph_anneal::swap::{SelectionPolicy, SwapConfig};
///
/// let config = SwapConfig::default()
///     .with_rounds(200)
///     .with_policy(SelectionPolicy::Local)
///     .with_seed(42);
/// assert_eq!(config.rounds, 200);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapConfig {
    /// Number of rounds to run. Every node gets exactly one swap
    /// opportunity per round.
    pub rounds: usize,

    /// Starting temperature. Values above 1 relax the acceptance bar,
    /// letting lateral and mildly worsening exchanges through early on.
    pub initial_temperature: f64,

    /// Amount subtracted from the temperature after each round, until the
    /// floor of 1 is reached.
    pub delta: f64,

    /// Benefit exponent. Larger values bias the score toward nodes already
    /// well embedded in a single color. Must be positive.
    pub alpha: f64,

    /// Candidate pool selection policy.
    pub policy: SelectionPolicy,

    /// How many distinct neighbors a local sample requests. Clipped to the
    /// neighbor count when a node has fewer.
    pub neighbor_sample_size: usize,

    /// How many distinct nodes a uniform sample requests. Clipped to the
    /// graph size minus one.
    pub uniform_sample_size: usize,

    /// Random seed. A seeded run is fully reproducible; `None` seeds from
    /// entropy.
    pub seed: Option<u64>,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            rounds: 1000,
            initial_temperature: 2.0,
            delta: 0.003,
            alpha: 2.0,
            policy: SelectionPolicy::Hybrid,
            neighbor_sample_size: 3,
            uniform_sample_size: 6,
            seed: None,
        }
    }
}

impl SwapConfig {
    /// Sets the number of rounds.
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets the starting temperature.
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    /// Sets the per-round cooling step.
    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = delta;
        self
    }

    /// Sets the benefit exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the partner selection policy.
    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the neighbor sample size.
    pub fn with_neighbor_sample_size(mut self, n: usize) -> Self {
        self.neighbor_sample_size = n;
        self
    }

    /// Sets the uniform sample size.
    pub fn with_uniform_sample_size(mut self, n: usize) -> Self {
        self.uniform_sample_size = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.initial_temperature.is_finite() || self.initial_temperature < 1.0 {
            return Err(format!(
                "initial_temperature must be at least the floor of 1.0, got {}",
                self.initial_temperature
            ));
        }
        if !self.delta.is_finite() || self.delta <= 0.0 {
            return Err(format!("delta must be positive, got {}", self.delta));
        }
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(format!("alpha must be positive, got {}", self.alpha));
        }
        if self.neighbor_sample_size == 0 {
            return Err("neighbor_sample_size must be at least 1".into());
        }
        if self.uniform_sample_size == 0 {
            return Err("uniform_sample_size must be at least 1".into());
        }
        Ok(())
    }
}
