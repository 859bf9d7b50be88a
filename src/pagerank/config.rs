//! Configuration for the rank estimators.

use std::{fmt, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

/// Probability of following a link rather than jumping to a random page.
pub const DAMPING: f64 = 0.85;
/// Random-walk length used by the sampling estimator.
pub const SAMPLES: usize = 10_000;
/// Largest per-page change that still counts as converged.
pub const TOLERANCE: f64 = 0.001;
/// Upper bound on relaxation sweeps.
pub const MAX_ITERATIONS: usize = 10_000;

/// How the next-page distribution mixes link-following with random jumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionKind {
    /// Every page gets `(1-d)/N`; each linked page additionally gets `d/L`.
    #[default]
    Mixture,
    /// Each linked page gets `d/L + (1-d)/(L+1)` and the current page gets
    /// `(1-d)/(L+1)`. Reproduces the course reference output.
    Blended,
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransitionKind::Mixture => "mixture",
            TransitionKind::Blended => "blended",
        };
        f.write_str(label)
    }
}

impl FromStr for TransitionKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mixture" => Ok(TransitionKind::Mixture),
            "blended" => Ok(TransitionKind::Blended),
            _ => Err(crate::Error::ParseTransitionKind {
                input: s.to_string(),
                expected: "mixture, blended".to_string(),
            }),
        }
    }
}

/// Parameters shared by both estimators.
///
/// # Examples
///
/// ```
/// use intro_ai::pagerank::{PageRankConfig, TransitionKind};
///
/// let config = PageRankConfig::default()
///     .with_seed(7)
///     .with_samples(500)
///     .with_transition(TransitionKind::Blended);
/// assert_eq!(config.samples, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRankConfig {
    pub damping: f64,
    pub samples: usize,
    pub tolerance: f64,
    pub max_iterations: usize,
    /// Random seed for reproducible sampling
    pub seed: Option<u64>,
    pub transition: TransitionKind,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: DAMPING,
            samples: SAMPLES,
            tolerance: TOLERANCE,
            max_iterations: MAX_ITERATIONS,
            seed: None,
            transition: TransitionKind::default(),
        }
    }
}

impl PageRankConfig {
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_transition(mut self, transition: TransitionKind) -> Self {
        self.transition = transition;
        self
    }

    /// Load a JSON config; missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, crate::Error> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| crate::Error::io(format!("read config {}", path.display()), e))?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Reject parameters the estimators cannot work with.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(crate::Error::InvalidDamping {
                value: self.damping,
            });
        }
        if self.samples == 0 {
            return Err(crate::Error::InvalidSampleCount);
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(crate::Error::InvalidConfiguration {
                message: format!("tolerance {} must be positive and finite", self.tolerance),
            });
        }
        Ok(())
    }
}
