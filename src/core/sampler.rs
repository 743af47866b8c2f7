//! Categorical sampling over an outcome alphabet.
use rand::Rng;
use rand_distr::{Distribution, WeightedIndex};

use crate::core::error::{DqmError, Result};
use crate::core::field::DirectionalBias;
use crate::core::types::{probabilities, Outcome, PairOutcome, StateVector};

/// Allowed drift of a distribution's total from 1.
pub const SUM_TOLERANCE: f64 = 1e-9;

/// Validated probabilities over `O`, ready to draw from.
#[derive(Clone, Debug)]
pub struct OutcomeDistribution<O: Outcome> {
    outcomes: Vec<O>,
    probs: Vec<f64>,
    index: WeightedIndex<f64>,
}

impl<O: Outcome> OutcomeDistribution<O> {
    pub fn try_new(weights: Vec<(O, f64)>) -> Result<Self> {
        if weights.is_empty() {
            return Err(DqmError::invalid_distribution("no outcomes"));
        }
        if let Some((o, p)) = weights.iter().find(|(_, p)| !p.is_finite() || *p < 0.0) {
            return Err(DqmError::InvalidDistribution(format!(
                "P({}) = {p} is not a non-negative real",
                o.label()
            )));
        }
        let total: f64 = weights.iter().map(|(_, p)| p).sum();
        if (total - 1.0).abs() > SUM_TOLERANCE {
            return Err(DqmError::InvalidDistribution(format!(
                "probabilities sum to {total}, expected 1"
            )));
        }

        let (outcomes, probs): (Vec<O>, Vec<f64>) = weights.into_iter().unzip();
        let index = WeightedIndex::new(&probs)
            .map_err(|e| DqmError::InvalidDistribution(e.to_string()))?;
        Ok(Self { outcomes, probs, index })
    }

    /// Born-rule distribution of `state` over the full alphabet of `O`.
    pub fn from_state(state: &StateVector) -> Result<Self> {
        if state.len() != O::ALL.len() {
            return Err(DqmError::DimensionMismatch { expected: O::ALL.len(), found: state.len() });
        }
        Self::try_new(O::ALL.iter().copied().zip(probabilities(state)).collect())
    }

    pub fn probability(&self, outcome: O) -> f64 {
        self.outcomes
            .iter()
            .position(|o| *o == outcome)
            .map(|i| self.probs[i])
            .unwrap_or(0.0)
    }

    /// One independent draw.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> O {
        self.outcomes[self.index.sample(rng)]
    }
}

impl OutcomeDistribution<PairOutcome> {
    /// Correlated pair measurement: `"00"` with the bias, `"11"` with its
    /// complement. `"01"` and `"10"` are not part of the support.
    pub fn entangled(bias: DirectionalBias) -> Result<Self> {
        Self::try_new(vec![
            (PairOutcome::ZeroZero, bias.value()),
            (PairOutcome::OneOne, bias.complement()),
        ])
    }
}
