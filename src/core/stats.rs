//! Outcome counts, proportions and their textual/JSON rendering.
use serde_json::{json, Value};

use crate::core::trials::TrialBatch;
use crate::core::types::Outcome;

/// Per-outcome counts over the full alphabet of `O`, in basis order.
/// Counts always sum to `trials`.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryStats<O: Outcome> {
    trials: usize,
    counts: Vec<(O, usize)>,
}

pub fn summarize<O: Outcome>(batch: &TrialBatch<O>) -> SummaryStats<O> {
    let mut counts: Vec<(O, usize)> = O::ALL.iter().map(|&o| (o, 0)).collect();
    for outcome in batch.outcomes() {
        if let Some(slot) = counts.iter_mut().find(|(o, _)| o == outcome) {
            slot.1 += 1;
        }
    }
    SummaryStats { trials: batch.len(), counts }
}

impl<O: Outcome> SummaryStats<O> {
    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn count(&self, outcome: O) -> usize {
        self.counts
            .iter()
            .find(|(o, _)| *o == outcome)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    /// `count / trials`; 0 for an empty batch.
    pub fn proportion(&self, outcome: O) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.count(outcome) as f64 / self.trials as f64
    }

    pub fn iter(&self) -> impl Iterator<Item = (O, usize, f64)> + '_ {
        self.counts.iter().map(move |&(o, n)| (o, n, self.proportion(o)))
    }

    /// Binomial standard error of a proportion `p` over this many trials.
    pub fn standard_error(&self, p: f64) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        (p * (1.0 - p) / self.trials as f64).sqrt()
    }

    /// Distance of the observed proportion from `expected`, in standard
    /// errors. `None` when the expected outcome is certain or impossible.
    pub fn z_score(&self, outcome: O, expected: f64) -> Option<f64> {
        let se = self.standard_error(expected);
        if se == 0.0 {
            return None;
        }
        Some((self.proportion(outcome) - expected) / se)
    }

    /// `"<title> - 0: n0, 1: n1, Proportion of 1: p"`
    pub fn line(&self, title: &str) -> String {
        let counts = self
            .counts
            .iter()
            .map(|(o, n)| format!("{}: {}", o.label(), n))
            .collect::<Vec<_>>()
            .join(", ");
        let focus = O::focus();
        format!(
            "{title} - {counts}, Proportion of {}: {:.4}",
            focus.label(),
            self.proportion(focus)
        )
    }

    pub fn to_json(&self) -> Value {
        let mut counts = serde_json::Map::new();
        let mut proportions = serde_json::Map::new();
        for (o, n, p) in self.iter() {
            counts.insert(o.label().to_string(), json!(n));
            proportions.insert(o.label().to_string(), json!(p));
        }
        json!({
            "trials": self.trials,
            "counts": counts,
            "proportions": proportions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::Angles;
    use crate::core::trials::MeasurementMode;
    use crate::core::types::QubitOutcome::{self, One, Zero};

    fn batch(outcomes: Vec<QubitOutcome>) -> TrialBatch<QubitOutcome> {
        TrialBatch::new(MeasurementMode::Standard, Angles::new(0.0, 0.0), outcomes)
    }

    #[test]
    fn unseen_labels_count_zero() {
        let s = summarize(&batch(vec![Zero, Zero]));
        assert_eq!(s.count(One), 0);
        assert_eq!(s.proportion(Zero), 1.0);
    }

    #[test]
    fn empty_batch_has_zero_proportions() {
        let s = summarize(&batch(vec![]));
        assert_eq!(s.trials(), 0);
        assert_eq!(s.proportion(One), 0.0);
        assert_eq!(s.z_score(One, 0.5), None);
    }

    #[test]
    fn z_score_of_exact_match_is_zero() {
        let s = summarize(&batch(vec![Zero, One, Zero, One]));
        assert_eq!(s.z_score(One, 0.5), Some(0.0));
        assert_eq!(s.z_score(One, 1.0), None);
    }
}
