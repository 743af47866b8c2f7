//! Repeated, independent measurement trials under one fixed configuration.
use rand::Rng;

use crate::core::bias::apply_bias;
use crate::core::error::Result;
use crate::core::field::{Angles, DirectionalBias};
use crate::core::sampler::OutcomeDistribution;
use crate::core::types::{Outcome, PairOutcome, QubitOutcome, StateVector};
use crate::debug_log;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeasurementMode {
    /// Born rule on the untouched state.
    Standard,
    /// Born rule on the field-biased state.
    Directed,
}

impl MeasurementMode {
    pub fn title(self) -> &'static str {
        match self {
            MeasurementMode::Standard => "Standard Measurement",
            MeasurementMode::Directed => "Directed Measurement",
        }
    }
}

/// Outcomes of one run, in draw order. Immutable once produced.
#[derive(Clone, Debug, PartialEq)]
pub struct TrialBatch<O: Outcome> {
    mode: MeasurementMode,
    angles: Angles,
    outcomes: Vec<O>,
}

impl<O: Outcome> TrialBatch<O> {
    pub fn new(mode: MeasurementMode, angles: Angles, outcomes: Vec<O>) -> Self {
        Self { mode, angles, outcomes }
    }

    pub fn mode(&self) -> MeasurementMode {
        self.mode
    }

    pub fn angles(&self) -> Angles {
        self.angles
    }

    pub fn outcomes(&self) -> &[O] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct TrialRunner {
    initial: StateVector,
    angles: Angles,
    trials: usize,
}

impl TrialRunner {
    pub fn new(initial: StateVector, angles: Angles, trials: usize) -> Self {
        Self { initial, angles, trials }
    }

    pub fn initial(&self) -> &StateVector {
        &self.initial
    }

    pub fn bias(&self) -> DirectionalBias {
        DirectionalBias::from_angles(self.angles)
    }

    /// The state actually measured in `mode`. θ and φ are fixed for the whole
    /// batch, so the directed state is the same for every trial.
    pub fn measured_state(&self, mode: MeasurementMode) -> Result<StateVector> {
        match mode {
            MeasurementMode::Standard => Ok(self.initial.clone()),
            MeasurementMode::Directed => apply_bias(&self.initial, self.bias()),
        }
    }

    pub fn distribution(&self, mode: MeasurementMode) -> Result<OutcomeDistribution<QubitOutcome>> {
        OutcomeDistribution::from_state(&self.measured_state(mode)?)
    }

    pub fn run_batch<R: Rng + ?Sized>(
        &self,
        mode: MeasurementMode,
        rng: &mut R,
    ) -> Result<TrialBatch<QubitOutcome>> {
        let dist = self.distribution(mode)?;
        debug_log!(
            "{:?}: {} trials, P(0) = {:.6}, P(1) = {:.6}",
            mode,
            self.trials,
            dist.probability(QubitOutcome::Zero),
            dist.probability(QubitOutcome::One)
        );
        let outcomes = (0..self.trials).map(|_| dist.sample(rng)).collect();
        Ok(TrialBatch::new(mode, self.angles, outcomes))
    }

    /// Entangled pair in `(|00⟩+|11⟩)/√2`, always measured in directed mode.
    /// The initial single-system state is not involved.
    pub fn run_entangled_batch<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<TrialBatch<PairOutcome>> {
        let dist = OutcomeDistribution::entangled(self.bias())?;
        debug_log!(
            "entangled: {} trials, P(00) = {:.6}",
            self.trials,
            dist.probability(PairOutcome::ZeroZero)
        );
        let outcomes = (0..self.trials).map(|_| dist.sample(rng)).collect();
        Ok(TrialBatch::new(MeasurementMode::Directed, self.angles, outcomes))
    }

    /// Standard and directed batches from independent draws of the same source.
    pub fn run_comparison<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(TrialBatch<QubitOutcome>, TrialBatch<QubitOutcome>)> {
        let standard = self.run_batch(MeasurementMode::Standard, rng)?;
        let directed = self.run_batch(MeasurementMode::Directed, rng)?;
        Ok((standard, directed))
    }

    /// Split the batch across rayon workers. Each chunk owns a `StdRng`
    /// seeded from `seed` and its chunk index.
    #[cfg(feature = "parallel")]
    pub fn run_batch_parallel(&self, mode: MeasurementMode, seed: u64) -> Result<TrialBatch<QubitOutcome>> {
        use rand::rngs::StdRng;
        use rand::SeedableRng;
        use rayon::prelude::*;

        const CHUNK: usize = 64 * 1024;

        let dist = self.distribution(mode)?;
        let dist = &dist;
        let trials = self.trials;
        let chunks = trials.div_ceil(CHUNK);
        let outcomes: Vec<QubitOutcome> = (0..chunks)
            .into_par_iter()
            .flat_map_iter(move |chunk| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(chunk as u64));
                let len = CHUNK.min(trials - chunk * CHUNK);
                (0..len).map(move |_| dist.sample(&mut rng))
            })
            .collect();
        Ok(TrialBatch::new(mode, self.angles, outcomes))
    }
}

/// One batch from the equal-superposition state `[1,1]/√2`.
pub fn run_batch<R: Rng + ?Sized>(
    mode: MeasurementMode,
    theta: f64,
    phi: f64,
    trials: usize,
    rng: &mut R,
) -> Result<TrialBatch<QubitOutcome>> {
    TrialRunner::new(StateVector::plus(), Angles::new(theta, phi), trials).run_batch(mode, rng)
}

pub fn run_entangled_batch<R: Rng + ?Sized>(
    theta: f64,
    phi: f64,
    trials: usize,
    rng: &mut R,
) -> Result<TrialBatch<PairOutcome>> {
    TrialRunner::new(StateVector::plus(), Angles::new(theta, phi), trials).run_entangled_batch(rng)
}
