//! State vectors and outcome alphabets.
use std::fmt;
use std::hash::Hash;

use nalgebra::DVector;
use num_complex::Complex64 as C64;

use crate::core::error::{DqmError, Result};

#[inline]
fn c(r: f64, i: f64) -> C64 {
    C64::new(r, i)
}

/// Normalized complex amplitudes over a finite outcome space.
///
/// The squared magnitudes always sum to 1 (within float tolerance). A state is
/// never mutated; biasing produces a new one.
#[derive(Clone, Debug, PartialEq)]
pub struct StateVector {
    data: DVector<C64>,
}

impl StateVector {
    /// Normalize arbitrary amplitudes with the L2 norm.
    pub fn try_new(vec: DVector<C64>) -> Result<Self> {
        let mut v = vec;
        let norm = l2_norm(&v);
        if norm == 0.0 {
            return Err(DqmError::degenerate("all amplitudes are zero"));
        }
        if !norm.is_finite() {
            return Err(DqmError::DegenerateState(format!("amplitude norm is not finite ({norm})")));
        }
        unscale(&mut v, norm);
        Ok(Self { data: v })
    }

    /// Caller guarantees `data` is already unit-norm (or deliberately NaN).
    pub(crate) fn from_normalized(data: DVector<C64>) -> Self {
        Self { data }
    }

    /// Normalize a slice of amplitudes, one per outcome in basis order.
    pub fn from_amplitudes(amps: &[C64]) -> Result<Self> {
        Self::try_new(DVector::from_column_slice(amps))
    }

    /// Single two-level system `alpha|0⟩ + beta|1⟩`.
    pub fn qubit(alpha: C64, beta: C64) -> Result<Self> {
        Self::from_amplitudes(&[alpha, beta])
    }

    /// `qubit` with real amplitudes, e.g. `qubit_real(1.0, 1.0)` for `|+⟩`.
    pub fn qubit_real(alpha: f64, beta: f64) -> Result<Self> {
        Self::qubit(c(alpha, 0.0), c(beta, 0.0))
    }

    /// `[1, 1] / √2`
    pub fn plus() -> Self {
        let s = 1.0_f64 / 2.0_f64.sqrt();
        Self { data: DVector::from_vec(vec![c(s, 0.0), c(s, 0.0)]) }
    }

    /// `(|00⟩ + |11⟩) / √2`
    pub fn bell_phi_plus() -> Self {
        let s = 1.0_f64 / 2.0_f64.sqrt();
        Self {
            data: DVector::from_vec(vec![c(s, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(s, 0.0)]),
        }
    }

    pub fn amplitudes(&self) -> &DVector<C64> {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Euclidean norm without squaring, so huge or tiny amplitudes neither
/// overflow nor underflow.
pub(crate) fn l2_norm(v: &DVector<C64>) -> f64 {
    v.iter().fold(0.0_f64, |acc, z| acc.hypot(z.norm()))
}

/// Divide every amplitude by a real `norm`, component-wise.
pub(crate) fn unscale(v: &mut DVector<C64>, norm: f64) {
    v.apply(|z| *z /= norm);
}

/// Born-rule probabilities: the squared magnitude of every amplitude.
pub fn probabilities(state: &StateVector) -> Vec<f64> {
    state.data.iter().map(|z| z.norm_sqr()).collect()
}

/// A closed alphabet of measurement outcomes for one system size.
pub trait Outcome: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Every label, in basis order.
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;

    /// Outcome whose proportion headlines a summary line.
    fn focus() -> Self {
        Self::ALL[Self::ALL.len() - 1]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum QubitOutcome {
    Zero,
    One,
}

impl Outcome for QubitOutcome {
    const ALL: &'static [Self] = &[QubitOutcome::Zero, QubitOutcome::One];

    fn label(&self) -> &'static str {
        match self {
            QubitOutcome::Zero => "0",
            QubitOutcome::One => "1",
        }
    }
}

/// Joint outcome of an entangled pair. Only `ZeroZero` and `OneOne` are ever
/// produced by the correlated measurement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PairOutcome {
    ZeroZero,
    ZeroOne,
    OneZero,
    OneOne,
}

impl Outcome for PairOutcome {
    const ALL: &'static [Self] = &[
        PairOutcome::ZeroZero,
        PairOutcome::ZeroOne,
        PairOutcome::OneZero,
        PairOutcome::OneOne,
    ];

    fn label(&self) -> &'static str {
        match self {
            PairOutcome::ZeroZero => "00",
            PairOutcome::ZeroOne => "01",
            PairOutcome::OneZero => "10",
            PairOutcome::OneOne => "11",
        }
    }
}

impl fmt::Display for QubitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for PairOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
