//! Directed collapse: reweight a two-outcome state before it is measured.
use nalgebra::DVector;
use num_complex::Complex64 as C64;

use crate::core::error::{DqmError, Result};
use crate::core::field::DirectionalBias;
use crate::core::types::{l2_norm, unscale, StateVector};
use crate::debug_log;

/// Scale `[a, b]` to `[f·a, (1−f)·b]` and renormalize.
///
/// When both scaled amplitudes vanish the original state is returned as is,
/// so long runs survive degenerate angle choices.
pub fn apply_bias(state: &StateVector, bias: DirectionalBias) -> Result<StateVector> {
    let amps = state.amplitudes();
    if amps.len() != 2 {
        return Err(DqmError::DimensionMismatch { expected: 2, found: amps.len() });
    }

    let f = bias.value();
    let directed = DVector::from_vec(vec![
        amps[0] * C64::from(f),
        amps[1] * C64::from(1.0 - f),
    ]);

    let norm = l2_norm(&directed);
    if norm == 0.0 {
        debug_log!("bias {f} annihilated the state; keeping the unbiased amplitudes");
        return Ok(state.clone());
    }

    // NaN biases still come out the other side; the sampler rejects them.
    let mut directed = directed;
    unscale(&mut directed, norm);
    Ok(StateVector::from_normalized(directed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::probabilities;

    #[test]
    fn rejects_pair_states() {
        let err = apply_bias(&StateVector::bell_phi_plus(), DirectionalBias::new(0.5).unwrap()).unwrap_err();
        assert_eq!(err, DqmError::DimensionMismatch { expected: 2, found: 4 });
    }

    #[test]
    fn zero_bias_on_pure_zero_falls_back() {
        let zero = StateVector::qubit_real(1.0, 0.0).unwrap();
        let out = apply_bias(&zero, DirectionalBias::new(0.0).unwrap()).unwrap();
        assert_eq!(out, zero);
    }

    #[test]
    fn large_amplitudes_survive_biasing() {
        let big = StateVector::qubit_real(1e200, 3e200).unwrap();
        let out = apply_bias(&big, DirectionalBias::new(0.75).unwrap()).unwrap();
        let p = probabilities(&out);
        assert!((p[0] - 0.5).abs() < 1e-12);
        assert!((p[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn nan_bias_yields_nan_probabilities() {
        let out = apply_bias(&StateVector::plus(), DirectionalBias::new(f64::NAN).unwrap()).unwrap();
        assert!(probabilities(&out).iter().all(|p| p.is_nan()));
    }
}
