use num_complex::Complex64 as C64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use dqm_project::core::{apply_bias, probabilities, DirectionalBias, DqmError, StateVector};

fn norm_sqr_sum(s: &StateVector) -> f64 {
    probabilities(s).iter().sum()
}

#[test]
fn random_amplitudes_normalize_to_one() {
    let mut rng = StdRng::seed_from_u64(2024);
    for len in [2usize, 4, 8] {
        for _ in 0..500 {
            let amps: Vec<C64> = (0..len)
                .map(|_| C64::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
                .collect();
            let s = StateVector::from_amplitudes(&amps).unwrap();
            assert_eq!(s.len(), len);
            assert!((norm_sqr_sum(&s) - 1.0).abs() < 1e-9);
        }
    }
}

#[test]
fn all_zero_amplitudes_fail() {
    let err = StateVector::from_amplitudes(&[C64::new(0.0, 0.0); 4]).unwrap_err();
    assert!(matches!(err, DqmError::DegenerateState(_)));
}

#[test]
fn half_bias_leaves_equal_superposition_unchanged() {
    let plus = StateVector::plus();
    let out = apply_bias(&plus, DirectionalBias::new(0.5).unwrap()).unwrap();
    for (a, b) in out.amplitudes().iter().zip(plus.amplitudes().iter()) {
        assert!((a - b).norm() < 1e-12);
    }
}

#[test]
fn full_bias_collapses_to_zero() {
    let s = StateVector::qubit_real(0.3, 0.9).unwrap();
    let out = apply_bias(&s, DirectionalBias::new(1.0).unwrap()).unwrap();
    let amps = out.amplitudes();
    assert!((amps[0] - C64::new(1.0, 0.0)).norm() < 1e-12);
    assert_eq!(amps[1], C64::new(0.0, 0.0));
}

#[test]
fn zero_bias_collapses_to_one() {
    let out = apply_bias(&StateVector::plus(), DirectionalBias::new(0.0).unwrap()).unwrap();
    let p = probabilities(&out);
    assert_eq!(p[0], 0.0);
    assert!((p[1] - 1.0).abs() < 1e-12);
}

#[test]
fn full_bias_on_pure_one_falls_back_to_input() {
    let one = StateVector::qubit_real(0.0, 2.0).unwrap();
    let out = apply_bias(&one, DirectionalBias::new(1.0).unwrap()).unwrap();
    assert_eq!(out, one);
}

#[test]
fn biased_state_is_normalized_and_matches_formula() {
    let s = StateVector::qubit(C64::new(1.0, 1.0), C64::new(0.5, -2.0)).unwrap();
    let f = 0.8;
    let out = apply_bias(&s, DirectionalBias::new(f).unwrap()).unwrap();
    assert!((norm_sqr_sum(&out) - 1.0).abs() < 1e-12);

    let p = probabilities(&s);
    let w0 = f * f * p[0];
    let w1 = (1.0 - f) * (1.0 - f) * p[1];
    let q = probabilities(&out);
    assert!((q[0] - w0 / (w0 + w1)).abs() < 1e-12);
}

#[test]
fn extreme_magnitudes_normalize() {
    for scale in [1e200, 1e-200] {
        let s = StateVector::qubit_real(scale, scale).unwrap();
        let p = probabilities(&s);
        assert!((p[0] - 0.5).abs() < 1e-12, "scale {scale}: {p:?}");
        assert!((p[1] - 0.5).abs() < 1e-12, "scale {scale}: {p:?}");
    }
    let s = StateVector::qubit(C64::new(0.0, 1e300), C64::new(1e300, 0.0)).unwrap();
    assert!((norm_sqr_sum(&s) - 1.0).abs() < 1e-12);
}

#[test]
fn infinite_amplitude_is_degenerate() {
    let err = StateVector::qubit_real(f64::INFINITY, 1.0).unwrap_err();
    assert!(matches!(err, DqmError::DegenerateState(_)));
}

#[test]
fn bias_outside_unit_interval_is_rejected() {
    for f in [1.5, -0.25] {
        let err = DirectionalBias::new(f).unwrap_err();
        assert!(matches!(err, DqmError::InvalidDistribution(_)));
    }
}
