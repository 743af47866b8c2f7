//! Directional field: a smooth bias toward the first outcome, from two angles.
use crate::core::error::{DqmError, Result};

/// Polar/azimuthal pair in radians.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Angles {
    pub theta: f64,
    pub phi: f64,
}

impl Angles {
    /// Both angles already in radians.
    pub fn new(theta: f64, phi: f64) -> Self {
        Self { theta, phi }
    }

    /// Degrees, as the angles are usually entered on the command line.
    pub fn from_degrees(theta_deg: f64, phi_deg: f64) -> Self {
        Self { theta: theta_deg.to_radians(), phi: phi_deg.to_radians() }
    }
}

/// `0.5 + 0.5·sin(θ)·cos(φ)`, always within [0, 1] for real inputs.
pub fn directional_field(theta: f64, phi: f64) -> f64 {
    0.5 + 0.5 * theta.sin() * phi.cos()
}

/// Weight given to the first outcome label; `1 - value` goes to the second.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DirectionalBias(f64);

impl DirectionalBias {
    pub fn from_angles(angles: Angles) -> Self {
        Self(directional_field(angles.theta, angles.phi))
    }

    /// Wrap a raw bias value, which must lie in [0, 1]. NaN is let
    /// through so the sampler reports it as an invalid distribution.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_nan() && !(0.0..=1.0).contains(&value) {
            return Err(DqmError::InvalidDistribution(format!("bias {value} is outside [0, 1]")));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn complement(self) -> f64 {
        1.0 - self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn degrees_convert_to_radians() {
        let a = Angles::from_degrees(90.0, 180.0);
        assert!((a.theta - PI / 2.0).abs() < 1e-15);
        assert!((a.phi - PI).abs() < 1e-15);
    }

    #[test]
    fn raw_bias_must_be_in_unit_interval() {
        assert_eq!(DirectionalBias::new(0.0).unwrap().value(), 0.0);
        assert_eq!(DirectionalBias::new(1.0).unwrap().complement(), 0.0);
        assert!(matches!(DirectionalBias::new(1.5), Err(DqmError::InvalidDistribution(_))));
        assert!(matches!(DirectionalBias::new(-1e-9), Err(DqmError::InvalidDistribution(_))));
        assert!(DirectionalBias::new(f64::INFINITY).is_err());
        assert!(DirectionalBias::new(f64::NAN).unwrap().value().is_nan());
    }

    #[test]
    fn bias_from_angles_matches_field() {
        let a = Angles::new(PI / 3.0, PI / 4.0);
        let b = DirectionalBias::from_angles(a);
        assert_eq!(b.value(), directional_field(a.theta, a.phi));
        assert!((b.value() + b.complement() - 1.0).abs() < 1e-15);
    }
}
