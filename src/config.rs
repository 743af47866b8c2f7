//! Run configuration: built-in defaults + optional TOML file.
//!
//! - `DqmConfig::default()` → θ=60°, φ=45°, 1e6 trials, `[1,1]` initial state
//! - `DqmConfig::from_toml_file(path)` → load a user file (missing keys keep defaults)
//! - `DqmConfig::load(cli_path)` → explicit file, else ~/.dqm/dqm.toml if present

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use num_complex::Complex64 as C64;
use serde::Deserialize;

use crate::core::StateVector;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DqmConfig {
    pub run: RunConfig,
    pub state: StateConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub theta_deg: f64,
    pub phi_deg: f64,
    pub trials: usize,
    pub entangled_trials: usize,
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            theta_deg: 60.0,
            phi_deg: 45.0,
            trials: 1_000_000,
            entangled_trials: 10_000,
            seed: None,
        }
    }
}

/// Unnormalized initial amplitudes `alpha|0⟩ + beta|1⟩`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StateConfig {
    pub alpha: f64,
    pub beta: f64,
    pub alpha_im: f64,
    pub beta_im: f64,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self { alpha: 1.0, beta: 1.0, alpha_im: 0.0, beta_im: 0.0 }
    }
}

impl StateConfig {
    pub fn initial_state(&self) -> Result<StateVector> {
        StateVector::qubit(C64::new(self.alpha, self.alpha_im), C64::new(self.beta, self.beta_im))
            .context("invalid initial state amplitudes")
    }
}

impl DqmConfig {
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&txt).with_context(|| format!("parsing {}", path.display()))
    }

    /// An explicit path must load; the default path is optional and falls
    /// back to built-ins with a warning when it is broken.
    pub fn load(cli_path: Option<&Path>) -> Result<Self> {
        if let Some(p) = cli_path {
            return Self::from_toml_file(p);
        }
        if let Some(p) = default_config_path() {
            if p.exists() {
                match Self::from_toml_file(&p) {
                    Ok(cfg) => return Ok(cfg),
                    Err(e) => eprintln!("(warn) {e:#}; using built-in defaults"),
                }
            }
        }
        Ok(Self::default())
    }
}

/// ~/.dqm/dqm.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::home_dir().map(|h| h.join(".dqm").join("dqm.toml"))
}
