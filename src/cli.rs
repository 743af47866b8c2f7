use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::MeasurementMode;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ModeKind {
    #[value(alias = "std")]
    Standard,
    #[value(alias = "dqm")]
    Directed,
}

impl From<ModeKind> for MeasurementMode {
    fn from(kind: ModeKind) -> Self {
        match kind {
            ModeKind::Standard => MeasurementMode::Standard,
            ModeKind::Directed => MeasurementMode::Directed,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "dqm",
    about = "Directed vs standard quantum measurement statistics",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct DqmCli {
    /// Global: path to config (TOML); default: ~/.dqm/dqm.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: debug output on stderr (same as DQM_DEBUG=1)
    #[arg(long = "debug", action = ArgAction::SetTrue, global = true)]
    pub debug: bool,

    /// Global: print results as JSON
    #[arg(long = "json", action = ArgAction::SetTrue, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

/// Angle overrides shared by every subcommand. Degrees unless `--radians`.
#[derive(Debug, Clone, Args)]
pub struct AngleArgs {
    #[arg(long = "theta", value_name = "ANGLE", allow_negative_numbers = true)]
    pub theta: Option<f64>,
    #[arg(long = "phi", value_name = "ANGLE", allow_negative_numbers = true)]
    pub phi: Option<f64>,
    /// Interpret --theta/--phi as radians
    #[arg(long = "radians", action = ArgAction::SetTrue)]
    pub radians: bool,
}

#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub angles: AngleArgs,
    #[arg(long = "trials", value_name = "N")]
    pub trials: Option<usize>,
    /// Seed the random source for a reproducible run
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,
    /// Initial amplitude of |0⟩ (real)
    #[arg(long = "alpha", value_name = "A", allow_negative_numbers = true)]
    pub alpha: Option<f64>,
    /// Initial amplitude of |1⟩ (real)
    #[arg(long = "beta", value_name = "B", allow_negative_numbers = true)]
    pub beta: Option<f64>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Standard and directed batches side by side
    ///
    /// Examples:
    ///   dqm compare --theta 60 --phi 45 --trials 1000000
    ///   dqm compare --seed 7 --json
    Compare {
        #[command(flatten)]
        run: RunArgs,
    },

    /// A single batch in one measurement mode
    Measure {
        #[arg(long = "mode", value_enum, default_value_t = ModeKind::Directed)]
        mode: ModeKind,
        #[command(flatten)]
        run: RunArgs,
    },

    /// Directed measurement of the entangled pair (|00⟩+|11⟩)/√2
    Entangled {
        #[command(flatten)]
        angles: AngleArgs,
        #[arg(long = "trials", value_name = "N")]
        trials: Option<usize>,
        #[arg(long = "seed", value_name = "SEED")]
        seed: Option<u64>,
    },

    /// Print the directional-field bias for a pair of angles
    Field {
        #[command(flatten)]
        angles: AngleArgs,
    },
}
