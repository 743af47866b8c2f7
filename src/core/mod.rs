//! Directed-measurement engine: states, the directional field, biasing,
//! sampling, trial batches and their summaries.

pub mod bias;
pub mod debug;
pub mod error;
pub mod field;
pub mod sampler;
pub mod stats;
pub mod trials;
pub mod types;

pub use bias::apply_bias;
pub use error::{DqmError, Result};
pub use field::{directional_field, Angles, DirectionalBias};
pub use sampler::OutcomeDistribution;
pub use stats::{summarize, SummaryStats};
pub use trials::{run_batch, run_entangled_batch, MeasurementMode, TrialBatch, TrialRunner};
pub use types::{probabilities, Outcome, PairOutcome, QubitOutcome, StateVector};
