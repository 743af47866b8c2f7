//! `field` subcommand: evaluate the directional field without sampling.

use anyhow::Result;
use serde_json::json;

use crate::cli::AngleArgs;
use crate::commands::simulate::resolve_angles;
use crate::config::DqmConfig;
use crate::core::DirectionalBias;

pub fn main(cfg: &DqmConfig, args: AngleArgs, as_json: bool) -> Result<()> {
    let angles = resolve_angles(&cfg.run, &args);
    let bias = DirectionalBias::from_angles(angles);

    if as_json {
        let out = json!({
            "theta": angles.theta,
            "phi": angles.phi,
            "bias": bias.value(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!(
            "f(θ = {:.2}°, φ = {:.2}°) = {:.6}  (weights 0: {:.6}, 1: {:.6})",
            angles.theta.to_degrees(),
            angles.phi.to_degrees(),
            bias.value(),
            bias.value(),
            bias.complement()
        );
    }
    Ok(())
}
