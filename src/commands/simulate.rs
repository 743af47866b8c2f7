//! `compare`, `measure` and `entangled` subcommands.

use anyhow::{Context, Result};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};

use crate::cli::{AngleArgs, RunArgs};
use crate::config::{DqmConfig, RunConfig};
use crate::core::{
    summarize, Angles, MeasurementMode, Outcome, OutcomeDistribution, QubitOutcome, StateVector,
    SummaryStats, TrialBatch, TrialRunner,
};
use crate::debug_log;

/// Config values with command-line overrides applied.
pub fn resolve_angles(run: &RunConfig, args: &AngleArgs) -> Angles {
    match (args.radians, args.theta, args.phi) {
        (true, theta, phi) => Angles::new(
            theta.unwrap_or(run.theta_deg.to_radians()),
            phi.unwrap_or(run.phi_deg.to_radians()),
        ),
        (false, theta, phi) => {
            Angles::from_degrees(theta.unwrap_or(run.theta_deg), phi.unwrap_or(run.phi_deg))
        }
    }
}

pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => {
            debug_log!("seeding random source with {s}");
            StdRng::seed_from_u64(s)
        }
        None => StdRng::from_entropy(),
    }
}

fn build_runner(cfg: &DqmConfig, args: &RunArgs) -> Result<TrialRunner> {
    let mut state = cfg.state.clone();
    if let Some(a) = args.alpha {
        state.alpha = a;
        state.alpha_im = 0.0;
    }
    if let Some(b) = args.beta {
        state.beta = b;
        state.beta_im = 0.0;
    }
    let initial = state.initial_state()?;
    let angles = resolve_angles(&cfg.run, &args.angles);
    let trials = args.trials.unwrap_or(cfg.run.trials);
    Ok(TrialRunner::new(initial, angles, trials))
}

fn header(runner: &TrialRunner, angles: Angles, trials: usize) -> String {
    format!(
        "θ = {:.2}°, φ = {:.2}°, bias = {:.4}, trials = {}",
        angles.theta.to_degrees(),
        angles.phi.to_degrees(),
        runner.bias().value(),
        trials
    )
}

fn expected_json<O: Outcome>(dist: &OutcomeDistribution<O>) -> Value {
    let mut map = serde_json::Map::new();
    for &o in O::ALL {
        map.insert(o.label().to_string(), json!(dist.probability(o)));
    }
    Value::Object(map)
}

fn batch_json<O: Outcome>(stats: &SummaryStats<O>, dist: &OutcomeDistribution<O>) -> Value {
    let mut v = stats.to_json();
    v["expected"] = expected_json(dist);
    v["z_focus"] = json!(stats.z_score(O::focus(), dist.probability(O::focus())));
    v
}

fn print_batch<O: Outcome>(title: &str, stats: &SummaryStats<O>, dist: &OutcomeDistribution<O>) {
    let focus = O::focus();
    let expected = dist.probability(focus);
    println!("{}", stats.line(title));
    match stats.z_score(focus, expected) {
        Some(z) => println!(
            "  {} P({}) = {:.4}, z = {:+.2}",
            "expected".dimmed(),
            focus.label(),
            expected,
            z
        ),
        None => println!("  {} P({}) = {:.4}", "expected".dimmed(), focus.label(), expected),
    }
}

fn angles_json(runner: &TrialRunner, angles: Angles) -> Value {
    json!({
        "theta": angles.theta,
        "phi": angles.phi,
        "bias": runner.bias().value(),
    })
}

pub fn compare(cfg: &DqmConfig, args: RunArgs, as_json: bool) -> Result<()> {
    let runner = build_runner(cfg, &args)?;
    let mut rng = make_rng(args.seed.or(cfg.run.seed));
    let (standard, directed) = runner.run_comparison(&mut rng).context("comparison run failed")?;
    let angles = standard.angles();

    let std_dist = runner.distribution(MeasurementMode::Standard)?;
    let dir_dist = runner.distribution(MeasurementMode::Directed)?;
    let std_stats = summarize(&standard);
    let dir_stats = summarize(&directed);

    if as_json {
        let mut out = angles_json(&runner, angles);
        out["standard"] = batch_json(&std_stats, &std_dist);
        out["directed"] = batch_json(&dir_stats, &dir_dist);
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", header(&runner, angles, standard.len()).bold());
    print_batch(MeasurementMode::Standard.title(), &std_stats, &std_dist);
    print_batch(MeasurementMode::Directed.title(), &dir_stats, &dir_dist);
    Ok(())
}

pub fn measure(cfg: &DqmConfig, mode: MeasurementMode, args: RunArgs, as_json: bool) -> Result<()> {
    let runner = build_runner(cfg, &args)?;
    let mut rng = make_rng(args.seed.or(cfg.run.seed));
    let batch: TrialBatch<QubitOutcome> = runner
        .run_batch(mode, &mut rng)
        .with_context(|| format!("{} run failed", mode.title()))?;
    let dist = runner.distribution(mode)?;
    let stats = summarize(&batch);

    if as_json {
        let mut out = angles_json(&runner, batch.angles());
        out["mode"] = json!(format!("{mode:?}").to_lowercase());
        out["summary"] = batch_json(&stats, &dist);
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", header(&runner, batch.angles(), batch.len()).bold());
    print_batch(mode.title(), &stats, &dist);
    Ok(())
}

pub fn entangled(
    cfg: &DqmConfig,
    angles: AngleArgs,
    trials: Option<usize>,
    seed: Option<u64>,
    as_json: bool,
) -> Result<()> {
    let angles = resolve_angles(&cfg.run, &angles);
    let trials = trials.unwrap_or(cfg.run.entangled_trials);
    let runner = TrialRunner::new(StateVector::bell_phi_plus(), angles, trials);
    let mut rng = make_rng(seed.or(cfg.run.seed));

    let batch = runner.run_entangled_batch(&mut rng).context("entangled run failed")?;
    let dist = OutcomeDistribution::entangled(runner.bias())?;
    let stats = summarize(&batch);

    if as_json {
        let mut out = angles_json(&runner, angles);
        out["summary"] = batch_json(&stats, &dist);
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", header(&runner, angles, trials).bold());
    print_batch("Entangled Pair", &stats, &dist);
    Ok(())
}
