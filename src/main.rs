/// dqm main — parse args, load config, dispatch one subcommand.
use clap::Parser; // trait import enables DqmCli::parse()
use colored::Colorize;

use dqm_project::cli::{Command, DqmCli};
use dqm_project::commands;
use dqm_project::config::DqmConfig;
use dqm_project::core::debug;
use dqm_project::debug_log;

fn run(args: DqmCli) -> anyhow::Result<()> {
    debug::enable(args.debug);

    let cfg = DqmConfig::load(args.config.as_deref())?;
    debug_log!("config: {cfg:?}");

    match args.cmd {
        Command::Compare { run } => commands::simulate::compare(&cfg, run, args.json),
        Command::Measure { mode, run } => commands::simulate::measure(&cfg, mode.into(), run, args.json),
        Command::Entangled { angles, trials, seed } => {
            commands::simulate::entangled(&cfg, angles, trials, seed, args.json)
        }
        Command::Field { angles } => commands::field::main(&cfg, angles, args.json),
    }
}

fn main() {
    let args = DqmCli::parse();
    if let Err(e) = run(args) {
        eprintln!("{} {:#}", "err:".red().bold(), e);
        std::process::exit(1);
    }
}
