//! battle_sim - command-line battle simulator

use anyhow::{Context, Result};
use battle_core::config::{load_constants, load_skill_configs, load_type_chart};
use battle_core::{default_skills, default_type_chart, BattleConstants, BattleContext};
use battle_sim::{build_battle, load_scenario, render_summary, simulate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario TOML file
    #[arg(short, long)]
    scenario: PathBuf,

    /// RNG seed; falls back to the scenario's seed, then 0
    #[arg(long)]
    seed: Option<u64>,

    /// Print the battle report as JSON
    #[arg(long)]
    json: bool,

    /// Battle constants TOML (defaults to the bundled constants)
    #[arg(long)]
    constants: Option<PathBuf>,

    /// Skill catalogue TOML (defaults to the bundled catalogue)
    #[arg(long)]
    skills: Option<PathBuf>,

    /// Type chart TOML (defaults to the bundled chart)
    #[arg(long)]
    types: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let constants = match &args.constants {
        Some(path) => load_constants(path)
            .with_context(|| format!("Failed to load constants: {}", path.display()))?,
        None => BattleConstants::default(),
    };
    let registry = match &args.skills {
        Some(path) => load_skill_configs(path)
            .with_context(|| format!("Failed to load skills: {}", path.display()))?,
        None => default_skills(),
    };
    let chart = match &args.types {
        Some(path) => load_type_chart(path)
            .with_context(|| format!("Failed to load type chart: {}", path.display()))?,
        None => default_type_chart(),
    };

    let scenario = load_scenario(&args.scenario)
        .with_context(|| format!("Failed to load scenario: {}", args.scenario.display()))?;
    let seed = args.seed.or(scenario.seed).unwrap_or(0);
    tracing::info!(seed, mode = ?scenario.mode, "running scenario");

    let ctx = BattleContext::new(&registry, &chart, &constants);

    if args.json {
        let report = simulate(&scenario, ctx, seed).context("Battle failed")?;
        println!("{}", report.to_json().context("Failed to serialize report")?);
        return Ok(());
    }

    // Print the log as each round resolves
    let mut battle = build_battle(&scenario, ctx, seed).context("Battle setup failed")?;
    let mut printed = 0;
    loop {
        let finished = battle.step_round().context("Battle failed")?.is_some();
        for entry in &battle.log().entries()[printed..] {
            println!("{}", entry.text);
        }
        printed = battle.log().len();
        if finished {
            break;
        }
    }
    if let Some(report) = battle.report() {
        print!("{}", render_summary(&report));
    }
    Ok(())
}
