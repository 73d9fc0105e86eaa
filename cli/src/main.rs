//! Axiom CLI - binary entry point and demonstration driver.
//!
//! Bridges [`axiom_config`] (settings) and [`axiom_engine`] (the pipeline):
//! loads the optional config file, applies command-line overrides, then runs
//! each requested flux value through one engine. With no arguments the three
//! demonstration samples are aligned.
//!
//! Stage-by-stage diagnostics go to stderr through `tracing`; run summaries
//! (or `--json` documents) go to stdout.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use axiom_engine::{Engine, EngineSettings, Precision, RunResult};

/// The original demonstration fluxes: the reference sample, a noisy sample,
/// and pure zero.
const DEMO_SAMPLES: [&str; 3] = ["24714.9130", "12345.6789", "0.0"];

#[derive(Parser, Debug)]
#[command(
    name = "axiom",
    version,
    about = "Deterministic five-stage flux alignment pipeline"
)]
struct Cli {
    /// Flux values to align (numbers or numeric strings). Defaults to the
    /// demonstration samples.
    flux: Vec<String>,

    /// Fixed-point precision in decimal digits (1-18). Overrides the config
    /// file.
    #[arg(long)]
    precision: Option<u32>,

    /// Suppress stage-by-stage diagnostics.
    #[arg(long)]
    quiet: bool,

    /// Emit each run as a JSON document on stdout instead of the summary
    /// block.
    #[arg(long)]
    json: bool,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("axiom=info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();

    let mut settings = match axiom_config::load() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!("Config load failed ({err}); using defaults");
            EngineSettings::default()
        }
    };
    if let Some(digits) = cli.precision {
        let precision = Precision::new(digits).context("invalid --precision")?;
        settings = EngineSettings::new(precision, settings.verbose());
    }
    if cli.quiet {
        settings = settings.silenced();
    }

    let engine = Engine::new(settings);

    let inputs: Vec<String> = if cli.flux.is_empty() {
        DEMO_SAMPLES.iter().map(ToString::to_string).collect()
    } else {
        cli.flux
    };

    let mut failures = 0usize;
    for raw in &inputs {
        match engine.run(raw.as_str()) {
            Ok(result) => {
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                } else {
                    print_summary(&result);
                }
            }
            Err(err) => {
                eprintln!("axiom: {raw:?}: {err}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        eprintln!("axiom: {failures} of {} inputs failed", inputs.len());
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_summary(result: &RunResult) {
    let trace = result.trace();
    let rule = "-".repeat(60);
    println!("{rule}");
    println!("EXECUTION SUMMARY - SESSION {}", result.session_id());
    println!("{rule}");
    println!("Initial flux:    {}", result.input());
    println!("Quantum vector:  {:.15}", trace.vectorized);
    println!("Symmetric path:  {:.10}", trace.symmetric);
    println!("Asymmetric path: {:.10}", trace.asymmetric);
    println!("Aligned vector:  {:.10}", trace.corrected);
    println!("Final nucleus:   {}", result.nucleus());
    println!("Unit Zero:       {}", result.zero_unit());
    println!("Verdict:         {}", result.verdict().status());
    println!("O333 hash:       {}", result.verdict().integrity_hash());
    println!("{}", "=".repeat(60));
}
