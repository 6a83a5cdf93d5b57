//! Seed Simulator - Deterministic generation scenarios
//!
//! Usage:
//!   seed_sim --count 100 --scenario dry-run
//!   seed_sim --count 100 --scenario memory-store
//!   seed_sim --count 100 --scenario missing-refs
//!
//! Outputs machine-readable JSON reports to ./artifacts/simulations/

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use recforge::{
    GenerationConfig, GenerationReport, GenerationRun, MemoryLookup, MemoryStore, NullLookup,
    StoreSink, TemplateCatalog,
};

// ============================================================================
// REPORT
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SimulationReport {
    scenario: String,
    seed: u64,
    templates: usize,
    run: GenerationReport,
    sample_short_descriptions: Vec<String>,
    success: bool,
    notes: String,
}

// ============================================================================
// SCENARIOS
// ============================================================================

fn base_config(count: u32, seed: u64) -> GenerationConfig {
    GenerationConfig {
        count,
        seed: Some(seed),
        resolved_only: true,
        ..Default::default()
    }
}

/// Dry run: simulate mode on, nothing may reach a store
fn simulate_dry_run(count: u32, seed: u64) -> Result<SimulationReport> {
    let catalog = TemplateCatalog::builtin();
    let mut lookup = MemoryLookup::new();
    lookup.seed_from_catalog(&catalog);

    let config = base_config(count, seed);
    let mut run = GenerationRun::new(config, &catalog, &lookup)?;
    let mut sink = StoreSink::new(MemoryStore::new());
    let report = run.run(&mut sink);

    let success = report.simulated as u32 == count && sink.store().is_empty();
    Ok(SimulationReport {
        scenario: "dry-run".to_string(),
        seed,
        templates: catalog.len(),
        run: report,
        sample_short_descriptions: vec![],
        success,
        notes: "Simulate mode suppressed every insert; the store stayed empty.".to_string(),
    })
}

/// Live run against the in-memory store
fn simulate_memory_store(count: u32, seed: u64) -> Result<SimulationReport> {
    let catalog = TemplateCatalog::builtin();
    let mut lookup = MemoryLookup::new();
    lookup.seed_from_catalog(&catalog);

    let config = GenerationConfig {
        simulate: false,
        ..base_config(count, seed)
    };
    let mut run = GenerationRun::new(config, &catalog, &lookup)?;
    let mut sink = StoreSink::new(MemoryStore::new());
    let report = run.run(&mut sink);

    let store = sink.into_store();
    let samples = store
        .rows()
        .iter()
        .take(5)
        .filter_map(|(_, fields)| fields["short_description"].as_str())
        .map(|s| s.to_string())
        .collect();

    let success = report.emitted as u32 == count && store.len() == count as usize;
    Ok(SimulationReport {
        scenario: "memory-store".to_string(),
        seed,
        templates: catalog.len(),
        run: report,
        sample_short_descriptions: samples,
        success,
        notes: format!("{} records persisted to the in-memory store.", store.len()),
    })
}

/// Every reference lookup misses; records still come out, degraded
fn simulate_missing_refs(count: u32, seed: u64) -> Result<SimulationReport> {
    let catalog = TemplateCatalog::builtin();

    let config = GenerationConfig {
        simulate: false,
        ..base_config(count, seed)
    };
    let mut run = GenerationRun::new(config, &catalog, &NullLookup)?;
    let mut sink = StoreSink::new(MemoryStore::new());
    let report = run.run(&mut sink);

    let success = report.emitted as u32 == count && report.unresolved_references > 0;
    let unresolved = report.unresolved_references;
    Ok(SimulationReport {
        scenario: "missing-refs".to_string(),
        seed,
        templates: catalog.len(),
        run: report,
        sample_short_descriptions: vec![],
        success,
        notes: format!(
            "{} distinct references failed to resolve; every affected field degraded to the unassigned sentinel and the run completed.",
            unresolved
        ),
    })
}

// ============================================================================
// MAIN
// ============================================================================

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Parse arguments
    let mut count: u32 = 100;
    let mut seed: u64 = 2024;
    let mut scenario = "dry-run".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(100);
                    i += 2;
                } else {
                    eprintln!("Error: --count requires a value");
                    std::process::exit(1);
                }
            }
            "--seed" => {
                if i + 1 < args.len() {
                    seed = args[i + 1].parse().unwrap_or(2024);
                    i += 2;
                } else {
                    eprintln!("Error: --seed requires a value");
                    std::process::exit(1);
                }
            }
            "--scenario" => {
                if i + 1 < args.len() {
                    scenario = args[i + 1].clone();
                    i += 2;
                } else {
                    eprintln!("Error: --scenario requires a value");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("Seed Simulator - deterministic generation scenarios");
                println!();
                println!("Usage:");
                println!("  seed_sim --count <N> --seed <S> --scenario <scenario>");
                println!();
                println!("Options:");
                println!("  --count <N>           Records to synthesize (default: 100)");
                println!("  --seed <S>            RNG seed (default: 2024)");
                println!("  --scenario <scenario> Scenario: dry-run, memory-store, missing-refs");
                println!();
                println!("Examples:");
                println!("  seed_sim --count 100 --scenario dry-run");
                println!("  seed_sim --count 100 --scenario memory-store");
                println!("  seed_sim --count 50 --scenario missing-refs");
                std::process::exit(0);
            }
            _ => {
                eprintln!("Error: Unknown argument: {}", args[i]);
                eprintln!("Run with --help for usage");
                std::process::exit(1);
            }
        }
    }

    // Run simulation
    let report = match scenario.as_str() {
        "dry-run" => simulate_dry_run(count, seed)?,
        "memory-store" => simulate_memory_store(count, seed)?,
        "missing-refs" => simulate_missing_refs(count, seed)?,
        _ => {
            eprintln!("Error: Unknown scenario: {}", scenario);
            eprintln!("Valid scenarios: dry-run, memory-store, missing-refs");
            std::process::exit(1);
        }
    };

    // Create output directory
    let output_dir = PathBuf::from("./artifacts/simulations");
    fs::create_dir_all(&output_dir).context("creating output directory")?;

    // Write report
    let output_file = output_dir.join(format!("{}.json", scenario));
    let json = serde_json::to_string_pretty(&report)?;
    fs::write(&output_file, json)
        .with_context(|| format!("writing {}", output_file.display()))?;

    // Print summary
    println!("\n=== Seed Simulation: {} ===\n", scenario);
    println!("Seed:                 {}", report.seed);
    println!("Templates:            {}", report.templates);
    println!("Requested:            {}", report.run.requested);
    println!("Emitted:              {}", report.run.emitted);
    println!("Simulated:            {}", report.run.simulated);
    println!("Terminal:             {}", report.run.terminal);
    println!("Unresolved refs:      {}", report.run.unresolved_references);

    if !report.sample_short_descriptions.is_empty() {
        println!(
            "Sample records:       {}",
            report.sample_short_descriptions.join(" | ")
        );
    }

    println!("\nNotes: {}", report.notes);
    println!("\nReport saved to: {}\n", output_file.display());

    if report.success {
        std::process::exit(0);
    } else {
        std::process::exit(1);
    }
}
