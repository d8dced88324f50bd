// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::fmt::Write;

use anyhow::{bail, Context, Result};
use the_layercake::config::{load_and_validate_config, ChainAssembler};
use the_layercake::demo::{arithmetic_registry, identity, params_from_config};
use tracing_subscriber::EnvFilter;

/// Initialise logging from `RUST_LOG`, defaulting to `info`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <config1.yaml> [config2.yaml ...] <input_integer>", args[0]);
        eprintln!("Example: {} configs/arithmetic.yaml 5", args[0]);
        eprintln!("Example: {} configs/arithmetic.yaml configs/clamp-disabled.yaml 40", args[0]);
        std::process::exit(1);
    }

    // The last argument is the input value
    let input: i64 = args[args.len() - 1]
        .parse()
        .with_context(|| format!("input '{}' is not an integer", args[args.len() - 1]))?;
    let config_files = args[1..args.len() - 1].to_vec();

    println!("🍰 Layercake Chain Demo");
    println!("═══════════════════════");
    println!("Input: {}", input);
    println!("Config files: {:?}", config_files);

    // Every config runs on its own blocking task; reports print in argument order.
    let handles: Vec<_> = config_files
        .iter()
        .cloned()
        .map(|config_file| {
            tokio::task::spawn_blocking(move || run_single_config(&config_file, input))
        })
        .collect();

    let mut failures = 0;
    for (config_file, handle) in config_files.iter().zip(handles) {
        println!("\n{}", "─".repeat(60));
        // a panicking task counts as a failed config, the other reports still print
        match handle.await.map_err(anyhow::Error::from).and_then(|outcome| outcome) {
            Ok(report) => print!("{}", report),
            Err(e) => {
                eprintln!("❌ Failed to run {}: {:#}", config_file, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} configurations failed", failures, config_files.len());
    }
    Ok(())
}

fn run_single_config(config_file: &str, input: i64) -> Result<String> {
    let cfg = load_and_validate_config(config_file)
        .with_context(|| format!("loading {}", config_file))?;
    let registry = arithmetic_registry()?;
    let params = params_from_config(&cfg)?;
    let chain = ChainAssembler::assemble(&cfg, &registry, identity())?;

    let mut report = String::new();
    writeln!(report, "📄 {}", config_file)?;
    writeln!(report, "Params: {:?}", params)?;
    writeln!(report, "Chain (head first):")?;
    for line in chain.to_string().lines() {
        writeln!(report, "   {}", line)?;
    }

    let transformer = chain.make(&params);
    writeln!(report, "Result: {} -> {}", input, transformer.apply(input))?;
    Ok(report)
}
