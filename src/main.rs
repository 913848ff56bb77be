//! tcs-cabinet - CLI tool to derive cabinet parts from a JSON spec.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use tcs_cabinet::{build_cabinet, load_cabinet_spec, render_cabinet, RecordingKernel};

/// Derive cabinet parts, miter cuts and labels from exterior dimensions.
#[derive(Parser, Debug)]
#[command(name = "tcs-cabinet")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input cabinet spec (JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Output parts file path (JSON)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Validate only, don't write output
    #[arg(long)]
    validate: bool,

    /// Print the geometry kernel operations as JSON
    #[arg(long)]
    render_log: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Processing: {}", args.input.display());

    let spec = load_cabinet_spec(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    let build = match build_cabinet(&spec) {
        Ok(build) => build,
        Err(e) => {
            error!("[E{}] {}", e.code_value(), e);
            anyhow::bail!("Build failed");
        }
    };

    info!(
        "Built {}: {} parts, {} warning(s)",
        build.identity.cabinet_id,
        build.parts.len(),
        build.warnings.len()
    );

    // Validate-only mode
    if args.validate {
        if build.warnings.is_empty() {
            info!("Validation passed");
        } else {
            warn!("Validation finished with {} warning(s)", build.warnings.len());
        }
        return Ok(());
    }

    // Render log output
    if args.render_log {
        let mut kernel = RecordingKernel::new();
        let report = render_cabinet(&mut kernel, &build).context("Render failed")?;
        for warning in &report.warnings {
            warn!("{}", warning);
        }
        let json = serde_json::to_string_pretty(kernel.ops())?;
        println!("{}", json);
        return Ok(());
    }

    // Write output
    let output_path = args.output.unwrap_or_else(|| {
        let mut path = args.input.clone();
        path.set_extension("parts.json");
        path
    });

    let json = serde_json::to_string_pretty(&build)?;
    std::fs::write(&output_path, json)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    info!("Generated: {}", output_path.display());

    Ok(())
}
