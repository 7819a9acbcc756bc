//! SignalPro CLI — batch-generate the sample suite or render one signal.
//!
//! Commands:
//! - `generate` — render the built-in ten-signal catalog to an output
//!   directory, write `manifest.json` and `summary.csv`
//! - `render` — render a single signal from a JSON file

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use signalpro_core::domain::{ChartPattern, SignalData};
use signalpro_core::{render, RenderOptions};
use signalpro_runner::manifest::{write_manifest, write_summary_csv};
use signalpro_runner::{render_batch, samples, ArtifactWriter, BatchManifest};

#[derive(Parser)]
#[command(
    name = "signalpro",
    about = "SignalPro CLI — trading-signal document generator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the built-in sample catalog (one signal per category).
    Generate {
        /// Output directory for HTML artifacts, manifest, and summary.
        #[arg(long, default_value = "signals")]
        out_dir: PathBuf,

        /// Substitute breakout for unknown pattern tokens instead of
        /// failing the affected signal.
        #[arg(long, default_value_t = false)]
        lenient: bool,
    },
    /// Render a single signal from a JSON file.
    Render {
        /// Path to a SignalData JSON file.
        #[arg(long)]
        input: PathBuf,

        /// Output directory.
        #[arg(long, default_value = "signals")]
        out_dir: PathBuf,

        /// Chart pattern override: momentum, breakout, volatile, decline.
        #[arg(long)]
        pattern: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate { out_dir, lenient } => generate(&out_dir, lenient),
        Commands::Render {
            input,
            out_dir,
            pattern,
        } => render_one(&input, &out_dir, pattern.as_deref()),
    }
}

fn generate(out_dir: &PathBuf, lenient: bool) -> Result<()> {
    let signals = samples::catalog();
    let options = RenderOptions {
        fallback_pattern_on_unknown: lenient,
        ..Default::default()
    };

    let outcome = render_batch(&signals, &options);
    let writer = ArtifactWriter::new(out_dir)?;
    let artifacts = writer.write_batch(&outcome)?;

    for artifact in &artifacts {
        println!(
            "wrote {} ({} bytes)",
            artifact.path.display(),
            artifact.bytes
        );
    }
    for failure in &outcome.failures {
        eprintln!("failed {}: {}", failure.ticker, failure.error);
    }

    let manifest = BatchManifest::from_batch(&outcome, &artifacts);
    let manifest_path = out_dir.join("manifest.json");
    write_manifest(&manifest_path, &manifest)?;
    let summary_path = out_dir.join("summary.csv");
    write_summary_csv(&summary_path, &manifest)?;

    println!(
        "{} signal pages, {} bytes total, manifest at {}",
        manifest.entries.len(),
        manifest.total_bytes(),
        manifest_path.display()
    );

    if !outcome.is_complete() {
        bail!("{} signal(s) failed to render", outcome.failures.len());
    }
    Ok(())
}

fn render_one(input: &PathBuf, out_dir: &PathBuf, pattern: Option<&str>) -> Result<()> {
    let json = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let signal: SignalData = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse signal from {}", input.display()))?;

    let pattern_override = pattern
        .map(|token| token.parse::<ChartPattern>())
        .transpose()
        .context("invalid --pattern value")?;
    let options = RenderOptions {
        pattern_override,
        ..Default::default()
    };

    let output = render(&signal, &options)
        .with_context(|| format!("failed to render {}", signal.ticker))?;

    let writer = ArtifactWriter::new(out_dir)?;
    let artifact = writer.write_document(&output.document)?;
    println!(
        "wrote {} ({} bytes, pattern {})",
        artifact.path.display(),
        artifact.bytes,
        output.diagnostics.pattern
    );
    Ok(())
}
