use std::fs;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use quietwire_core::{
    descriptor_from_probe, render_artifacts, select, write_artifacts, GeneratorConfig, Provenance,
    SetupRecord, SinkPlan, SourcePlan, StateStore,
};

use crate::analyse;

/// Probe the plugin and (re)generate the filter-chain configuration.
/// Fully automatic and idempotent; a re-run with the same plugin rewrites
/// identical files.
pub fn run(config: &GeneratorConfig, state: &StateStore) -> Result<()> {
    if !config.plugin_path.is_file() {
        bail!(
            "plugin binary {} is missing; install the deep-filter LADSPA plugin first",
            config.plugin_path.display()
        );
    }

    let outcome = analyse::run_probe(config);
    let descriptor = descriptor_from_probe(config.plugin_path.clone(), &outcome);
    let plan = select(&descriptor);

    let artifacts = render_artifacts(config, &plan);
    if artifacts.is_empty() {
        bail!(
            "plugin {} exposes no usable entry points; nothing to generate",
            config.plugin_path.display()
        );
    }

    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.output_dir.display()
        )
    })?;
    let written =
        write_artifacts(&artifacts).context("failed to write filter-chain configuration")?;
    tracing::info!("generated {} configuration file(s)", written.len());

    state
        .record(SetupRecord {
            descriptor: descriptor.clone(),
            written: written.clone(),
            completed_at: Utc::now(),
        })
        .context("failed to record setup state")?;

    if descriptor.provenance == Provenance::Assumed {
        println!(
            "Capability probe unavailable; assumed both mono and stereo variants."
        );
    }
    println!("Wrote {} configuration file(s):", written.len());
    for path in &written {
        println!("  {}", path.display());
    }
    match &plan.source {
        SourcePlan::Mono { label } => println!("  Source: mono processing ({label})"),
        SourcePlan::Disabled => println!("  Source: not available"),
    }
    match &plan.sink {
        SinkPlan::Stereo { label } => println!("  Sink: native stereo processing ({label})"),
        SinkPlan::DualMono { label } => {
            println!("  Sink: dual-mono emulated stereo ({label} x2)")
        }
        SinkPlan::Disabled => println!("  Sink: not available"),
    }
    println!("Restart the audio server to activate the devices.");
    Ok(())
}
