use std::fs;

use anyhow::{bail, Result};
use quietwire_core::{
    summarize, ArtifactKind, ArtifactSummary, GeneratorConfig, Provenance, StateStore,
};

/// Re-derive what the generated configuration currently wires up. Reads the
/// generated files themselves for wiring facts; the state record only adds
/// provenance and timing.
pub fn run(config: &GeneratorConfig, state: &StateStore) -> Result<()> {
    let plugin_present = config.plugin_path.is_file();
    println!(
        "Plugin binary: {} ({})",
        config.plugin_path.display(),
        if plugin_present { "present" } else { "missing" }
    );

    let mut present = 0;
    for kind in ArtifactKind::ALL {
        let path = kind.target_in(&config.output_dir);
        match fs::read_to_string(&path) {
            Ok(contents) => {
                present += 1;
                let summary = summarize(&contents);
                println!("{kind} config: {} ({})", path.display(), describe(&summary));
            }
            Err(_) => println!("{kind} config: {} (not generated)", path.display()),
        }
    }

    match state.last_run() {
        Some(record) => {
            let provenance = match record.descriptor.provenance {
                Provenance::Probed => "probed capabilities",
                Provenance::Assumed => "assumed capabilities (probe tool unavailable)",
            };
            println!(
                "Last setup: {} UTC, {provenance}",
                record.completed_at.format("%Y-%m-%d %H:%M:%S")
            );
        }
        None => println!("Last setup: never recorded"),
    }

    if !plugin_present {
        bail!("plugin binary {} is missing", config.plugin_path.display());
    }
    if present == 0 {
        bail!("no generated configuration found; run `quietwire setup`");
    }
    Ok(())
}

fn describe(summary: &ArtifactSummary) -> String {
    match summary.node_count() {
        0 => "no processing nodes".to_string(),
        1 => {
            let label = &summary.node_labels[0];
            match summary.channels {
                Some(1) => format!("mono, {label}"),
                Some(2) => format!("native stereo, {label}"),
                _ => label.clone(),
            }
        }
        instances => format!(
            "dual-mono emulation, {instances} instances, {} links",
            summary.link_count
        ),
    }
}
