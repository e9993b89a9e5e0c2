use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::{EntryPoint, PluginDescriptor, Provenance};

/// What the capability probe produced for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The introspection tool ran; its free-text output, possibly empty or
    /// truncated if the tool died mid-write.
    Report(String),
    /// The introspection tool could not be run at all.
    ToolUnavailable,
}

/// Parse introspection output into the set of detected entry points.
///
/// Detection is by name: an entry point counts as present when its label
/// occurs as a standalone identifier anywhere in the report. Each variant is
/// judged independently, so a truncated report degrades to "variant not
/// found" for whatever is missing.
pub fn detect_entry_points(report: &str) -> BTreeSet<EntryPoint> {
    report
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter_map(EntryPoint::from_label)
        .collect()
}

/// Build the descriptor for this run from a probe outcome.
///
/// When the tool is unavailable we fall back to assuming both variants exist
/// under their default labels, tagged `Provenance::Assumed` so downstream
/// consumers can tell the guess apart from a verified probe.
pub fn descriptor_from_probe(path: PathBuf, outcome: &ProbeOutcome) -> PluginDescriptor {
    match outcome {
        ProbeOutcome::Report(report) => {
            let detected = detect_entry_points(report);
            tracing::debug!("probe detected entry points: {:?}", detected);
            PluginDescriptor::from_entry_points(path, &detected, Provenance::Probed)
        }
        ProbeOutcome::ToolUnavailable => {
            let assumed: BTreeSet<_> = EntryPoint::ALL.into_iter().collect();
            PluginDescriptor::from_entry_points(path, &assumed, Provenance::Assumed)
        }
    }
}
