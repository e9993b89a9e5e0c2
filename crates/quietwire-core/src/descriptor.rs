use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Processing variants the deep-filter plugin binary is known to expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntryPoint {
    Mono,
    Stereo,
}

impl EntryPoint {
    pub const ALL: [EntryPoint; 2] = [EntryPoint::Mono, EntryPoint::Stereo];

    /// Label the audio runtime uses to select this variant.
    pub fn label(self) -> &'static str {
        match self {
            EntryPoint::Mono => "deep_filter_mono",
            EntryPoint::Stereo => "deep_filter_stereo",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "deep_filter_mono" => Some(Self::Mono),
            "deep_filter_stereo" => Some(Self::Stereo),
            _ => None,
        }
    }
}

/// Where a descriptor's capability flags came from.
///
/// `Assumed` marks the best-effort default taken when the introspection tool
/// is absent. It is a guess, not a verified capability, and must never be
/// conflated with a probed result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provenance {
    Probed,
    Assumed,
}

/// Result of introspecting the installed plugin binary.
///
/// A variant label is present exactly when that variant was detected (or
/// assumed). A descriptor with neither label is still valid input for the
/// topology selector; it simply yields nothing to generate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    pub path: PathBuf,
    pub mono_label: Option<String>,
    pub stereo_label: Option<String>,
    pub provenance: Provenance,
}

impl PluginDescriptor {
    pub fn from_entry_points(
        path: PathBuf,
        detected: &BTreeSet<EntryPoint>,
        provenance: Provenance,
    ) -> Self {
        let label_for = |entry: EntryPoint| {
            detected
                .contains(&entry)
                .then(|| entry.label().to_string())
        };
        Self {
            path,
            mono_label: label_for(EntryPoint::Mono),
            stereo_label: label_for(EntryPoint::Stereo),
            provenance,
        }
    }

    pub fn supports_mono(&self) -> bool {
        self.mono_label.is_some()
    }

    pub fn supports_stereo(&self) -> bool {
        self.stereo_label.is_some()
    }

    /// False when the plugin exposes no usable variant at all.
    pub fn is_usable(&self) -> bool {
        self.supports_mono() || self.supports_stereo()
    }
}
