use crate::PluginDescriptor;

/// Wiring decision for the virtual source side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourcePlan {
    /// Single-channel processing through the mono variant.
    Mono { label: String },
    /// No mono variant available; the source artifact is withheld.
    Disabled,
}

/// Wiring decision for the virtual sink side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkPlan {
    /// Native two-channel processing.
    Stereo { label: String },
    /// Two parallel mono instances emulating stereo, one per channel.
    DualMono { label: String },
    /// Neither variant available; the sink artifact is withheld.
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologyPlan {
    pub source: SourcePlan,
    pub sink: SinkPlan,
}

impl TopologyPlan {
    pub fn is_empty(&self) -> bool {
        self.source == SourcePlan::Disabled && self.sink == SinkPlan::Disabled
    }
}

/// Decide both wiring topologies from the descriptor alone.
///
/// The two sides are independent: a plugin with both variants gets a mono
/// source and a stereo sink from the same descriptor. Native stereo always
/// wins over the dual-mono emulation.
pub fn select(descriptor: &PluginDescriptor) -> TopologyPlan {
    let source = match &descriptor.mono_label {
        Some(label) => SourcePlan::Mono {
            label: label.clone(),
        },
        None => SourcePlan::Disabled,
    };
    let sink = match (&descriptor.stereo_label, &descriptor.mono_label) {
        (Some(label), _) => SinkPlan::Stereo {
            label: label.clone(),
        },
        (None, Some(label)) => SinkPlan::DualMono {
            label: label.clone(),
        },
        (None, None) => SinkPlan::Disabled,
    };
    TopologyPlan { source, sink }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use crate::{EntryPoint, Provenance};

    use super::*;

    fn descriptor(entries: &[EntryPoint]) -> PluginDescriptor {
        let detected: BTreeSet<_> = entries.iter().copied().collect();
        PluginDescriptor::from_entry_points(
            PathBuf::from("/tmp/plugin.so"),
            &detected,
            Provenance::Probed,
        )
    }

    #[test]
    fn both_variants_prefer_native_stereo() {
        let plan = select(&descriptor(&[EntryPoint::Mono, EntryPoint::Stereo]));
        assert_eq!(
            plan,
            TopologyPlan {
                source: SourcePlan::Mono {
                    label: "deep_filter_mono".into()
                },
                sink: SinkPlan::Stereo {
                    label: "deep_filter_stereo".into()
                },
            }
        );
    }

    #[test]
    fn mono_only_emulates_stereo() {
        let plan = select(&descriptor(&[EntryPoint::Mono]));
        assert_eq!(
            plan,
            TopologyPlan {
                source: SourcePlan::Mono {
                    label: "deep_filter_mono".into()
                },
                sink: SinkPlan::DualMono {
                    label: "deep_filter_mono".into()
                },
            }
        );
    }

    #[test]
    fn stereo_only_disables_the_source() {
        let plan = select(&descriptor(&[EntryPoint::Stereo]));
        assert_eq!(plan.source, SourcePlan::Disabled);
        assert_eq!(
            plan.sink,
            SinkPlan::Stereo {
                label: "deep_filter_stereo".into()
            }
        );
    }

    #[test]
    fn no_variants_disable_both_sides() {
        let plan = select(&descriptor(&[]));
        assert!(plan.is_empty());
    }

    #[test]
    fn selection_is_deterministic() {
        let descriptor = descriptor(&[EntryPoint::Mono]);
        assert_eq!(select(&descriptor), select(&descriptor));
    }
}
