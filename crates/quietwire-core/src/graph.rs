use crate::{GeneratorConfig, SinkPlan, SourcePlan};

pub const MONO_POSITIONS: &[&str] = &["MONO"];
pub const STEREO_POSITIONS: &[&str] = &["FL", "FR"];

/// Control port name on the deep-filter LADSPA plugin.
pub const ATTENUATION_CONTROL: &str = "Attenuation Limit (dB)";

const SOURCE_NODE: &str = "denoise_mono";
const SINK_STEREO_NODE: &str = "denoise_stereo";
const SINK_LEFT_NODE: &str = "denoise_left";
const SINK_RIGHT_NODE: &str = "denoise_right";

/// Which virtual device a graph backs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphRole {
    Source,
    Sink,
}

/// One LADSPA instance in the filter graph.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterNode {
    pub name: String,
    pub label: String,
    pub plugin: String,
    pub controls: Vec<(String, f64)>,
}

impl FilterNode {
    fn new(name: &str, label: &str, config: &GeneratorConfig) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            plugin: config.plugin_path.display().to_string(),
            controls: vec![(ATTENUATION_CONTROL.to_string(), config.attenuation_limit)],
        }
    }
}

/// Explicit port-to-port edge between graph endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphLink {
    pub output: String,
    pub input: String,
}

impl GraphLink {
    fn new(output: &str, input: &str) -> Self {
        Self {
            output: output.to_string(),
            input: input.to_string(),
        }
    }
}

/// Structured form of one filter-chain graph, built from a topology plan.
///
/// Single-node graphs carry no explicit links; the runtime wires them
/// straight through. The dual-mono emulation is the one topology with
/// explicit links, two per channel.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterGraph {
    pub role: GraphRole,
    pub nodes: Vec<FilterNode>,
    pub links: Vec<GraphLink>,
    pub channels: u32,
    pub positions: &'static [&'static str],
}

impl FilterGraph {
    pub fn for_source(config: &GeneratorConfig, plan: &SourcePlan) -> Option<Self> {
        match plan {
            SourcePlan::Mono { label } => Some(Self {
                role: GraphRole::Source,
                nodes: vec![FilterNode::new(SOURCE_NODE, label, config)],
                links: Vec::new(),
                channels: 1,
                positions: MONO_POSITIONS,
            }),
            SourcePlan::Disabled => None,
        }
    }

    pub fn for_sink(config: &GeneratorConfig, plan: &SinkPlan) -> Option<Self> {
        match plan {
            SinkPlan::Stereo { label } => Some(Self {
                role: GraphRole::Sink,
                nodes: vec![FilterNode::new(SINK_STEREO_NODE, label, config)],
                links: Vec::new(),
                channels: 2,
                positions: STEREO_POSITIONS,
            }),
            SinkPlan::DualMono { label } => Some(Self {
                role: GraphRole::Sink,
                nodes: vec![
                    FilterNode::new(SINK_LEFT_NODE, label, config),
                    FilterNode::new(SINK_RIGHT_NODE, label, config),
                ],
                links: vec![
                    GraphLink::new("capture:FL", &format!("{SINK_LEFT_NODE}:Input")),
                    GraphLink::new(&format!("{SINK_LEFT_NODE}:Output"), "playback:FL"),
                    GraphLink::new("capture:FR", &format!("{SINK_RIGHT_NODE}:Input")),
                    GraphLink::new(&format!("{SINK_RIGHT_NODE}:Output"), "playback:FR"),
                ],
                channels: 2,
                positions: STEREO_POSITIONS,
            }),
            SinkPlan::Disabled => None,
        }
    }
}
