use crate::{
    ArtifactKind, ConfigArtifact, FilterGraph, GeneratorConfig, GraphRole, TopologyPlan,
};

/// Render one filter graph as a PipeWire filter-chain module fragment.
///
/// Rendering is pure: the same graph and config always produce byte-identical
/// text. The documents carry no timestamps or other run-varying content, so
/// re-running the generator rewrites files without changing them.
pub fn render_graph(config: &GeneratorConfig, graph: &FilterGraph) -> String {
    let description = match graph.role {
        GraphRole::Source => "Quietwire Noise-Canceled Source",
        GraphRole::Sink => "Quietwire Noise-Canceled Sink",
    };

    let mut out = String::new();
    out.push_str("# Managed by quietwire; regenerated by every `quietwire setup` run.\n");
    out.push_str("# Manual edits will be overwritten.\n");
    out.push_str("context.modules = [\n");
    out.push_str("    {   name = libpipewire-module-filter-chain\n");
    out.push_str("        args = {\n");
    out.push_str(&format!("            node.description = \"{description}\"\n"));
    out.push_str(&format!("            media.name       = \"{description}\"\n"));
    out.push_str("            filter.graph = {\n");
    out.push_str("                nodes = [\n");
    for node in &graph.nodes {
        out.push_str("                    {\n");
        out.push_str("                        type    = ladspa\n");
        out.push_str(&format!("                        name    = {}\n", node.name));
        out.push_str(&format!("                        plugin  = \"{}\"\n", node.plugin));
        out.push_str(&format!("                        label   = {}\n", node.label));
        if !node.controls.is_empty() {
            out.push_str("                        control = {\n");
            for (control, value) in &node.controls {
                out.push_str(&format!(
                    "                            \"{control}\" = {value}\n"
                ));
            }
            out.push_str("                        }\n");
        }
        out.push_str("                    }\n");
    }
    out.push_str("                ]\n");
    if !graph.links.is_empty() {
        out.push_str("                links = [\n");
        for link in &graph.links {
            out.push_str(&format!(
                "                    {{ output = \"{}\"  input = \"{}\" }}\n",
                link.output, link.input
            ));
        }
        out.push_str("                ]\n");
    }
    out.push_str("            }\n");
    out.push_str(&format!("            audio.rate     = {}\n", config.sample_rate));
    out.push_str(&format!("            audio.channels = {}\n", graph.channels));
    out.push_str(&format!(
        "            audio.position = [ {} ]\n",
        graph.positions.join(" ")
    ));
    match graph.role {
        GraphRole::Source => {
            out.push_str("            capture.props = {\n");
            out.push_str("                node.name    = \"capture.quietwire_source\"\n");
            out.push_str("                node.passive = true\n");
            out.push_str("            }\n");
            out.push_str("            playback.props = {\n");
            out.push_str("                node.name   = \"quietwire_source\"\n");
            out.push_str("                media.class = Audio/Source\n");
            out.push_str("            }\n");
        }
        GraphRole::Sink => {
            out.push_str("            capture.props = {\n");
            out.push_str("                node.name   = \"quietwire_sink\"\n");
            out.push_str("                media.class = Audio/Sink\n");
            out.push_str("            }\n");
            out.push_str("            playback.props = {\n");
            out.push_str("                node.name    = \"quietwire_sink.out\"\n");
            out.push_str("                node.passive = true\n");
            out.push_str("            }\n");
        }
    }
    out.push_str("        }\n");
    out.push_str("    }\n");
    out.push_str("]\n");
    out
}

/// Render every artifact the plan calls for. Disabled sides render nothing,
/// so an unusable descriptor yields an empty set.
pub fn render_artifacts(config: &GeneratorConfig, plan: &TopologyPlan) -> Vec<ConfigArtifact> {
    let mut artifacts = Vec::new();
    if let Some(graph) = FilterGraph::for_source(config, &plan.source) {
        artifacts.push(ConfigArtifact {
            kind: ArtifactKind::Source,
            target: ArtifactKind::Source.target_in(&config.output_dir),
            contents: render_graph(config, &graph),
        });
    }
    if let Some(graph) = FilterGraph::for_sink(config, &plan.sink) {
        artifacts.push(ConfigArtifact {
            kind: ArtifactKind::Sink,
            target: ArtifactKind::Sink.target_in(&config.output_dir),
            contents: render_graph(config, &graph),
        });
    }
    artifacts
}

/// Facts re-derived from a rendered document, for status reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactSummary {
    pub node_labels: Vec<String>,
    pub link_count: usize,
    pub channels: Option<u32>,
    pub sample_rate: Option<u32>,
}

impl ArtifactSummary {
    pub fn node_count(&self) -> usize {
        self.node_labels.len()
    }
}

/// Re-parse a rendered document back into its load-bearing facts. This reads
/// only what `render_graph` writes; it is not a general config parser.
pub fn summarize(document: &str) -> ArtifactSummary {
    let mut summary = ArtifactSummary::default();
    for line in document.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("label") {
            if let Some(value) = rest.trim_start().strip_prefix('=') {
                summary.node_labels.push(value.trim().to_string());
            }
        } else if line.starts_with("{ output =") {
            summary.link_count += 1;
        } else if let Some(rest) = line.strip_prefix("audio.channels") {
            if let Some(value) = rest.trim_start().strip_prefix('=') {
                summary.channels = value.trim().parse().ok();
            }
        } else if let Some(rest) = line.strip_prefix("audio.rate") {
            if let Some(value) = rest.trim_start().strip_prefix('=') {
                summary.sample_rate = value.trim().parse().ok();
            }
        }
    }
    summary
}
