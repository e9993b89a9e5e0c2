use std::fs;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use quietwire_core::{
    descriptor_from_probe, render_artifacts, select, summarize, write_artifacts, ArtifactKind,
    GeneratorConfig, ProbeOutcome, Provenance,
};

fn test_config(output_dir: &std::path::Path) -> GeneratorConfig {
    let mut config = GeneratorConfig::default();
    config.plugin_path = "/usr/lib/ladspa/libdeep_filter_ladspa.so".into();
    config.output_dir = output_dir.to_path_buf();
    config
}

#[test]
fn mono_only_report_generates_source_and_dual_mono_sink_files() {
    let dir = tempdir().unwrap();
    let config = test_config(dir.path());

    let outcome = ProbeOutcome::Report("Plugin Label: \"deep_filter_mono\"".to_string());
    let descriptor = descriptor_from_probe(config.plugin_path.clone(), &outcome);
    assert_eq!(descriptor.provenance, Provenance::Probed);

    let artifacts = render_artifacts(&config, &select(&descriptor));
    let written = write_artifacts(&artifacts).unwrap();
    assert_eq!(written.len(), 2);

    let source = fs::read_to_string(ArtifactKind::Source.target_in(dir.path())).unwrap();
    let source_summary = summarize(&source);
    assert_eq!(source_summary.node_count(), 1);
    assert_eq!(source_summary.channels, Some(1));
    assert_eq!(source_summary.node_labels, vec!["deep_filter_mono".to_string()]);

    let sink = fs::read_to_string(ArtifactKind::Sink.target_in(dir.path())).unwrap();
    let sink_summary = summarize(&sink);
    assert_eq!(sink_summary.node_count(), 2);
    assert_eq!(sink_summary.link_count, 4);
    assert_eq!(sink_summary.channels, Some(2));
    assert!(sink.contains("audio.position = [ FL FR ]"));
}

#[test]
fn rerunning_the_generator_rewrites_identical_bytes() {
    let dir = tempdir().unwrap();
    let config = test_config(dir.path());

    let outcome = ProbeOutcome::ToolUnavailable;
    let run = || {
        let descriptor = descriptor_from_probe(config.plugin_path.clone(), &outcome);
        let artifacts = render_artifacts(&config, &select(&descriptor));
        write_artifacts(&artifacts).unwrap();
        (
            fs::read_to_string(ArtifactKind::Source.target_in(dir.path())).unwrap(),
            fs::read_to_string(ArtifactKind::Sink.target_in(dir.path())).unwrap(),
        )
    };
    let first = run();
    let second = run();
    assert_eq!(first, second);
}

#[test]
fn unusable_plugin_writes_nothing() {
    let dir = tempdir().unwrap();
    let config = test_config(dir.path());

    let descriptor = descriptor_from_probe(
        config.plugin_path.clone(),
        &ProbeOutcome::Report("no matching labels here".to_string()),
    );
    let artifacts = render_artifacts(&config, &select(&descriptor));
    let written = write_artifacts(&artifacts).unwrap();
    assert!(written.is_empty());
    assert!(!ArtifactKind::Source.target_in(dir.path()).exists());
    assert!(!ArtifactKind::Sink.target_in(dir.path()).exists());
}
