use std::path::{Path, PathBuf};
use std::process::Command;

use quietwire_core::{GeneratorConfig, ProbeOutcome};

/// LADSPA SDK tool used to introspect the plugin's entry points.
pub const ANALYSE_TOOL: &str = "analyseplugin";

/// Resolve the introspection tool: the configured override when set,
/// otherwise a PATH search. `None` means the tool is unavailable.
pub fn locate_tool(override_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return path.is_file().then(|| path.to_path_buf());
    }
    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .map(|dir| dir.join(ANALYSE_TOOL))
        .find(|candidate| candidate.is_file())
}

/// Run the introspection tool against the configured plugin binary.
///
/// A tool that cannot be found or spawned is `ToolUnavailable`. A tool that
/// runs but exits abnormally still yields a report: whatever it managed to
/// print is judged per variant, exactly like a clean run.
pub fn run_probe(config: &GeneratorConfig) -> ProbeOutcome {
    let Some(tool) = locate_tool(config.analyse_tool.as_deref()) else {
        tracing::warn!("{ANALYSE_TOOL} not found; assuming both plugin variants");
        return ProbeOutcome::ToolUnavailable;
    };
    tracing::debug!("probing {} with {}", config.plugin_path.display(), tool.display());
    match Command::new(&tool).arg(&config.plugin_path).output() {
        Ok(output) => {
            if !output.status.success() {
                tracing::warn!(
                    "{} exited with {}; judging its partial output",
                    tool.display(),
                    output.status
                );
            }
            ProbeOutcome::Report(String::from_utf8_lossy(&output.stdout).into_owned())
        }
        Err(err) => {
            tracing::warn!(
                "failed to run {}: {err}; assuming both plugin variants",
                tool.display()
            );
            ProbeOutcome::ToolUnavailable
        }
    }
}
