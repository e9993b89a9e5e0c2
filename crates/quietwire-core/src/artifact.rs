use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The two documents the generator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Source,
    Sink,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 2] = [ArtifactKind::Source, ArtifactKind::Sink];

    pub fn file_name(self) -> &'static str {
        match self {
            ArtifactKind::Source => "quietwire-source.conf",
            ArtifactKind::Sink => "quietwire-sink.conf",
        }
    }

    pub fn target_in(self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Source => write!(f, "source"),
            ArtifactKind::Sink => write!(f, "sink"),
        }
    }
}

/// One rendered configuration document plus its target path. Immutable once
/// rendered; the next run overwrites the same target wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigArtifact {
    pub kind: ArtifactKind,
    pub target: PathBuf,
    pub contents: String,
}

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write every artifact to its target path, overwriting prior content, and
/// report the paths written. The caller is expected to have created the
/// target directory; any write failure is fatal.
pub fn write_artifacts(artifacts: &[ConfigArtifact]) -> Result<Vec<PathBuf>, ArtifactError> {
    let mut written = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        fs::write(&artifact.target, &artifact.contents).map_err(|source| {
            ArtifactError::Write {
                path: artifact.target.clone(),
                source,
            }
        })?;
        tracing::debug!("wrote {} config to {}", artifact.kind, artifact.target.display());
        written.push(artifact.target.clone());
    }
    Ok(written)
}
