// Finds the newest export in the downloads directory whose file name starts with a pattern match.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use regex::Regex;
use tracing::{debug, instrument};

use crate::error::PipelineError;

/// Compiles `pattern` so it only matches at the start of a file name (prefix semantics).
pub fn compile_prefix_pattern(pattern: &str) -> Result<Regex, PipelineError> {
    Regex::new(&format!("^(?:{})", pattern)).map_err(|e| {
        PipelineError::Configuration(format!("invalid file pattern {:?}: {}", pattern, e))
    })
}

/// Returns the most recently created regular file in `directory` whose name matches `pattern`.
#[instrument(skip(directory), fields(directory = %directory.display()))]
pub fn locate_latest(directory: &Path, pattern: &str) -> Result<PathBuf, PipelineError> {
    let re = compile_prefix_pattern(pattern)?;
    let io_err = |source| PipelineError::Io {
        path: directory.to_path_buf(),
        source,
    };

    let mut latest: Option<(SystemTime, String, PathBuf)> = None;
    for entry in std::fs::read_dir(directory).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !re.is_match(&name) {
            continue;
        }
        // follows symlinks; a dangling link is not a candidate
        let meta = match std::fs::metadata(entry.path()) {
            Ok(meta) => meta,
            Err(e) => {
                debug!(file = %name, error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if !meta.is_file() {
            continue;
        }
        let stamp = creation_time(&meta);
        debug!(file = %name, "candidate export");
        let newer = match &latest {
            None => true,
            Some((t, n, _)) => (stamp, name.as_str()) > (*t, n.as_str()),
        };
        if newer {
            latest = Some((stamp, name, entry.path()));
        }
    }

    latest
        .map(|(_, _, path)| path)
        .ok_or_else(|| PipelineError::FileNotFound {
            dir: directory.to_path_buf(),
            pattern: pattern.to_string(),
        })
}

/// Creation time where the platform reports it, else last modification.
fn creation_time(meta: &std::fs::Metadata) -> SystemTime {
    meta.created()
        .or_else(|_| meta.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}
