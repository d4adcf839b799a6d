// Pipeline error taxonomy. Row-level parse failures never surface here: cleaners drop the row.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Missing or invalid setting (bad path, pattern that does not compile). Fatal at startup.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// No entry in `dir` matches `pattern`.
    #[error("no file in {} matches pattern {pattern:?}", dir.display())]
    FileNotFound { dir: PathBuf, pattern: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but could not be opened or decoded as a workbook.
    #[error("failed to read spreadsheet {}: {message}", path.display())]
    Spreadsheet { path: PathBuf, message: String },
}
