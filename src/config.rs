use std::path::Path;

use serde::Deserialize;

use crate::error::PipelineError;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub paths: PathsConfig,
    pub patterns: PatternsConfig,
    #[serde(default)]
    pub table: TableConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    /// Directory scanned for the two report exports.
    pub downloads_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatternsConfig {
    /// Regex matched at the start of the alarm log file name.
    pub file1_pattern: String,
    /// Regex matched at the start of the availability report file name.
    pub file2_pattern: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TableConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> usize {
    10
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("reading config {}: {}", path, e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(!self.server.host.is_empty(), "server.host must be non-empty");
        anyhow::ensure!(
            !self.paths.downloads_path.trim().is_empty(),
            "paths.downloads_path must be non-empty"
        );
        for (key, pattern) in [
            ("patterns.file1_pattern", &self.patterns.file1_pattern),
            ("patterns.file2_pattern", &self.patterns.file2_pattern),
        ] {
            anyhow::ensure!(!pattern.is_empty(), "{} must be non-empty", key);
            if let Err(e) = regex::Regex::new(pattern) {
                anyhow::bail!("{} is not a valid regex: {}", key, e);
            }
        }
        anyhow::ensure!(
            self.table.page_size > 0,
            "table.page_size must be > 0, got {}",
            self.table.page_size
        );
        Ok(())
    }

    /// Startup precondition: the downloads directory must exist before any file is located.
    pub fn check_paths(&self) -> Result<(), PipelineError> {
        if !Path::new(&self.paths.downloads_path).is_dir() {
            return Err(PipelineError::Configuration(format!(
                "the specified downloads path does not exist: {}",
                self.paths.downloads_path
            )));
        }
        Ok(())
    }

    pub fn downloads_dir(&self) -> &Path {
        Path::new(&self.paths.downloads_path)
    }
}
