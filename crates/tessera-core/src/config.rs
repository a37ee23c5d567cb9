use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;

/// Top-level configuration for Tessera.
///
/// Loaded from `~/.config/tessera/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Query tuning.
    pub analysis: AnalysisConfig,
    /// File logging.
    pub log: LogConfig,
}

/// Settings that affect how queries are answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Strategy used by the max-overlap search.
    pub depth_search: DepthSearch,
    /// Most integer points the grid strategy may visit.
    pub grid_limit: u64,
}

/// How the max-overlap point is searched for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepthSearch {
    /// Exact cell decomposition.
    #[default]
    Cells,
    /// Integer-point scan of the bounding box.
    Grid,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            depth_search: DepthSearch::Cells,
            grid_limit: 4_000_000,
        }
    }
}

impl Config {
    /// Clamps values to safe ranges.
    pub fn validate(&mut self) {
        self.analysis.grid_limit = self.analysis.grid_limit.max(1);
        self.log.max_file_mb = self.log.max_file_mb.min(1024);
    }
}

/// Returns the config directory: `~/.config/tessera/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("tessera"))
}

/// Returns the config file path: `~/.config/tessera/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Parses config text and clamps the result via [`Config::validate`].
pub fn parse(content: &str) -> Result<Config, String> {
    let mut config: Config = toml::from_str(content).map_err(|e| e.to_string())?;
    config.validate();
    Ok(config)
}

/// Tries to load and parse `config.toml`.
///
/// Returns an error string describing what went wrong (missing file,
/// IO error, parse error).
pub fn try_load() -> Result<Config, String> {
    let path = config_path().ok_or("could not determine config path")?;
    let content = std::fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    parse(&content).map_err(|e| format!("{}: {e}", path.display()))
}

/// Loads the configuration from disk, falling back to defaults.
///
/// A missing file silently yields defaults; any other failure prints
/// a warning first.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }
    match try_load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {e}");
            Config::default()
        }
    }
}

/// Renders the default configuration with a comment per option.
pub fn template() -> String {
    let defaults = Config::default();
    format!(
        "# Tessera configuration\n\
         \n\
         [analysis]\n\
         # Max-overlap search: \"cells\" (exact for any coordinates) or\n\
         # \"grid\" (scans integer points only).\n\
         depth_search = \"cells\"\n\
         # Largest number of integer points the grid search may visit.\n\
         grid_limit = {grid_limit}\n\
         \n\
         [log]\n\
         # Write a log file under ~/.config/tessera/logs/.\n\
         enabled = {enabled}\n\
         # debug | info | warn | error\n\
         level = \"{level}\"\n\
         # Rotate the log once it reaches this size. 0 disables rotation.\n\
         max_file_mb = {max_file_mb}\n",
        grid_limit = defaults.analysis.grid_limit,
        enabled = defaults.log.enabled,
        level = defaults.log.level,
        max_file_mb = defaults.log.max_file_mb,
    )
}
