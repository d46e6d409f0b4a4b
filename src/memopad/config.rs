use crate::error::{MemopadError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";

const DEFAULT_LIST_WIDTH: usize = 60;
/// Clamp range for the list label column, mirroring the resizable list
/// panel's bounds in the original widget.
pub const MIN_LIST_WIDTH: usize = 20;
pub const MAX_LIST_WIDTH: usize = 100;

/// How freshly created notes are titled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitlePolicy {
    /// `"Note {n}"`, numbered in creation order
    #[default]
    Sequential,
    /// A local timestamp, slashes replaced by hyphens
    Timestamp,
}

impl FromStr for TitlePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "sequential" => Ok(TitlePolicy::Sequential),
            "timestamp" => Ok(TitlePolicy::Timestamp),
            other => Err(format!(
                "Unknown title policy '{}' (expected 'sequential' or 'timestamp')",
                other
            )),
        }
    }
}

/// Configuration for memopad, stored in config.json next to the note data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemopadConfig {
    /// Title given to new notes
    #[serde(default)]
    pub title_policy: TitlePolicy,

    /// Width of the label column in the list view
    #[serde(default = "default_list_width")]
    pub list_width: usize,

    /// Id of the note that was selected when the last command finished
    #[serde(default)]
    pub current_note: Option<String>,
}

fn default_list_width() -> usize {
    DEFAULT_LIST_WIDTH
}

impl Default for MemopadConfig {
    fn default() -> Self {
        Self {
            title_policy: TitlePolicy::default(),
            list_width: DEFAULT_LIST_WIDTH,
            current_note: None,
        }
    }
}

impl MemopadConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MemopadError::Io)?;
        let mut config: MemopadConfig =
            serde_json::from_str(&content).map_err(MemopadError::Serialization)?;
        config.list_width = config.list_width.clamp(MIN_LIST_WIDTH, MAX_LIST_WIDTH);
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MemopadError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(MemopadError::Serialization)?;
        fs::write(config_path, content).map_err(MemopadError::Io)?;
        Ok(())
    }

    /// Set the label column width, clamped to the allowed range
    pub fn set_list_width(&mut self, width: usize) {
        self.list_width = width.clamp(MIN_LIST_WIDTH, MAX_LIST_WIDTH);
    }
}
