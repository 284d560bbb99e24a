use crate::error::{NamesError, Result};
use crate::store::{StorageBackend, CONFIG_KEY};
use serde::{Deserialize, Serialize};

const DEFAULT_LINE_WIDTH: usize = 80;
const MIN_LINE_WIDTH: usize = 20;

/// Presentation preferences, stored next to the list data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamesConfig {
    /// Width the list view is truncated to
    #[serde(default = "default_line_width")]
    pub line_width: usize,

    /// Ask before clearing the whole list
    #[serde(default = "default_confirm_clear")]
    pub confirm_clear: bool,
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

fn default_confirm_clear() -> bool {
    true
}

impl Default for NamesConfig {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            confirm_clear: true,
        }
    }
}

impl NamesConfig {
    pub const KEYS: &'static [&'static str] = &["line-width", "confirm-clear"];

    /// Reads the config stored under [`CONFIG_KEY`]. Nothing stored yet
    /// means defaults; a stored value that does not parse is an error so the
    /// caller can decide whether to fall back.
    pub fn load<B: StorageBackend>(backend: &B) -> Result<Self> {
        match backend.load(CONFIG_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Self::default()),
        }
    }

    pub fn save<B: StorageBackend>(&self, backend: &B) -> Result<()> {
        backend.save(CONFIG_KEY, &serde_json::to_string_pretty(self)?)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "line-width" => Some(self.line_width.to_string()),
            "confirm-clear" => Some(self.confirm_clear.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "line-width" => {
                let width: usize = value.parse().map_err(|_| {
                    NamesError::Config(format!("line-width must be a number, got '{}'", value))
                })?;
                if width < MIN_LINE_WIDTH {
                    return Err(NamesError::Config(format!(
                        "line-width must be at least {}",
                        MIN_LINE_WIDTH
                    )));
                }
                self.line_width = width;
            }
            "confirm-clear" => {
                self.confirm_clear = match value {
                    "true" | "yes" | "on" => true,
                    "false" | "no" | "off" => false,
                    other => {
                        return Err(NamesError::Config(format!(
                            "confirm-clear must be true or false, got '{}'",
                            other
                        )))
                    }
                };
            }
            other => {
                return Err(NamesError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }
}
