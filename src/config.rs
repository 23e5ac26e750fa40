//! Drill files: a list of algorithm invocations with their expected results.
//!
//! ```toml
//! [settings]
//! parallel = true
//!
//! [[drill]]
//! name = "merge example"
//! op = "merge_two_sorted"
//! left = [1, 2, 3, 10]
//! right = [4, 5, 6]
//! expect = [1, 2, 3, 4, 5, 6, 10]
//! ```
//!
//! The same shape is accepted as JSON, with the array under a `"drill"` key.

use crate::drill::{Expected, Task};
use crate::error::DrillError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Run drills on the rayon pool instead of one after another.
    pub parallel: bool,
    /// Stop at the first drill that fails or is rejected. Forces sequential
    /// execution.
    pub fail_fast: bool,
    /// Filter directive used when `DRILLS_LOG` is not set.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            parallel: false,
            fail_fast: false,
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drill {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub task: Task,
    #[serde(default)]
    pub expect: Option<Expected>,
}

impl Drill {
    /// Display name; unnamed drills are numbered by their position.
    pub fn label(&self, index: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("#{} {}", index + 1, self.task.op()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrillFile {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default, rename = "drill")]
    pub drills: Vec<Drill>,
}

impl DrillFile {
    pub fn parse_toml(content: &str) -> Result<Self, DrillError> {
        Ok(toml::from_str(content)?)
    }

    pub fn parse_json(content: &str) -> Result<Self, DrillError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Loads a drill file, picking the parser from the extension.
    pub fn load(path: &Path) -> Result<Self, DrillError> {
        let content = fs::read_to_string(path).map_err(|source| DrillError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        let file = match extension.as_str() {
            "toml" => Self::parse_toml(&content)?,
            "json" => Self::parse_json(&content)?,
            _ => return Err(DrillError::UnsupportedFormat { extension }),
        };

        if file.drills.is_empty() {
            return Err(DrillError::NoDrills {
                path: path.to_path_buf(),
            });
        }
        Ok(file)
    }
}
