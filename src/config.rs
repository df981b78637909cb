//! Viewer configuration (viewer.yaml).
//!
//! Everything the viewer needs is passed in explicitly through
//! [`ViewerConfig`]; there is no process-wide state.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewerError};

/// Default configuration file name.
pub const CONFIG_FILENAME: &str = "viewer.yaml";

/// Largest accepted tile edge, in pixels.
pub const MAX_TILE_SIZE: u32 = 1024;

/// Viewer configuration loaded from viewer.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Roles allowed to trigger the viewer. Callers holding none of them
    /// are ignored.
    pub access_roles: Vec<String>,

    /// Command name; messages starting with it are rejected.
    pub command: String,

    /// Edge length of one tile, in pixels.
    pub tile_size: u32,

    /// Most shapes rendered per message; extras are dropped.
    pub max_shapes: usize,

    /// Most tiles per grid row.
    pub max_columns: u32,

    /// Most modifiers per instruction token.
    pub max_modifiers: usize,

    /// File name of the delivered attachment.
    pub attachment_name: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            access_roles: vec![],
            command: "sbe:viewer".to_string(),
            tile_size: 56,
            max_shapes: 64,
            max_columns: 8,
            max_modifiers: 10,
            attachment_name: "shapes.png".to_string(),
        }
    }
}

impl ViewerConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ViewerError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| ViewerError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, else `viewer.yaml` in `dir` if present, else defaults.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| ViewerError::Parse {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }

    /// Whether a caller holding `roles` may use the viewer.
    pub fn allows<S: AsRef<str>>(&self, roles: &[S]) -> bool {
        roles
            .iter()
            .any(|role| self.access_roles.iter().any(|r| r == role.as_ref()))
    }

    fn validate(&self) -> Result<()> {
        let invalid = |field: &str| ViewerError::Parse {
            message: format!("Invalid config: {} must be at least 1", field),
            help: None,
        };

        if self.tile_size == 0 {
            return Err(invalid("tile_size"));
        }
        if self.tile_size > MAX_TILE_SIZE {
            return Err(ViewerError::Parse {
                message: format!(
                    "Invalid config: tile_size must be at most {} (got {})",
                    MAX_TILE_SIZE, self.tile_size
                ),
                help: None,
            });
        }
        if self.max_columns == 0 {
            return Err(invalid("max_columns"));
        }
        if self.max_shapes == 0 {
            return Err(invalid("max_shapes"));
        }
        Ok(())
    }
}
