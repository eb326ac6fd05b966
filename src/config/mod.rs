use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Largest accepted row height in pixels
pub const MAX_ROW_HEIGHT: u32 = 512;

/// On-disk configuration document.
///
/// Mirrors the nested layout users already keep next to the launcher:
/// `settings.style`, `settings.libraries` and `settings.executables`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigDocument {
    pub settings: Settings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub style: StyleSettings,
    pub libraries: LibrarySettings,
    pub executables: ExecutableSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleSettings {
    /// Row height in pixels; icon, font and window sizes derive from it
    pub scale: u32,
    #[serde(default)]
    pub dark: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibrarySettings {
    /// Root folder scanned for Live sets
    pub saves: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutableSettings {
    /// Ableton Live executable, launched by "New Project"
    pub ableton: PathBuf,
    /// Optional auxiliary configuration tool, launched by "Flex Cfg"
    #[serde(default)]
    pub flex: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("configuration file {path:?} is invalid: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("settings.style.scale must be between 1 and {}, got {0}", MAX_ROW_HEIGHT)]
    ScaleOutOfRange(u32),
}

/// Launcher configuration, loaded once at startup and never mutated.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LauncherConfig {
    /// Pixel height of one list row
    pub row_height: u32,
    pub dark_mode: bool,
    pub projects_root: PathBuf,
    pub host_executable: PathBuf,
    /// `None` hides the auxiliary tool button entirely
    pub aux_tool: Option<PathBuf>,
}

impl LauncherConfig {
    /// Load and validate the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&text).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Parse a configuration document. JSON documents are accepted too.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let document: ConfigDocument =
            serde_yaml::from_str(text).map_err(|source| ConfigError::Parse {
                path: PathBuf::new(),
                source,
            })?;
        Self::try_from(document)
    }
}

impl TryFrom<ConfigDocument> for LauncherConfig {
    type Error = ConfigError;

    fn try_from(document: ConfigDocument) -> Result<Self, Self::Error> {
        let Settings {
            style,
            libraries,
            executables,
        } = document.settings;

        if !(1..=MAX_ROW_HEIGHT).contains(&style.scale) {
            return Err(ConfigError::ScaleOutOfRange(style.scale));
        }

        // An empty string is how users usually "comment out" the tool
        let aux_tool = executables
            .flex
            .filter(|p| !p.as_os_str().is_empty());

        Ok(Self {
            row_height: style.scale,
            dark_mode: style.dark,
            projects_root: libraries.saves,
            host_executable: executables.ableton,
            aux_tool,
        })
    }
}
