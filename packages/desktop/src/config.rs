// Optional launcher configuration.
//
// Lookup order (first hit wins):
//   1. `--config <FILE>`
//   2. `<exe_dir>/gamepage.toml`
//   3. `<config_dir>/gamepage/config.toml`
//   4. built-in defaults

use std::fmt;
use std::path::{Path, PathBuf};

use gamepage_common::path::{entry_path_in, entry_path_with};
use gamepage_common::window::{DEFAULT_HEIGHT, DEFAULT_TITLE, DEFAULT_WIDTH};
use serde::Deserialize;
use thiserror::Error;

use crate::cli::LaunchArgs;

/// Config file looked up next to the executable.
pub const LOCAL_CONFIG_FILE: &str = "gamepage.toml";

/// Per-user config file: `<config_dir>/gamepage/config.toml`.
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("gamepage").join("config.toml"))
}

/// Config file next to the executable: `<exe_dir>/gamepage.toml`.
pub fn local_config_path(exe_dir: &Path) -> PathBuf {
    exe_dir.join(LOCAL_CONFIG_FILE)
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Local(PathBuf),
    Global(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(p) | Self::Local(p) | Self::Global(p) => write!(f, "{}", p.display()),
            Self::Defaults => f.write_str("built-in defaults"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    /// Window title (defaults to `GamePage`).
    pub title: Option<String>,
    /// Entry document relative to the executable directory
    /// (defaults to `Webassets/index.html`).
    pub entry: Option<PathBuf>,
    /// Enable the webview inspector.
    pub devtools: bool,
    pub window: WindowConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { width: DEFAULT_WIDTH, height: DEFAULT_HEIGHT, resizable: true }
    }
}

impl LauncherConfig {
    /// Load from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        toml::from_str(&contents)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Find and load the active config. Implicit locations that don't exist
    /// are skipped; one that exists but is broken is an error.
    pub fn discover(
        explicit: Option<&Path>,
        exe_dir: &Path,
    ) -> Result<(Self, ConfigSource), ConfigError> {
        Self::discover_with(explicit, exe_dir, global_config_path())
    }

    fn discover_with(
        explicit: Option<&Path>,
        exe_dir: &Path,
        global: Option<PathBuf>,
    ) -> Result<(Self, ConfigSource), ConfigError> {
        if let Some(path) = explicit {
            return Ok((Self::load_from(path)?, ConfigSource::Explicit(path.to_path_buf())));
        }

        let local = local_config_path(exe_dir);
        if local.is_file() {
            return Ok((Self::load_from(&local)?, ConfigSource::Local(local)));
        }

        if let Some(global) = global.filter(|p| p.is_file()) {
            return Ok((Self::load_from(&global)?, ConfigSource::Global(global)));
        }

        Ok((Self::default(), ConfigSource::Defaults))
    }

    /// Command-line flags win over file values, field by field.
    pub fn apply_args(&mut self, args: &LaunchArgs) {
        if let Some(title) = &args.title {
            self.title = Some(title.clone());
        }
        if let Some(entry) = &args.entry {
            self.entry = Some(entry.clone());
        }
        if let Some(width) = args.width {
            self.window.width = width;
        }
        if let Some(height) = args.height {
            self.window.height = height;
        }
        if args.devtools {
            self.devtools = true;
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    /// Absolute entry document path for an executable living in `exe_dir`.
    pub fn entry_path(&self, exe_dir: &Path) -> PathBuf {
        match &self.entry {
            Some(relative) => entry_path_with(exe_dir, relative),
            None => entry_path_in(exe_dir),
        }
    }
}
