//! Configuration file I/O: path resolution and loading.

use std::path::{Path, PathBuf};

use super::{Config, ConfigError};

/// Returns the platform-specific configuration directory for the grid view.
pub fn config_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("gridview");
        }
        PathBuf::from(".").join("gridview")
    }
    #[cfg(not(target_os = "windows"))]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("gridview");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config").join("gridview");
        }
        PathBuf::from(".").join("gridview")
    }
}

/// Returns the path to the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

impl Config {
    /// Loads config from the default path. Returns defaults if the file
    /// doesn't exist, can't be parsed, or fails validation.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    /// Like [`Config::load`], from an explicit path.
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(cfg) => {
                log::info!("config: loaded from {}", path.display());
                cfg
            }
            Err(ConfigError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Self::default()
            }
            Err(e) => {
                log::warn!("config: {e}");
                Self::default()
            }
        }
    }

    /// Tries to load config from the default path.
    ///
    /// Unlike `load()`, this preserves the distinction between "file
    /// missing" and "parse error" so callers can keep the previous config
    /// on error.
    pub fn try_load() -> Result<Self, ConfigError> {
        Self::try_load_from(&config_path())
    }

    /// Like [`Config::try_load`], from an explicit path.
    pub fn try_load_from(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: Self = toml::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }
}
