use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::source::DEFAULT_BASE_URL;
use crate::theme::ThemePreference;

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub source: Option<SourceConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub page_size: Option<u32>,
    /// "light", "dark", or "auto".
    pub theme: Option<String>,
}

/// Platform config directory path: `<config_dir>/artbrowse/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("artbrowse").join("config.toml"))
}

/// Load config by cascading CWD `.artbrowse.toml` over platform config.
/// CWD values override platform values. Missing files are skipped; a file
/// that exists but cannot be read or parsed is an error.
pub fn load_config() -> Result<ConfigFile, ConfigError> {
    load_cascade(config_path().as_deref(), Path::new(".artbrowse.toml"))
}

/// Cascade `cwd` over `platform`, skipping whichever does not exist.
pub fn load_cascade(platform: Option<&Path>, cwd: &Path) -> Result<ConfigFile, ConfigError> {
    let platform = match platform {
        Some(p) => load_from_path(p)?,
        None => None,
    };
    let cwd = load_from_path(cwd)?;

    Ok(match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    })
}

/// Load a config from a specific path. Returns `Ok(None)` if the file
/// doesn't exist.
pub fn load_from_path(path: &Path) -> Result<Option<ConfigFile>, ConfigError> {
    match read(path) {
        Ok(cfg) => {
            tracing::debug!(path = %path.display(), "loaded config file");
            Ok(Some(cfg))
        }
        Err(ConfigError::Read { source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Read and parse a config file, reporting why it failed.
pub fn read(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Render a config as TOML.
pub fn to_toml(cfg: &ConfigFile) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(cfg)?)
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    let base_src = base.source.unwrap_or_default();
    let over_src = overlay.source.unwrap_or_default();
    let base_disp = base.display.unwrap_or_default();
    let over_disp = overlay.display.unwrap_or_default();

    ConfigFile {
        source: Some(SourceConfig {
            base_url: over_src.base_url.or(base_src.base_url),
            timeout_secs: over_src.timeout_secs.or(base_src.timeout_secs),
        }),
        display: Some(DisplayConfig {
            page_size: over_disp.page_size.or(base_disp.page_size),
            theme: over_disp.theme.or(base_disp.theme),
        }),
    }
}

/// Effective settings after file, environment and CLI have been layered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub timeout: Duration,
    pub page_size: u32,
    /// `None` means follow the terminal's ambient preference.
    pub theme: Option<ThemePreference>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            page_size: DEFAULT_PAGE_SIZE,
            theme: None,
        }
    }
}

impl Settings {
    /// Build settings from a config file, then apply `ARTBROWSE_BASE_URL`,
    /// `ARTBROWSE_TIMEOUT` and `ARTBROWSE_PAGE_SIZE` looked up through `env`.
    pub fn resolve(file: &ConfigFile, env: impl Fn(&str) -> Option<String>) -> Self {
        let mut s = Settings::default();

        if let Some(src) = &file.source {
            if let Some(url) = &src.base_url {
                s.base_url = url.clone();
            }
            if let Some(secs) = src.timeout_secs {
                s.timeout = Duration::from_secs(secs.max(1));
            }
        }
        if let Some(disp) = &file.display {
            if let Some(size) = disp.page_size {
                s.page_size = size.max(1);
            }
            if let Some(name) = &disp.theme {
                s.theme = ThemePreference::from_name(name);
            }
        }

        if let Some(url) = env("ARTBROWSE_BASE_URL").filter(|u| !u.is_empty()) {
            s.base_url = url;
        }
        if let Some(secs) = env("ARTBROWSE_TIMEOUT").and_then(|v| v.parse::<u64>().ok()) {
            s.timeout = Duration::from_secs(secs.max(1));
        }
        if let Some(size) = env("ARTBROWSE_PAGE_SIZE").and_then(|v| v.parse::<u32>().ok()) {
            s.page_size = size.max(1);
        }
        s
    }

    /// Express these settings as a config file (theme `None` becomes "auto").
    pub fn to_config_file(&self) -> ConfigFile {
        ConfigFile {
            source: Some(SourceConfig {
                base_url: Some(self.base_url.clone()),
                timeout_secs: Some(self.timeout.as_secs()),
            }),
            display: Some(DisplayConfig {
                page_size: Some(self.page_size),
                theme: Some(self.theme.map_or("auto", |t| t.label()).to_string()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn parse_partial_config() {
        let cfg: ConfigFile = toml::from_str("[display]\npage_size = 50\n").unwrap();
        assert_eq!(cfg.display.unwrap().page_size, Some(50));
        assert!(cfg.source.is_none());
    }

    #[test]
    fn overlay_wins_and_base_fills_gaps() {
        let base: ConfigFile = toml::from_str(
            "[source]\nbase_url = \"http://a\"\ntimeout_secs = 5\n[display]\ntheme = \"dark\"\n",
        )
        .unwrap();
        let overlay: ConfigFile = toml::from_str("[source]\nbase_url = \"http://b\"\n").unwrap();
        let merged = merge(base, overlay);
        let src = merged.source.unwrap();
        assert_eq!(src.base_url.as_deref(), Some("http://b"));
        assert_eq!(src.timeout_secs, Some(5));
        assert_eq!(merged.display.unwrap().theme.as_deref(), Some("dark"));
    }

    #[test]
    fn defaults_without_file_or_env() {
        let s = Settings::resolve(&ConfigFile::default(), no_env);
        assert_eq!(s, Settings::default());
        assert_eq!(s.page_size, 20);
        assert_eq!(s.base_url, "https://api.artic.edu/api/v1");
    }

    #[test]
    fn env_overrides_file() {
        let file: ConfigFile =
            toml::from_str("[source]\nbase_url = \"http://file\"\ntimeout_secs = 3\n").unwrap();
        let s = Settings::resolve(&file, |k| match k {
            "ARTBROWSE_BASE_URL" => Some("http://env".into()),
            "ARTBROWSE_TIMEOUT" => Some("30".into()),
            _ => None,
        });
        assert_eq!(s.base_url, "http://env");
        assert_eq!(s.timeout, Duration::from_secs(30));
    }

    #[test]
    fn theme_auto_means_detect() {
        let file: ConfigFile = toml::from_str("[display]\ntheme = \"auto\"\n").unwrap();
        assert_eq!(Settings::resolve(&file, no_env).theme, None);
        let file: ConfigFile = toml::from_str("[display]\ntheme = \"dark\"\n").unwrap();
        assert_eq!(
            Settings::resolve(&file, no_env).theme,
            Some(ThemePreference::Dark)
        );
    }

    #[test]
    fn settings_survive_config_file_round_trip() {
        let s = Settings {
            base_url: "http://mirror".into(),
            timeout: Duration::from_secs(9),
            page_size: 40,
            theme: Some(ThemePreference::Dark),
        };
        assert_eq!(Settings::resolve(&s.to_config_file(), no_env), s);
        let auto = Settings::default();
        assert_eq!(
            auto.to_config_file().display.unwrap().theme.as_deref(),
            Some("auto")
        );
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let file: ConfigFile = toml::from_str("[display]\npage_size = 0\n").unwrap();
        assert_eq!(Settings::resolve(&file, no_env).page_size, 1);
    }

    #[test]
    fn env_page_size_overrides_file() {
        let file: ConfigFile = toml::from_str("[display]\npage_size = 50\n").unwrap();
        let s = Settings::resolve(&file, |k| {
            (k == "ARTBROWSE_PAGE_SIZE").then(|| "12".to_string())
        });
        assert_eq!(s.page_size, 12);

        let s = Settings::resolve(&file, |k| {
            (k == "ARTBROWSE_PAGE_SIZE").then(|| "lots".to_string())
        });
        assert_eq!(s.page_size, 50);
    }

    #[test]
    fn malformed_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[display\npage_size = ").unwrap();
        assert!(matches!(read(&path), Err(ConfigError::Parse { .. })));
        assert!(matches!(
            load_from_path(&path),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(
            load_cascade(None, &path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn missing_config_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(load_from_path(&missing).unwrap().is_none());
        assert_eq!(
            load_cascade(Some(&missing), &missing).unwrap(),
            ConfigFile::default()
        );
    }

    #[test]
    fn cascade_prefers_cwd_file() {
        let dir = tempfile::tempdir().unwrap();
        let platform = dir.path().join("platform.toml");
        let cwd = dir.path().join("cwd.toml");
        std::fs::write(&platform, "[source]\ntimeout_secs = 4\n[display]\npage_size = 30\n").unwrap();
        std::fs::write(&cwd, "[display]\npage_size = 10\n").unwrap();

        let cfg = load_cascade(Some(&platform), &cwd).unwrap();
        assert_eq!(cfg.display.unwrap().page_size, Some(10));
        assert_eq!(cfg.source.unwrap().timeout_secs, Some(4));
    }

    #[test]
    fn toml_output_reparses() {
        let cfg = merge(
            ConfigFile::default(),
            toml::from_str("[display]\npage_size = 12\n").unwrap(),
        );
        let text = to_toml(&cfg).unwrap();
        let back: ConfigFile = toml::from_str(&text).unwrap();
        assert_eq!(back, cfg);
    }
}
