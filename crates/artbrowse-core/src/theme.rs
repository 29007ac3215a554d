use serde::{Deserialize, Serialize};

/// Light or dark presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a config/CLI value. `"auto"` and unknown values yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Query the terminal's ambient background preference.
///
/// Reads the `COLORFGBG` convention (`"fg;bg"`, sometimes `"fg;default;bg"`).
/// Background palette indices 7 and 15 are light; anything else is dark.
/// Without the variable the light theme is assumed.
pub fn detect_ambient() -> ThemePreference {
    from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
}

fn from_colorfgbg(value: Option<&str>) -> ThemePreference {
    let Some(value) = value else {
        return ThemePreference::Light;
    };
    match value.rsplit(';').next().map(str::trim) {
        Some("7") | Some("15") => ThemePreference::Light,
        Some(bg) if bg.parse::<u8>().is_ok() => ThemePreference::Dark,
        _ => ThemePreference::Light,
    }
}
