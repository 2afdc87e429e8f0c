//! Presentation preferences that survive restarts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Built-in color themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Neon,
    Dark,
    Pastel,
    Ocean,
    Sunset,
    Forest,
    Candy,
}

impl Theme {
    pub const ALL: [Theme; 7] = [
        Theme::Neon,
        Theme::Dark,
        Theme::Pastel,
        Theme::Ocean,
        Theme::Sunset,
        Theme::Forest,
        Theme::Candy,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Neon => "Neon",
            Theme::Dark => "Dark",
            Theme::Pastel => "Pastel",
            Theme::Ocean => "Ocean",
            Theme::Sunset => "Sunset",
            Theme::Forest => "Forest",
            Theme::Candy => "Candy",
        }
    }

    /// Stylesheet class applied by a renderer.
    pub fn class_name(&self) -> String {
        format!("theme-{}", self.name().to_lowercase())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL.into_iter().find(|theme| theme.name().eq_ignore_ascii_case(s.trim())).ok_or_else(
            || AppError::UnknownTheme {
                name: s.to_string(),
                available: Theme::ALL.map(|t| t.name()).join(", "),
            },
        )
    }
}

/// Theme and sound settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub sound_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { theme: Theme::default(), sound_enabled: true }
    }
}
