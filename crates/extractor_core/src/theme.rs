use std::fmt;
use std::str::FromStr;

/// Theme preference chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

/// Effective appearance after resolving [`ThemeMode::System`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown theme mode {0:?}")]
pub struct ParseThemeModeError(String);

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(ParseThemeModeError(other.to_owned())),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown appearance {0:?}")]
pub struct ParseAppearanceError(String);

impl FromStr for Appearance {
    type Err = ParseAppearanceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" => Ok(Appearance::Light),
            "dark" => Ok(Appearance::Dark),
            other => Err(ParseAppearanceError(other.to_owned())),
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Appearance::Light => f.write_str("light"),
            Appearance::Dark => f.write_str("dark"),
        }
    }
}

/// Theme configuration owned by the composition root and passed by reference
/// to whatever renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeContext {
    mode: ThemeMode,
    system: Appearance,
}

impl ThemeContext {
    pub fn new(mode: ThemeMode, system: Appearance) -> Self {
        Self { mode, system }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn effective(&self) -> Appearance {
        match self.mode {
            ThemeMode::Light => Appearance::Light,
            ThemeMode::Dark => Appearance::Dark,
            ThemeMode::System => self.system,
        }
    }

    /// Returns true when the mode actually changed.
    pub fn set_mode(&mut self, mode: ThemeMode) -> bool {
        let changed = self.mode != mode;
        self.mode = mode;
        changed
    }

    /// Track a change of the platform appearance. Only visible while the
    /// mode is [`ThemeMode::System`]; returns true when the effective
    /// appearance changed.
    pub fn set_system_preference(&mut self, system: Appearance) -> bool {
        let before = self.effective();
        self.system = system;
        before != self.effective()
    }
}
