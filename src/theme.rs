use std::collections::BTreeMap;
use std::path::Path;

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Color as written in a theme file: a name like `"lightcyan"` or `[r, g, b]`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeColor {
    Named(NamedColor),
    Rgb([u8; 3]),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedColor {
    Black,
    White,
    Gray,
    DarkGray,
    Red,
    Blue,
    LightBlue,
    LightCyan,
    Magenta,
}

impl ThemeColor {
    fn color(self) -> Color {
        match self {
            ThemeColor::Rgb([r, g, b]) => Color::Rgb(r, g, b),
            ThemeColor::Named(named) => match named {
                NamedColor::Black => Color::Black,
                NamedColor::White => Color::White,
                NamedColor::Gray => Color::Gray,
                NamedColor::DarkGray => Color::DarkGray,
                NamedColor::Red => Color::Red,
                NamedColor::Blue => Color::Blue,
                NamedColor::LightBlue => Color::LightBlue,
                NamedColor::LightCyan => Color::LightCyan,
                NamedColor::Magenta => Color::Magenta,
            },
        }
    }
}

/// What one theme variable looks like
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VarStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fg: Option<ThemeColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg: Option<ThemeColor>,
    pub bold: bool,
    pub dim: bool,
}

impl VarStyle {
    fn fg(color: NamedColor) -> Self {
        Self {
            fg: Some(ThemeColor::Named(color)),
            ..Self::default()
        }
    }

    fn on(mut self, color: NamedColor) -> Self {
        self.bg = Some(ThemeColor::Named(color));
        self
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    /// Resolve into the ratatui style used when rendering
    pub fn resolve(&self) -> Style {
        let mut modifiers = Modifier::empty();
        modifiers.set(Modifier::BOLD, self.bold);
        modifiers.set(Modifier::DIM, self.dim);

        let mut style = Style::default().add_modifier(modifiers);
        style.fg = self.fg.map(ThemeColor::color);
        style.bg = self.bg.map(ThemeColor::color);
        style
    }
}

/// A named set of style variables, loaded from TOML like
///
/// ```toml
/// name = "mine"
/// [vars.accent]
/// fg = "cyan"
/// bold = true
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    #[serde(default)]
    pub vars: BTreeMap<String, VarStyle>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    fn with_vars(name: &str, vars: Vec<(&str, VarStyle)>) -> Self {
        Self {
            name: name.to_string(),
            vars: vars.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
        }
    }

    pub fn dark() -> Self {
        use NamedColor::*;
        Self::with_vars(
            "dark",
            vec![
                ("text", VarStyle::fg(White)),
                ("muted", VarStyle::fg(Gray).dim()),
                ("accent", VarStyle::fg(LightCyan).bold()),
                ("status", VarStyle::fg(White).on(DarkGray)),
                ("panel", VarStyle::fg(LightBlue)),
                ("error", VarStyle::fg(Red).bold()),
            ],
        )
    }

    pub fn light() -> Self {
        use NamedColor::*;
        Self::with_vars(
            "light",
            vec![
                ("text", VarStyle::fg(Black)),
                ("muted", VarStyle::fg(DarkGray)),
                ("accent", VarStyle::fg(Blue).bold()),
                ("status", VarStyle::fg(Black).on(Gray)),
                ("panel", VarStyle::fg(Magenta)),
                ("error", VarStyle::fg(Red).bold()),
            ],
        )
    }

    /// Load theme from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get a built-in theme by name
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }
}

/// Resolved theme variables for rendering.
///
/// [`ThemeVars::apply`] only rebuilds the lookup when handed a different
/// theme, so calling it every frame is fine.
#[derive(Debug, Default)]
pub struct ThemeVars {
    current: Option<Theme>,
    resolved: BTreeMap<String, Style>,
}

impl ThemeVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `theme`. Returns true if the variables were rebuilt.
    pub fn apply(&mut self, theme: &Theme) -> bool {
        if self.current.as_ref() == Some(theme) {
            return false;
        }
        self.resolved = theme
            .vars
            .iter()
            .map(|(name, style)| (name.clone(), style.resolve()))
            .collect();
        self.current = Some(theme.clone());
        debug!(theme = %theme.name, vars = self.resolved.len(), "theme applied");
        true
    }

    /// Style for `name`; the default style when the variable is not set
    pub fn var(&self, name: &str) -> Style {
        self.resolved.get(name).copied().unwrap_or_default()
    }

    pub fn theme_name(&self) -> Option<&str> {
        self.current.as_ref().map(|t| t.name.as_str())
    }
}
