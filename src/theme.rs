//! Theme tokens and their resolution to concrete CSS text
//!
//! The parser only ever speaks in [`ThemeToken`]s; which CSS text a token turns into is
//! decided here, at render time. The default `variables` theme emits `var(--name)`
//! references so the generated code can be dropped into a page that defines them.

use crate::error::{Result, SketchError};
use crate::types::StyleValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Symbolic style values produced by the description parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeToken {
    ColorPrimary,
    ColorPrimaryDark,
    ColorCodeText,
    ColorCodeTextDark,
    ColorRed,
    ColorDarkRed,
    ColorPurple,
    ColorOrange,
    ColorYellow,
    ColorTextLight,
    ColorTextDark,
    ColorSecondary,
    ColorSecondaryLight,
    ColorSecondaryDark,
    ColorBackgroundMedium,
    ColorBorder,
    FontSizeBase,
    BorderRadiusMd,
    BorderRadiusFull,
    ShadowMd,
    ShadowLg,
    SpaceSm,
    SpaceMd,
    SpaceLg,
    SpaceXl,
}

impl ThemeToken {
    pub const ALL: &'static [ThemeToken] = &[
        ThemeToken::ColorPrimary,
        ThemeToken::ColorPrimaryDark,
        ThemeToken::ColorCodeText,
        ThemeToken::ColorCodeTextDark,
        ThemeToken::ColorRed,
        ThemeToken::ColorDarkRed,
        ThemeToken::ColorPurple,
        ThemeToken::ColorOrange,
        ThemeToken::ColorYellow,
        ThemeToken::ColorTextLight,
        ThemeToken::ColorTextDark,
        ThemeToken::ColorSecondary,
        ThemeToken::ColorSecondaryLight,
        ThemeToken::ColorSecondaryDark,
        ThemeToken::ColorBackgroundMedium,
        ThemeToken::ColorBorder,
        ThemeToken::FontSizeBase,
        ThemeToken::BorderRadiusMd,
        ThemeToken::BorderRadiusFull,
        ThemeToken::ShadowMd,
        ThemeToken::ShadowLg,
        ThemeToken::SpaceSm,
        ThemeToken::SpaceMd,
        ThemeToken::SpaceLg,
        ThemeToken::SpaceXl,
    ];

    /// CSS custom property name, without the leading `--`.
    pub fn variable_name(self) -> &'static str {
        match self {
            Self::ColorPrimary => "color-primary",
            Self::ColorPrimaryDark => "color-primary-dark",
            Self::ColorCodeText => "color-code-text",
            Self::ColorCodeTextDark => "color-code-text-dark",
            Self::ColorRed => "color-red",
            Self::ColorDarkRed => "color-dark-red",
            Self::ColorPurple => "color-purple",
            Self::ColorOrange => "color-orange",
            Self::ColorYellow => "color-yellow",
            Self::ColorTextLight => "color-text-light",
            Self::ColorTextDark => "color-text-dark",
            Self::ColorSecondary => "color-secondary",
            Self::ColorSecondaryLight => "color-secondary-light",
            Self::ColorSecondaryDark => "color-secondary-dark",
            Self::ColorBackgroundMedium => "color-background-medium",
            Self::ColorBorder => "color-border",
            Self::FontSizeBase => "font-size-base",
            Self::BorderRadiusMd => "border-radius-md",
            Self::BorderRadiusFull => "border-radius-full",
            Self::ShadowMd => "shadow-md",
            Self::ShadowLg => "shadow-lg",
            Self::SpaceSm => "space-sm",
            Self::SpaceMd => "space-md",
            Self::SpaceLg => "space-lg",
            Self::SpaceXl => "space-xl",
        }
    }

    /// Fallback carried inside the `var()` reference for colors a host page
    /// is not expected to define.
    pub fn fallback(self) -> Option<&'static str> {
        match self {
            Self::ColorRed => Some("#FF4C4C"),
            Self::ColorDarkRed => Some("#8B0000"),
            Self::ColorPurple => Some("#800080"),
            Self::ColorOrange => Some("#FFA500"),
            Self::ColorYellow => Some("#FFFF00"),
            _ => None,
        }
    }

    /// Looks a token up by its variable name; a leading `--` is accepted.
    pub fn from_variable_name(name: &str) -> Option<Self> {
        let name = name.trim().trim_start_matches("--");
        Self::ALL.iter().copied().find(|t| t.variable_name() == name)
    }

    /// `var(--name)` reference, with the fallback when the token has one.
    pub fn var_reference(self) -> String {
        match self.fallback() {
            Some(fallback) => format!("var(--{}, {})", self.variable_name(), fallback),
            None => format!("var(--{})", self.variable_name()),
        }
    }
}

impl fmt::Display for ThemeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{}", self.variable_name())
    }
}

/// Built-in resolution strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    /// Emit `var(--name)` references.
    Variables,
    Light,
    Dark,
}

impl ThemeKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "variables" | "vars" => Some(Self::Variables),
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Variables => "variables",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Token resolution table handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    kind: ThemeKind,
    overrides: HashMap<ThemeToken, String>,
}

impl Theme {
    pub fn new(kind: ThemeKind) -> Self {
        Self {
            kind,
            overrides: HashMap::new(),
        }
    }

    pub fn variables() -> Self {
        Self::new(ThemeKind::Variables)
    }

    pub fn light() -> Self {
        Self::new(ThemeKind::Light)
    }

    pub fn dark() -> Self {
        Self::new(ThemeKind::Dark)
    }

    /// Builds a built-in theme from its name (`variables`, `light`, `dark`).
    pub fn named(name: &str) -> Result<Self> {
        ThemeKind::from_name(name)
            .map(Self::new)
            .ok_or_else(|| SketchError::theme(format!(
                "Unknown theme '{}'. Expected one of: variables, light, dark", name
            )))
    }

    pub fn kind(&self) -> ThemeKind {
        self.kind
    }

    /// Replaces the concrete value of a single token.
    pub fn with_override(mut self, token: ThemeToken, value: impl Into<String>) -> Self {
        self.overrides.insert(token, value.into());
        self
    }

    /// Applies overrides keyed by variable name, as found in config files.
    pub fn with_named_overrides(mut self, overrides: &HashMap<String, String>) -> Result<Self> {
        for (name, value) in overrides {
            let token = ThemeToken::from_variable_name(name).ok_or_else(|| {
                SketchError::theme(format!("Unknown theme token '{}'", name))
            })?;
            log::debug!("Theme override {} = {}", token, value);
            self.overrides.insert(token, value.clone());
        }
        Ok(self)
    }

    /// CSS text for a token under this theme.
    pub fn resolve(&self, token: ThemeToken) -> String {
        if let Some(value) = self.overrides.get(&token) {
            return value.clone();
        }
        match self.kind {
            ThemeKind::Variables => token.var_reference(),
            ThemeKind::Light => light_value(token).to_string(),
            ThemeKind::Dark => dark_value(token).to_string(),
        }
    }

    /// CSS text for any style value.
    pub fn resolve_value(&self, value: &StyleValue) -> String {
        match value {
            StyleValue::Token(token) => self.resolve(*token),
            StyleValue::Literal(text) => text.clone(),
            StyleValue::Shorthand(parts) => parts
                .iter()
                .map(|part| self.resolve_value(part))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Concrete value backing a token's custom property.
    pub fn concrete_value(&self, token: ThemeToken) -> String {
        if let Some(value) = self.overrides.get(&token) {
            return value.clone();
        }
        match self.kind {
            ThemeKind::Dark => dark_value(token).to_string(),
            ThemeKind::Variables | ThemeKind::Light => light_value(token).to_string(),
        }
    }

    /// `:root` block defining every token as a custom property.
    pub fn root_block(&self) -> String {
        let mut block = String::from(":root {\n");
        for token in ThemeToken::ALL {
            block.push_str(&format!("  {}: {};\n", token, self.concrete_value(*token)));
        }
        block.push('}');
        block
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::variables()
    }
}

fn light_value(token: ThemeToken) -> &'static str {
    match token {
        ThemeToken::ColorPrimary => "#007BFF",
        ThemeToken::ColorPrimaryDark => "#0056B3",
        ThemeToken::ColorCodeText => "#28A745",
        ThemeToken::ColorCodeTextDark => "#1E7E34",
        ThemeToken::ColorRed => "#FF4C4C",
        ThemeToken::ColorDarkRed => "#8B0000",
        ThemeToken::ColorPurple => "#800080",
        ThemeToken::ColorOrange => "#FFA500",
        ThemeToken::ColorYellow => "#FFFF00",
        ThemeToken::ColorTextLight => "#FFFFFF",
        ThemeToken::ColorTextDark => "#212529",
        ThemeToken::ColorSecondary => "#6C757D",
        ThemeToken::ColorSecondaryLight => "#ADB5BD",
        ThemeToken::ColorSecondaryDark => "#495057",
        ThemeToken::ColorBackgroundMedium => "#E9ECEF",
        ThemeToken::ColorBorder => "#DEE2E6",
        ThemeToken::FontSizeBase => "16px",
        ThemeToken::BorderRadiusMd => "6px",
        ThemeToken::BorderRadiusFull => "9999px",
        ThemeToken::ShadowMd => "0 4px 6px rgba(0, 0, 0, 0.1)",
        ThemeToken::ShadowLg => "0 10px 25px rgba(0, 0, 0, 0.25)",
        ThemeToken::SpaceSm => "8px",
        ThemeToken::SpaceMd => "16px",
        ThemeToken::SpaceLg => "24px",
        ThemeToken::SpaceXl => "32px",
    }
}

fn dark_value(token: ThemeToken) -> &'static str {
    match token {
        ThemeToken::ColorPrimary => "#4DA3FF",
        ThemeToken::ColorPrimaryDark => "#1F6FD1",
        ThemeToken::ColorCodeText => "#3DDC84",
        ThemeToken::ColorCodeTextDark => "#2BA866",
        ThemeToken::ColorRed => "#FF6B6B",
        ThemeToken::ColorDarkRed => "#B22222",
        ThemeToken::ColorPurple => "#B57EDC",
        ThemeToken::ColorOrange => "#FFB347",
        ThemeToken::ColorYellow => "#FFE066",
        ThemeToken::ColorTextLight => "#F8F9FA",
        ThemeToken::ColorTextDark => "#E9ECEF",
        ThemeToken::ColorSecondary => "#ADB5BD",
        ThemeToken::ColorSecondaryLight => "#CED4DA",
        ThemeToken::ColorSecondaryDark => "#343A40",
        ThemeToken::ColorBackgroundMedium => "#2B3035",
        ThemeToken::ColorBorder => "#495057",
        ThemeToken::ShadowMd => "0 4px 6px rgba(0, 0, 0, 0.4)",
        ThemeToken::ShadowLg => "0 10px 25px rgba(0, 0, 0, 0.6)",
        other => light_value(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variables_theme_emits_references() {
        let theme = Theme::variables();
        assert_eq!(theme.resolve(ThemeToken::ColorPrimary), "var(--color-primary)");
        assert_eq!(theme.resolve(ThemeToken::ColorRed), "var(--color-red, #FF4C4C)");
        assert_eq!(theme.resolve(ThemeToken::SpaceMd), "var(--space-md)");
    }

    #[test]
    fn test_concrete_themes() {
        assert_eq!(Theme::light().resolve(ThemeToken::ColorPrimary), "#007BFF");
        assert_eq!(Theme::dark().resolve(ThemeToken::ColorPrimary), "#4DA3FF");
        // Sizes are shared between the palettes
        assert_eq!(Theme::dark().resolve(ThemeToken::SpaceLg), "24px");
    }

    #[test]
    fn test_override_only_touches_one_token() {
        let theme = Theme::variables().with_override(ThemeToken::ColorPrimary, "#123456");
        assert_eq!(theme.resolve(ThemeToken::ColorPrimary), "#123456");
        assert_eq!(theme.resolve(ThemeToken::ColorPrimaryDark), "var(--color-primary-dark)");
    }

    #[test]
    fn test_named_overrides() {
        let mut overrides = HashMap::new();
        overrides.insert("--space-sm".to_string(), "4px".to_string());
        let theme = Theme::light().with_named_overrides(&overrides).unwrap();
        assert_eq!(theme.resolve(ThemeToken::SpaceSm), "4px");

        overrides.insert("color-nope".to_string(), "#000".to_string());
        assert!(Theme::light().with_named_overrides(&overrides).is_err());
    }

    #[test]
    fn test_resolve_shorthand() {
        let theme = Theme::variables();
        let padding = StyleValue::Shorthand(vec![
            StyleValue::Token(ThemeToken::SpaceSm),
            StyleValue::Token(ThemeToken::SpaceMd),
        ]);
        assert_eq!(theme.resolve_value(&padding), "var(--space-sm) var(--space-md)");
        assert_eq!(Theme::light().resolve_value(&padding), "8px 16px");
    }

    #[test]
    fn test_named_themes() {
        assert_eq!(Theme::named("Dark").unwrap().kind(), ThemeKind::Dark);
        assert!(Theme::named("sepia").is_err());
    }

    #[test]
    fn test_root_block_defines_every_token() {
        let block = Theme::variables().root_block();
        assert!(block.starts_with(":root {"));
        for token in ThemeToken::ALL {
            assert!(block.contains(&format!("--{}:", token.variable_name())));
        }
        assert!(block.contains("--color-primary: #007BFF;"));
    }
}
