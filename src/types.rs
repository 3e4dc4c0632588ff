//! Core types and constants for the Sketch compiler

use crate::theme::ThemeToken;
use serde::Serialize;
use std::fmt;

// Fallback values
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150";
pub const DEFAULT_LINK_TARGET: &str = "#";
pub const LIST_PLACEHOLDER_ITEMS: &str = "<li>Item 1</li><li>Item 2</li>";
pub const DEFAULT_IMAGE_ALT: &str = "generated image";
pub const DEFAULT_INPUT_PLACEHOLDER: &str = "Enter text...";
pub const DEFAULT_TEXTAREA_PLACEHOLDER: &str = "Type here...";
pub const DEFAULT_KEY_COMBO: &str = "Ctrl + K";
pub const TEXTAREA_ROWS: u32 = 4;

// Sizing for form controls
pub const FORM_MIN_HEIGHT: &str = "38px";
pub const FORM_MIN_WIDTH: &str = "150px";
pub const TEXTAREA_WIDTH: &str = "calc(100% - 32px)";

/// Leaf element kinds the parser can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Div,
    Button,
    H1,
    H2,
    H3,
    P,
    Input,
    Textarea,
    Img,
    A,
    Kbd,
    Li,
    Ul,
    Span,
}

impl ElementKind {
    pub fn tag_name(self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Button => "button",
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::P => "p",
            Self::Input => "input",
            Self::Textarea => "textarea",
            Self::Img => "img",
            Self::A => "a",
            Self::Kbd => "kbd",
            Self::Li => "li",
            Self::Ul => "ul",
            Self::Span => "span",
        }
    }

    pub fn display_mode(self) -> DisplayMode {
        match self {
            Self::Div | Self::P | Self::H1 | Self::H2 | Self::H3 | Self::Ul | Self::Li | Self::Textarea => {
                DisplayMode::Block
            }
            Self::Button | Self::Input | Self::Img | Self::Span | Self::A | Self::Kbd => {
                DisplayMode::InlineBlock
            }
        }
    }

    /// Caption used when the description names no text.
    pub fn default_caption(self) -> Option<&'static str> {
        match self {
            Self::Button => Some("Click Me"),
            Self::H1 | Self::H2 | Self::H3 => Some("Page Heading"),
            Self::P => Some("This is a paragraph of text."),
            Self::A => Some("Learn More"),
            Self::Kbd => Some(DEFAULT_KEY_COMBO),
            Self::Textarea => Some("Enter your message here..."),
            Self::Span => Some("Highlighted Text"),
            Self::Div => Some("Generic Div Content"),
            Self::Input | Self::Img | Self::Li | Self::Ul => None,
        }
    }

    /// Kinds where a bare color mention paints the background.
    pub fn takes_generic_background(self) -> bool {
        matches!(
            self,
            Self::Button | Self::Div | Self::P | Self::H1 | Self::H2 | Self::H3 | Self::Ul | Self::Li | Self::Textarea
        )
    }

    /// Kinds where a bare color mention paints the text.
    pub fn takes_generic_text_color(self) -> bool {
        matches!(
            self,
            Self::H1 | Self::H2 | Self::H3 | Self::P | Self::A | Self::Span | Self::Kbd
        )
    }

    /// Form controls get a minimum size so an empty one stays visible.
    pub fn is_form_control(self) -> bool {
        matches!(self, Self::Input | Self::Textarea)
    }
}

impl Default for ElementKind {
    fn default() -> Self {
        Self::Div
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Block,
    InlineBlock,
}

impl DisplayMode {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::InlineBlock => "inline-block",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputVariant {
    #[default]
    Text,
    Password,
    Email,
    Number,
    Date,
}

impl InputVariant {
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Email => "email",
            Self::Number => "number",
            Self::Date => "date",
        }
    }
}

/// A style value as produced by the parser: either a theme token, literal CSS text,
/// or a space-separated shorthand of either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleValue {
    Token(ThemeToken),
    Literal(String),
    Shorthand(Vec<StyleValue>),
}

impl StyleValue {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }
}

impl From<ThemeToken> for StyleValue {
    fn from(token: ThemeToken) -> Self {
        Self::Token(token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Solid,
    Dashed,
    Dotted,
}

impl BorderStyle {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "solid" => Some(Self::Solid),
            "dashed" => Some(Self::Dashed),
            "dotted" => Some(Self::Dotted),
            _ => None,
        }
    }

    pub fn as_css(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Border {
    /// Width including its unit, e.g. `2px`
    pub width: String,
    pub style: BorderStyle,
    pub color: StyleValue,
}

impl Border {
    pub fn new(width: impl Into<String>, style: BorderStyle, color: impl Into<StyleValue>) -> Self {
        Self {
            width: width.into(),
            style,
            color: color.into(),
        }
    }
}

/// Everything the parser learned about the described element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyRecord {
    pub element_kind: ElementKind,
    pub text_content: String,
    pub background_color: StyleValue,
    pub text_color: StyleValue,
    pub font_size: StyleValue,
    pub corner_radius: StyleValue,
    pub alignment: Alignment,
    pub padding: StyleValue,
    pub margin: StyleValue,
    pub border: Option<Border>,
    pub shadow: Option<StyleValue>,
    pub image_source: String,
    pub input_variant: InputVariant,
    pub link_target: String,
}

impl Default for PropertyRecord {
    fn default() -> Self {
        Self {
            element_kind: ElementKind::Div,
            text_content: String::new(),
            background_color: ThemeToken::ColorBackgroundMedium.into(),
            text_color: ThemeToken::ColorTextDark.into(),
            font_size: ThemeToken::FontSizeBase.into(),
            corner_radius: ThemeToken::BorderRadiusMd.into(),
            alignment: Alignment::Left,
            padding: StyleValue::Shorthand(vec![
                ThemeToken::SpaceSm.into(),
                ThemeToken::SpaceMd.into(),
            ]),
            margin: StyleValue::Shorthand(vec![
                ThemeToken::SpaceMd.into(),
                StyleValue::literal("0"),
            ]),
            border: None,
            shadow: None,
            image_source: String::new(),
            input_variant: InputVariant::Text,
            link_target: DEFAULT_LINK_TARGET.to_string(),
        }
    }
}

/// Output of the markup renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedElement {
    pub markup: String,
    pub style: String,
}

impl RenderedElement {
    /// Markup followed by the stylesheet text, as shown in the code display.
    pub fn code_listing(&self) -> String {
        format!("{}\n\n/* CSS Styles */\n{}", self.markup, self.style)
    }

    /// The code listing made safe to embed as readable text.
    pub fn escaped_listing(&self) -> String {
        crate::utils::escape_html(&self.code_listing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record() {
        let record = PropertyRecord::default();
        assert_eq!(record.element_kind, ElementKind::Div);
        assert_eq!(record.alignment, Alignment::Left);
        assert_eq!(record.input_variant, InputVariant::Text);
        assert_eq!(record.link_target, "#");
        assert!(record.border.is_none());
        assert!(record.shadow.is_none());
        assert!(record.text_content.is_empty());
    }

    #[test]
    fn test_tag_names_match_display_and_serde() {
        for kind in [ElementKind::Div, ElementKind::H2, ElementKind::Textarea, ElementKind::Kbd] {
            assert_eq!(kind.to_string(), kind.tag_name());
            assert_eq!(serde_json::to_value(kind).unwrap(), kind.tag_name());
        }
    }

    #[test]
    fn test_display_modes() {
        assert_eq!(ElementKind::Textarea.display_mode(), DisplayMode::Block);
        assert_eq!(ElementKind::Kbd.display_mode(), DisplayMode::InlineBlock);
        assert_eq!(ElementKind::H2.display_mode().as_css(), "block");
    }

    #[test]
    fn test_default_captions() {
        assert_eq!(ElementKind::H3.default_caption(), Some("Page Heading"));
        assert_eq!(ElementKind::Img.default_caption(), None);
        assert_eq!(ElementKind::Ul.default_caption(), None);
    }

    #[test]
    fn test_record_serializes_tokens_by_name() {
        let json = serde_json::to_value(PropertyRecord::default()).unwrap();
        assert_eq!(json["element_kind"], "div");
        assert_eq!(json["background_color"]["token"], "color-background-medium");
        assert!(json["border"].is_null());
    }

    #[test]
    fn test_code_listing_layout() {
        let rendered = RenderedElement {
            markup: "<p>x</p>".to_string(),
            style: "color: red;".to_string(),
        };
        assert_eq!(rendered.code_listing(), "<p>x</p>\n\n/* CSS Styles */\ncolor: red;");
        assert!(rendered.escaped_listing().starts_with("&lt;p&gt;"));
    }
}
