//! Heuristic parser turning a plain-language description into a [`PropertyRecord`]
//!
//! The description is scanned by a series of independent passes, each owning one
//! category of the record. Every pass is an ordered rule table where the first
//! matching rule wins; later rules never override an earlier winner.

use crate::theme::ThemeToken;
use crate::types::*;
use crate::utils::contains_word;
use regex::{Captures, Regex};

/// Keywords this short are only recognised as whole words, optionally plural
/// ("li" must not fire on "light", "btn" still fires on "btns").
const SHORT_KEYWORD_LEN: usize = 3;

/// Words that end an unquoted text run.
const CONNECTOR_WORDS: &[&str] = &["with", "and", "a", "an", "the"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KindRule {
    Button,
    Heading,
    Paragraph,
    Input,
    Textarea,
    Image,
    Link,
    Keyboard,
    ListItem,
    List,
    Span,
}

/// Kind detection, in priority order.
const KIND_RULES: &[(&[&str], KindRule)] = &[
    (&["button", "btn"], KindRule::Button),
    (&["heading", "h1", "h2", "h3", "title"], KindRule::Heading),
    (&["paragraph", "p tag", "text block", "body text"], KindRule::Paragraph),
    (&["input", "text field", "text box"], KindRule::Input),
    (&["textarea", "multi-line text input", "long text box"], KindRule::Textarea),
    (&["image", "img", "picture"], KindRule::Image),
    (&["link", "a tag", "hyperlink"], KindRule::Link),
    (&["keyboard", "kbd", "key"], KindRule::Keyboard),
    (&["list item", "li"], KindRule::ListItem),
    (&["list", "ul"], KindRule::List),
    (&["span", "inline text", "highlight"], KindRule::Span),
];

const HEADING_LEVELS: &[(&str, ElementKind)] = &[
    ("h1", ElementKind::H1),
    ("h2", ElementKind::H2),
    ("h3", ElementKind::H3),
];

const INPUT_VARIANTS: &[(&str, InputVariant)] = &[
    ("password input", InputVariant::Password),
    ("email input", InputVariant::Email),
    ("number input", InputVariant::Number),
    ("date input", InputVariant::Date),
];

/// Color names; two-word phrases come before the single words they contain.
pub const COLOR_TABLE: &[(&str, ThemeToken)] = &[
    ("light blue", ThemeToken::ColorPrimary),
    ("dark blue", ThemeToken::ColorPrimaryDark),
    ("dark green", ThemeToken::ColorCodeTextDark),
    ("dark red", ThemeToken::ColorDarkRed),
    ("light grey", ThemeToken::ColorSecondaryLight),
    ("dark grey", ThemeToken::ColorSecondaryDark),
    ("blue", ThemeToken::ColorPrimary),
    ("green", ThemeToken::ColorCodeText),
    ("red", ThemeToken::ColorRed),
    ("purple", ThemeToken::ColorPurple),
    ("orange", ThemeToken::ColorOrange),
    ("yellow", ThemeToken::ColorYellow),
    ("white", ThemeToken::ColorTextLight),
    ("black", ThemeToken::ColorTextDark),
    ("grey", ThemeToken::ColorSecondary),
    ("gray", ThemeToken::ColorSecondary),
];

const SHAPE_TABLE: &[(&str, Shape)] = &[
    ("rounded", Shape::Token(ThemeToken::BorderRadiusMd)),
    ("circular", Shape::Literal("50%")),
    ("circle", Shape::Literal("50%")),
    ("pill", Shape::Token(ThemeToken::BorderRadiusFull)),
    ("oval", Shape::Token(ThemeToken::BorderRadiusFull)),
    ("square", Shape::Literal("0")),
    ("sharp corners", Shape::Literal("0")),
];

/// Spacing sizes; "extra large" first so "large" cannot shadow it.
const SPACING_TABLE: &[(&str, ThemeToken)] = &[
    ("extra large", ThemeToken::SpaceXl),
    ("small", ThemeToken::SpaceSm),
    ("medium", ThemeToken::SpaceMd),
    ("large", ThemeToken::SpaceLg),
];

#[derive(Debug, Clone, Copy)]
enum Shape {
    Token(ThemeToken),
    Literal(&'static str),
}

impl Shape {
    fn to_value(self) -> StyleValue {
        match self {
            Shape::Token(token) => StyleValue::Token(token),
            Shape::Literal(text) => StyleValue::literal(text),
        }
    }
}

/// The description in both its original and lowercased form.
struct Description<'a> {
    original: &'a str,
    lower: String,
}

impl<'a> Description<'a> {
    fn new(original: &'a str) -> Self {
        Self {
            original,
            lower: original.to_lowercase(),
        }
    }

    /// Keyword test used by kind detection.
    fn mentions(&self, keyword: &str) -> bool {
        if keyword.len() <= SHORT_KEYWORD_LEN {
            contains_word(&self.lower, keyword) || contains_word(&self.lower, &format!("{}s", keyword))
        } else {
            self.lower.contains(keyword)
        }
    }

    fn mentions_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|keyword| self.mentions(keyword))
    }

    fn contains(&self, phrase: &str) -> bool {
        self.lower.contains(phrase)
    }
}

/// Description parser holding its compiled patterns; reuse it across calls.
pub struct DescriptionParser {
    src_regex: Regex,
    href_regex: Regex,
    quoted_text_regex: Regex,
    unquoted_text_regex: Regex,
    font_size_regex: Regex,
    named_font_size_regex: Regex,
    radius_regex: Regex,
    border_regex: Regex,
    padding_regex: Regex,
    margin_regex: Regex,
}

impl DescriptionParser {
    pub fn new() -> Self {
        Self {
            src_regex: Regex::new(r#"(?i)\bsrc\s*(?:'([^']*)'|"([^"]*)")"#).unwrap(),
            href_regex: Regex::new(r#"(?i)\bhref\s*(?:'([^']*)'|"([^"]*)")"#).unwrap(),
            quoted_text_regex: Regex::new(
                r#"(?i)\b(?:text|content|value|label)\s*(?:is\s*)?(?:'([^']*)'|"([^"]*)")"#,
            )
            .unwrap(),
            unquoted_text_regex: Regex::new(
                r"(?i)\b(?:text|content|value|label)\s+(?:is\s+)?([\w\s.-]+)",
            )
            .unwrap(),
            font_size_regex: Regex::new(
                r"(?i)\b(\d+)(px|rem)?\s+font\s+size\b|\bfont\s+size\s+(\d+)(px|rem)?\b",
            )
            .unwrap(),
            named_font_size_regex: Regex::new(
                r"(?i)\b(extra\s+large|small|medium|large|xl|huge)\s+(?:font|text)\b",
            )
            .unwrap(),
            radius_regex: Regex::new(r"(?i)\b(\d+)px\s+rounded\b|\bborder\s+radius\s+(\d+)px\b").unwrap(),
            border_regex: Regex::new(
                r"(?i)\b(\d+)(?:px)?\s+(solid|dashed|dotted)\s+([a-z0-9#]+)\s+border\b",
            )
            .unwrap(),
            padding_regex: Regex::new(r"(?i)\bpadding\s+(\d+px(?:\s+\d+px){0,3})").unwrap(),
            margin_regex: Regex::new(r"(?i)\bmargin\s+(\d+px(?:\s+\d+px){0,3})").unwrap(),
        }
    }

    /// Parses a description into a fully populated record. Never fails; an empty or
    /// meaningless description yields the default record.
    pub fn parse(&self, description: &str) -> PropertyRecord {
        let desc = Description::new(description);
        let mut record = PropertyRecord::default();

        // Kind first: the color and caption passes depend on it
        self.detect_kind(&desc, &mut record);
        self.extract_text_content(&desc, &mut record);
        self.resolve_colors(&desc, &mut record);
        self.resolve_font_size(&desc, &mut record);
        self.resolve_corner_radius(&desc, &mut record);
        self.resolve_shadow(&desc, &mut record);
        self.resolve_alignment(&desc, &mut record);
        self.resolve_border(&desc, &mut record);
        self.resolve_spacing(&desc, &mut record);

        log::debug!("Parsed '{}' as <{}>", description, record.element_kind);
        record
    }

    fn detect_kind(&self, desc: &Description, record: &mut PropertyRecord) {
        let Some(rule) = KIND_RULES
            .iter()
            .find(|(keywords, _)| desc.mentions_any(keywords))
            .map(|(_, rule)| *rule)
        else {
            return;
        };

        record.element_kind = match rule {
            KindRule::Button => ElementKind::Button,
            KindRule::Heading => HEADING_LEVELS
                .iter()
                .find(|(keyword, _)| desc.mentions(keyword))
                .map_or(ElementKind::H1, |(_, kind)| *kind),
            KindRule::Paragraph => ElementKind::P,
            KindRule::Input => {
                if let Some((_, variant)) = INPUT_VARIANTS.iter().find(|(phrase, _)| desc.contains(phrase)) {
                    record.input_variant = *variant;
                }
                ElementKind::Input
            }
            KindRule::Textarea => ElementKind::Textarea,
            KindRule::Image => {
                record.image_source = quoted_attribute(&self.src_regex, desc.original)
                    .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string());
                ElementKind::Img
            }
            KindRule::Link => {
                if let Some(target) = quoted_attribute(&self.href_regex, desc.original) {
                    record.link_target = target;
                }
                ElementKind::A
            }
            KindRule::Keyboard => ElementKind::Kbd,
            KindRule::ListItem => ElementKind::Li,
            KindRule::List => {
                if !desc.contains("empty") {
                    record.text_content = LIST_PLACEHOLDER_ITEMS.to_string();
                }
                ElementKind::Ul
            }
            KindRule::Span => ElementKind::Span,
        };
        log::trace!("Kind rule {:?} matched", rule);
    }

    fn extract_text_content(&self, desc: &Description, record: &mut PropertyRecord) {
        let extracted = self
            .quoted_text_regex
            .captures(desc.original)
            .and_then(|caps| first_group(&caps, &[1, 2]))
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .or_else(|| {
                self.unquoted_text_regex
                    .captures_iter(desc.original)
                    .filter_map(|caps| caps.get(1).map(|m| cut_at_connector(m.as_str())))
                    .find(|text| !text.is_empty())
            });

        if let Some(text) = extracted {
            log::trace!("Text content: '{}'", text);
            record.text_content = text;
        }

        if record.text_content.is_empty() {
            if let Some(caption) = record.element_kind.default_caption() {
                record.text_content = caption.to_string();
            }
        }
    }

    fn resolve_colors(&self, desc: &Description, record: &mut PropertyRecord) {
        let lower = desc.lower.as_str();

        let explicit_background = COLOR_TABLE
            .iter()
            .find(|(name, _)| contains_word(lower, &format!("{} background", name)));
        let explicit_text = COLOR_TABLE
            .iter()
            .find(|(name, _)| contains_word(lower, &format!("{} text", name)));

        if let Some((name, token)) = explicit_background {
            log::trace!("Background color '{}' (explicit)", name);
            record.background_color = StyleValue::Token(*token);
        }
        if let Some((name, token)) = explicit_text {
            log::trace!("Text color '{}' (explicit)", name);
            record.text_color = StyleValue::Token(*token);
        }

        if explicit_background.is_none() {
            let generic = COLOR_TABLE.iter().find(|(name, _)| {
                contains_word(lower, name) && !contains_word(lower, &format!("{} text", name))
            });
            if let Some((name, token)) = generic {
                if record.element_kind.takes_generic_background() {
                    log::trace!("Background color '{}' (from <{}>)", name, record.element_kind);
                    record.background_color = StyleValue::Token(*token);
                }
            }
        }

        if explicit_text.is_none() {
            let generic = COLOR_TABLE.iter().find(|(name, _)| {
                contains_word(lower, name) && !contains_word(lower, &format!("{} background", name))
            });
            if let Some((name, token)) = generic {
                if record.element_kind.takes_generic_text_color() {
                    log::trace!("Text color '{}' (from <{}>)", name, record.element_kind);
                    record.text_color = StyleValue::Token(*token);
                }
            }
        }
    }

    fn resolve_font_size(&self, desc: &Description, record: &mut PropertyRecord) {
        if let Some(caps) = self.font_size_regex.captures(desc.original) {
            let amount = first_group(&caps, &[1, 3]).unwrap_or_default();
            let unit = first_group(&caps, &[2, 4])
                .map(|unit| unit.to_ascii_lowercase())
                .unwrap_or_else(|| "px".to_string());
            record.font_size = StyleValue::literal(format!("{}{}", amount, unit));
            return;
        }

        if let Some(caps) = self.named_font_size_regex.captures(&desc.lower) {
            let name = normalize_spaces(&caps[1]);
            record.font_size = match name.as_str() {
                "small" => StyleValue::literal("14px"),
                "medium" => StyleValue::Token(ThemeToken::FontSizeBase),
                "large" => StyleValue::literal("20px"),
                "extra large" | "xl" => StyleValue::literal("24px"),
                "huge" => StyleValue::literal("32px"),
                _ => return,
            };
        }
    }

    fn resolve_corner_radius(&self, desc: &Description, record: &mut PropertyRecord) {
        if let Some(caps) = self.radius_regex.captures(desc.original) {
            if let Some(amount) = first_group(&caps, &[1, 2]) {
                record.corner_radius = StyleValue::literal(format!("{}px", amount));
                return;
            }
        }

        if let Some((_, shape)) = SHAPE_TABLE.iter().find(|(keyword, _)| desc.contains(keyword)) {
            record.corner_radius = shape.to_value();
        }
    }

    fn resolve_shadow(&self, desc: &Description, record: &mut PropertyRecord) {
        if desc.contains("strong shadow") {
            record.shadow = Some(StyleValue::Token(ThemeToken::ShadowLg));
        } else if desc.contains("shadow") || desc.contains("elevated") {
            record.shadow = Some(StyleValue::Token(ThemeToken::ShadowMd));
        } else if desc.contains("no shadow") {
            record.shadow = None;
        }
    }

    fn resolve_alignment(&self, desc: &Description, record: &mut PropertyRecord) {
        if desc.contains("centered") || desc.contains("center aligned") {
            record.alignment = Alignment::Center;
        } else if desc.contains("right aligned") {
            record.alignment = Alignment::Right;
        } else if desc.contains("left aligned") {
            record.alignment = Alignment::Left;
        }
    }

    fn resolve_border(&self, desc: &Description, record: &mut PropertyRecord) {
        if let Some(caps) = self.border_regex.captures(desc.original) {
            if let Some(style) = BorderStyle::from_name(&caps[2]) {
                record.border = Some(Border::new(
                    format!("{}px", &caps[1]),
                    style,
                    StyleValue::literal(&caps[3]),
                ));
                return;
            }
        }

        if desc.contains("with border") || desc.contains("bordered") {
            record.border = Some(Border::new("1px", BorderStyle::Solid, ThemeToken::ColorBorder));
        } else if desc.contains("dashed border") {
            record.border = Some(Border::new("1px", BorderStyle::Dashed, ThemeToken::ColorBorder));
        } else if desc.contains("thick border") {
            record.border = Some(Border::new("2px", BorderStyle::Solid, ThemeToken::ColorTextDark));
        } else if desc.contains("no border") {
            record.border = None;
        }
    }

    fn resolve_spacing(&self, desc: &Description, record: &mut PropertyRecord) {
        if let Some(value) = explicit_lengths(&self.padding_regex, desc.original) {
            record.padding = value;
        } else if let Some(token) = named_spacing(desc, "padding") {
            record.padding = StyleValue::Token(token);
        }

        if let Some(value) = explicit_lengths(&self.margin_regex, desc.original) {
            record.margin = value;
        } else if desc.contains("no margin") || desc.contains("margin 0") {
            record.margin = StyleValue::literal("0");
        } else if let Some(token) = named_spacing(desc, "margin") {
            record.margin = StyleValue::Token(token);
        }
    }
}

impl Default for DescriptionParser {
    fn default() -> Self {
        Self::new()
    }
}

/// First non-empty capture group among `groups`.
fn first_group<'t>(caps: &Captures<'t>, groups: &[usize]) -> Option<&'t str> {
    groups
        .iter()
        .filter_map(|&index| caps.get(index))
        .map(|m| m.as_str())
        .find(|text| !text.is_empty())
}

/// Value of a quoted `name '...'` attribute phrase; empty values count as absent.
fn quoted_attribute(regex: &Regex, text: &str) -> Option<String> {
    regex
        .captures(text)
        .and_then(|caps| first_group(&caps, &[1, 2]).map(str::to_string))
}

/// Keeps the words of an unquoted text run up to the first connector word.
fn cut_at_connector(run: &str) -> String {
    run.split_whitespace()
        .take_while(|word| !CONNECTOR_WORDS.contains(&word.to_lowercase().as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn normalize_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn explicit_lengths(regex: &Regex, text: &str) -> Option<StyleValue> {
    regex
        .captures(text)
        .map(|caps| StyleValue::literal(normalize_spaces(&caps[1]).to_ascii_lowercase()))
}

fn named_spacing(desc: &Description, property: &str) -> Option<ThemeToken> {
    SPACING_TABLE
        .iter()
        .find(|(size, _)| desc.contains(&format!("{} {}", size, property)))
        .map(|(_, token)| *token)
}
