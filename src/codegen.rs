//! HTML and CSS generation from a parsed property record

use crate::theme::Theme;
use crate::types::*;

/// A single CSS declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
}

impl Declaration {
    fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }

    pub fn to_css(&self) -> String {
        format!("{}: {};", self.property, self.value)
    }
}

pub struct MarkupRenderer {
    theme: Theme,
}

impl MarkupRenderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Renders the element markup and its stylesheet text. Never fails; text content
    /// is emitted as-is.
    pub fn render(&self, record: &PropertyRecord) -> RenderedElement {
        let declarations = self.declarations(record);

        let style = declarations
            .iter()
            .map(Declaration::to_css)
            .collect::<Vec<_>>()
            .join("\n");
        let inline_style = declarations
            .iter()
            .map(Declaration::to_css)
            .collect::<Vec<_>>()
            .join(" ");

        let markup = self.markup(record, &inline_style);
        log::debug!(
            "Rendered <{}>: {} declarations, {} bytes of markup",
            record.element_kind,
            declarations.len(),
            markup.len()
        );

        RenderedElement { markup, style }
    }

    /// Style declarations in output order.
    pub fn declarations(&self, record: &PropertyRecord) -> Vec<Declaration> {
        let kind = record.element_kind;
        let mut declarations = vec![
            Declaration::new("background-color", self.theme.resolve_value(&record.background_color)),
            Declaration::new("color", self.theme.resolve_value(&record.text_color)),
            Declaration::new("font-size", self.theme.resolve_value(&record.font_size)),
            Declaration::new("border-radius", self.theme.resolve_value(&record.corner_radius)),
            Declaration::new("padding", self.theme.resolve_value(&record.padding)),
            Declaration::new("margin", self.theme.resolve_value(&record.margin)),
            Declaration::new("text-align", record.alignment.as_css()),
        ];

        if let Some(shadow) = &record.shadow {
            declarations.push(Declaration::new("box-shadow", self.theme.resolve_value(shadow)));
        }

        let border = match &record.border {
            Some(border) => format!(
                "{} {} {}",
                border.width,
                border.style.as_css(),
                self.theme.resolve_value(&border.color)
            ),
            None => "none".to_string(),
        };
        declarations.push(Declaration::new("border", border));
        declarations.push(Declaration::new("display", kind.display_mode().as_css()));
        declarations.push(Declaration::new("box-sizing", "border-box"));

        if kind.is_form_control() {
            declarations.push(Declaration::new("min-height", FORM_MIN_HEIGHT));
            declarations.push(Declaration::new("min-width", FORM_MIN_WIDTH));
        }
        if kind == ElementKind::Textarea {
            declarations.push(Declaration::new("width", TEXTAREA_WIDTH));
        }
        declarations.push(Declaration::new("vertical-align", "top"));

        declarations
    }

    fn markup(&self, record: &PropertyRecord, style: &str) -> String {
        let content = record.text_content.as_str();

        match record.element_kind {
            ElementKind::Img => {
                let src = if record.image_source.is_empty() {
                    PLACEHOLDER_IMAGE_URL
                } else {
                    record.image_source.as_str()
                };
                format!(
                    r#"<img src="{}" alt="{}" style="{}">"#,
                    src,
                    or_default(content, DEFAULT_IMAGE_ALT),
                    style
                )
            }
            ElementKind::Input => format!(
                r#"<input type="{}" placeholder="{}" value="{}" style="{}">"#,
                record.input_variant.as_attr(),
                or_default(content, DEFAULT_INPUT_PLACEHOLDER),
                content,
                style
            ),
            ElementKind::Textarea => format!(
                r#"<textarea rows="{}" placeholder="{}" style="{}">{}</textarea>"#,
                TEXTAREA_ROWS,
                or_default(content, DEFAULT_TEXTAREA_PLACEHOLDER),
                style,
                content
            ),
            ElementKind::A => {
                let href = if record.link_target.is_empty() {
                    DEFAULT_LINK_TARGET
                } else {
                    record.link_target.as_str()
                };
                format!(r#"<a href="{}" style="{}">{}</a>"#, href, style, content)
            }
            ElementKind::Kbd => format!(
                r#"<kbd style="{}">{}</kbd>"#,
                style,
                or_default(content, DEFAULT_KEY_COMBO)
            ),
            kind => {
                let tag = kind.tag_name();
                format!(r#"<{tag} style="{style}">{content}</{tag}>"#)
            }
        }
    }
}

fn or_default<'a>(content: &'a str, fallback: &'a str) -> &'a str {
    if content.is_empty() {
        fallback
    } else {
        content
    }
}

impl Default for MarkupRenderer {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeToken;

    fn record(kind: ElementKind) -> PropertyRecord {
        PropertyRecord {
            element_kind: kind,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_declarations() {
        let rendered = MarkupRenderer::default().render(&record(ElementKind::Div));
        let expected = "\
background-color: var(--color-background-medium);
color: var(--color-text-dark);
font-size: var(--font-size-base);
border-radius: var(--border-radius-md);
padding: var(--space-sm) var(--space-md);
margin: var(--space-md) 0;
text-align: left;
border: none;
display: block;
box-sizing: border-box;
vertical-align: top;";
        assert_eq!(rendered.style, expected);
        assert!(rendered.markup.starts_with(r#"<div style="background-color: var(--color-background-medium); color:"#));
        assert!(rendered.markup.ends_with("></div>"));
    }

    #[test]
    fn test_shadow_and_border() {
        let mut rec = record(ElementKind::Button);
        rec.shadow = Some(StyleValue::Token(ThemeToken::ShadowLg));
        rec.border = Some(Border::new("2px", BorderStyle::Dotted, StyleValue::literal("#333")));
        let rendered = MarkupRenderer::default().render(&rec);
        assert!(rendered.style.contains("box-shadow: var(--shadow-lg);"));
        assert!(rendered.style.contains("border: 2px dotted #333;"));
        assert!(rendered.style.contains("display: inline-block;"));
    }

    #[test]
    fn test_form_control_sizing() {
        let renderer = MarkupRenderer::default();
        let input = renderer.render(&record(ElementKind::Input)).style;
        assert!(input.contains("min-height: 38px;"));
        assert!(input.contains("min-width: 150px;"));
        assert!(!input.contains("width: calc"));

        let textarea = renderer.render(&record(ElementKind::Textarea)).style;
        assert!(textarea.contains("width: calc(100% - 32px);"));

        let div = renderer.render(&record(ElementKind::Div)).style;
        assert!(!div.contains("min-height"));
    }

    #[test]
    fn test_image_markup() {
        let mut rec = record(ElementKind::Img);
        rec.image_source = "foo.png".to_string();
        let markup = MarkupRenderer::default().render(&rec).markup;
        assert!(markup.starts_with(r#"<img src="foo.png" alt="generated image" style=""#));

        let markup = MarkupRenderer::default().render(&record(ElementKind::Img)).markup;
        assert!(markup.contains(PLACEHOLDER_IMAGE_URL));
    }

    #[test]
    fn test_input_markup() {
        let mut rec = record(ElementKind::Input);
        rec.input_variant = InputVariant::Email;
        let markup = MarkupRenderer::default().render(&rec).markup;
        assert!(markup.starts_with(r#"<input type="email" placeholder="Enter text..." value="" style=""#));

        rec.text_content = "you@example.com".to_string();
        let markup = MarkupRenderer::default().render(&rec).markup;
        assert!(markup.contains(r#"placeholder="you@example.com" value="you@example.com""#));
    }

    #[test]
    fn test_textarea_link_and_kbd_markup() {
        let renderer = MarkupRenderer::default();

        let mut rec = record(ElementKind::Textarea);
        rec.text_content = "Hello".to_string();
        let markup = renderer.render(&rec).markup;
        assert!(markup.starts_with(r#"<textarea rows="4" placeholder="Hello" style=""#));
        assert!(markup.ends_with(">Hello</textarea>"));

        let mut rec = record(ElementKind::A);
        rec.link_target = "https://example.com".to_string();
        rec.text_content = "Docs".to_string();
        let markup = renderer.render(&rec).markup;
        assert!(markup.starts_with(r#"<a href="https://example.com" style=""#));
        assert!(markup.ends_with(">Docs</a>"));

        let markup = renderer.render(&record(ElementKind::Kbd)).markup;
        assert!(markup.ends_with(">Ctrl + K</kbd>"));
    }

    #[test]
    fn test_content_is_not_escaped() {
        let mut rec = record(ElementKind::Ul);
        rec.text_content = LIST_PLACEHOLDER_ITEMS.to_string();
        let markup = MarkupRenderer::default().render(&rec).markup;
        assert!(markup.ends_with("><li>Item 1</li><li>Item 2</li></ul>"));
    }

    #[test]
    fn test_concrete_theme() {
        let rendered = MarkupRenderer::new(Theme::light()).render(&record(ElementKind::P));
        assert!(rendered.style.contains("background-color: #E9ECEF;"));
        assert!(rendered.style.contains("padding: 8px 16px;"));
        assert!(!rendered.style.contains("var("));
    }
}
