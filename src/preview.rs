//! Standalone HTML preview pages
//!
//! A preview page mounts the generated markup as-is in a preview area and shows the
//! escaped markup plus stylesheet text underneath as copyable source.

use crate::theme::Theme;
use crate::types::RenderedElement;
use crate::utils::escape_html;

pub const PREVIEW_PLACEHOLDER: &str = "Your preview will appear here";
pub const CODE_PLACEHOLDER: &str = "Generated code will appear here";
pub const EMPTY_DESCRIPTION_MESSAGE: &str = "Please enter a description.";

const PAGE_STYLE: &str = "\
body { font-family: system-ui, sans-serif; margin: 0; padding: 32px; background: #F8F9FA; }
.description { color: #6C757D; font-style: italic; }
.preview-area { background: #FFFFFF; border: 1px solid #DEE2E6; border-radius: 8px; padding: 24px; margin-bottom: 24px; }
.code-area pre { background: #212529; color: #F8F9FA; border-radius: 8px; padding: 16px; overflow-x: auto; }
.placeholder-text { color: #ADB5BD; }";

#[derive(Debug, Clone, PartialEq, Eq)]
enum PageContent {
    Element(RenderedElement),
    Message { preview: String, code: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewPage {
    description: String,
    content: PageContent,
    theme: Theme,
}

impl PreviewPage {
    pub fn new(description: impl Into<String>, element: RenderedElement, theme: Theme) -> Self {
        Self {
            description: description.into(),
            content: PageContent::Element(element),
            theme,
        }
    }

    /// Page shown after a reset: nothing generated yet.
    pub fn placeholder() -> Self {
        Self::message(PREVIEW_PLACEHOLDER)
    }

    /// Page shown when the description was blank.
    pub fn empty_description() -> Self {
        Self::message(EMPTY_DESCRIPTION_MESSAGE)
    }

    fn message(preview: &str) -> Self {
        Self {
            description: String::new(),
            content: PageContent::Message {
                preview: preview.to_string(),
                code: CODE_PLACEHOLDER.to_string(),
            },
            theme: Theme::default(),
        }
    }

    /// Full HTML document.
    pub fn to_html(&self) -> String {
        let (preview, code) = match &self.content {
            PageContent::Element(element) => (
                element.markup.clone(),
                format!(
                    "<pre><code>{}</code></pre>",
                    element.escaped_listing()
                ),
            ),
            PageContent::Message { preview, code } => (
                placeholder_paragraph(preview),
                placeholder_paragraph(code),
            ),
        };

        let description = if self.description.is_empty() {
            String::new()
        } else {
            format!(
                "  <p class=\"description\">{}</p>\n",
                escape_html(&self.description)
            )
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title} preview</title>
  <style>
{root}
{page}
  </style>
</head>
<body>
{description}  <div class="preview-area">
{preview}
  </div>
  <div class="code-area">
{code}
  </div>
</body>
</html>
"#,
            title = crate::NAME,
            root = self.theme.root_block(),
            page = PAGE_STYLE,
            description = description,
            preview = preview,
            code = code,
        )
    }
}

fn placeholder_paragraph(text: &str) -> String {
    format!("<p class='placeholder-text'>{}</p>", escape_html(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::unescape_html;

    fn element() -> RenderedElement {
        RenderedElement {
            markup: r#"<button style="color: red;">Click Me</button>"#.to_string(),
            style: "color: red;".to_string(),
        }
    }

    #[test]
    fn test_page_mounts_markup_and_shows_escaped_code() {
        let html = PreviewPage::new("a red button", element(), Theme::variables()).to_html();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<button style="color: red;">Click Me</button>"#));
        assert!(html.contains("<pre><code>&lt;button style=&quot;color: red;&quot;&gt;Click Me&lt;/button&gt;"));
        assert!(html.contains("/* CSS Styles */"));
        assert!(html.contains("--color-primary: #007BFF;"));
        assert!(html.contains("<p class=\"description\">a red button</p>"));
    }

    #[test]
    fn test_escaped_listing_round_trips() {
        let rendered = element();
        assert_eq!(unescape_html(&rendered.escaped_listing()), rendered.code_listing());
    }

    #[test]
    fn test_placeholder_pages() {
        let html = PreviewPage::placeholder().to_html();
        assert!(html.contains(PREVIEW_PLACEHOLDER));
        assert!(html.contains(CODE_PLACEHOLDER));
        assert!(!html.contains("<pre><code>"));

        let html = PreviewPage::empty_description().to_html();
        assert!(html.contains(EMPTY_DESCRIPTION_MESSAGE));
        assert!(!html.contains("class=\"description\""));
    }
}
