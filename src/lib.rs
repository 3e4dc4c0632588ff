//! Sketch UI Description Compiler
//!
//! Turns a plain-language description of a single UI element ("a large blue rounded
//! button with text 'Submit'") into HTML markup plus the matching CSS.
//!
//! # Basic Usage
//!
//! ```rust
//! use sketchc::{generate, Result};
//!
//! fn main() -> Result<()> {
//!     let element = generate("a large blue rounded button with text 'Submit'")?;
//!     assert!(element.markup.starts_with("<button"));
//!     println!("{}", element.code_listing());
//!     Ok(())
//! }
//! ```
//!
//! # Generation Pipeline
//!
//! 1. **Parse**: heuristic passes fill a [`PropertyRecord`] (kind, text, colors, font
//!    size, corner radius, shadow, alignment, border, spacing)
//! 2. **Render**: the record becomes markup and style text, with theme tokens resolved
//!    through a [`Theme`]
//! 3. **Present**: the glue escapes the code listing for display and mounts the raw
//!    markup in a preview page
//!
//! Parsing and rendering never fail. Only the glue (blank input, file and config I/O)
//! returns errors.

pub mod types;
pub mod error;
pub mod utils;
pub mod theme;

pub mod parser;
pub mod codegen;
pub mod preview;
pub mod cli;
use serde::Serialize;

// Re-export commonly used types and functions
pub use error::{Result, SketchError};
pub use types::*;
pub use theme::{Theme, ThemeKind, ThemeToken};
pub use parser::DescriptionParser;
pub use codegen::{Declaration, MarkupRenderer};
pub use preview::PreviewPage;
pub use utils::{escape_html, unescape_html};
pub use cli::EnhancedCli;

/// Generator version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Generation options and settings
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    /// Enable debug mode with extra logging
    pub debug_mode: bool,

    /// Token resolution table used by the renderer
    pub theme: Theme,
}

/// Generation statistics
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationStats {
    /// Description length in bytes
    pub description_length: usize,

    /// Tag of the generated element
    pub element_kind: String,

    /// Number of CSS declarations emitted
    pub declaration_count: usize,

    /// Markup size in bytes
    pub markup_size: usize,

    /// Style text size in bytes
    pub style_size: usize,

    /// Name of the theme used
    pub theme: String,

    /// Generation time in microseconds
    pub generate_time_us: u64,
}

/// Parses a description into its property record.
pub fn parse(description: &str) -> PropertyRecord {
    DescriptionParser::new().parse(description)
}

/// Renders a record with the default `variables` theme.
pub fn render(record: &PropertyRecord) -> RenderedElement {
    MarkupRenderer::default().render(record)
}

/// Renders a record with an explicit theme.
pub fn render_with_theme(record: &PropertyRecord, theme: &Theme) -> RenderedElement {
    MarkupRenderer::new(theme.clone()).render(record)
}

/// Main entry point: parse and render a description with default options
pub fn generate(description: &str) -> Result<RenderedElement> {
    let (element, _stats) = generate_with_options(description, &GeneratorOptions::default())?;
    Ok(element)
}

/// Parse and render with custom options. Blank descriptions are rejected.
pub fn generate_with_options(
    description: &str,
    options: &GeneratorOptions,
) -> Result<(RenderedElement, GenerationStats)> {
    generate_with_parser(&DescriptionParser::new(), description, options)
}

/// Same as [`generate_with_options`], reusing an existing parser.
pub fn generate_with_parser(
    parser: &DescriptionParser,
    description: &str,
    options: &GeneratorOptions,
) -> Result<(RenderedElement, GenerationStats)> {
    use std::time::Instant;

    if utils::is_blank(description) {
        return Err(SketchError::EmptyDescription);
    }

    let start_time = Instant::now();
    let description = description.trim();

    if options.debug_mode {
        log::info!("{} v{}", NAME, VERSION);
        log::debug!("Generator options: {:?}", options);
        log::debug!("Description: '{}'", description);
    }

    let record = parser.parse(description);

    if options.debug_mode {
        log::debug!("Parsed record: {:?}", record);
    }

    let renderer = MarkupRenderer::new(options.theme.clone());
    let declaration_count = renderer.declarations(&record).len();
    let element = renderer.render(&record);

    let stats = GenerationStats {
        description_length: description.len(),
        element_kind: record.element_kind.tag_name().to_string(),
        declaration_count,
        markup_size: element.markup.len(),
        style_size: element.style.len(),
        theme: options.theme.kind().name().to_string(),
        generate_time_us: start_time.elapsed().as_micros() as u64,
    };

    if options.debug_mode {
        log::info!("Generated <{}> in {}us", stats.element_kind, stats.generate_time_us);
        log::debug!("Full stats: {:?}", stats);
    }

    Ok((element, stats))
}

/// Reads a description from `input_path` and writes a preview page to `output_path`
pub fn generate_file(input_path: &str, output_path: &str) -> Result<GenerationStats> {
    generate_file_with_options(input_path, output_path, &GeneratorOptions::default())
}

/// Generate a preview page from a description file with custom options
pub fn generate_file_with_options(
    input_path: &str,
    output_path: &str,
    options: &GeneratorOptions,
) -> Result<GenerationStats> {
    use std::fs;

    let description = fs::read_to_string(input_path).map_err(|e| SketchError::FileNotFound {
        path: format!("{}: {}", input_path, e),
    })?;

    let (element, stats) = generate_with_options(&description, options)?;
    let page = PreviewPage::new(description.trim(), element, options.theme.clone());

    fs::write(output_path, page.to_html())?;

    if options.debug_mode {
        log::info!("Preview written to '{}'", output_path);
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_empty_is_default() {
        let record = parse("");
        assert_eq!(record.element_kind, ElementKind::Div);
        assert_eq!(record.background_color, StyleValue::Token(ThemeToken::ColorBackgroundMedium));
        assert_eq!(record.text_color, StyleValue::Token(ThemeToken::ColorTextDark));
        assert_eq!(record.font_size, StyleValue::Token(ThemeToken::FontSizeBase));
        assert_eq!(record.corner_radius, StyleValue::Token(ThemeToken::BorderRadiusMd));
        assert_eq!(record.padding, PropertyRecord::default().padding);
        assert_eq!(record.margin, PropertyRecord::default().margin);
        assert!(record.border.is_none());
        assert!(record.shadow.is_none());
    }

    #[test]
    fn test_generate_blue_button() {
        let element = generate("a blue button").unwrap();
        assert!(element.markup.starts_with("<button style=\"background-color: var(--color-primary);"));
        assert!(element.markup.ends_with(">Click Me</button>"));
        assert!(element.style.contains("color: var(--color-text-dark);"));
    }

    #[test]
    fn test_generate_rejects_blank_input() {
        assert!(matches!(generate(""), Err(SketchError::EmptyDescription)));
        assert!(matches!(generate("   \n"), Err(SketchError::EmptyDescription)));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let descriptions = [
            "a large blue rounded button with text 'Submit'",
            "image src 'foo.png' with strong shadow",
            "centered h2 heading with text 'Welcome' and red background white text",
            "a password input with 2px dotted #ccc border and padding 4px 8px",
        ];
        for description in descriptions {
            let first = render(&parse(description));
            let second = render(&parse(description));
            assert_eq!(first, second, "Failed for: '{}'", description);
        }
    }

    #[test]
    fn test_image_and_input_markup() {
        let element = render(&parse("image src 'foo.png'"));
        assert!(element.markup.starts_with("<img "));
        assert!(element.markup.contains("foo.png"));

        let element = render(&parse("a number input"));
        assert!(element.markup.contains("type=\"number\""));
    }

    #[test]
    fn test_escaped_listing_unescapes_to_original() {
        let element = generate("a link href \"https://example.com/?a=1&b=2\" with text 'Tom's page'").unwrap();
        assert_eq!(unescape_html(&element.escaped_listing()), element.code_listing());
    }

    #[test]
    fn test_generate_with_theme_and_stats() {
        let options = GeneratorOptions {
            debug_mode: true,
            theme: Theme::light(),
        };
        let (element, stats) = generate_with_options("a red heading", &options).unwrap();
        assert!(element.style.contains("color: #FF4C4C;"));
        assert_eq!(stats.element_kind, "h1");
        assert_eq!(stats.theme, "light");
        assert_eq!(stats.declaration_count, element.style.lines().count());
        assert_eq!(stats.markup_size, element.markup.len());
    }

    #[test]
    fn test_generate_file_writes_preview() {
        let temp_dir = TempDir::new().unwrap();
        let input_path = temp_dir.path().join("button.txt");
        let output_path = temp_dir.path().join("button.html");

        fs::write(&input_path, "a green pill button with text 'Go'\n").unwrap();

        let stats = generate_file(
            input_path.to_str().unwrap(),
            output_path.to_str().unwrap(),
        )
        .unwrap();

        assert_eq!(stats.element_kind, "button");
        let html = fs::read_to_string(&output_path).unwrap();
        assert!(html.contains(">Go</button>"));
        assert!(html.contains("&gt;Go&lt;/button&gt;"));
    }

    #[test]
    fn test_generate_file_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.txt");
        let output_path = temp_dir.path().join("out.html");

        let result = generate_file(missing.to_str().unwrap(), output_path.to_str().unwrap());
        assert!(matches!(result, Err(SketchError::FileNotFound { .. })));
    }

    #[test]
    fn test_generator_options_default() {
        let options = GeneratorOptions::default();
        assert!(!options.debug_mode);
        assert_eq!(options.theme.kind(), ThemeKind::Variables);
    }
}
