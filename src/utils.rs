//! Utility functions for the Sketch compiler

/// Escapes markup so it can be shown as readable source text.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Exact inverse of [`escape_html`].
pub fn unescape_html(text: &str) -> String {
    text.replace("&#039;", "'")
        .replace("&quot;", "\"")
        .replace("&gt;", ">")
        .replace("&lt;", "<")
        .replace("&amp;", "&")
}

/// True when the description has nothing to parse.
pub fn is_blank(description: &str) -> bool {
    description.trim().is_empty()
}

/// Checks whether `phrase` occurs in `haystack` as whole words, i.e. not glued to
/// letters or digits on either side. "red" is found in "a red box" but not in "bordered".
pub fn contains_word(haystack: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }
    haystack.match_indices(phrase).any(|(start, matched)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + matched.len()..].chars().next();
        !before.map_or(false, char::is_alphanumeric) && !after.map_or(false, char::is_alphanumeric)
    })
}

/// Splits a description file into `(line number, description)` pairs.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn split_descriptions(content: &str) -> Vec<(usize, String)> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Some((index + 1, trimmed.to_string()))
            }
        })
        .collect()
}

/// Shortens a description for log and summary lines.
pub fn abbreviate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut shortened: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    shortened.push_str("...");
    shortened
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r##"<a href="#">Tom & 'Jerry'</a>"##),
            "&lt;a href=&quot;#&quot;&gt;Tom &amp; &#039;Jerry&#039;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_unescape_reverses_escape() {
        let samples = [
            "<button style=\"color: red;\">Click Me</button>",
            "&amp; already escaped &lt;",
            "it's \"quoted\" & <tagged>",
            "",
        ];
        for sample in samples {
            assert_eq!(unescape_html(&escape_html(sample)), sample, "Failed for: '{}'", sample);
        }
    }

    #[test]
    fn test_contains_word() {
        assert!(contains_word("a red box", "red"));
        assert!(contains_word("red", "red"));
        assert!(contains_word("light blue, please", "light blue"));
        assert!(!contains_word("a bordered div", "red"));
        assert!(!contains_word("centered heading", "red"));
        assert!(!contains_word("a light div", "li"));
        assert!(contains_word("an li element", "li"));
        assert!(!contains_word("anything", ""));
    }

    #[test]
    fn test_split_descriptions() {
        let content = "# header\nblue button\n\n  red heading  \n#skip\n";
        let split = split_descriptions(content);
        assert_eq!(split, vec![(2, "blue button".to_string()), (4, "red heading".to_string())]);
    }

    #[test]
    fn test_is_blank_and_abbreviate() {
        assert!(is_blank("   \n\t"));
        assert!(!is_blank(" x "));
        assert_eq!(abbreviate("short", 10), "short");
        assert_eq!(abbreviate("a rather long description", 10), "a rathe...");
    }
}
