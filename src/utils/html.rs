//! Plain-text to HTML layout conversion and back.
//!
//! Three transforms shared by the template renderers:
//! - `escape_html`: escape the five basic HTML entities
//! - `text_to_html`: lay out multi-line text with `<p>`/`<br/>` markup,
//!   turning blank lines into paragraph boundaries and recognizing
//!   indented paragraphs
//! - `html_to_text`: strip markup back to plain text while keeping
//!   `<br>`/`<p>` positions as line breaks

use std::sync::LazyLock;

use regex::Regex;

/// Regex matching `<br>` variants (`<br>`, `<br/>`, `<br class="x">`, any case).
static BR_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br[^>]*>").unwrap());

/// Regex matching opening `<p>` variants, attributes included, any case.
static P_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<p[^>]*>").unwrap());

/// Regex matching any remaining complete tag.
static ANY_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Stand-in for `<br>`/`<p>` positions so they survive tag stripping.
const LINE_BREAK_TOKEN: &str = "\u{E000}";

/// Leading space run that marks an indented paragraph.
const PARAGRAPH_INDENT: &str = "     ";

/// Escape `& < > " '` for safe embedding in HTML.
///
/// The ampersand is escaped first so already-escaped entities in the input
/// are preserved literally rather than merged.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Convert multi-line plain text to HTML with paragraph and line-break markup.
///
/// Blank lines separate paragraphs: the text after a blank line opens a new
/// `<p>` element, or `<p style="margin-left: 20px;">` when that line starts
/// with a five-space indent. Consecutive non-blank lines are joined with
/// `<br/>`. A trailing newline with no further text yields a single `<br/>`.
///
/// # Examples
///
/// ```
/// use licet::utils::html::text_to_html;
///
/// assert_eq!(text_to_html("line1\n\nline2"), "line1\n<p>line2</p>");
/// ```
pub fn text_to_html(text: &str) -> String {
    // Trailing empty segments are dropped so a final newline does not
    // produce a phantom line; the `ends_with` check below restores it as a
    // single break marker.
    let mut lines: Vec<&str> = text.split('\n').collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let mut result = String::with_capacity(text.len() + text.len() / 4);
    if let Some(first) = lines.first() {
        result.push_str(first);
    }

    let mut in_paragraph = false;
    let mut i = 1;
    while i < lines.len() {
        if lines[i].trim().is_empty() {
            // Paragraph boundary: close the open paragraph and open the
            // next one with the following line.
            if in_paragraph {
                result.push_str("</p>");
            }
            result.push('\n');
            i += 1;
            if i < lines.len() {
                if lines[i].starts_with(PARAGRAPH_INDENT) {
                    result.push_str("<p style=\"margin-left: 20px;\">");
                } else {
                    result.push_str("<p>");
                }
                result.push_str(lines[i]);
            } else {
                result.push_str("<p>");
            }
            in_paragraph = true;
        } else {
            result.push_str("<br/>\n");
            result.push_str(lines[i]);
        }
        i += 1;
    }

    if in_paragraph {
        result.push_str("</p>");
    } else if text.ends_with('\n') {
        result.push_str("<br/>\n");
    }
    result
}

/// Convert HTML back to plain text, preserving line-break positions.
///
/// `<br>` and opening `<p>` tags become newlines; every other complete tag
/// is dropped; the five basic HTML entities are decoded (ampersand last so
/// double-escaped input decodes exactly one level). Never fails: malformed
/// markup degrades to best-effort stripped text.
pub fn html_to_text(html: &str) -> String {
    let mut s = BR_TAG_RE.replace_all(html, LINE_BREAK_TOKEN).into_owned();
    s = P_TAG_RE.replace_all(&s, LINE_BREAK_TOKEN).into_owned();
    s = ANY_TAG_RE.replace_all(&s, "").into_owned();
    s = s
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    s.replace(LINE_BREAK_TOKEN, "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── escape_html ──

    #[test]
    fn test_escape_all_five_entities() {
        assert_eq!(
            escape_html(r#"<a href="x">&'y'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&apos;y&apos;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_ampersand_first() {
        // An already-escaped entity is escaped again, not merged.
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape_html("plain text 123"), "plain text 123");
    }

    // ── text_to_html ──

    #[test]
    fn test_single_line_passthrough() {
        assert_eq!(text_to_html("just one line"), "just one line");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(text_to_html(""), "");
    }

    #[test]
    fn test_blank_line_starts_paragraph() {
        assert_eq!(text_to_html("line1\n\nline2"), "line1\n<p>line2</p>");
    }

    #[test]
    fn test_adjacent_lines_get_breaks() {
        assert_eq!(text_to_html("a\nb\nc"), "a<br/>\nb<br/>\nc");
    }

    #[test]
    fn test_indented_paragraph() {
        assert_eq!(
            text_to_html("intro\n\n     indented"),
            "intro\n<p style=\"margin-left: 20px;\">     indented</p>"
        );
    }

    #[test]
    fn test_four_spaces_is_not_indented() {
        assert_eq!(text_to_html("intro\n\n    four"), "intro\n<p>    four</p>");
    }

    #[test]
    fn test_multiple_paragraphs() {
        assert_eq!(text_to_html("p1\n\np2\n\np3"), "p1\n<p>p2</p>\n<p>p3</p>");
    }

    #[test]
    fn test_break_then_paragraph() {
        assert_eq!(text_to_html("a\nb\n\nc"), "a<br/>\nb\n<p>c</p>");
    }

    #[test]
    fn test_paragraph_then_breaks() {
        assert_eq!(text_to_html("a\n\nb\nc"), "a\n<p>b<br/>\nc</p>");
    }

    #[test]
    fn test_trailing_newline_becomes_break() {
        assert_eq!(text_to_html("a\n"), "a<br/>\n");
    }

    #[test]
    fn test_only_newline() {
        assert_eq!(text_to_html("\n"), "<br/>\n");
    }

    #[test]
    fn test_trailing_blank_lines_collapse_to_one_break() {
        assert_eq!(text_to_html("a\n\n\n"), "a<br/>\n");
    }

    #[test]
    fn test_whitespace_only_final_line_opens_empty_paragraph() {
        assert_eq!(text_to_html("a\n   "), "a\n<p></p>");
    }

    // ── html_to_text ──

    #[test]
    fn test_br_and_p_become_newlines() {
        assert_eq!(html_to_text("a<br/>b<p>c</p>"), "a\nb\nc");
    }

    #[test]
    fn test_tags_with_attributes() {
        assert_eq!(
            html_to_text("x<br class=\"y\">z<p style=\"margin-left: 20px;\">w</p>"),
            "x\nz\nw"
        );
    }

    #[test]
    fn test_case_insensitive_tags() {
        assert_eq!(html_to_text("a<BR/>b<P>c"), "a\nb\nc");
    }

    #[test]
    fn test_other_markup_stripped() {
        assert_eq!(
            html_to_text("<div><span class=\"x\">text</span></div>"),
            "text"
        );
    }

    #[test]
    fn test_entities_decoded() {
        assert_eq!(
            html_to_text("&lt;tag&gt; &amp; &quot;q&quot; &apos;a&apos; &#39;b&#39;"),
            "<tag> & \"q\" 'a' 'b'"
        );
    }

    #[test]
    fn test_double_escaped_entity_decodes_one_level() {
        assert_eq!(html_to_text("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_unclosed_angle_bracket_kept() {
        assert_eq!(html_to_text("a<unclosed"), "a<unclosed");
    }

    #[test]
    fn test_escape_then_strip_round_trip() {
        let original = "if a < b & b > c then \"quote\"";
        assert_eq!(html_to_text(&escape_html(original)), original);
    }
}
