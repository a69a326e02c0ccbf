//! HTML rendering of scanned templates.

use crate::utils::html::{escape_html, text_to_html};

use super::rule::TemplateRule;
use super::scanner::TemplateHandler;

/// Handler that renders scan events as HTML.
///
/// Text is HTML-escaped and then laid out with paragraph/line-break markup.
/// A variable rule becomes a `replaceable-license-text` span around its
/// escaped default text; an optional region is bracketed by one
/// `optional-license-text` span, whose `id` is the begin rule's name when
/// present.
#[derive(Debug, Default)]
pub struct HtmlTemplateHandler {
    html: String,
}

impl HtmlTemplateHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated HTML.
    pub fn into_html(self) -> String {
        self.html
    }
}

impl TemplateHandler for HtmlTemplateHandler {
    fn normal_text(&mut self, text: &str) {
        self.html.push_str(&text_to_html(&escape_html(text)));
    }

    fn optional_text(&mut self, text: &str) {
        self.html.push_str(&text_to_html(&escape_html(text)));
    }

    fn variable_rule(&mut self, rule: &TemplateRule) {
        let original = rule.original.as_deref().unwrap_or("");
        self.html
            .push_str("\n<span class=\"replaceable-license-text\">");
        self.html.push_str(&text_to_html(&escape_html(original)));
        self.html.push_str("</span>\n");
    }

    fn begin_optional(&mut self, rule: &TemplateRule) {
        match rule.name.as_deref() {
            Some(name) => {
                self.html.push_str("\n<span id=\"");
                self.html.push_str(&escape_html(name));
                self.html.push_str("\" class=\"optional-license-text\">");
            }
            None => self
                .html
                .push_str("\n<span class=\"optional-license-text\">"),
        }
    }

    fn end_optional(&mut self, _rule: &TemplateRule) {
        self.html.push_str("</span>\n");
    }
}
