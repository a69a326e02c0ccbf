//! Default-text rendering of scanned templates.

use super::rule::TemplateRule;
use super::scanner::TemplateHandler;

/// Handler that renders scan events as plain license text.
///
/// Normal and optional text pass through verbatim (optional passages are
/// retained), variable rules contribute their default text, and the
/// optional markers themselves disappear.
#[derive(Debug, Default)]
pub struct TextTemplateHandler {
    text: String,
}

impl TextTemplateHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated text.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl TemplateHandler for TextTemplateHandler {
    fn normal_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn optional_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn variable_rule(&mut self, rule: &TemplateRule) {
        // Rule validation makes `original` mandatory for variable rules; a
        // hand-built rule without it contributes nothing.
        if let Some(original) = rule.original.as_deref() {
            self.text.push_str(original);
        }
    }

    fn begin_optional(&mut self, _rule: &TemplateRule) {}

    fn end_optional(&mut self, _rule: &TemplateRule) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::scan;

    fn render(template: &str) -> String {
        let mut handler = TextTemplateHandler::new();
        scan(template, &mut handler).unwrap();
        handler.into_text()
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(render("no markers at all\n"), "no markers at all\n");
    }

    #[test]
    fn test_variable_resolves_to_default() {
        assert_eq!(
            render("Copyright <<var;name=year;original=2012;match=\\d+>> Holder"),
            "Copyright 2012 Holder"
        );
    }

    #[test]
    fn test_optional_text_retained_without_markers() {
        assert_eq!(
            render("before <<beginOptional>>optional part<<endOptional>> after"),
            "before optional part after"
        );
    }

    #[test]
    fn test_variable_inside_optional_region() {
        assert_eq!(
            render("<<beginOptional>>per <<var;name=unit;original=copy;match=.+>><<endOptional>>"),
            "per copy"
        );
    }

    #[test]
    fn test_whitespace_around_markers_preserved() {
        assert_eq!(
            render("a <<beginOptional>> b <<endOptional>> c"),
            "a  b  c"
        );
    }

    #[test]
    fn test_hand_built_variable_without_default_is_empty() {
        use crate::template::RuleKind;

        let rule = TemplateRule {
            kind: RuleKind::Variable,
            name: Some("n".to_string()),
            original: None,
            match_pattern: Some(".+".to_string()),
            example: None,
        };
        let mut handler = TextTemplateHandler::new();
        handler.variable_rule(&rule);
        assert_eq!(handler.into_text(), "");
    }
}
