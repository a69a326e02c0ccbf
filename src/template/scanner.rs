//! Template scanning and the optional-region state machine.
//!
//! `scan` walks a template left to right, splitting it into literal text
//! and `<<...>>` rule markers. Literal text is reported as normal or
//! optional depending on whether an optional region is open; rule markers
//! are classified and reported as events. Optional regions cannot nest and
//! must be closed by end-of-input.

use std::sync::LazyLock;

use regex::Regex;

use super::TemplateError;
use super::rule::{RuleKind, TemplateRule};

/// Regex matching one `<<...>>` marker. The interior is non-greedy, so the
/// first `>>` after a `<<` closes it; `(?s)` lets the interior span line
/// breaks. An empty `<<>>` does not match and stays literal text.
static RULE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<<\s*(.+?)\s*>>").unwrap());

/// Visitor for template scan events.
///
/// Each method may be called any number of times, in scan order, during a
/// single `scan`; implementations must not assume an overall call count.
pub trait TemplateHandler {
    /// Literal text outside any optional region.
    fn normal_text(&mut self, text: &str);

    /// Literal text inside the currently open optional region.
    fn optional_text(&mut self, text: &str);

    /// A variable rule marker.
    fn variable_rule(&mut self, rule: &TemplateRule);

    /// The opening marker of an optional region.
    fn begin_optional(&mut self, rule: &TemplateRule);

    /// The closing marker of an optional region.
    fn end_optional(&mut self, rule: &TemplateRule);
}

/// Where the scan cursor sits relative to optional regions. The scan must
/// end in `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    InOptional,
}

/// Scan a template, feeding events to `handler`.
///
/// Fails on the first malformed rule body, on nested or unmatched optional
/// markers, and on an optional region left open at end-of-input. Events
/// already delivered before a failure are the handler's to discard.
pub fn scan<H: TemplateHandler>(template: &str, handler: &mut H) -> Result<(), TemplateError> {
    let mut state = ScanState::Normal;
    let mut cursor = 0;

    for caps in RULE_RE.captures_iter(template) {
        let marker = caps.get(0).unwrap();
        let body = caps.get(1).unwrap().as_str();

        if marker.start() > cursor {
            emit_text(&template[cursor..marker.start()], state, handler);
        }

        let rule = TemplateRule::parse(body)?;
        match rule.kind {
            RuleKind::Variable => handler.variable_rule(&rule),
            RuleKind::BeginOptional => {
                if state == ScanState::InOptional {
                    return Err(TemplateError::NestedOptional);
                }
                state = ScanState::InOptional;
                handler.begin_optional(&rule);
            }
            RuleKind::EndOptional => {
                if state == ScanState::Normal {
                    return Err(TemplateError::UnmatchedEndOptional);
                }
                state = ScanState::Normal;
                handler.end_optional(&rule);
            }
        }
        cursor = marker.end();
    }

    // Checked before the trailing flush, so an unterminated optional fails
    // even when text follows the last marker.
    if state == ScanState::InOptional {
        return Err(TemplateError::MissingEndOptional);
    }
    if cursor < template.len() {
        handler.normal_text(&template[cursor..]);
    }
    Ok(())
}

fn emit_text<H: TemplateHandler>(text: &str, state: ScanState, handler: &mut H) {
    match state {
        ScanState::Normal => handler.normal_text(text),
        ScanState::InOptional => handler.optional_text(text),
    }
}
