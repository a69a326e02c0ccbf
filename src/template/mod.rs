//! License template parsing and rendering.
//!
//! A template is license text annotated with `<<...>>` markers. Each marker
//! carries a rule: a substitutable variable, the start of an optional
//! region, or the end of one. The scanner walks a template left to right,
//! validates optional-region nesting, and feeds an event stream to a
//! handler; two handlers are provided, one rendering HTML with rule regions
//! visually marked and one producing plain text with default values
//! substituted.

mod html;
mod rule;
mod scanner;
mod text;

pub use html::HtmlTemplateHandler;
pub use rule::{RuleKind, TemplateRule};
pub use scanner::{TemplateHandler, scan};
pub use text::TextTemplateHandler;

/// Error type for template parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Marker body that is not a recognizable rule
    UnrecognizedRule(String),

    /// Begin-optional marker inside an already-open optional region
    NestedOptional,

    /// End-optional marker with no open optional region
    UnmatchedEndOptional,

    /// Template ended with an optional region still open
    MissingEndOptional,
}

impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedRule(detail) => write!(f, "Unrecognized rule: {detail}"),
            Self::NestedOptional => write!(f, "Optional rules cannot be nested"),
            Self::UnmatchedEndOptional => {
                write!(f, "End-optional rule without a matching begin-optional")
            }
            Self::MissingEndOptional => {
                write!(f, "Template ends inside an optional region (missing end-optional rule)")
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// Render a license template as HTML.
///
/// Variable rules and optional regions come out wrapped in styled spans so
/// substitutable and conditional passages are visually distinguishable; the
/// surrounding text gets paragraph and line-break markup.
///
/// # Examples
/// ```
/// use licet::template::template_to_html;
///
/// let html = template_to_html("License <<var;name=v;original=1.0;match=\\d+(\\.\\d+)?>>").unwrap();
/// assert!(html.contains("replaceable-license-text"));
/// ```
pub fn template_to_html(template: &str) -> Result<String, TemplateError> {
    let mut handler = HtmlTemplateHandler::new();
    scan(template, &mut handler)?;
    Ok(handler.into_html())
}

/// Render a license template as plain text with default values substituted
/// for variables and optional regions retained without their markers.
pub fn template_to_text(template: &str) -> Result<String, TemplateError> {
    let mut handler = TextTemplateHandler::new();
    scan(template, &mut handler)?;
    Ok(handler.into_text())
}
