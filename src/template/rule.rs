//! Template rule bodies.
//!
//! A rule body is the trimmed interior of one `<<...>>` marker:
//! `;`-separated fields, the rule kind first, then `key=value` attributes.
//! Recognized kinds are `var`, `beginOptional`, and `endOptional`
//! (case-sensitive); recognized attribute keys are `name`, `original`,
//! `match`, and `example`. Attribute values may be wrapped in double
//! quotes, which are stripped. A `var` rule must carry `name`, `original`,
//! and `match`.

use std::str::FromStr;

use strum::{Display, EnumString};

use super::TemplateError;

/// What a template rule denotes.
///
/// The string forms are the kind tokens as they appear in rule bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum RuleKind {
    /// A substitutable variable with a default value
    #[strum(serialize = "var")]
    Variable,

    /// Start of an optional region
    #[strum(serialize = "beginOptional")]
    BeginOptional,

    /// End of an optional region
    #[strum(serialize = "endOptional")]
    EndOptional,
}

/// The parsed result of one `<<...>>` marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRule {
    pub kind: RuleKind,

    /// Label for the rule; required for variable rules
    pub name: Option<String>,

    /// Original/default text; required for variable rules
    pub original: Option<String>,

    /// Regular expression describing what matches the variable; required
    /// for variable rules, stored without being compiled
    pub match_pattern: Option<String>,

    /// Example of matching text
    pub example: Option<String>,
}

impl TemplateRule {
    /// Parse a rule body.
    ///
    /// Duplicate attribute keys are allowed, last one wins; empty fields
    /// (e.g. from a trailing `;`) are skipped.
    pub fn parse(body: &str) -> Result<Self, TemplateError> {
        let mut fields = body.split(';');
        let kind_token = fields.next().unwrap_or("").trim();
        let kind = RuleKind::from_str(kind_token).map_err(|_| {
            TemplateError::UnrecognizedRule(format!("unknown rule type '{kind_token}'"))
        })?;

        let mut rule = TemplateRule {
            kind,
            name: None,
            original: None,
            match_pattern: None,
            example: None,
        };

        for field in fields {
            let field = field.trim();
            if field.is_empty() {
                continue;
            }
            let Some((key, value)) = field.split_once('=') else {
                return Err(TemplateError::UnrecognizedRule(format!(
                    "attribute without '=': '{field}'"
                )));
            };
            let value = unquote(value.trim()).to_string();
            match key.trim() {
                "name" => rule.name = Some(value),
                "original" => rule.original = Some(value),
                "match" => rule.match_pattern = Some(value),
                "example" => rule.example = Some(value),
                other => {
                    return Err(TemplateError::UnrecognizedRule(format!(
                        "unknown attribute '{other}'"
                    )));
                }
            }
        }

        if rule.kind == RuleKind::Variable {
            for (attr, present) in [
                ("name", rule.name.is_some()),
                ("original", rule.original.is_some()),
                ("match", rule.match_pattern.is_some()),
            ] {
                if !present {
                    return Err(TemplateError::UnrecognizedRule(format!(
                        "variable rule is missing '{attr}'"
                    )));
                }
            }
        }

        Ok(rule)
    }
}

/// Strip one pair of surrounding double quotes, if both are present.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
