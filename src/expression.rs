//! License expression parsing.
//!
//! Parses compact textual license expressions into a structured tree,
//! supporting:
//! - license IDs, standard or custom (e.g. `MIT`, `LicenseRef-23`)
//! - the `NONE` and `NOASSERTION` sentinels
//! - parenthesized sets of terms joined uniformly by `AND` or `OR`
//!   (case-insensitive), nested to any depth
//!
//! Whether an ID counts as standard is decided by a caller-supplied
//! predicate; `parse_expression_with_catalog` wires in the bundled license
//! list. The tree is immutable once built and never rendered back to
//! expression text.

use serde::Serialize;

use crate::catalog;

/// Error type for license expression parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    /// Empty or whitespace-only expression
    EmptyExpression,

    /// Opening parenthesis without a matching close (or vice versa)
    UnbalancedParens,

    /// Something other than AND/OR between two terms of a set
    ExpectedOperator { found: String, position: usize },

    /// AND and OR both used at the same nesting level
    MixedOperators,

    /// Parenthesized group with fewer than two operator-joined terms
    MissingOperator,
}

impl std::fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Empty license expression"),
            Self::UnbalancedParens => {
                write!(f, "Unbalanced parentheses in license expression")
            }
            Self::ExpectedOperator { found, position } => {
                write!(f, "Expected AND or OR before '{found}' at position {position}")
            }
            Self::MixedOperators => {
                write!(f, "AND and OR operators mixed within a single license set")
            }
            Self::MissingOperator => {
                write!(f, "License set requires at least two terms joined by AND or OR")
            }
        }
    }
}

impl std::error::Error for ExpressionError {}

/// A parsed license expression.
///
/// Set nodes hold their children in source order; a set never mixes AND and
/// OR at one nesting level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LicenseExpression {
    /// A standard license ID from the catalog
    Standard(String),

    /// A non-standard license with a locally-scoped ID and optional inline
    /// text (the parser leaves the text empty; callers building trees by
    /// hand may fill it)
    Custom {
        id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },

    /// All children apply simultaneously (AND)
    Conjunctive(Vec<LicenseExpression>),

    /// Any one child applies (OR)
    Disjunctive(Vec<LicenseExpression>),

    /// The NONE sentinel: no license present
    None,

    /// The NOASSERTION sentinel: no statement is made
    NoAssertion,
}

impl LicenseExpression {
    /// Extract the distinct license IDs referenced by the expression,
    /// sorted. Sentinels contribute nothing.
    pub fn license_ids(&self) -> Vec<String> {
        let mut ids = Vec::new();
        self.collect_ids(&mut ids);
        ids.sort();
        ids.dedup();
        ids
    }

    fn collect_ids(&self, ids: &mut Vec<String>) {
        match self {
            Self::Standard(id) => ids.push(id.clone()),
            Self::Custom { id, .. } => ids.push(id.clone()),
            Self::Conjunctive(children) | Self::Disjunctive(children) => {
                for child in children {
                    child.collect_ids(ids);
                }
            }
            Self::None | Self::NoAssertion => {}
        }
    }
}

/// Parse a license expression string into a structured expression.
///
/// # Arguments
/// * `expression` - The license expression string to parse
/// * `is_standard_id` - Predicate deciding whether an ID is standard
///
/// # Returns
/// Ok with the parsed LicenseExpression, or Err with ExpressionError
///
/// # Examples
/// ```
/// use licet::expression::{LicenseExpression, parse_expression};
///
/// let expr = parse_expression("MIT OR Apache-2.0", |id| id == "MIT").unwrap();
/// assert!(matches!(expr, LicenseExpression::Disjunctive(_)));
/// ```
pub fn parse_expression<F>(
    expression: &str,
    is_standard_id: F,
) -> Result<LicenseExpression, ExpressionError>
where
    F: Fn(&str) -> bool,
{
    let trimmed = expression.trim();
    if trimmed.is_empty() {
        return Err(ExpressionError::EmptyExpression);
    }

    if trimmed.starts_with('(') {
        if !trimmed.ends_with(')') {
            return Err(ExpressionError::UnbalancedParens);
        }
        let interior = &trimmed[1..trimmed.len() - 1];
        return parse_license_set(interior.trim(), &is_standard_id);
    }

    // A lone token is an atom; anything longer is an operator expression
    // over the whole input.
    if trimmed.split_whitespace().nth(1).is_none() {
        Ok(classify_atom(trimmed, &is_standard_id))
    } else {
        parse_license_set(trimmed, &is_standard_id)
    }
}

/// Parse a license expression using the bundled standard license catalog to
/// decide which IDs are standard.
pub fn parse_expression_with_catalog(
    expression: &str,
) -> Result<LicenseExpression, ExpressionError> {
    parse_expression(expression, catalog::is_standard_license_id)
}

/// Parse the interior of a parenthesized set: terms separated by a uniform
/// AND/OR operator, where a term is either an ID token or a nested
/// parenthesized set.
fn parse_license_set<F>(
    interior: &str,
    is_standard_id: &F,
) -> Result<LicenseExpression, ExpressionError>
where
    F: Fn(&str) -> bool,
{
    let chars: Vec<char> = interior.chars().collect();
    let mut terms: Vec<LicenseExpression> = Vec::new();
    let mut conjunctive = false;
    let mut disjunctive = false;
    let mut pos = 0;

    while pos < chars.len() {
        skip_whitespace(&chars, &mut pos);
        if pos >= chars.len() {
            break;
        }

        if chars[pos] == '(' {
            let end = find_matching_paren(&chars, pos + 1)?;
            let inner: String = chars[pos + 1..end].iter().collect();
            terms.push(parse_license_set(inner.trim(), is_standard_id)?);
            pos = end + 1;
        } else {
            let start = pos;
            skip_non_whitespace(&chars, &mut pos);
            let token: String = chars[start..pos].iter().collect();
            terms.push(classify_atom(&token, is_standard_id));
        }

        skip_whitespace(&chars, &mut pos);
        if pos >= chars.len() {
            break;
        }

        // The operator keyword must be followed by its separator space, so
        // a keyword sitting at end-of-input does not match.
        if matches_keyword(&chars, pos, "AND ") {
            conjunctive = true;
            pos += 4;
        } else if matches_keyword(&chars, pos, "OR ") {
            disjunctive = true;
            pos += 3;
        } else {
            let mut end = pos;
            while end < chars.len() && !chars[end].is_whitespace() {
                end += 1;
            }
            let found: String = chars[pos..end].iter().collect();
            return Err(ExpressionError::ExpectedOperator {
                found,
                position: pos,
            });
        }
    }

    if conjunctive && disjunctive {
        return Err(ExpressionError::MixedOperators);
    }
    if terms.len() < 2 {
        return Err(ExpressionError::MissingOperator);
    }
    if conjunctive {
        Ok(LicenseExpression::Conjunctive(terms))
    } else {
        Ok(LicenseExpression::Disjunctive(terms))
    }
}

/// Classify a single ID token. Each token is decided exactly once:
/// sentinel, then standard, then custom.
fn classify_atom<F>(token: &str, is_standard_id: &F) -> LicenseExpression
where
    F: Fn(&str) -> bool,
{
    match token {
        "NONE" => LicenseExpression::None,
        "NOASSERTION" => LicenseExpression::NoAssertion,
        id if is_standard_id(id) => LicenseExpression::Standard(id.to_string()),
        id => LicenseExpression::Custom {
            id: id.to_string(),
            text: None,
        },
    }
}

/// Find the index of the `)` closing the `(` just before `start`, counting
/// nested pairs. Fails when the input ends first.
fn find_matching_paren(chars: &[char], start: usize) -> Result<usize, ExpressionError> {
    let mut depth = 0usize;
    let mut pos = start;
    while pos < chars.len() {
        match chars[pos] {
            '(' => depth += 1,
            ')' if depth == 0 => return Ok(pos),
            ')' => depth -= 1,
            _ => {}
        }
        pos += 1;
    }
    Err(ExpressionError::UnbalancedParens)
}

/// Case-insensitive match of `keyword` at `pos`. False when fewer than
/// `keyword.len()` characters remain.
fn matches_keyword(chars: &[char], pos: usize, keyword: &str) -> bool {
    let len = keyword.len();
    if pos + len > chars.len() {
        return false;
    }
    chars[pos..pos + len]
        .iter()
        .zip(keyword.chars())
        .all(|(c, k)| c.eq_ignore_ascii_case(&k))
}

fn skip_whitespace(chars: &[char], pos: &mut usize) {
    while *pos < chars.len() && chars[*pos].is_whitespace() {
        *pos += 1;
    }
}

fn skip_non_whitespace(chars: &[char], pos: &mut usize) {
    while *pos < chars.len() && !chars[*pos].is_whitespace() {
        *pos += 1;
    }
}
