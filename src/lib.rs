//! License-metadata toolkit: a parser for composite license expressions and
//! a rule engine for annotated license templates, with text/HTML layout
//! conversion helpers.

pub mod catalog;
pub mod cli;
pub mod expression;
pub mod template;
pub mod utils;

pub use expression::{
    ExpressionError, LicenseExpression, parse_expression, parse_expression_with_catalog,
};
pub use template::{TemplateError, template_to_html, template_to_text};
