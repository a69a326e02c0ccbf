//! Shared helper utilities.

pub mod html;
