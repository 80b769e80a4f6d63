//! Diagnostic helpers.

pub mod inspect;
