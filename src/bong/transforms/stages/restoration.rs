//! String restoration stage
//!
//! Puts the literals lifted out by shielding back where their placeholders are.

use crate::bong::transforms::document::{placeholder, RestoredDocument, ShieldedDocument};
use crate::bong::transforms::{Runnable, TransformError};

/// Replace each `__STR<i>__` with `strings[i]`, for `i` from 0 upward
///
/// Every occurrence of a marker is replaced, including one that a previously restored
/// literal happened to contain.
pub fn restore_strings(code: &str, strings: &[String]) -> String {
    strings
        .iter()
        .enumerate()
        .fold(code.to_string(), |acc, (index, literal)| {
            acc.replace(&placeholder(index), literal)
        })
}

/// String restoration stage
///
/// # Input
/// - `ShieldedDocument` - rewritten text still carrying placeholders
///
/// # Output
/// - `RestoredDocument` - final code and the original source
pub struct StringRestoration;

impl StringRestoration {
    pub fn new() -> Self {
        StringRestoration
    }
}

impl Default for StringRestoration {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<ShieldedDocument, RestoredDocument> for StringRestoration {
    fn run(&self, input: ShieldedDocument) -> Result<RestoredDocument, TransformError> {
        let code = restore_strings(&input.text, &input.strings);
        log::debug!("restored {} string literal(s)", input.strings.len());
        Ok(RestoredDocument {
            source: input.source,
            code,
        })
    }
}
