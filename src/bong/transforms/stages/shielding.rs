//! String shielding stage
//!
//! Lifts every string literal out of the source and leaves a numbered placeholder in its
//! place, so that later stages cannot rewrite comment markers or keywords that happen to
//! sit inside a string.

use crate::bong::transforms::document::{placeholder, ShieldedDocument};
use crate::bong::transforms::{Runnable, TransformError};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Python string literals, tried in this order at each position.
///
/// Triple-quoted forms may span lines; single-line forms stop at a newline. Escapes are
/// not understood: `"a\"b"` ends at the escaped quote.
static STRING_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""""[\s\S]*?"""|'''[\s\S]*?'''|"[^"\n]*"|'[^'\n]*'"#)
        .expect("string literal pattern is valid")
});

/// Replace string literals with `__STR<i>__` placeholders
///
/// Returns the rewritten text and the literals (delimiters included) in order of
/// appearance. A literal that never closes is left in place.
pub fn shield_strings(code: &str) -> (String, Vec<String>) {
    let mut strings = Vec::new();
    let shielded = STRING_LITERAL.replace_all(code, |caps: &Captures| {
        let index = strings.len();
        strings.push(caps[0].to_string());
        placeholder(index)
    });
    (shielded.into_owned(), strings)
}

/// String shielding stage
///
/// # Input
/// - `String` - raw TheBong source
///
/// # Output
/// - `ShieldedDocument` - placeholder text, extracted literals, and the untouched source
pub struct StringShielding;

impl StringShielding {
    pub fn new() -> Self {
        StringShielding
    }
}

impl Default for StringShielding {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, ShieldedDocument> for StringShielding {
    fn run(&self, input: String) -> Result<ShieldedDocument, TransformError> {
        let (text, strings) = shield_strings(&input);
        log::debug!("shielded {} string literal(s)", strings.len());
        Ok(ShieldedDocument {
            source: input,
            text,
            strings,
        })
    }
}
