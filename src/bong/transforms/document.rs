//! Values handed from one pipeline stage to the next

/// Prefix of every string placeholder
pub const PLACEHOLDER_PREFIX: &str = "__STR";
/// Suffix of every string placeholder
pub const PLACEHOLDER_SUFFIX: &str = "__";

/// The placeholder that stands in for the `index`-th extracted string
pub fn placeholder(index: usize) -> String {
    format!("{PLACEHOLDER_PREFIX}{index}{PLACEHOLDER_SUFFIX}")
}

/// Working text with its string literals lifted out
///
/// `text` holds `__STR<i>__` where the `i`-th literal used to be; `strings[i]` is that
/// literal with its delimiters. `source` is the untouched input and is never rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShieldedDocument {
    pub source: String,
    pub text: String,
    pub strings: Vec<String>,
}

impl ShieldedDocument {
    /// A document with nothing shielded yet
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        ShieldedDocument {
            text: source.clone(),
            source,
            strings: Vec::new(),
        }
    }

    /// Replace the working text, keeping the source and the extracted strings
    pub fn with_text(self, text: String) -> Self {
        ShieldedDocument { text, ..self }
    }
}

/// Output of string restoration: final code, plus the source it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoredDocument {
    pub source: String,
    pub code: String,
}
