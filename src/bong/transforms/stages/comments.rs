//! Comment normalization stage
//!
//! TheBong has two comment forms:
//!
//! - `?! ... !?` block comments, which may span lines. They become a Python triple-quoted
//!   string with the same interior, so the block survives as an unused string expression
//!   rather than being dropped.
//! - `??? text` line comments, which become `# text`.
//!
//! Must run after string shielding, otherwise `?!` inside a literal would be rewritten.

use crate::bong::transforms::document::ShieldedDocument;
use crate::bong::transforms::{Runnable, TransformError};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// `?!` up to the nearest `!?`, across newlines
static BLOCK_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\?!([\s\S]*?)!\?").expect("block comment pattern is valid"));

/// `???` up to the end of the line; one space after the marker belongs to the marker
static LINE_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\?\?\? ?([^\n]*)").expect("line comment pattern is valid"));

/// Rewrite block and line comments into their Python forms
///
/// Blocks are handled first. A `???` inside a block is still rewritten as a line comment
/// once the block has become a string.
pub fn normalize_comments(code: &str) -> String {
    let code = BLOCK_COMMENT.replace_all(code, |caps: &Captures| {
        format!("\"\"\"{}\"\"\"", &caps[1])
    });
    LINE_COMMENT
        .replace_all(&code, |caps: &Captures| format!("# {}", &caps[1]))
        .into_owned()
}

/// Comment normalization stage
///
/// Rewrites the working text of a `ShieldedDocument`; extracted strings and the source
/// are passed through untouched.
pub struct CommentNormalization;

impl CommentNormalization {
    pub fn new() -> Self {
        CommentNormalization
    }
}

impl Default for CommentNormalization {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<ShieldedDocument, ShieldedDocument> for CommentNormalization {
    fn run(&self, input: ShieldedDocument) -> Result<ShieldedDocument, TransformError> {
        let blocks = BLOCK_COMMENT.find_iter(&input.text).count();
        let text = normalize_comments(&input.text);
        log::debug!("normalized comments ({} block comment(s))", blocks);
        Ok(input.with_text(text))
    }
}
