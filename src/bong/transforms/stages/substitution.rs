//! Token substitution stage
//!
//! Replaces TheBong keywords and type names with their Python spelling. Only whole tokens
//! are replaced: an occurrence touching a word character on either side is part of a
//! longer identifier and is left alone.
//!
//! Entries are applied one at a time over the whole text, keywords first, in table order.
//! A target that spells a later entry's source would be rewritten again by that entry.
//! The built-in tables map Bengali to ASCII, so this cannot happen with them.

use crate::bong::transforms::document::ShieldedDocument;
use crate::bong::transforms::{Runnable, TransformError};
use crate::bong::vocabulary::Vocabulary;

/// The Bengali Unicode block, U+0980..=U+09FF
const BENGALI_BLOCK: std::ops::RangeInclusive<char> = '\u{0980}'..='\u{09FF}';

/// Characters that glue a token into a longer identifier
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || BENGALI_BLOCK.contains(&c)
}

/// Replace every whole-token occurrence of `token` in `text` with `replacement`
///
/// Boundaries are checked against `text` as given, so a replacement never changes whether
/// a later occurrence counts as whole. When an occurrence is rejected the scan resumes one
/// character later, which lets it find an overlapping occurrence that does qualify.
pub fn replace_whole_token(text: &str, token: &str, replacement: &str) -> String {
    if token.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut flushed = 0;
    let mut pos = 0;

    while let Some(offset) = text[pos..].find(token) {
        let start = pos + offset;
        let end = start + token.len();

        let open_before = text[..start].chars().next_back().map_or(true, |c| !is_word_char(c));
        let open_after = text[end..].chars().next().map_or(true, |c| !is_word_char(c));

        if open_before && open_after {
            out.push_str(&text[flushed..start]);
            out.push_str(replacement);
            flushed = end;
            pos = end;
        } else {
            pos = start + text[start..].chars().next().map_or(1, char::len_utf8);
        }
    }

    out.push_str(&text[flushed..]);
    out
}

/// Apply every vocabulary entry, keywords first, each over the whole text
pub fn substitute_tokens(text: &str, vocabulary: &Vocabulary) -> String {
    vocabulary
        .entries()
        .fold(text.to_string(), |acc, (kind, mapping)| {
            log::trace!("substituting {} '{}' → '{}'", kind, mapping.source, mapping.target);
            replace_whole_token(&acc, &mapping.source, &mapping.target)
        })
}

/// Token substitution stage
pub struct TokenSubstitution {
    vocabulary: Vocabulary,
}

impl TokenSubstitution {
    pub fn new(vocabulary: Vocabulary) -> Self {
        TokenSubstitution { vocabulary }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

impl Default for TokenSubstitution {
    fn default() -> Self {
        Self::new(Vocabulary::bengali())
    }
}

impl Runnable<ShieldedDocument, ShieldedDocument> for TokenSubstitution {
    fn run(&self, input: ShieldedDocument) -> Result<ShieldedDocument, TransformError> {
        let text = substitute_tokens(&input.text, &self.vocabulary);
        log::debug!(
            "substituted tokens ({} vocabulary entries)",
            self.vocabulary.keywords().len() + self.vocabulary.types().len()
        );
        Ok(input.with_text(text))
    }
}
