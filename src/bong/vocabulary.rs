//! Keyword and type tables
//!
//! TheBong has two fixed vocabularies: control-flow keywords (plus `print` and the
//! booleans) and scalar type names. Both are ordered, and the order is part of the
//! behavior: every keyword entry is applied to the whole text before the next one, and
//! all keywords go before any type.
//!
//! The built-in tables are plain static slices. [`Vocabulary`] wraps a pair of tables so
//! that tests and embedders can run the pipeline over a different vocabulary; it checks
//! the table invariants once at construction and is immutable afterwards.

use std::collections::HashSet;
use thiserror::Error;

/// Control-flow, print and boolean keywords, in application order.
pub const KEYWORDS: &[(&str, &str)] = &[
    ("পদ্ধতি", "def"),
    ("যদি", "if"),
    ("নাহলে", "else"),
    ("যখন", "while"),
    ("ফেরত", "return"),
    ("দেখাও", "print"),
    ("সত্য", "True"),
    ("মিথ্যা", "False"),
];

/// Scalar type names, in application order.
///
/// Targets use the `np` alias, which is why their presence in a source triggers the
/// numeric import.
pub const TYPES: &[(&str, &str)] = &[
    ("হ", "np.int16"),
    ("ই", "np.int32"),
    ("ঈ", "np.int64"),
    ("ড", "np.float16"),
    ("উ", "np.float32"),
    ("ঊ", "np.float64"),
    ("ঋ", "str"),
];

/// Which of the two tables an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Keyword,
    Type,
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableKind::Keyword => write!(f, "keyword"),
            TableKind::Type => write!(f, "type"),
        }
    }
}

/// A single source-dialect token and its Python replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub source: String,
    pub target: String,
}

impl Mapping {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Mapping {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl From<&(&str, &str)> for Mapping {
    fn from(pair: &(&str, &str)) -> Self {
        Mapping::new(pair.0, pair.1)
    }
}

/// Errors raised when a vocabulary breaks the table invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    #[error("{table} table contains an empty source token")]
    EmptyToken { table: TableKind },
    #[error("{table} table maps '{token}' more than once")]
    DuplicateToken { table: TableKind, token: String },
    #[error("'{token}' appears in both the keyword and the type table")]
    SharedToken { token: String },
}

/// An ordered pair of keyword and type tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    keywords: Vec<Mapping>,
    types: Vec<Mapping>,
}

impl Vocabulary {
    /// Build a vocabulary from explicit tables
    ///
    /// Source tokens must be non-empty, unique within their table, and absent from the
    /// other table.
    pub fn new(keywords: Vec<Mapping>, types: Vec<Mapping>) -> Result<Self, VocabularyError> {
        unique_sources(&keywords, TableKind::Keyword)?;
        let type_set = unique_sources(&types, TableKind::Type)?;

        if let Some(shared) = keywords
            .iter()
            .find(|m| type_set.contains(m.source.as_str()))
        {
            return Err(VocabularyError::SharedToken {
                token: shared.source.clone(),
            });
        }

        Ok(Vocabulary { keywords, types })
    }

    /// The built-in TheBong vocabulary
    pub fn bengali() -> Self {
        Vocabulary {
            keywords: KEYWORDS.iter().map(Mapping::from).collect(),
            types: TYPES.iter().map(Mapping::from).collect(),
        }
    }

    pub fn keywords(&self) -> &[Mapping] {
        &self.keywords
    }

    pub fn types(&self) -> &[Mapping] {
        &self.types
    }

    /// Every entry in application order: all keywords, then all types
    pub fn entries(&self) -> impl Iterator<Item = (TableKind, &Mapping)> {
        self.keywords
            .iter()
            .map(|m| (TableKind::Keyword, m))
            .chain(self.types.iter().map(|m| (TableKind::Type, m)))
    }

    /// Whether `text` contains any type source token as a raw substring
    ///
    /// No word-boundary check is applied here: a type token buried in an identifier or a
    /// string literal still counts.
    pub fn mentions_type(&self, text: &str) -> bool {
        self.types.iter().any(|m| text.contains(m.source.as_str()))
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::bengali()
    }
}

fn unique_sources(table: &[Mapping], kind: TableKind) -> Result<HashSet<&str>, VocabularyError> {
    let mut seen = HashSet::with_capacity(table.len());
    for mapping in table {
        if mapping.source.is_empty() {
            return Err(VocabularyError::EmptyToken { table: kind });
        }
        if !seen.insert(mapping.source.as_str()) {
            return Err(VocabularyError::DuplicateToken {
                table: kind,
                token: mapping.source.clone(),
            });
        }
    }
    Ok(seen)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_valid() {
        let builtin = Vocabulary::bengali();
        let rebuilt = Vocabulary::new(builtin.keywords().to_vec(), builtin.types().to_vec());
        assert_eq!(rebuilt, Ok(builtin));
    }

    #[test]
    fn test_builtin_table_order() {
        let vocab = Vocabulary::bengali();
        let targets: Vec<_> = vocab.entries().map(|(_, m)| m.target.as_str()).collect();
        assert_eq!(targets.first(), Some(&"def"));
        assert_eq!(targets.last(), Some(&"str"));
        assert_eq!(targets.len(), KEYWORDS.len() + TYPES.len());
    }

    #[test]
    fn test_entries_keywords_before_types() {
        let vocab = Vocabulary::bengali();
        let kinds: Vec<_> = vocab.entries().map(|(kind, _)| kind).collect();
        let first_type = kinds.iter().position(|k| *k == TableKind::Type).unwrap();
        assert!(kinds[..first_type].iter().all(|k| *k == TableKind::Keyword));
        assert!(kinds[first_type..].iter().all(|k| *k == TableKind::Type));
    }

    #[test]
    fn test_rejects_empty_token() {
        let err = Vocabulary::new(vec![Mapping::new("", "x")], vec![]).unwrap_err();
        assert_eq!(
            err,
            VocabularyError::EmptyToken {
                table: TableKind::Keyword
            }
        );
    }

    #[test]
    fn test_rejects_duplicate_token() {
        let err = Vocabulary::new(
            vec![],
            vec![Mapping::new("হ", "np.int16"), Mapping::new("হ", "np.int8")],
        )
        .unwrap_err();
        assert_eq!(
            err,
            VocabularyError::DuplicateToken {
                table: TableKind::Type,
                token: "হ".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_shared_token() {
        let err = Vocabulary::new(
            vec![Mapping::new("যদি", "if")],
            vec![Mapping::new("যদি", "int")],
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "'যদি' appears in both the keyword and the type table");
    }

    #[test]
    fn test_mentions_type_is_raw_substring() {
        let vocab = Vocabulary::bengali();
        assert!(vocab.mentions_type("x = \"ঈ\""));
        // হ is part of নাহলে, so even a bare else keyword counts
        assert!(vocab.mentions_type("নাহলে:"));
        assert!(!vocab.mentions_type("দেখাও(1)"));
        assert!(!vocab.mentions_type(""));
    }
}
