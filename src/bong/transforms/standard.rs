//! Standard transform definitions
//!
//! Pre-built pipelines, defined as statics with `once_cell::sync::Lazy`.

use crate::bong::transforms::document::ShieldedDocument;
use crate::bong::transforms::stages::imports::DEFAULT_NUMERIC_IMPORT;
use crate::bong::transforms::stages::{
    CommentNormalization, ImportInjection, StringRestoration, StringShielding, TokenSubstitution,
};
use crate::bong::transforms::{Transform, TransformError};
use crate::bong::vocabulary::Vocabulary;
use once_cell::sync::Lazy;

/// Type alias for the inspection transform
pub type ShieldingTransform = Transform<String, ShieldedDocument>;

/// Type alias for a full transpiler
pub type TranspileTransform = Transform<String, String>;

/// Shielding transform: String → ShieldedDocument
///
/// Runs the first two stages (string shielding and comment normalization). Useful for
/// looking at what token substitution will see.
pub static SHIELDING: Lazy<ShieldingTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(StringShielding::new())
        .then(CommentNormalization::new())
});

/// Full transpiler with the built-in vocabulary: String → String
///
/// 1. String shielding
/// 2. Comment normalization
/// 3. Token substitution
/// 4. String restoration
/// 5. Numeric import injection
pub static TRANSPILE: Lazy<TranspileTransform> =
    Lazy::new(|| build_transpiler(Vocabulary::bengali(), DEFAULT_NUMERIC_IMPORT));

/// Build a full transpiler over a custom vocabulary and import line
pub fn build_transpiler(vocabulary: Vocabulary, import_line: impl Into<String>) -> TranspileTransform {
    Transform::from_fn(Ok)
        .then_transform(&*SHIELDING)
        .then(TokenSubstitution::new(vocabulary.clone()))
        .then(StringRestoration::new())
        .then(ImportInjection::new(vocabulary, import_line))
}

/// Transpile TheBong source to Python with the built-in vocabulary
///
/// This is a shortcut for `TRANSPILE.run(source.to_string())`.
pub fn transpile(source: &str) -> Result<String, TransformError> {
    TRANSPILE.run(source.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bong::vocabulary::Mapping;

    #[test]
    fn test_reference_example() {
        assert_eq!(
            transpile("পদ্ধতি যদি সত্য: ঈ x").unwrap(),
            "import numpy as np\ndef if True: np.int64 x"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(transpile("").unwrap(), "");
    }

    #[test]
    fn test_shielding_transform_stops_before_substitution() {
        let doc = SHIELDING.run("যদি x: ??? দেখাও \"ঈ\"".to_string()).unwrap();
        assert_eq!(doc.text, "যদি x: # দেখাও __STR0__");
        assert_eq!(doc.strings, vec!["\"ঈ\""]);
    }

    #[test]
    fn test_keywords_in_comments_are_substituted() {
        // Comments are not shielded; only string literals are
        assert_eq!(transpile("??? যদি").unwrap(), "# if");
    }

    #[test]
    fn test_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|i| std::thread::spawn(move || transpile(&format!("দেখাও({i})")).unwrap()))
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), format!("print({i})"));
        }
    }

    #[test]
    fn test_custom_transpiler() {
        let vocabulary = Vocabulary::new(
            vec![Mapping::new("যদি", "if")],
            vec![Mapping::new("ক", "int")],
        )
        .unwrap();
        let transpiler = build_transpiler(vocabulary, "import builtins");
        assert_eq!(
            transpiler.run("যদি ক:".to_string()).unwrap(),
            "import builtins\nif int:"
        );
        assert_eq!(transpiler.run("ঈ".to_string()).unwrap(), "ঈ");
    }
}
