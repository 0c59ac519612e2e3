//! Import injection stage
//!
//! TheBong's type names translate to numpy scalar types (`np.int64` and friends), so a
//! source that uses any of them needs `import numpy as np` at the top.
//!
//! The check runs on the original source with a plain substring test. A type token that
//! only appears inside a string literal or inside a longer identifier still triggers the
//! import.

use crate::bong::transforms::document::RestoredDocument;
use crate::bong::transforms::{Runnable, TransformError};
use crate::bong::vocabulary::Vocabulary;

/// The import line prepended to sources that use a numeric type
pub const DEFAULT_NUMERIC_IMPORT: &str = "import numpy as np";

/// Import injection stage
pub struct ImportInjection {
    vocabulary: Vocabulary,
    import_line: String,
}

impl ImportInjection {
    pub fn new(vocabulary: Vocabulary, import_line: impl Into<String>) -> Self {
        ImportInjection {
            vocabulary,
            import_line: import_line.into(),
        }
    }

    pub fn import_line(&self) -> &str {
        &self.import_line
    }

    /// Whether `source` needs the numeric import
    pub fn needs_import(&self, source: &str) -> bool {
        self.vocabulary.mentions_type(source)
    }
}

impl Default for ImportInjection {
    fn default() -> Self {
        Self::new(Vocabulary::bengali(), DEFAULT_NUMERIC_IMPORT)
    }
}

impl Runnable<RestoredDocument, String> for ImportInjection {
    fn run(&self, input: RestoredDocument) -> Result<String, TransformError> {
        if !self.needs_import(&input.source) {
            return Ok(input.code);
        }
        log::debug!("source uses type tokens, prepending '{}'", self.import_line);
        Ok(format!("{}\n{}", self.import_line, input.code))
    }
}
