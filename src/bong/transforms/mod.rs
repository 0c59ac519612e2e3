//! Transform pipeline infrastructure
//!
//! The transpiler is a chain of typed stages. Any stage implementing `Runnable<I, O>` can
//! be appended to a `Transform<_, I>`, and the compiler checks that each stage accepts
//! what the previous one produces:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(Ok)
//!     .then(StringShielding::new())            // String → ShieldedDocument
//!     .then(CommentNormalization::new())       // ShieldedDocument → ShieldedDocument
//!     .then(TokenSubstitution::new(vocab))     // ShieldedDocument → ShieldedDocument
//!     .then(StringRestoration::new())          // ShieldedDocument → RestoredDocument
//!     .then(ImportInjection::new(vocab, line)); // RestoredDocument → String
//! ```
//!
//! Common pipelines are pre-built as statics in [`standard`].
//!
//! # Module Organization
//!
//! - [`document`]: The values passed between stages
//! - [`stages`]: Individual stages (shielding, comments, substitution, restoration, import)
//! - [`standard`]: Pre-built transform combinations

pub mod document;
pub mod stages;
pub mod standard;

use thiserror::Error;

/// Error that can occur during transformation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// Stage failed with specific error
    #[error("Stage '{stage}' failed: {message}")]
    StageFailed { stage: String, message: String },
}

/// Trait for anything that can transform an input to an output
///
/// This is implemented by individual transformation stages.
/// The `Transform` struct composes multiple `Runnable` implementations.
pub trait Runnable<I, O> {
    /// Execute this transformation on the input
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// A composable transformation pipeline
///
/// `Transform<I, O>` turns an `I` into an `O`. It is `Send + Sync`, so a single pipeline
/// can be shared between threads (the standard pipelines are process-wide statics).
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Add a stage to this transform, returning a new transform with extended output type
    ///
    /// The stage's input type must match this transform's output type.
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Chain a pre-built static transform to this transform
    pub fn then_transform<O2>(self, next: &'static Transform<O, O2>) -> Transform<I, O2>
    where
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                next.run(intermediate)
            }),
        }
    }

    /// Execute this transform on the given input
    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }
}

// Implement Runnable for Transform so transforms can be used as stages
impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, TransformError> {
        Transform::run(self, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;

    struct Uppercase;
    impl Runnable<String, String> for Uppercase {
        fn run(&self, input: String) -> Result<String, TransformError> {
            Ok(input.to_uppercase())
        }
    }

    struct CountChars;
    impl Runnable<String, usize> for CountChars {
        fn run(&self, input: String) -> Result<usize, TransformError> {
            Ok(input.chars().count())
        }
    }

    struct Rejecting;
    impl Runnable<String, String> for Rejecting {
        fn run(&self, _input: String) -> Result<String, TransformError> {
            Err(TransformError::StageFailed {
                stage: "Rejecting".to_string(),
                message: "intentional failure".to_string(),
            })
        }
    }

    static TRIM: Lazy<Transform<String, String>> =
        Lazy::new(|| Transform::from_fn(|s: String| Ok(s.trim().to_string())));

    #[test]
    fn test_transform_from_fn() {
        let transform = Transform::from_fn(|s: String| Ok(format!("{s}!")));
        assert_eq!(transform.run("hi".to_string()).unwrap(), "hi!");
    }

    #[test]
    fn test_type_changing_stage() {
        let transform = Transform::from_fn(Ok).then(Uppercase).then(CountChars);
        assert_eq!(transform.run("দেখাও".to_string()).unwrap(), 5);
    }

    #[test]
    fn test_then_transform_uses_static() {
        let transform = Transform::from_fn(Ok).then_transform(&*TRIM).then(Uppercase);
        assert_eq!(transform.run("  abc \n".to_string()).unwrap(), "ABC");
    }

    #[test]
    fn test_error_stops_the_chain() {
        let transform = Transform::from_fn(Ok).then(Rejecting).then(CountChars);
        let err = transform.run("abc".to_string()).unwrap_err();
        assert_eq!(err.to_string(), "Stage 'Rejecting' failed: intentional failure");
    }

    #[test]
    fn test_stage_failure_is_returned_unchanged() {
        let err = Transform::from_fn(Ok).then(Rejecting).run("abc".to_string()).unwrap_err();
        assert_eq!(
            err,
            TransformError::StageFailed {
                stage: "Rejecting".to_string(),
                message: "intentional failure".to_string(),
            }
        );
    }
}
