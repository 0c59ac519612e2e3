//! Individual transformation stages
//!
//! This module contains the individual stages that can be composed into pipelines.
//! Each stage implements the `Runnable` trait. They are listed in pipeline order.

pub mod shielding;
pub mod comments;
pub mod substitution;
pub mod restoration;
pub mod imports;

pub use comments::CommentNormalization;
pub use imports::ImportInjection;
pub use restoration::StringRestoration;
pub use shielding::StringShielding;
pub use substitution::TokenSubstitution;
