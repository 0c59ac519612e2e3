//! Main module for thebong library functionality

pub mod loader;
pub mod transforms;
pub mod vocabulary;
