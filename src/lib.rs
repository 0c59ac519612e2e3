//! # thebong
//!
//! A transpiler for TheBong, a Bengali-keyword dialect of Python.
//!
//! File Layout
//!
//! The transpiler is one pipeline of text rewrites. There is no AST: every stage takes
//! text in and hands text (plus bookkeeping) out, so stages can be inspected and tested
//! in isolation.
//!
//! src/bong
//!   ├── transforms   The `Runnable` / `Transform` chain, its stages and the pre-built pipelines
//!   ├── vocabulary   The keyword and type tables
//!   └── loader       Reading sources and deriving output paths
//!
//! For most callers [`transpile`] is all that is needed:
//!
//! ```rust,ignore
//! let python = thebong::transpile("দেখাও(\"hi\")")?;
//! assert_eq!(python, "print(\"hi\")");
//! ```

pub mod bong;

pub use bong::transforms::standard::transpile;
