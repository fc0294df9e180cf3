//! Frontend pipeline
//!
//! Source text is tokenized and parsed into the rich tree, checked for
//! misplaced control flow, then lowered into the core tree.

pub mod check;
pub mod config;
pub mod core;
pub mod fmt;
pub mod pipeline;
pub mod simplify;

pub use check::{check, CheckReport};
pub use config::{EscapeMode, FrontendConfig};
pub use pipeline::{Compilation, Frontend, FrontendError};
pub use simplify::{simplify, Simplifier};
