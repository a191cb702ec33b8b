//! Core definitions (errors and common result type), relied upon by all dilug-* crates.

pub mod error;
pub mod result;

pub use result::Result;
