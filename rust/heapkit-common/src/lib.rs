//! Core definitions (error type and argument verification), relied upon by all heapkit-* crates.

pub mod error;
pub mod result;

pub use error::{Error, ErrorKind};
pub use result::Result;
