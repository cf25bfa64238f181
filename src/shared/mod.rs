/// Shared utilities used across all layers
pub mod error;
mod result;

pub use result::Result;
