//! Common types shared across the record, grouping and rendering layers.

// Submodule declarations
pub mod error;
pub mod metadata;

// Re-exports for convenience
pub use error::{Error, Result};
pub use metadata::CourseMetadata;
