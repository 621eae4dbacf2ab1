//! Slide grouping engine.
//!
//! Turns the flat, order-tagged sequence of raw slide records produced by the
//! content service into composite slides. A record's title decides its role:
//!
//! - titles containing `Slide` or starting with `### ` open a new slide
//! - `Practical Examples` records set the open slide's examples
//! - `Interactive Activity` records set the open slide's activity prompt
//! - anything else is appended to the open slide's main content
//!
//! Records that arrive before the first slide heading have nothing to attach
//! to and are dropped. The pass is a pure function of its input.
//!
//! # Example
//!
//! ```rust
//! use coursedeck::grouping::{group_slides_with_options, GroupingOptions};
//! use coursedeck::record::parse_records;
//!
//! let records = parse_records(r####"[
//!     {"id": 1, "order": 1, "title": "Practical Examples", "content": "dropped"},
//!     {"id": 2, "order": 2, "title": "### Slide 1: Supervised Learning", "content": "Labels guide training."},
//!     {"id": 3, "order": 3, "title": "Key Terms", "content": "feature, label"}
//! ]"####)?;
//!
//! let grouping = group_slides_with_options(&records, &GroupingOptions::default());
//! assert_eq!(grouping.slides.len(), 1);
//! assert_eq!(grouping.slides[0].main_content, "Labels guide training.\nKey Terms\nfeature, label");
//! assert_eq!(grouping.report.orphaned, 1);
//! # Ok::<(), coursedeck::Error>(())
//! ```

// Submodule declarations
mod classify;
mod engine;
mod options;
mod report;
mod text;

// Re-exports
pub use classify::{
    ACTIVITY_MARKER, EXAMPLES_MARKER, HEADING_MARKER, RecordKind, SLIDE_MARKER, classify,
};
pub use engine::{Grouping, group_slides, group_slides_with_options};
pub use options::{GroupingOptions, MissingTitlePolicy};
pub use report::GroupingReport;
pub use text::{activity_text, clean_title, strip_content_marker};
