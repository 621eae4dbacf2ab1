//! Raw slide records: the flat, order-tagged input of the grouping engine.
//!
//! Records are produced by the external content service and arrive as a JSON
//! array. Parsing is defensive: unusable fields degrade to defaults and
//! non-object entries are skipped, so a single bad element never loses the
//! rest of a course.

// Submodule declarations
mod de;
mod source;
mod types;

// Re-exports
pub use source::{parse_records, parse_records_reader, records_from_value};
pub use types::{HintValue, PresentationHints, RawSlideRecord, SlideId};
