//! Classification of raw slide records by their title.

/// Substring that marks a record as opening a new slide.
pub const SLIDE_MARKER: &str = "Slide";
/// Heading prefix that also marks a record as opening a new slide.
pub const HEADING_MARKER: &str = "### ";
/// Substring that marks a record as worked examples for the open slide.
pub const EXAMPLES_MARKER: &str = "Practical Examples";
/// Substring that marks a record as the open slide's activity prompt.
pub const ACTIVITY_MARKER: &str = "Interactive Activity";

/// The structural role of a raw slide record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Opens a new composite slide
    TitleBearing,
    /// Supplies the open slide's practical examples
    Examples,
    /// Supplies the open slide's interactive activity
    InteractiveActivity,
    /// Body text appended to the open slide's main content
    Continuation,
}

/// Classify a record title.
///
/// Tests are case-sensitive and evaluated in priority order; the first match
/// wins. A title such as `"Slide 3: Practical Examples"` is therefore
/// title-bearing, not an examples record.
///
/// # Examples
///
/// ```rust
/// use coursedeck::grouping::{classify, RecordKind};
///
/// assert_eq!(classify("### Slide 1: Intro"), RecordKind::TitleBearing);
/// assert_eq!(classify("Practical Examples"), RecordKind::Examples);
/// assert_eq!(classify("Interactive Activity: Discuss"), RecordKind::InteractiveActivity);
/// assert_eq!(classify("Key Terms"), RecordKind::Continuation);
/// ```
pub fn classify(title: &str) -> RecordKind {
    if title.contains(SLIDE_MARKER) || title.starts_with(HEADING_MARKER) {
        RecordKind::TitleBearing
    } else if title.contains(EXAMPLES_MARKER) {
        RecordKind::Examples
    } else if title.contains(ACTIVITY_MARKER) {
        RecordKind::InteractiveActivity
    } else {
        RecordKind::Continuation
    }
}
