//! Coursedeck - groups AI-generated course slide records into presentation slides
//!
//! The content service behind an AI course builder returns a flat list of
//! slide records. Each record has an `order`, a `title` and optional
//! `content`, and the title doubles as a structural tag: headings open a new
//! slide, while "Practical Examples" and "Interactive Activity" records
//! belong to the slide before them. This crate reconstructs the presentation
//! from that list.
//!
//! # Features
//!
//! - **Defensive parsing**: Loosely typed JSON payloads degrade to defaults instead of failing
//! - **Total grouping**: Every input produces a deck; dropped records are counted, not raised
//! - **Markdown export**: Render decks with optional YAML front matter (`markdown` feature)
//!
//! # Example - Grouping a payload
//!
//! ```rust
//! use coursedeck::Deck;
//!
//! # fn main() -> Result<(), coursedeck::Error> {
//! let deck = Deck::from_json(r#"[
//!     {"id": 10, "order": 1, "title": "Slide 1: Supervised Learning", "content": "Learning from labels."},
//!     {"id": 11, "order": 2, "title": "Practical Examples", "content": "Spam filters."},
//!     {"id": 12, "order": 3, "title": "Interactive Activity: Label it", "content": "Tag ten emails."}
//! ]"#)?;
//!
//! let slide = deck.get(0).expect("one slide");
//! assert_eq!(slide.title, "Supervised Learning");
//! assert_eq!(slide.examples, "Spam filters.");
//! assert_eq!(slide.interactive_activity, "Label it\nTag ten emails.");
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Grouping records directly
//!
//! ```rust
//! use coursedeck::grouping::group_slides;
//! use coursedeck::record::RawSlideRecord;
//!
//! let records = vec![
//!     RawSlideRecord::new(2, "Key Terms", "mass, force"),
//!     RawSlideRecord::new(1, "### **Newton's Laws**", "Three laws of motion."),
//! ];
//!
//! let slides = group_slides(&records);
//! assert_eq!(slides[0].title, "Newton's Laws");
//! assert_eq!(slides[0].main_content, "Three laws of motion.\nKey Terms\nmass, force");
//! ```

/// Common types: errors and course metadata.
pub mod common;

/// Raw slide records and JSON payload parsing.
pub mod record;

/// The slide grouping engine.
pub mod grouping;

/// Composite slides and decks.
pub mod presentation;

/// Markdown rendering of decks and slides.
#[cfg(feature = "markdown")]
pub mod markdown;

// Re-export commonly used types for convenience
pub use common::{CourseMetadata, Error, Result};
pub use grouping::{GroupingOptions, GroupingReport, MissingTitlePolicy, group_slides};
pub use presentation::{CompositeSlide, Deck};
pub use record::{RawSlideRecord, parse_records};
