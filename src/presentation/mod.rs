//! Presentation model produced by the grouping engine.
//!
//! - `CompositeSlide`: one display slide with content, examples and activity
//! - `Deck`: the ordered slides of a course plus optional course metadata
//!
//! # Example
//!
//! ```rust
//! use coursedeck::presentation::Deck;
//! use coursedeck::record::RawSlideRecord;
//!
//! let deck = Deck::from_records(&[
//!     RawSlideRecord::new(1, "Slide 1: Fractions", "Parts of a whole."),
//!     RawSlideRecord::new(2, "Practical Examples", "Half a pizza."),
//! ]);
//!
//! for (i, slide) in deck.iter().enumerate() {
//!     println!("{}: {}", i + 1, slide.title);
//! }
//! ```

// Submodule declarations
mod deck;
mod slide;

// Re-exports
pub use deck::Deck;
pub use slide::CompositeSlide;
