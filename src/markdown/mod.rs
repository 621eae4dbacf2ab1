//! Markdown conversion for course decks and composite slides.
//!
//! Each slide becomes a level-one heading followed by its main content and,
//! when present, `Practical Examples` and `Interactive Activity` sections.
//! Slides are separated by horizontal rules (`---`). An empty deck renders a
//! neutral placeholder instead of failing.
//!
//! # Quick Start
//!
//! ```rust
//! use coursedeck::{Deck, markdown::{MarkdownOptions, ToMarkdown}};
//!
//! # fn main() -> Result<(), coursedeck::Error> {
//! let deck = Deck::from_json(r####"[
//!     {"order": 1, "title": "### Slide 1: Ecosystems", "content": "Living and non-living parts."},
//!     {"order": 2, "title": "Practical Examples", "content": "A pond."}
//! ]"####)?;
//!
//! let markdown = deck.to_markdown()?;
//! assert!(markdown.contains("## Practical Examples"));
//!
//! // Or with custom options
//! let options = MarkdownOptions::new()
//!     .with_examples(false)
//!     .with_slide_numbers(false);
//! let markdown = deck.to_markdown_with_options(&options)?;
//! assert!(markdown.starts_with("# Ecosystems"));
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - [`ToMarkdown`] trait: Core trait for types that can be converted to Markdown
//! - [`MarkdownOptions`]: Configuration for conversion behavior
//! - `writer`: Low-level writer for efficient output generation
//! - `presentation`: Deck and slide implementations

// Module declarations
mod config;
mod presentation;
mod traits;
mod writer;

// Re-export public API
pub use config::{DEFAULT_EMPTY_PLACEHOLDER, MarkdownOptions};
pub use traits::ToMarkdown;
