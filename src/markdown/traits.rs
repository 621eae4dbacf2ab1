//! Core trait for Markdown conversion.
//!
//! This module defines the `ToMarkdown` trait that enables types to be
//! converted to Markdown format.

use crate::common::Result;
use super::config::MarkdownOptions;

/// Core trait for types that can be converted to Markdown.
///
/// This trait is implemented for [`Deck`](crate::Deck) and
/// [`CompositeSlide`](crate::CompositeSlide).
///
/// # Examples
///
/// ```rust
/// use coursedeck::{Deck, markdown::ToMarkdown};
///
/// # fn main() -> Result<(), coursedeck::Error> {
/// let deck = Deck::from_json(r#"[{"order": 1, "title": "Slide 1: Atoms", "content": "Tiny."}]"#)?;
///
/// // Convert the entire deck
/// let markdown = deck.to_markdown()?;
/// assert!(markdown.starts_with("# Slide 1: Atoms"));
///
/// // Or convert individual slides
/// for slide in &deck {
///     println!("{}", slide.to_markdown()?);
/// }
/// # Ok(())
/// # }
/// ```
pub trait ToMarkdown {
    /// Convert this item to Markdown with default options.
    fn to_markdown(&self) -> Result<String> {
        self.to_markdown_with_options(&MarkdownOptions::default())
    }

    /// Convert this item to Markdown with custom options.
    ///
    /// # Arguments
    ///
    /// * `options` - Configuration for the conversion
    fn to_markdown_with_options(&self, options: &MarkdownOptions) -> Result<String>;
}
