//! Configuration types for Markdown conversion.
//!
//! This module defines the options used to customize how decks and slides
//! are rendered as Markdown.

/// Placeholder rendered for a deck without slides.
pub const DEFAULT_EMPTY_PLACEHOLDER: &str = "_No content available._";

/// Configuration options for Markdown conversion.
///
/// # Examples
///
/// ```rust
/// use coursedeck::markdown::MarkdownOptions;
///
/// // Create with defaults
/// let options = MarkdownOptions::default();
///
/// // Or customize
/// let options = MarkdownOptions::new()
///     .with_metadata(true)
///     .with_activity(false)
///     .with_slide_numbers(false);
/// ```
#[derive(Debug, Clone)]
pub struct MarkdownOptions {
    /// Whether to include course metadata as YAML front matter
    pub include_metadata: bool,
    /// Whether to render the practical examples section
    pub include_examples: bool,
    /// Whether to render the interactive activity section
    pub include_activity: bool,
    /// Whether slide headings carry their position (`# Slide 2: Title`)
    pub number_slides: bool,
    /// Whether large decks are rendered in parallel
    pub use_parallel: bool,
    /// Text rendered in place of an empty deck
    pub empty_placeholder: String,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            include_metadata: false,
            include_examples: true,
            include_activity: true,
            number_slides: true,
            use_parallel: true,
            empty_placeholder: DEFAULT_EMPTY_PLACEHOLDER.to_string(),
        }
    }
}

impl MarkdownOptions {
    /// Create a new `MarkdownOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to include course metadata.
    ///
    /// When enabled, the deck's course metadata (title, subject, etc.) is
    /// written at the beginning of the output as a YAML front matter block.
    #[inline]
    pub fn with_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }

    /// Set whether to render practical examples.
    #[inline]
    pub fn with_examples(mut self, include: bool) -> Self {
        self.include_examples = include;
        self
    }

    /// Set whether to render interactive activities.
    #[inline]
    pub fn with_activity(mut self, include: bool) -> Self {
        self.include_activity = include;
        self
    }

    /// Set whether slide headings are numbered.
    #[inline]
    pub fn with_slide_numbers(mut self, number: bool) -> Self {
        self.number_slides = number;
        self
    }

    /// Set whether large decks may be rendered in parallel.
    ///
    /// Output is identical either way; slide order is always preserved.
    #[inline]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.use_parallel = parallel;
        self
    }

    /// Set the text rendered for an empty deck.
    #[inline]
    pub fn with_empty_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.empty_placeholder = placeholder.into();
        self
    }
}
