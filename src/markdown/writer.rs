//! Low-level writer for Markdown generation.
//!
//! This module provides the `MarkdownWriter` struct which handles the actual
//! conversion of composite slides to Markdown text.
use crate::common::{CourseMetadata, Result};
use crate::presentation::CompositeSlide;
use super::config::MarkdownOptions;

/// Section heading for practical examples.
const EXAMPLES_HEADING: &str = "Practical Examples";
/// Section heading for interactive activities.
const ACTIVITY_HEADING: &str = "Interactive Activity";

/// Low-level writer for efficient Markdown generation.
pub(crate) struct MarkdownWriter {
    /// The output buffer
    buffer: String,
    /// Current options
    options: MarkdownOptions,
}

impl MarkdownWriter {
    /// Create a new writer with the given options.
    pub fn new(options: MarkdownOptions) -> Self {
        Self {
            buffer: String::with_capacity(1024),
            options,
        }
    }

    /// Write course metadata as YAML front matter.
    pub fn write_metadata(&mut self, metadata: &CourseMetadata) -> Result<()> {
        let front_matter = metadata.to_yaml_front_matter()?;
        self.buffer.push_str(&front_matter);
        Ok(())
    }

    /// Write one slide without a trailing newline.
    ///
    /// `number` is the 1-based position of the slide in its deck; it only
    /// shows up in the heading when slide numbering is enabled.
    pub fn write_slide(&mut self, slide: &CompositeSlide, number: Option<usize>) -> Result<()> {
        let title = slide.title.trim();
        match (number.filter(|_| self.options.number_slides), title.is_empty()) {
            (Some(n), true) => self.write_fmt(format_args!("# Slide {}", n))?,
            (Some(n), false) => self.write_fmt(format_args!("# Slide {}: {}", n, title))?,
            (None, true) => self.push_str("# Untitled slide"),
            (None, false) => self.write_fmt(format_args!("# {}", title))?,
        }

        self.write_block(&slide.main_content);
        if self.options.include_examples {
            self.write_section(EXAMPLES_HEADING, &slide.examples);
        }
        if self.options.include_activity {
            self.write_section(ACTIVITY_HEADING, &slide.interactive_activity);
        }
        Ok(())
    }

    /// Write a paragraph block; blank text writes nothing.
    fn write_block(&mut self, text: &str) {
        let text = text.trim();
        if !text.is_empty() {
            self.buffer.push_str("\n\n");
            self.buffer.push_str(text);
        }
    }

    /// Write a second-level section; blank text writes nothing.
    fn write_section(&mut self, heading: &str, text: &str) {
        let text = text.trim();
        if !text.is_empty() {
            self.buffer.push_str("\n\n## ");
            self.buffer.push_str(heading);
            self.write_block(text);
        }
    }

    /// Finish writing and return the generated Markdown.
    pub fn finish(self) -> String {
        self.buffer
    }

    /// Append text to the buffer.
    pub fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Append a single character to the buffer.
    pub fn push(&mut self, ch: char) {
        self.buffer.push(ch);
    }

    /// Write a formatted string to the buffer.
    pub fn write_fmt(&mut self, args: std::fmt::Arguments) -> Result<()> {
        use std::fmt::Write as FmtWrite;
        self.buffer.write_fmt(args)?;
        Ok(())
    }

    /// Reserve additional capacity in the buffer.
    pub fn reserve(&mut self, additional: usize) {
        self.buffer.reserve(additional);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide() -> CompositeSlide {
        CompositeSlide {
            title: "Cells".to_string(),
            main_content: "Cells divide.\n".to_string(),
            examples: "Skin healing".to_string(),
            interactive_activity: "Draw mitosis".to_string(),
            ..CompositeSlide::default()
        }
    }

    #[test]
    fn test_write_full_slide() {
        let mut writer = MarkdownWriter::new(MarkdownOptions::default());
        writer.write_slide(&slide(), Some(2)).unwrap();
        assert_eq!(
            writer.finish(),
            "# Slide 2: Cells\n\nCells divide.\n\n## Practical Examples\n\nSkin healing\n\n## Interactive Activity\n\nDraw mitosis"
        );
    }

    #[test]
    fn test_write_slide_without_numbering() {
        let options = MarkdownOptions::new().with_slide_numbers(false);
        let mut writer = MarkdownWriter::new(options);
        writer.write_slide(&slide(), Some(2)).unwrap();
        assert!(writer.finish().starts_with("# Cells\n\n"));
    }

    #[test]
    fn test_write_slide_skips_disabled_and_empty_sections() {
        let options = MarkdownOptions::new().with_activity(false);
        let mut writer = MarkdownWriter::new(options);
        let slide = CompositeSlide {
            examples: "   ".to_string(),
            ..slide()
        };
        writer.write_slide(&slide, None).unwrap();
        assert_eq!(writer.finish(), "# Cells\n\nCells divide.");
    }

    #[test]
    fn test_write_untitled_slide() {
        let mut writer = MarkdownWriter::new(MarkdownOptions::default());
        writer.write_slide(&CompositeSlide::default(), Some(1)).unwrap();
        writer.push('\n');
        writer.write_slide(&CompositeSlide::default(), None).unwrap();
        assert_eq!(writer.finish(), "# Slide 1\n# Untitled slide");
    }
}
