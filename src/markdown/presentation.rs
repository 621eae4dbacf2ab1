//! ToMarkdown implementations for decks and composite slides.

use super::config::MarkdownOptions;
use super::traits::ToMarkdown;
use super::writer::MarkdownWriter;
use crate::common::Result;
use crate::presentation::{CompositeSlide, Deck};
use rayon::prelude::*;

/// Minimum number of slides to justify parallel processing overhead.
const PARALLEL_THRESHOLD: usize = 10;

/// Separator between consecutive slides.
const SLIDE_SEPARATOR: &str = "\n\n---\n\n";

impl ToMarkdown for Deck {
    fn to_markdown_with_options(&self, options: &MarkdownOptions) -> Result<String> {
        let mut writer = MarkdownWriter::new(options.clone());

        if options.include_metadata
            && let Some(metadata) = self.metadata()
        {
            let mut metadata = metadata.clone();
            metadata
                .slide_count
                .get_or_insert(u32::try_from(self.len()).unwrap_or(u32::MAX));
            writer.write_metadata(&metadata)?;
        }

        if self.is_empty() {
            writer.push_str(&options.empty_placeholder);
            writer.push('\n');
            return Ok(writer.finish());
        }

        if options.use_parallel && self.len() >= PARALLEL_THRESHOLD {
            // Render slides independently, then stitch them back in order
            let slide_strings: Vec<String> = self
                .slides()
                .par_iter()
                .enumerate()
                .map(|(i, slide)| -> Result<String> {
                    let mut slide_writer = MarkdownWriter::new(options.clone());
                    slide_writer.write_slide(slide, Some(i + 1))?;
                    Ok(slide_writer.finish())
                })
                .collect::<Result<Vec<String>>>()?;

            let total_size: usize = slide_strings.iter().map(String::len).sum();
            writer.reserve(total_size + slide_strings.len() * SLIDE_SEPARATOR.len());
            for (i, slide_md) in slide_strings.iter().enumerate() {
                if i > 0 {
                    writer.push_str(SLIDE_SEPARATOR);
                }
                writer.push_str(slide_md);
            }
        } else {
            for (i, slide) in self.iter().enumerate() {
                if i > 0 {
                    writer.push_str(SLIDE_SEPARATOR);
                }
                writer.write_slide(slide, Some(i + 1))?;
            }
        }

        writer.push('\n');
        Ok(writer.finish())
    }
}

impl ToMarkdown for CompositeSlide {
    fn to_markdown_with_options(&self, options: &MarkdownOptions) -> Result<String> {
        let mut writer = MarkdownWriter::new(options.clone());
        writer.write_slide(self, None)?;
        writer.push('\n');
        Ok(writer.finish())
    }
}
