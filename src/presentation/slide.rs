//! Composite slide: the grouped, display-ready unit of a course deck.

use crate::record::{PresentationHints, SlideId};
use serde::{Deserialize, Serialize};

/// A presentation slide assembled from one title-bearing record and the
/// examples, activity and continuation records that follow it.
///
/// Serializes with camelCase field names (`mainContent`,
/// `interactiveActivity`); the presentation hints keep the names they
/// arrived with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeSlide {
    /// Identifier of the record that opened the slide
    pub id: SlideId,
    /// Order of the record that opened the slide
    pub order: i64,
    /// Display title with structural markers removed
    pub title: String,
    /// Body text, newline-joined from every contributing record
    pub main_content: String,
    /// Worked examples, empty when the slide has none
    pub examples: String,
    /// Activity prompt, empty when the slide has none
    pub interactive_activity: String,
    /// Hints copied from the opening record
    #[serde(flatten)]
    pub hints: PresentationHints,
}

impl CompositeSlide {
    /// Whether the slide has practical examples.
    pub fn has_examples(&self) -> bool {
        !self.examples.is_empty()
    }

    /// Whether the slide has an interactive activity.
    pub fn has_activity(&self) -> bool {
        !self.interactive_activity.is_empty()
    }

    /// Plain text of every section, separated by blank lines.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coursedeck::presentation::CompositeSlide;
    ///
    /// let slide = CompositeSlide {
    ///     title: "Cells".to_string(),
    ///     main_content: "Cells divide.".to_string(),
    ///     ..CompositeSlide::default()
    /// };
    /// assert_eq!(slide.text(), "Cells\n\nCells divide.");
    /// ```
    pub fn text(&self) -> String {
        [
            self.title.as_str(),
            self.main_content.as_str(),
            self.examples.as_str(),
            self.interactive_activity.as_str(),
        ]
        .iter()
        .filter(|section| !section.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("\n\n")
    }
}
