//! An ordered deck of composite slides for one course.

use super::slide::CompositeSlide;
use crate::common::{CourseMetadata, Result};
use crate::grouping::{GroupingOptions, GroupingReport, group_slides_with_options};
use crate::record::{RawSlideRecord, parse_records};
use serde::Serialize;

/// The grouped slides of one course, ready for paginated display.
///
/// An empty deck is a valid state: the display shows a neutral "no content"
/// view rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Deck {
    slides: Vec<CompositeSlide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<CourseMetadata>,
    #[serde(skip)]
    report: GroupingReport,
}

impl Deck {
    /// Group raw records into a deck with default options.
    pub fn from_records(records: &[RawSlideRecord]) -> Self {
        Self::from_records_with_options(records, &GroupingOptions::default())
    }

    /// Group raw records into a deck.
    pub fn from_records_with_options(records: &[RawSlideRecord], options: &GroupingOptions) -> Self {
        let grouping = group_slides_with_options(records, options);
        Self {
            slides: grouping.slides,
            metadata: None,
            report: grouping.report,
        }
    }

    /// Parse a JSON slide payload and group it into a deck.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coursedeck::Deck;
    ///
    /// let deck = Deck::from_json(r#"[{"order": 1, "title": "Slide 1: Atoms", "content": "Tiny."}]"#)?;
    /// assert_eq!(deck.len(), 1);
    /// assert_eq!(deck.get(0).map(|s| s.title.as_str()), Some("Atoms"));
    /// # Ok::<(), coursedeck::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let records = parse_records(json)?;
        Ok(Self::from_records(&records))
    }

    /// Wrap already-grouped slides.
    pub fn from_slides(slides: Vec<CompositeSlide>) -> Self {
        let report = GroupingReport {
            input_records: slides.len(),
            slides: slides.len(),
            ..GroupingReport::default()
        };
        Self {
            slides,
            metadata: None,
            report,
        }
    }

    /// Attach course metadata.
    pub fn with_metadata(mut self, metadata: CourseMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slide at a zero-based index.
    pub fn get(&self, index: usize) -> Option<&CompositeSlide> {
        self.slides.get(index)
    }

    /// Iterate over the slides in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, CompositeSlide> {
        self.slides.iter()
    }

    /// All slides in display order.
    pub fn slides(&self) -> &[CompositeSlide] {
        &self.slides
    }

    /// Consume the deck, returning its slides.
    pub fn into_slides(self) -> Vec<CompositeSlide> {
        self.slides
    }

    /// Course metadata, if attached.
    pub fn metadata(&self) -> Option<&CourseMetadata> {
        self.metadata.as_ref()
    }

    /// Report of the grouping pass that built the deck.
    pub fn report(&self) -> &GroupingReport {
        &self.report
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a CompositeSlide;
    type IntoIter = std::slice::Iter<'a, CompositeSlide>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::MissingTitlePolicy;

    #[test]
    fn test_empty_deck() {
        let deck = Deck::from_records(&[]);
        assert!(deck.is_empty());
        assert_eq!(deck.len(), 0);
        assert!(deck.get(0).is_none());
        assert!(deck.metadata().is_none());
    }

    #[test]
    fn test_deck_from_json_with_report() {
        let deck = Deck::from_json(
            r#"[
                {"order": 1, "title": "Warm-up", "content": "orphan"},
                {"order": 2, "title": "Slide 1: A", "content": "a"},
                {"order": 3, "title": "Slide 2: B", "content": "b"}
            ]"#,
        )
        .unwrap();

        assert_eq!(deck.len(), 2);
        let titles: Vec<&str> = deck.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["A", "B"]);
        assert_eq!(deck.report().orphaned, 1);
    }

    #[test]
    fn test_deck_with_options() {
        let mut untitled = RawSlideRecord::new(2, "", "more");
        untitled.title = None;
        let records = vec![RawSlideRecord::new(1, "Slide 1: A", "a"), untitled];

        let options = GroupingOptions::new().with_missing_title(MissingTitlePolicy::Continuation);
        let deck = Deck::from_records_with_options(&records, &options);
        assert_eq!(deck.slides()[0].main_content, "a\n\nmore");
    }

    #[test]
    fn test_deck_serializes_slides_and_metadata() {
        let deck = Deck::from_records(&[RawSlideRecord::new(1, "Slide 1: A", "a")])
            .with_metadata(CourseMetadata::titled("Chemistry"));

        let value = serde_json::to_value(&deck).unwrap();
        assert_eq!(value["slides"][0]["title"], "A");
        assert_eq!(value["metadata"]["title"], "Chemistry");
        assert!(value.get("report").is_none());
    }

    #[test]
    fn test_into_slides() {
        let deck = Deck::from_slides(vec![CompositeSlide::default()]);
        assert_eq!(deck.report().slides, 1);
        assert_eq!(deck.into_slides().len(), 1);
    }
}
