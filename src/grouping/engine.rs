//! The grouping fold over sorted raw slide records.

use super::classify::{RecordKind, classify};
use super::options::{GroupingOptions, MissingTitlePolicy};
use super::report::GroupingReport;
use super::text::{activity_text, clean_title, strip_content_marker};
use crate::presentation::CompositeSlide;
use crate::record::RawSlideRecord;
use tracing::trace;

/// Composite slides together with the report of the pass that built them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grouping {
    pub slides: Vec<CompositeSlide>,
    pub report: GroupingReport,
}

/// State of the single left-to-right pass.
enum GroupState {
    /// No title-bearing record seen yet
    Closed,
    /// A slide is being assembled
    Open(CompositeSlide),
}

impl GroupState {
    fn into_slide(self) -> Option<CompositeSlide> {
        match self {
            GroupState::Closed => None,
            GroupState::Open(slide) => Some(slide),
        }
    }
}

/// Group raw slide records into composite slides with default options.
///
/// The input is never mutated. Records are ordered by `order`, with their
/// position in `records` breaking ties.
///
/// # Examples
///
/// ```rust
/// use coursedeck::grouping::group_slides;
/// use coursedeck::record::RawSlideRecord;
///
/// let records = vec![
///     RawSlideRecord::new(1, "### Slide 1: Photosynthesis", "**Educational Content:** Plants make sugar."),
///     RawSlideRecord::new(2, "Practical Examples", "A leaf in sunlight."),
///     RawSlideRecord::new(3, "Interactive Activity: Sketch it", "Draw a chloroplast."),
/// ];
///
/// let slides = group_slides(&records);
/// assert_eq!(slides.len(), 1);
/// assert_eq!(slides[0].title, "Photosynthesis");
/// assert_eq!(slides[0].main_content, "Plants make sugar.");
/// assert_eq!(slides[0].examples, "A leaf in sunlight.");
/// assert_eq!(slides[0].interactive_activity, "Sketch it\nDraw a chloroplast.");
/// ```
pub fn group_slides(records: &[RawSlideRecord]) -> Vec<CompositeSlide> {
    group_slides_with_options(records, &GroupingOptions::default()).slides
}

/// Group raw slide records into composite slides.
///
/// The pass is total: records that cannot contribute are dropped and
/// counted in the returned [`GroupingReport`], never reported as errors.
pub fn group_slides_with_options(
    records: &[RawSlideRecord],
    options: &GroupingOptions,
) -> Grouping {
    let mut sorted: Vec<&RawSlideRecord> = records.iter().collect();
    // Stable: equal orders keep their input positions.
    sorted.sort_by_key(|record| record.order);

    let mut report = GroupingReport::new(records.len());
    let (state, mut slides) = sorted.into_iter().fold(
        (GroupState::Closed, Vec::new()),
        |(state, mut slides), record| {
            let state = step(state, &mut slides, record, options, &mut report);
            (state, slides)
        },
    );
    if let Some(slide) = state.into_slide() {
        slides.push(slide);
    }

    report.slides = slides.len();
    report.log();
    Grouping { slides, report }
}

fn step(
    state: GroupState,
    slides: &mut Vec<CompositeSlide>,
    record: &RawSlideRecord,
    options: &GroupingOptions,
    report: &mut GroupingReport,
) -> GroupState {
    let title = match (record.title.as_deref(), options.missing_title) {
        (Some(title), _) => title,
        (None, MissingTitlePolicy::Continuation) => "",
        (None, MissingTitlePolicy::Skip) => {
            report.untitled += 1;
            trace!(id = %record.id, order = record.order, "skipping slide record without a title");
            return state;
        },
    };

    match (classify(title), state) {
        (RecordKind::TitleBearing, state) => {
            slides.extend(state.into_slide());
            GroupState::Open(open_slide(record, title))
        },
        (kind, GroupState::Open(mut slide)) => {
            absorb(&mut slide, kind, title, record.content.as_deref());
            GroupState::Open(slide)
        },
        (kind, GroupState::Closed) => {
            report.orphaned += 1;
            trace!(id = %record.id, ?kind, "no open slide for record");
            GroupState::Closed
        },
    }
}

fn open_slide(record: &RawSlideRecord, title: &str) -> CompositeSlide {
    CompositeSlide {
        id: record.id.clone(),
        order: record.order,
        title: clean_title(title),
        main_content: record
            .content
            .as_deref()
            .map(strip_content_marker)
            .unwrap_or_default(),
        examples: String::new(),
        interactive_activity: String::new(),
        hints: record.hints.clone(),
    }
}

fn absorb(slide: &mut CompositeSlide, kind: RecordKind, title: &str, content: Option<&str>) {
    match kind {
        RecordKind::Examples => {
            slide.examples = content.map_or_else(String::new, |c| c.trim().to_string());
        },
        RecordKind::InteractiveActivity => {
            slide.interactive_activity = activity_text(title, content);
        },
        // Title-bearing records never reach here; they open a new slide.
        _ => {
            if !slide.main_content.is_empty() {
                slide.main_content.push('\n');
            }
            slide.main_content.push_str(title);
            slide.main_content.push('\n');
            slide.main_content.push_str(content.unwrap_or_default());
        },
    }
}
