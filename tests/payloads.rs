//! End-to-end behaviour from JSON payloads to rendered decks.

#![cfg(feature = "markdown")]

use coursedeck::markdown::{MarkdownOptions, ToMarkdown};
use coursedeck::record::{HintValue, SlideId, parse_records_reader};
use coursedeck::{CourseMetadata, Deck, Error, GroupingOptions, MissingTitlePolicy, parse_records};
use std::io::Write;

const COURSE_PAYLOAD: &str = r####"{
    "count": 5,
    "next": null,
    "results": [
        {"id": 104, "order": 4, "title": "Interactive Activity: Build a model", "content": ["Gather clay.", "Shape the layers."]},
        {"id": 101, "order": 1, "title": "### Slide 1: Earth's Layers", "content": "**Educational Content:** Crust, mantle, core.", "font_family": "Inter", "font_size": 22, "layout": "title-and-content"},
        {"id": 102, "order": "2", "title": "Practical Examples", "content": "  Volcanoes expose the mantle.  "},
        {"id": 103, "order": 3, "title": "Temperature", "content": "The core is hot."},
        {"id": 105, "order": 5, "title": null, "content": "stray text"}
    ]
}"####;

#[test]
fn test_course_payload_groups_into_one_slide() {
    let records = parse_records(COURSE_PAYLOAD).unwrap();
    assert_eq!(records.len(), 5);

    let deck = Deck::from_records(&records);
    assert_eq!(deck.len(), 1);
    assert_eq!(deck.report().untitled, 1);

    let slide = deck.get(0).unwrap();
    assert_eq!(slide.id, SlideId::Number(101));
    assert_eq!(slide.title, "Earth's Layers");
    assert_eq!(slide.main_content, "Crust, mantle, core.\nTemperature\nThe core is hot.");
    assert_eq!(slide.examples, "Volcanoes expose the mantle.");
    assert_eq!(slide.interactive_activity, "Build a model\nGather clay.\nShape the layers.");
    assert_eq!(slide.hints.font_family.as_deref(), Some("Inter"));
    assert_eq!(slide.hints.font_size, Some(HintValue::from(22)));
}

#[test]
fn test_untitled_record_as_continuation() {
    let records = parse_records(COURSE_PAYLOAD).unwrap();
    let options = GroupingOptions::new().with_missing_title(MissingTitlePolicy::Continuation);
    let deck = Deck::from_records_with_options(&records, &options);

    let slide = deck.get(0).unwrap();
    assert!(slide.main_content.ends_with("The core is hot.\n\nstray text"));
    assert_eq!(deck.report().dropped(), 0);
}

#[test]
fn test_composite_slide_json_shape() {
    let deck = Deck::from_json(COURSE_PAYLOAD).unwrap();
    let value = serde_json::to_value(deck.slides()).unwrap();

    let slide = &value[0];
    assert_eq!(slide["id"], 101);
    assert_eq!(slide["title"], "Earth's Layers");
    assert_eq!(slide["examples"], "Volcanoes expose the mantle.");
    assert!(slide["mainContent"].is_string());
    assert!(slide["interactiveActivity"].is_string());
    assert_eq!(slide["layout"], "title-and-content");
}

#[test]
fn test_payload_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(COURSE_PAYLOAD.as_bytes()).unwrap();

    let reader = std::fs::File::open(file.path()).unwrap();
    let records = parse_records_reader(reader).unwrap();
    assert_eq!(records.len(), 5);
}

#[test]
fn test_invalid_payloads() {
    assert!(matches!(parse_records("not json"), Err(Error::Json(_))));
    assert!(matches!(parse_records("\"text\""), Err(Error::InvalidPayload(_))));
    assert!(matches!(parse_records(r#"{"detail": "Not found."}"#), Err(Error::InvalidPayload(_))));
}

#[test]
fn test_empty_payload_renders_neutral_state() {
    let deck = Deck::from_json("[]").unwrap();
    assert!(deck.is_empty());
    assert_eq!(deck.to_markdown().unwrap(), "_No content available._\n");
}

#[test]
fn test_rendered_course() {
    let deck = Deck::from_json(COURSE_PAYLOAD)
        .unwrap()
        .with_metadata(CourseMetadata {
            subject: Some("Geology".to_string()),
            ..CourseMetadata::titled("Planet Earth")
        });

    let markdown = deck
        .to_markdown_with_options(&MarkdownOptions::new().with_metadata(true))
        .unwrap();

    assert!(markdown.starts_with("---\n"));
    assert!(markdown.contains("Planet Earth"));
    assert!(markdown.contains("# Slide 1: Earth's Layers\n\nCrust, mantle, core."));
    assert!(markdown.contains("## Practical Examples\n\nVolcanoes expose the mantle."));
    assert!(markdown.contains("## Interactive Activity\n\nBuild a model\nGather clay."));
    assert!(markdown.ends_with("Shape the layers.\n"));
}
