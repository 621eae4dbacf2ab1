//! Raw slide record types as delivered by the content service.

use super::de;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a raw slide record.
///
/// The content service hands out integer primary keys, but nothing in the
/// grouping engine depends on that, so string identifiers are accepted too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlideId {
    /// Numeric identifier
    Number(i64),
    /// String identifier
    Text(String),
    /// The record carried no usable identifier
    #[default]
    Missing,
}

impl SlideId {
    /// Whether the record carried a usable identifier.
    pub fn is_missing(&self) -> bool {
        matches!(self, SlideId::Missing)
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlideId::Number(n) => write!(f, "{}", n),
            SlideId::Text(s) => f.write_str(s),
            SlideId::Missing => f.write_str("<none>"),
        }
    }
}

impl From<i64> for SlideId {
    fn from(id: i64) -> Self {
        SlideId::Number(id)
    }
}

impl From<&str> for SlideId {
    fn from(id: &str) -> Self {
        SlideId::Text(id.to_string())
    }
}

/// A presentation hint value, forwarded verbatim to the display model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HintValue {
    /// Textual hint such as `"title-and-content"` or `"18px"`
    Text(String),
    /// Numeric hint such as a point size
    Number(serde_json::Number),
}

impl From<&str> for HintValue {
    fn from(value: &str) -> Self {
        HintValue::Text(value.to_string())
    }
}

impl From<i64> for HintValue {
    fn from(value: i64) -> Self {
        HintValue::Number(value.into())
    }
}

/// Presentation hints attached to a slide record.
///
/// The grouping engine never interprets these; the hints of the record that
/// opens a group are copied onto the composite slide.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresentationHints {
    #[serde(default, deserialize_with = "de::text", skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, deserialize_with = "de::hint", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<HintValue>,
    #[serde(default, deserialize_with = "de::hint", skip_serializing_if = "Option::is_none")]
    pub layout: Option<HintValue>,
}

impl PresentationHints {
    /// Check if any hint is present.
    pub fn is_empty(&self) -> bool {
        self.font_family.is_none() && self.font_size.is_none() && self.layout.is_none()
    }
}

/// One flat unit of AI-generated course content.
///
/// The `title` doubles as a structural tag: see
/// [`classify`](crate::grouping::classify) for how it is interpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSlideRecord {
    #[serde(default, deserialize_with = "de::slide_id")]
    pub id: SlideId,
    /// Position of the record within its course.
    #[serde(default, deserialize_with = "de::order")]
    pub order: i64,
    #[serde(default, deserialize_with = "de::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "de::content")]
    pub content: Option<String>,
    #[serde(flatten)]
    pub hints: PresentationHints,
}

impl RawSlideRecord {
    /// Create a record with a title and body text.
    pub fn new(order: i64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: SlideId::Number(order),
            order,
            title: Some(title.into()),
            content: Some(content.into()),
            hints: PresentationHints::default(),
        }
    }

    /// Replace the record identifier.
    pub fn with_id(mut self, id: impl Into<SlideId>) -> Self {
        self.id = id.into();
        self
    }

    /// Replace the presentation hints.
    pub fn with_hints(mut self, hints: PresentationHints) -> Self {
        self.hints = hints;
        self
    }

    /// Remove the body text.
    pub fn without_content(mut self) -> Self {
        self.content = None;
        self
    }
}
