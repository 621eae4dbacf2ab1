/// Course-level metadata attached to a deck.
///
/// The content service knows which course a slide payload belongs to; this
/// information is carried alongside the grouped slides and rendered as YAML
/// front matter by the Markdown layer.
use serde::{Deserialize, Serialize};
#[cfg(feature = "markdown")]
use crate::common::Result;

/// Course metadata structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseMetadata {
    /// Course title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Subject area (e.g. "Computer Science")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Target grade or year level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_level: Option<String>,
    /// Teaching language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Teacher who generated the course
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Number of composite slides in the deck
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slide_count: Option<u32>,
}

impl CourseMetadata {
    /// Create metadata carrying only a course title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Check if the metadata contains any actual data.
    pub fn has_data(&self) -> bool {
        self.title.is_some()
            || self.subject.is_some()
            || self.grade_level.is_some()
            || self.language.is_some()
            || self.author.is_some()
            || self.slide_count.is_some()
    }

    /// Convert metadata to YAML front matter format.
    ///
    /// Returns a string containing the YAML front matter block,
    /// or an empty string if no metadata is available.
    #[cfg(feature = "markdown")]
    pub fn to_yaml_front_matter(&self) -> Result<String> {
        if !self.has_data() {
            return Ok(String::new());
        }

        let yaml_string = serde_saphyr::to_string(self).map_err(|e| {
            crate::common::Error::Yaml(format!("Failed to serialize course metadata: {}", e))
        })?;

        Ok(format!("---\n{}---\n\n", yaml_string))
    }
}
