//! Configuration for the grouping pass.

use serde::{Deserialize, Serialize};

/// What to do with a record whose title is missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingTitlePolicy {
    /// Reject the record; it contributes nothing to the output.
    #[default]
    Skip,
    /// Treat the title as an empty string, which classifies the record as a
    /// continuation of the open slide.
    Continuation,
}

/// Configuration options for grouping raw slide records.
///
/// # Examples
///
/// ```rust
/// use coursedeck::grouping::{GroupingOptions, MissingTitlePolicy};
///
/// let options = GroupingOptions::new()
///     .with_missing_title(MissingTitlePolicy::Continuation);
/// assert_eq!(options.missing_title, MissingTitlePolicy::Continuation);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingOptions {
    /// Handling of records without a title
    pub missing_title: MissingTitlePolicy,
}

impl GroupingOptions {
    /// Create a new `GroupingOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the policy for records without a title.
    #[inline]
    pub fn with_missing_title(mut self, policy: MissingTitlePolicy) -> Self {
        self.missing_title = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_options_default() {
        let options = GroupingOptions::default();
        assert_eq!(options.missing_title, MissingTitlePolicy::Skip);
    }

    #[test]
    fn test_grouping_options_deserialize() {
        let options: GroupingOptions =
            serde_json::from_str(r#"{"missing_title": "continuation"}"#).unwrap();
        assert_eq!(options.missing_title, MissingTitlePolicy::Continuation);

        let empty: GroupingOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, GroupingOptions::default());
    }
}
