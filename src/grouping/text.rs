//! Text cleanup applied while assembling composite slides.

use once_cell::sync::Lazy;
use regex::Regex;

// `Slide <n>: <title>`, optionally behind a `### ` heading marker
static SLIDE_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^(?:###\s+)?Slide\s+\d+\s*:\s*(.*)$")
        .expect("Failed to build slide heading pattern")
});

static CONTENT_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*\*\*Educational Content:\*\*")
        .expect("Failed to build content marker pattern")
});

const BOLD_MARKER: &str = "**";

/// Derive the display title of a title-bearing record.
///
/// The text after a `Slide <n>:` heading is preferred. Failing that, a
/// leading `### ` marker and surrounding `**` bold markers are stripped; a
/// title with neither is returned trimmed but otherwise unchanged.
///
/// # Examples
///
/// ```rust
/// use coursedeck::grouping::clean_title;
///
/// assert_eq!(clean_title("### Slide 1: Intro"), "Intro");
/// assert_eq!(clean_title("### **Neural Nets**"), "Neural Nets");
/// assert_eq!(clean_title("Slide deck overview"), "Slide deck overview");
/// ```
pub fn clean_title(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Some(caps) = SLIDE_HEADING.captures(trimmed) {
        let extracted = caps.get(1).map_or("", |m| m.as_str()).trim();
        if !extracted.is_empty() {
            return extracted.to_string();
        }
    }
    strip_markers(trimmed).to_string()
}

fn strip_markers(title: &str) -> &str {
    let mut text = title;
    if let Some(rest) = text.strip_prefix("###") {
        text = rest.trim_start();
    }
    if let Some(rest) = text.strip_prefix(BOLD_MARKER) {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix(BOLD_MARKER) {
        text = rest;
    }
    text.trim()
}

/// Strip a leading `**Educational Content:**` marker from slide body text.
pub fn strip_content_marker(content: &str) -> String {
    CONTENT_MARKER.replace(content, "").trim().to_string()
}

/// Build the interactive activity text of an activity record.
///
/// The prompt after the first colon of the title comes first, followed by
/// the record body on its own line.
pub fn activity_text(title: &str, content: Option<&str>) -> String {
    let prompt = title.split_once(':').map_or("", |(_, rest)| rest.trim());
    let body = content.map_or("", str::trim);
    match (prompt.is_empty(), body.is_empty()) {
        (false, false) => format!("{}\n{}", prompt, body),
        (false, true) => prompt.to_string(),
        (true, _) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_title_extracts_heading() {
        assert_eq!(clean_title("Slide 2: Supervised Learning"), "Supervised Learning");
        assert_eq!(clean_title("### Slide 10:   Gradient Descent  "), "Gradient Descent");
        assert_eq!(clean_title("Slide 3 : Spaced colon"), "Spaced colon");
    }

    #[test]
    fn test_clean_title_strips_markers() {
        assert_eq!(clean_title("### **Neural Nets**"), "Neural Nets");
        assert_eq!(clean_title("**Bold only**"), "Bold only");
        assert_eq!(clean_title("### Plain heading"), "Plain heading");
    }

    #[test]
    fn test_clean_title_falls_back_when_heading_is_empty() {
        assert_eq!(clean_title("Slide 4:"), "Slide 4:");
        assert_eq!(clean_title("### Slide 4:   "), "Slide 4:");
    }

    #[test]
    fn test_clean_title_keeps_unmatched_slide_titles() {
        assert_eq!(clean_title("Slide Two: Missing number"), "Slide Two: Missing number");
        assert_eq!(clean_title("**Slide 1: Bold wrapped**"), "Slide 1: Bold wrapped");
    }

    #[test]
    fn test_strip_content_marker() {
        assert_eq!(strip_content_marker("**Educational Content:** Cells divide."), "Cells divide.");
        assert_eq!(strip_content_marker("**educational content:**\nBody"), "Body");
        assert_eq!(strip_content_marker("Body"), "Body");
        assert_eq!(
            strip_content_marker("Intro **Educational Content:** inline"),
            "Intro **Educational Content:** inline"
        );
    }

    #[test]
    fn test_activity_text() {
        assert_eq!(
            activity_text("Interactive Activity: Pair up", Some("Discuss in pairs")),
            "Pair up\nDiscuss in pairs"
        );
        assert_eq!(activity_text("Interactive Activity", Some("Quiz")), "Quiz");
        assert_eq!(activity_text("Interactive Activity: Vote", None), "Vote");
        assert_eq!(activity_text("Interactive Activity", None), "");
        assert_eq!(activity_text("Interactive Activity: a: b", Some("")), "a: b");
    }
}
