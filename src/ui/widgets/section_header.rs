//! Section header widget
//!
//! Displays a section title with an optional item count.

/// `Title` or `Title (count)`
pub fn section_header(title: &str, count: Option<usize>) -> String {
    match count {
        Some(count) => format!("{} ({})", title, count),
        None => title.to_string(),
    }
}

/// Two-line placeholder shown instead of an empty list
pub fn empty_state(heading: &str, hint: &str) -> String {
    format!("  {}\n  {}", heading, hint)
}
