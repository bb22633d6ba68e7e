//! Reusable text widgets - building blocks without business logic
//!
//! Widgets must not import from `crate::app`; components and pages compose
//! them with application state.

mod section_header;
mod stars;
mod toast;

pub use section_header::{empty_state, section_header};
pub use stars::stars;
pub use toast::Toast;

/// Unix seconds as a calendar date, `-` when out of range
pub fn format_date(timestamp: i64) -> String {
    chrono::DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates() {
        assert_eq!(format_date(0), "1970-01-01");
        assert_eq!(format_date(1_705_276_800), "2024-01-15");
        assert_eq!(format_date(i64::MAX), "-");
    }
}
