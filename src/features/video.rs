//! Video platform identifiers
//!
//! Songs point at externally hosted videos. The 11-character video id is
//! pulled out of one of five URL shapes:
//!
//! - `watch?v=<id>`
//! - `youtu.be/<id>`
//! - `embed/<id>`
//! - `/u/<c>/<id>` (user uploads)
//! - `v/<id>`
//!
//! Anything else has no id and cannot be played.

use once_cell::sync::Lazy;
use regex::Regex;

/// Length of a valid video identifier
pub const VIDEO_ID_LEN: usize = 11;

static VIDEO_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^.*((youtu.be/)|(v/)|(/u/\w/)|(embed/)|(watch\?))\??v?=?([^#&?]*).*")
        .expect("video url pattern is valid")
});

/// Extract the video id from a URL, `None` when the shape is unrecognized
/// or the token is not exactly 11 characters
pub fn extract_video_id(url: &str) -> Option<String> {
    let caps = VIDEO_URL.captures(url)?;
    let id = caps.get(7)?.as_str();
    if id.chars().count() == VIDEO_ID_LEN {
        Some(id.to_string())
    } else {
        None
    }
}

/// Medium-quality thumbnail for a video id
pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/mqdefault.jpg", video_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_url() {
        assert_eq!(
            extract_video_id("watch?v=fJ9rUzIMcZQ").as_deref(),
            Some("fJ9rUzIMcZQ")
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=fJ9rUzIMcZQ").as_deref(),
            Some("fJ9rUzIMcZQ")
        );
    }

    #[test]
    fn short_link() {
        assert_eq!(
            extract_video_id("youtu.be/fJ9rUzIMcZQ").as_deref(),
            Some("fJ9rUzIMcZQ")
        );
        assert_eq!(
            extract_video_id("https://youtu.be/fJ9rUzIMcZQ?t=42").as_deref(),
            Some("fJ9rUzIMcZQ")
        );
    }

    #[test]
    fn embed_v_and_user_upload_forms() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/QkF3oxziUI4").as_deref(),
            Some("QkF3oxziUI4")
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/v/09839DpTctU?version=3").as_deref(),
            Some("09839DpTctU")
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/user/someone#p/u/1/hTWKbfoikeg")
                .as_deref(),
            Some("hTWKbfoikeg")
        );
    }

    #[test]
    fn extra_query_parameters_are_ignored() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=Zi_XLOBDo_Y&list=RD").as_deref(),
            Some("Zi_XLOBDo_Y")
        );
    }

    #[test]
    fn unrecognized_urls_have_no_id() {
        assert_eq!(extract_video_id("not-a-url"), None);
        assert_eq!(extract_video_id(""), None);
        assert_eq!(extract_video_id("https://example.com/song.mp3"), None);
    }

    #[test]
    fn wrong_length_token_is_rejected() {
        assert_eq!(extract_video_id("https://youtu.be/abc"), None);
        assert_eq!(extract_video_id("https://youtu.be/fJ9rUzIMcZQxyz"), None);
    }

    #[test]
    fn thumbnail_uses_video_id() {
        assert_eq!(
            thumbnail_url("fJ9rUzIMcZQ"),
            "https://img.youtube.com/vi/fJ9rUzIMcZQ/mqdefault.jpg"
        );
    }
}
