//! Video reference resolution
//!
//! Extracts the 11-character identifier from whatever the user typed into the
//! search box or the URL box. Unrecognised input is the common case (plain
//! search text), so resolution reports absence with `None` instead of an error.
//!
//! Recognised markers, scanned as one alternation:
//! - `youtu?be/` (short-link host, any single character in place of the dot)
//! - `v/`
//! - `u/<word char>/`
//! - `embed/`
//! - `watch?v=`
//! - `&v=`
//!
//! The leftmost marker wins. The candidate runs up to the next `#`, `&` or `?`
//! and is accepted only if it is exactly 11 characters long.

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use crate::core::models::{AppError, AppResult, VideoReference, VIDEO_ID_LEN};

const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

fn marker_regex() -> &'static Regex {
    static MARKER_RE: OnceLock<Regex> = OnceLock::new();
    MARKER_RE.get_or_init(|| {
        Regex::new(
            r"(youtu[^\n\r\x{2028}\x{2029}]be/|v/|u/[0-9A-Za-z_]/|embed/|watch\?v=|&v=)([^#&?]*)",
        )
        .expect("marker pattern is valid")
    })
}

/// Resolve free text into a video reference.
///
/// The input is used as given; callers trim it first if they want to.
pub fn resolve(input: &str) -> Option<VideoReference> {
    let captures = marker_regex().captures(input)?;
    let marker = captures.get(1)?;

    // Markers only count on the first line.
    let first_line_end = input.find(&LINE_TERMINATORS[..]).unwrap_or(input.len());
    if marker.start() >= first_line_end {
        return None;
    }

    let candidate = captures.get(2).map_or("", |m| m.as_str());
    if candidate.chars().count() != VIDEO_ID_LEN {
        debug!(
            "Marker {:?} found but candidate {:?} is not {} characters",
            marker.as_str(),
            candidate,
            VIDEO_ID_LEN
        );
        return None;
    }

    debug!("Resolved video id {} via marker {:?}", candidate, marker.as_str());
    Some(VideoReference::from_candidate(candidate))
}

/// Like [`resolve`], but turns absence into [`AppError::NotAVideoReference`].
pub fn resolve_or_error(input: &str) -> AppResult<VideoReference> {
    resolve(input).ok_or_else(|| AppError::NotAVideoReference(input.to_string()))
}
