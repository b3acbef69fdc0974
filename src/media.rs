//! Media items and extension-based kind classification.
//!
//! A [`MediaItem`] is one entry of the portfolio catalog: where the asset
//! lives, which category it belongs to, and what to call it. Whether it is a
//! photo or a video is never stored; it is derived from the URL on demand by
//! [`classify_kind`].
//!
//! ## Classification Is by Extension Only
//!
//! `clip.MP4` is a video, `photo.jpeg` is an image, and a JPEG renamed to
//! `.mov` is (wrongly) a video. There is no content sniffing and no I/O; the
//! catalog author is trusted to name files correctly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Suffixes (lowercase, with dot) that mark a URL as a video.
pub const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".mov", ".webm", ".avi"];

/// Whether an item renders as a still image or a playable video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Verb shown on hover in the thumbnail grid ("Click to view").
    pub fn action(self) -> &'static str {
        match self {
            MediaKind::Image => "view",
            MediaKind::Video => "play",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => f.write_str("image"),
            MediaKind::Video => f.write_str("video"),
        }
    }
}

/// Classify a URL as video or image by its file extension.
///
/// Matching is a case-insensitive suffix test against [`VIDEO_EXTENSIONS`];
/// anything else, including URLs with no extension at all, is an image.
pub fn classify_kind(url: &str) -> MediaKind {
    let lower = url.to_ascii_lowercase();
    if VIDEO_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
        MediaKind::Video
    } else {
        MediaKind::Image
    }
}

/// One entry in the portfolio catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MediaItem {
    /// Location of the asset, e.g. `/images/photography/8.jpeg`.
    pub url: String,
    /// Category id. Never the `all` sentinel.
    pub category: String,
    /// Display title shown in the grid overlay.
    pub title: String,
}

impl MediaItem {
    pub fn new(
        url: impl Into<String>,
        category: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            category: category.into(),
            title: title.into(),
        }
    }

    pub fn kind(&self) -> MediaKind {
        classify_kind(&self.url)
    }

    pub fn is_video(&self) -> bool {
        self.kind() == MediaKind::Video
    }
}
