//! Preview thumbnail resolution for classified primary media.
//!
//! Pure string transforms; no network calls. Video thumbnails point at the
//! platform's predictable endpoint, images are their own thumbnail, and
//! everything else degrades to no thumbnail so the caller can render a
//! type-specific fallback glyph.

use nuggets_content::{MediaKind, PrimaryMedia};
use regex::Regex;
use std::sync::LazyLock;

static YOUTUBE_SHORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtu\.be/([A-Za-z0-9_-]{6,})").unwrap());
static YOUTUBE_WATCH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtube\.com/watch\?(?:[^#\s]*&)?v=([A-Za-z0-9_-]{6,})").unwrap());
static YOUTUBE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtube\.com/(?:embed|shorts)/([A-Za-z0-9_-]{6,})").unwrap());

/// Derive a preview image URL for a primary media item, if one exists.
///
/// Rules evaluate in order, first match wins: an explicit thumbnail is used
/// as-is, YouTube media maps to the platform thumbnail endpoint, images are
/// their own thumbnail, everything else has none.
pub fn resolve_thumbnail(media: &PrimaryMedia) -> Option<String> {
    if let Some(thumbnail) = &media.thumbnail {
        if !thumbnail.trim().is_empty() {
            return Some(thumbnail.clone());
        }
    }

    match media.kind {
        MediaKind::Youtube => youtube_video_id(&media.url)
            .map(|id| format!("https://img.youtube.com/vi/{id}/hqdefault.jpg")),
        MediaKind::Image => Some(media.url.clone()),
        _ => None,
    }
}

/// Extract a YouTube video id from the URL shapes that occur in stored
/// records: `youtu.be/<id>`, `watch?v=<id>`, `embed/<id>`, `shorts/<id>`.
/// Malformed input yields `None`, never an error.
pub fn youtube_video_id(url: &str) -> Option<String> {
    for pattern in [&*YOUTUBE_SHORT, &*YOUTUBE_WATCH, &*YOUTUBE_PATH] {
        if let Some(captures) = pattern.captures(url) {
            return Some(captures[1].to_string());
        }
    }
    None
}

/// Host part of a URL, for fallback glyph labels on embed/link media.
/// Hand parse; malformed input yields `None`.
pub fn host_of(url: &str) -> Option<String> {
    let rest = url.split_once("//").map_or(url, |(_, rest)| rest);
    let host = rest.split(['/', '?', '#']).next()?.trim();
    let host = host.strip_prefix("www.").unwrap_or(host);
    if host.is_empty() || !host.contains('.') {
        return None;
    }
    Some(host.to_ascii_lowercase())
}
