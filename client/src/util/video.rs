//! YouTube id extraction and embed URL construction.
//!
//! DESIGN
//! ======
//! Stored video URLs are the admin's raw input. Every render site calls
//! [`embed_url`] and falls back to a "no video" placeholder on `None`, so a
//! bad link is never an error and never blocks the page.
//!
//! [`extract_video_id`] keeps the long-standing contract: the captured
//! segment is accepted only when it is exactly 11 characters, otherwise the
//! input comes back unchanged. A bare 11-character id therefore passes
//! through and is treated as already embeddable.

#[cfg(test)]
#[path = "video_test.rs"]
mod video_test;

use std::sync::OnceLock;

use regex::Regex;

/// Length of a YouTube video id.
pub const VIDEO_ID_LEN: usize = 11;

const EMBED_BASE: &str = "https://www.youtube-nocookie.com/embed";

/// Player parameter sets used across the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmbedStyle {
    /// Muted looping hero background without controls.
    Background,
    /// Gallery player with standard controls.
    Player,
    /// Showreel modal, starts playing on open.
    Autoplay,
    /// Admin list thumbnail.
    Preview,
}

fn id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Greedy prefix: when several markers appear, the last one wins.
    PATTERN.get_or_init(|| {
        Regex::new(r"^.*(youtu.be/|v/|u/[A-Za-z0-9_]/|embed/|watch\?v=|&v=)([^#&?]*).*")
            .expect("static video id pattern compiles")
    })
}

/// Pull the video id out of a watch, short, embed, `/v/` or `/u/` link.
///
/// Returns `""` for `""`, the id when the captured segment is exactly
/// 11 UTF-16 code units, and `url` unchanged otherwise.
pub fn extract_video_id(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    id_pattern()
        .captures(url)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
        // Length is measured in UTF-16 code units, as browsers count it.
        .filter(|id| id.encode_utf16().count() == VIDEO_ID_LEN)
        .unwrap_or(url)
        .to_owned()
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// The id to embed, or `None` when `url` does not yield a playable id.
pub fn embeddable_id(url: &str) -> Option<String> {
    let id = extract_video_id(url.trim());
    (id.len() == VIDEO_ID_LEN && id.chars().all(is_id_char)).then_some(id)
}

/// Interpolate an id into the player template for `style`.
pub fn embed_src(id: &str, style: EmbedStyle) -> String {
    match style {
        EmbedStyle::Background => format!(
            "{EMBED_BASE}/{id}?autoplay=1&mute=1&loop=1&playlist={id}&controls=0&modestbranding=1&rel=0&playsinline=1"
        ),
        EmbedStyle::Player => format!("{EMBED_BASE}/{id}?playsinline=1&modestbranding=1&rel=0&controls=1"),
        EmbedStyle::Autoplay => format!("{EMBED_BASE}/{id}?autoplay=1&playsinline=1"),
        EmbedStyle::Preview => format!("{EMBED_BASE}/{id}?playsinline=1"),
    }
}

/// Embed URL for a stored video link, or `None` for the placeholder.
pub fn embed_url(url: &str, style: EmbedStyle) -> Option<String> {
    embeddable_id(url).map(|id| embed_src(&id, style))
}
