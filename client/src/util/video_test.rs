use super::*;

const ID: &str = "dQw4w9WgXcQ";

// =============================================================
// extract_video_id
// =============================================================

#[test]
fn every_supported_shape_yields_the_embed_id() {
    let canonical = extract_video_id(&format!("https://www.youtube.com/embed/{ID}"));
    assert_eq!(canonical, ID);

    let shapes = [
        format!("https://www.youtube.com/watch?v={ID}"),
        format!("https://youtube.com/watch?v={ID}&t=42s"),
        format!("https://www.youtube.com/watch?feature=share&v={ID}"),
        format!("https://youtu.be/{ID}"),
        format!("https://youtu.be/{ID}?si=abcdef"),
        format!("https://www.youtube.com/v/{ID}?version=3"),
        format!("https://www.youtube.com/user/Studio#p/u/1/{ID}"),
        format!("https://www.youtube-nocookie.com/embed/{ID}?autoplay=1"),
    ];
    for url in shapes {
        assert_eq!(extract_video_id(&url), canonical, "{url}");
    }
}

#[test]
fn empty_input_yields_empty_output() {
    assert_eq!(extract_video_id(""), "");
}

#[test]
fn short_trailing_segment_returns_input_unchanged() {
    let url = "https://www.youtube.com/watch?v=abc123";
    assert_eq!(extract_video_id(url), url);
    let ten = "https://youtu.be/0123456789";
    assert_eq!(extract_video_id(ten), ten);
}

#[test]
fn long_trailing_segment_returns_input_unchanged() {
    let url = "https://youtu.be/0123456789AB";
    assert_eq!(extract_video_id(url), url);
}

#[test]
fn unrecognized_url_returns_input_unchanged() {
    let url = "https://vimeo.com/123456789";
    assert_eq!(extract_video_id(url), url);
}

#[test]
fn segment_length_counts_utf16_units() {
    // Nine ASCII chars plus one astral char: ten scalars, eleven UTF-16 units.
    let url = "https://youtu.be/abcdefghi\u{1F600}";
    assert_eq!(extract_video_id(url), "abcdefghi\u{1F600}");
    assert_eq!(embeddable_id(url), None);

    // Ten ASCII chars plus "é": eleven scalars and eleven units.
    assert_eq!(extract_video_id("https://youtu.be/abcdefghij\u{e9}"), "abcdefghij\u{e9}");

    // Ten ASCII plus one astral char: eleven scalars but twelve units.
    let twelve = "https://youtu.be/abcdefghij\u{1F600}";
    assert_eq!(extract_video_id(twelve), twelve);
}

#[test]
fn bare_eleven_char_id_passes_through() {
    assert_eq!(extract_video_id(ID), ID);
}

#[test]
fn placeholder_default_links_are_not_extracted() {
    let url = "https://www.youtube.com/watch?v=실제_영상_ID_1";
    assert_eq!(extract_video_id(url), url);
}

// =============================================================
// embeddable_id / embed_url
// =============================================================

#[test]
fn embeddable_id_accepts_extracted_and_bare_ids() {
    assert_eq!(embeddable_id(&format!("https://youtu.be/{ID}")), Some(ID.to_owned()));
    assert_eq!(embeddable_id(ID), Some(ID.to_owned()));
    assert_eq!(embeddable_id(&format!("  https://youtu.be/{ID} ")), Some(ID.to_owned()));
}

#[test]
fn embeddable_id_rejects_fallback_values() {
    assert_eq!(embeddable_id(""), None);
    assert_eq!(embeddable_id("https://www.youtube.com/watch?v=abc"), None);
    assert_eq!(embeddable_id("https://www.youtube.com/watch?v=실제_메인_쇼릴_ID"), None);
    // Eleven characters, but not from the id alphabet.
    assert_eq!(embeddable_id("example.com"), None);
}

#[test]
fn background_embed_loops_muted_without_controls() {
    let src = embed_src(ID, EmbedStyle::Background);
    assert_eq!(
        src,
        format!(
            "https://www.youtube-nocookie.com/embed/{ID}?autoplay=1&mute=1&loop=1&playlist={ID}&controls=0&modestbranding=1&rel=0&playsinline=1"
        )
    );
}

#[test]
fn player_embed_shows_controls() {
    let src = embed_src(ID, EmbedStyle::Player);
    assert!(src.ends_with("?playsinline=1&modestbranding=1&rel=0&controls=1"));
    assert!(!src.contains("autoplay"));
}

#[test]
fn embed_url_is_none_for_placeholder_cases() {
    assert_eq!(embed_url("", EmbedStyle::Player), None);
    assert_eq!(embed_url("not a video", EmbedStyle::Autoplay), None);
    assert_eq!(
        embed_url(&format!("https://youtu.be/{ID}"), EmbedStyle::Preview),
        Some(format!("https://www.youtube-nocookie.com/embed/{ID}?playsinline=1"))
    );
}
