use super::*;

#[test]
fn parse_hex_rgb_supports_short_and_long_forms() {
    assert_eq!(parse_hex_rgb("#ABC"), Some((170, 187, 204)));
    assert_eq!(parse_hex_rgb("  #A5F3FC "), Some((165, 243, 252)));
}

#[test]
fn parse_hex_rgb_rejects_invalid_inputs() {
    assert_eq!(parse_hex_rgb("A5F3FC"), None);
    assert_eq!(parse_hex_rgb("#12"), None);
    assert_eq!(parse_hex_rgb("#abcd"), None);
    assert_eq!(parse_hex_rgb("#12GG34"), None);
    assert_eq!(parse_hex_rgb("#가나"), None);
}

#[test]
fn logo_badge_color_is_canonical_lowercase() {
    assert_eq!(logo_badge_color("#A5F3FC"), "#a5f3fc");
    assert_eq!(logo_badge_color("#0F0"), "#00ff00");
}

#[test]
fn logo_badge_color_falls_back_for_non_hex_values() {
    assert_eq!(logo_badge_color("cyan"), FALLBACK_LOGO_COLOR);
    assert_eq!(logo_badge_color(""), FALLBACK_LOGO_COLOR);
}

#[test]
fn is_light_separates_pale_and_dark_tints() {
    assert!(is_light("#A5F3FC"));
    assert!(is_light("#ffffff"));
    assert!(!is_light("#1D2951"));
    assert!(!is_light("#000"));
}
