//! Logo color normalization for the fallback navbar badge.
//!
//! `logoColor` is free text in the settings document; only the render
//! boundary interprets it.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Badge tint used when the stored color is not a hex color.
pub const FALLBACK_LOGO_COLOR: &str = "#a5f3fc";

/// Parse `#RGB` or `#RRGGBB` into channels.
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut digits = hex.chars().map(|c| channel(&c.to_string().repeat(2)));
            Some((digits.next()??, digits.next()??, digits.next()??))
        }
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => None,
    }
}

/// Canonical lowercase `#rrggbb` for the badge, or the fallback tint.
pub fn logo_badge_color(raw: &str) -> String {
    parse_hex_rgb(raw).map_or_else(
        || FALLBACK_LOGO_COLOR.to_owned(),
        |(r, g, b)| format!("#{r:02x}{g:02x}{b:02x}"),
    )
}

/// Perceived brightness check used to pick badge text color.
pub fn is_light(raw: &str) -> bool {
    let (r, g, b) = parse_hex_rgb(raw).unwrap_or((0xa5, 0xf3, 0xfc));
    let luma = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    luma >= 128_000
}
