//! Smooth scrolling to in-page sections.

/// Scroll the element with id `anchor` into view. Returns `false` when the
/// element is not on the current page.
pub fn scroll_to_section(anchor: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(anchor))
        else {
            return false;
        };
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = anchor;
        false
    }
}

/// Section id from a location hash (`"#about"` → `Some("about")`).
pub fn anchor_from_hash(hash: &str) -> Option<&str> {
    let anchor = hash.strip_prefix('#').unwrap_or(hash);
    (!anchor.is_empty()).then_some(anchor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_from_hash_strips_the_marker() {
        assert_eq!(anchor_from_hash("#about"), Some("about"));
        assert_eq!(anchor_from_hash("contact"), Some("contact"));
    }

    #[test]
    fn anchor_from_hash_empty_is_none() {
        assert_eq!(anchor_from_hash(""), None);
        assert_eq!(anchor_from_hash("#"), None);
    }

    #[test]
    fn scroll_is_unavailable_outside_the_browser() {
        assert!(!scroll_to_section("hero"));
    }
}
