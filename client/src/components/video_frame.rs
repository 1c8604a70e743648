//! Embedded YouTube player with a placeholder for unusable links.

use leptos::prelude::*;

use crate::util::video::{EmbedStyle, embed_url};

const IFRAME_ALLOW: &str = "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

/// Renders an iframe when `url` yields an embeddable id, else `placeholder`.
#[component]
pub fn VideoFrame(
    #[prop(into)] url: Signal<String>,
    style: EmbedStyle,
    #[prop(into)] title: String,
    #[prop(default = "No Video Registered")] placeholder: &'static str,
) -> impl IntoView {
    let src = Memo::new(move |_| embed_url(&url.get(), style));

    move || match src.get() {
        Some(src) => view! {
            <iframe
                class="video-frame"
                src=src
                title=title.clone()
                allow=IFRAME_ALLOW
                allowfullscreen=true
                referrerpolicy="strict-origin-when-cross-origin"
            ></iframe>
        }
        .attr("frameborder", "0")
        .into_any(),
        None => view! { <div class="video-frame video-frame--empty">{placeholder}</div> }.into_any(),
    }
}
