//! Full-bleed hero with the looping showreel background.

use leptos::prelude::*;

use crate::components::video_frame::VideoFrame;
use crate::state::BrowserContent;
use crate::state::ui::UiState;
use crate::util::video::EmbedStyle;

#[component]
pub fn Hero() -> impl IntoView {
    let content = expect_context::<RwSignal<BrowserContent>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let hero_url = Signal::derive(move || content.with(|c| c.settings().hero_video_url.clone()));

    view! {
        <section id="hero" class="hero">
            <div class="hero__video">
                <VideoFrame url=hero_url style=EmbedStyle::Background title="Hero Showreel"/>
            </div>
            <div class="hero__overlay">
                <button class="hero__play" on:click=move |_| ui.update(|u| u.showreel_open = true)>
                    <span class="hero__play-icon">"▶"</span>
                    <span class="hero__play-label">"Watch Showreel"</span>
                </button>
            </div>
        </section>
    }
}
