//! Showreel player modal opened from the hero and about sections.

use leptos::prelude::*;

use crate::components::video_frame::VideoFrame;
use crate::state::BrowserContent;
use crate::state::ui::UiState;
use crate::util::video::EmbedStyle;

#[component]
pub fn ShowreelModal() -> impl IntoView {
    let content = expect_context::<RwSignal<BrowserContent>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let hero_url = Signal::derive(move || content.with(|c| c.settings().hero_video_url.clone()));
    let close = move || ui.update(|u| u.showreel_open = false);

    view! {
        <Show when=move || ui.with(|u| u.showreel_open)>
            <div class="dialog-backdrop dialog-backdrop--dark" on:click=move |_| close()>
                <div class="dialog dialog--video" on:click=move |ev| ev.stop_propagation()>
                    <button class="dialog__close" on:click=move |_| close()>"✕"</button>
                    <VideoFrame
                        url=hero_url
                        style=EmbedStyle::Autoplay
                        title="YouTube video player"
                        placeholder="영상이 등록되지 않았습니다."
                    />
                </div>
            </div>
        </Show>
    }
}
