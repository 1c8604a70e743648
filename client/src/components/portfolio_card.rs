//! One project in the public gallery.

use leptos::prelude::*;

use crate::components::video_frame::VideoFrame;
use crate::model::content::ordinal;
use crate::model::portfolio::PortfolioEntry;
use crate::util::video::EmbedStyle;

/// Gallery card. Odd positions mirror the layout.
#[component]
pub fn PortfolioCard(index: usize, entry: PortfolioEntry) -> impl IntoView {
    let class = if index % 2 == 0 { "work" } else { "work work--reverse" };
    let PortfolioEntry { title, category, description, video_url, points, purpose, .. } = entry;

    view! {
        <article class=class>
            <div class="work__media">
                <VideoFrame url=video_url style=EmbedStyle::Player title=title.clone()/>
                <span class="work__category">{category}</span>
            </div>
            <div class="work__text">
                <span class="work__index">{format!("Project {}", ordinal(index + 1))}</span>
                <h3 class="work__title">{title}</h3>
                <p class="work__description">{description}</p>
                <div class="work__points">
                    {points.into_iter().map(|p| view! { <span class="chip">{p}</span> }).collect_view()}
                </div>
                <div class="work__goal">
                    <span class="work__goal-icon">"◎"</span>
                    <div>
                        <p class="work__goal-label">"Project Goal"</p>
                        <p class="work__goal-text">{purpose}</p>
                    </div>
                </div>
            </div>
        </article>
    }
}
