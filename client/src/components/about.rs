//! About section: profile card, introduction, and tool badges.

use leptos::prelude::*;

use crate::model::content::TOOL_BADGES;
use crate::state::BrowserContent;
use crate::state::ui::UiState;

#[component]
pub fn About() -> impl IntoView {
    let content = expect_context::<RwSignal<BrowserContent>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let image_url = move || content.with(|c| c.settings().about_image_url.clone());

    view! {
        <section id="about" class="about">
            <div class="about__card">
                <img class="about__photo" src=image_url alt="Hwang Hayeong"/>
                <div class="about__card-caption">
                    <h2 class="about__role">"Motion Graphic Designer"</h2>
                    <h1 class="about__name">"황하영"</h1>
                    <p class="about__tagline">"기획 의도를 이해하고," <br/> "끝까지 소통하는 모션그래픽 디자이너"</p>
                    <div class="about__actions">
                        <button class="btn btn--round" title="Showreel" on:click=move |_| ui.update(|u| u.showreel_open = true)>
                            "▶"
                        </button>
                        <button class="btn btn--round" title="Contact" on:click=move |_| ui.update(|u| u.contact_open = true)>
                            "✉"
                        </button>
                    </div>
                </div>
            </div>
            <div class="about__body">
                <span class="eyebrow">"Who I Am"</span>
                <h2 class="section-title">"움직임은 소통입니다"</h2>
                <p>
                    "Motion graphic과 영상 편집을 중심으로 작업하고 있습니다. 광고, SNS, 서비스 소개 영상 등 목적에 맞는 영상 연출을 중요하게 생각합니다."
                </p>
                <p>
                    "소통과 일정 관리를 가장 기본적인 실력이라고 믿으며, 항상 프로젝트의 완성도와 납품 기한을 최우선으로 고려합니다."
                </p>
                <div class="about__tools">
                    {TOOL_BADGES
                        .iter()
                        .map(|tool| {
                            view! {
                                <div class="tool-badge">
                                    <span class="tool-badge__short">{tool.short}</span>
                                    <span class="tool-badge__name">{tool.name}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
