//! Working-process section. Static copy only.

use leptos::prelude::*;

use crate::model::content::{PROCESS_STEPS, ordinal};

#[component]
pub fn ProcessSteps() -> impl IntoView {
    view! {
        <section id="process" class="process">
            <h2 class="section-title">"작업과정"</h2>
            <p class="process__quote">
                "“의뢰인의 말을 그대로 만드는 것이 아니라, 왜 필요한지 이해한 뒤 더 좋은 방향을 제안합니다.”"
            </p>
            <div class="process__steps">
                {PROCESS_STEPS
                    .iter()
                    .map(|step| {
                        view! {
                            <div class="step">
                                <div class="step__icon">{step.icon.glyph()}</div>
                                <div class="step__number">{ordinal(usize::from(step.id))}</div>
                                <h3 class="step__title">{step.title}</h3>
                                <p class="step__description">{step.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="process__closing">
                <h3>"“피드백은 부담이 아닌," <br/> "결과물을 더 좋게 만드는" <br/> "과정이라고 생각합니다.”"</h3>
                <div class="process__tags">
                    <span>"#성실한_커뮤니케이션"</span>
                    <span>"#소통의_중요성"</span>
                </div>
            </div>
        </section>
    }
}
