//! Contact call-to-action and the contact details modal.

use leptos::prelude::*;

use crate::model::content::SOCIAL_LINKS;
use crate::state::BrowserContent;
use crate::state::ui::{ContactField, UiState};
use crate::util::clipboard::copy_with_ack;

#[component]
pub fn ContactSection() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <section id="contact" class="contact">
            <span class="eyebrow">"준비되셨나요?"</span>
            <h2 class="contact__headline">"미래를" <br/> "창조합니다"</h2>
            <p class="contact__terms">"· 외주 / 계약직 / 정규직 가능 ·"</p>
            <p class="contact__response">"평균응답시간 24시간 이내"</p>
            <button class="btn btn--primary contact__cta" on:click=move |_| ui.update(|u| u.contact_open = true)>
                "프로젝트 문의하기"
            </button>
        </section>
    }
}

/// One copyable contact row.
#[component]
fn ContactRow(label: &'static str, field: ContactField, #[prop(into)] value: Signal<String>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let copied = move || ui.with(|u| u.copied == Some(field));

    view! {
        <div class="contact-row">
            <p class="contact-row__label">{label}</p>
            <div class="contact-row__value">
                <span>{move || value.get()}</span>
                <button class="btn contact-row__copy" on:click=move |_| copy_with_ack(ui, field, value.get_untracked())>
                    {move || if copied() { "✓" } else { "⧉" }}
                </button>
                <Show when=copied>
                    <span class="contact-row__ack">"복사되었습니다!"</span>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn ContactModal() -> impl IntoView {
    let content = expect_context::<RwSignal<BrowserContent>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let email = Signal::derive(move || content.with(|c| c.settings().email.clone()));
    let phone = Signal::derive(move || content.with(|c| c.settings().phone.clone()));
    let close = move || ui.update(|u| u.contact_open = false);

    view! {
        <Show when=move || ui.with(|u| u.contact_open)>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div
                    class="dialog dialog--contact"
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            close();
                        }
                    }
                >
                    <button class="dialog__close" on:click=move |_| close()>"✕"</button>
                    <h2>"연락처"</h2>
                    <ContactRow label="Email Address" field=ContactField::Email value=email/>
                    <ContactRow label="Phone Number" field=ContactField::Phone value=phone/>
                    <a class="btn btn--primary" href=move || format!("mailto:{}", email.get())>"메일 보내기"</a>
                    <div class="contact__socials">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a class="social" href=link.href target="_blank" rel="noopener noreferrer">
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <p class="dialog__footnote">"언제든 편하게 연락주세요."</p>
                </div>
            </div>
        </Show>
    }
}
