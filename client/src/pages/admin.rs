//! Admin page: passcode gate, entry list, and the two editor modals.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gate and the settings session live in page-local signals and vanish
//! when the route unmounts. The entry session is app-wide because the navbar
//! must be able to discard it on navigation.

use leptos::prelude::*;

use crate::components::entry_editor::EntryEditor;
use crate::components::settings_editor::SettingsEditor;
use crate::components::video_frame::VideoFrame;
use crate::model::portfolio::PortfolioEntry;
use crate::state::BrowserContent;
use crate::state::admin::AdminGate;
use crate::state::edit::{EditSession, SettingsSession};
use crate::util::clock::now_ms;
use crate::util::dialog::{DELETE_ENTRY_PROMPT, SAVE_FAILED_NOTICE, alert, confirm};
use crate::util::video::EmbedStyle;

#[component]
pub fn AdminPage() -> impl IntoView {
    let gate = RwSignal::new(AdminGate::default());

    view! {
        <Show when=move || gate.get().is_unlocked() fallback=move || view! { <PasscodeForm gate=gate/> }>
            <Dashboard gate=gate/>
        </Show>
    }
}

#[component]
fn PasscodeForm(gate: RwSignal<AdminGate>) -> impl IntoView {
    let passcode = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = passcode.get_untracked();
        if let Some(Err(e)) = gate.try_update(|g| g.unlock(&input)) {
            log::debug!("admin unlock rejected");
            passcode.set(String::new());
            alert(&e.to_string());
        }
    };

    view! {
        <div class="gate-page">
            <div class="gate-card">
                <div class="gate-card__icon">"🔒"</div>
                <h1>"Admin Login"</h1>
                <form class="gate-form" on:submit=on_submit>
                    <input
                        class="gate-input"
                        type="password"
                        placeholder="Password"
                        autofocus=true
                        prop:value=move || passcode.get()
                        on:input=move |ev| passcode.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary btn--wide" type="submit">"Login"</button>
                </form>
                <a class="gate-card__back" href="/">"← Back to site"</a>
            </div>
        </div>
    }
}

/// One row in the admin list.
#[component]
fn EntryRow(entry: PortfolioEntry, on_delete: Callback<String>) -> impl IntoView {
    let session = expect_context::<RwSignal<EditSession>>();
    let PortfolioEntry { id, title, category, video_url, .. } = entry.clone();

    view! {
        <div class="admin-row">
            <div class="admin-row__preview">
                <VideoFrame url=video_url style=EmbedStyle::Preview title=title.clone() placeholder="No Video"/>
            </div>
            <div class="admin-row__text">
                <span class="admin-row__category">{category}</span>
                <h3 class="admin-row__title">{title}</h3>
            </div>
            <div class="admin-row__actions">
                <button class="btn" title="Edit" on:click=move |_| session.set(EditSession::open_existing(&entry))>
                    "✎"
                </button>
                <button class="btn btn--danger" title="Delete" on:click=move |_| on_delete.run(id.clone())>
                    "🗑"
                </button>
            </div>
        </div>
    }
}

#[component]
fn Dashboard(gate: RwSignal<AdminGate>) -> impl IntoView {
    let content = expect_context::<RwSignal<BrowserContent>>();
    let session = expect_context::<RwSignal<EditSession>>();
    let settings = RwSignal::new(SettingsSession::default());

    let on_delete = Callback::new(move |id: String| {
        if !confirm(DELETE_ENTRY_PROMPT) {
            return;
        }
        match content.try_update(|c| c.remove_entry(&id)) {
            Some(Ok(true)) => log::debug!("portfolio entry {id} removed"),
            Some(Ok(false)) => log::debug!("portfolio entry {id} already gone"),
            Some(Err(e)) => {
                log::warn!("portfolio entry delete failed: {e}");
                alert(SAVE_FAILED_NOTICE);
            }
            None => {}
        }
    });

    let on_add = move |_| {
        let id = content.with_untracked(|c| c.next_entry_id(now_ms()));
        session.set(EditSession::open_new(id));
    };

    let on_settings = move |_| {
        let committed = content.with_untracked(|c| c.settings().clone());
        settings.update(|s| s.open(&committed));
    };

    view! {
        <main class="admin">
            <header class="admin__header">
                <h1>"Portfolio Manager"</h1>
                <div class="admin__actions">
                    <button class="btn" on:click=on_settings>"⚙ Site Settings"</button>
                    <button class="btn btn--primary" on:click=on_add>"+ Add New Project"</button>
                    <button class="btn btn--ghost" on:click=move |_| gate.update(AdminGate::lock)>"Lock"</button>
                </div>
            </header>
            <div class="admin__list">
                {move || {
                    content
                        .with(|c| c.portfolio().to_vec())
                        .into_iter()
                        .map(|entry| view! { <EntryRow entry=entry on_delete=on_delete/> })
                        .collect::<Vec<_>>()
                }}
            </div>
            <EntryEditor/>
            <SettingsEditor settings=settings/>
        </main>
    }
}
