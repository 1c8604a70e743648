//! Modal editor for one portfolio entry draft.
//!
//! SYSTEM CONTEXT
//! ==============
//! Inputs write only into the `EditSession` draft. "Save Project" commits the
//! draft into the site content; a failed write alerts and keeps the modal
//! open. Closing asks before throwing away changes.

use leptos::prelude::*;

use crate::model::portfolio::{PortfolioEntry, join_points, parse_points};
use crate::state::BrowserContent;
use crate::state::edit::EditSession;
use crate::util::dialog::{DISCARD_EDIT_PROMPT, SAVE_FAILED_NOTICE, alert, confirm};

/// Text input bound to one draft field.
#[component]
fn DraftField(
    label: &'static str,
    read: fn(&PortfolioEntry) -> String,
    write: fn(&mut PortfolioEntry, String),
    #[prop(optional)] multiline: bool,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let session = expect_context::<RwSignal<EditSession>>();
    let value = move || session.with(|s| s.draft().map(read).unwrap_or_default());
    let on_input = move |ev: leptos::ev::Event| {
        let next = event_target_value(&ev);
        session.update(|s| s.update_draft(|d| write(d, next)));
    };

    let input = if multiline {
        view! { <textarea class="field__input" rows="4" prop:value=value on:input=on_input></textarea> }.into_any()
    } else {
        view! {
            <input class="field__input" type="text" placeholder=placeholder prop:value=value on:input=on_input/>
        }
        .into_any()
    };

    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            {input}
        </label>
    }
}

/// Comma-separated points. Keeps its own text buffer so separators can be
/// typed before the next tag exists.
#[component]
fn PointsField() -> impl IntoView {
    let session = expect_context::<RwSignal<EditSession>>();
    let text = RwSignal::new(session.with_untracked(|s| s.draft().map(|d| join_points(&d.points)).unwrap_or_default()));

    view! {
        <label class="field">
            <span class="field__label">"Points (comma separated)"</span>
            <input
                class="field__input"
                type="text"
                prop:value=move || text.get()
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    let points = parse_points(&raw);
                    text.set(raw);
                    session.update(|s| s.update_draft(|d| d.points = points));
                }
            />
        </label>
    }
}

#[component]
pub fn EntryEditor() -> impl IntoView {
    let content = expect_context::<RwSignal<BrowserContent>>();
    let session = expect_context::<RwSignal<EditSession>>();

    let on_save = move |_| {
        let mut staged = session.get_untracked();
        match content.try_update(|c| staged.commit(c)) {
            Some(Ok(outcome)) => log::debug!("portfolio entry committed: {outcome:?}"),
            Some(Err(e)) => {
                log::warn!("portfolio entry commit failed: {e}");
                alert(SAVE_FAILED_NOTICE);
            }
            None => {}
        }
        session.set(staged);
    };

    let on_close = move |_| {
        let dirty = content.with_untracked(|c| session.with_untracked(|s| s.is_dirty(c)));
        if !dirty || confirm(DISCARD_EDIT_PROMPT) {
            session.update(|s| {
                s.discard();
            });
        }
    };

    let heading = move || {
        session.with(|s| match s {
            EditSession::Editing { is_new: true, .. } => "New Project",
            _ => "Edit Project",
        })
    };

    view! {
        <Show when=move || session.with(EditSession::is_editing)>
            <div class="dialog-backdrop">
                <div class="dialog dialog--editor">
                    <div class="dialog__header">
                        <h2>{heading}</h2>
                        <button class="dialog__close" on:click=on_close>"✕"</button>
                    </div>
                    <div class="dialog__grid">
                        <DraftField label="Title" read=|d| d.title.clone() write=|d, v| d.title = v/>
                        <DraftField label="Category" read=|d| d.category.clone() write=|d, v| d.category = v/>
                    </div>
                    <DraftField
                        label="Description"
                        multiline=true
                        read=|d| d.description.clone()
                        write=|d, v| d.description = v
                    />
                    <div class="dialog__grid">
                        <DraftField
                            label="YouTube URL"
                            placeholder="https://youtu.be/..."
                            read=|d| d.video_url.clone()
                            write=|d, v| d.video_url = v
                        />
                        <DraftField label="Purpose" read=|d| d.purpose.clone() write=|d, v| d.purpose = v/>
                    </div>
                    <PointsField/>
                    <button class="btn btn--primary btn--wide" on:click=on_save>"Save Project"</button>
                </div>
            </div>
        </Show>
    }
}
