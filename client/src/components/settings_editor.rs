//! Modal editor for the site-wide settings draft.

use leptos::prelude::*;

use crate::model::settings::{ImageField, SiteSettings};
use crate::state::BrowserContent;
use crate::state::edit::SettingsSession;
use crate::util::dialog::{SAVE_FAILED_NOTICE, SETTINGS_SAVED_NOTICE, alert};
use crate::util::image_import::describe_image;

/// Read a picked file into the open draft's `field`.
fn import_image(settings: RwSignal<SettingsSession>, ev: leptos::ev::Event, field: ImageField) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
            return;
        };
        let Some(ticket) = settings.with_untracked(|s| s.begin_import(field)) else {
            return;
        };
        crate::util::image_import::read_first_file(&input, move |data_uri| {
            // The signal is gone if the admin page unmounted mid-read.
            let applied = settings.try_update(|s| s.apply_import(ticket, data_uri)).unwrap_or(false);
            if !applied {
                log::debug!("dropped image read for a closed settings session");
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (settings, ev, field);
    }
}

/// Text input bound to one settings draft field.
#[component]
fn SettingsField(
    label: &'static str,
    settings: RwSignal<SettingsSession>,
    read: fn(&SiteSettings) -> String,
    write: fn(&mut SiteSettings, String),
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type=kind
                placeholder=placeholder
                prop:value=move || settings.with(|s| s.draft().map(read).unwrap_or_default())
                on:input=move |ev| {
                    let next = event_target_value(&ev);
                    settings.update(|s| s.update_draft(|d| write(d, next)));
                }
            />
        </label>
    }
}

/// Image slot with preview, upload, and (for the logo) a clear button.
#[component]
fn ImageSlot(label: &'static str, settings: RwSignal<SettingsSession>, field: ImageField) -> impl IntoView {
    let current = move || settings.with(|s| s.draft().map(|d| d.image(field).to_owned()).unwrap_or_default());

    view! {
        <div class="image-slot">
            <span class="field__label">{label}</span>
            <div class="image-slot__body">
                {move || {
                    let src = current();
                    if src.is_empty() {
                        view! { <div class="image-slot__empty">"No image"</div> }.into_any()
                    } else {
                        view! { <img class="image-slot__preview" src=src alt=label/> }.into_any()
                    }
                }}
                <span class="image-slot__meta">{move || describe_image(&current())}</span>
                <label class="btn image-slot__upload">
                    "Upload"
                    <input
                        type="file"
                        accept="image/*"
                        class="image-slot__input"
                        on:change=move |ev| import_image(settings, ev, field)
                    />
                </label>
                <Show when=move || field == ImageField::Logo && !current().is_empty()>
                    <button class="btn btn--ghost" on:click=move |_| settings.update(|s| s.clear_image(field))>
                        "Remove"
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn SettingsEditor(settings: RwSignal<SettingsSession>) -> impl IntoView {
    let content = expect_context::<RwSignal<BrowserContent>>();

    let on_save = move |_| {
        let mut staged = settings.get_untracked();
        match content.try_update(|c| staged.commit(c)) {
            Some(Ok(())) => alert(SETTINGS_SAVED_NOTICE),
            Some(Err(e)) => {
                log::warn!("settings commit failed: {e}");
                alert(SAVE_FAILED_NOTICE);
            }
            None => {}
        }
        settings.set(staged);
    };
    let on_close = move |_| {
        settings.update(|s| {
            s.discard();
        });
    };

    view! {
        <Show when=move || settings.with(SettingsSession::is_open)>
            <div class="dialog-backdrop">
                <div class="dialog dialog--editor">
                    <div class="dialog__header">
                        <h2>"Site Settings"</h2>
                        <button class="dialog__close" on:click=on_close>"✕"</button>
                    </div>
                    <ImageSlot label="Logo" settings=settings field=ImageField::Logo/>
                    <SettingsField
                        label="Showreel (Hero) YouTube URL"
                        settings=settings
                        placeholder="https://youtu.be/..."
                        read=|d| d.hero_video_url.clone()
                        write=|d, v| d.hero_video_url = v
                    />
                    <div class="dialog__grid">
                        <SettingsField
                            label="Email"
                            settings=settings
                            kind="email"
                            read=|d| d.email.clone()
                            write=|d, v| d.email = v
                        />
                        <SettingsField
                            label="Phone"
                            settings=settings
                            read=|d| d.phone.clone()
                            write=|d, v| d.phone = v
                        />
                    </div>
                    <ImageSlot label="About Image" settings=settings field=ImageField::About/>
                    <button class="btn btn--primary btn--wide" on:click=on_save>"Save Global Settings"</button>
                </div>
            </div>
        </Show>
    }
}
