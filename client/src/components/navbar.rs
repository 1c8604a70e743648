//! Fixed top navigation with section links and the admin entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! Section links are plain `/#anchor` hrefs. On the home page the click is
//! intercepted and scrolled smoothly; elsewhere the router navigates home
//! and the page scrolls to the hash. Leaving while an entry draft is open
//! asks first and discards the draft on accept.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::model::content::{NAV_LINKS, SITE_TITLE};
use crate::state::BrowserContent;
use crate::state::edit::EditSession;
use crate::state::ui::UiState;
use crate::util::color::{is_light, logo_badge_color};
use crate::util::dialog::{DISCARD_EDIT_PROMPT, confirm};
use crate::util::scroll::scroll_to_section;

#[component]
pub fn Navbar() -> impl IntoView {
    let content = expect_context::<RwSignal<BrowserContent>>();
    let session = expect_context::<RwSignal<EditSession>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    let on_section_click = move |ev: leptos::ev::MouseEvent, anchor: &'static str| {
        if session.with_untracked(EditSession::is_editing) {
            if !confirm(DISCARD_EDIT_PROMPT) {
                ev.prevent_default();
                return;
            }
            session.update(|s| {
                s.discard();
            });
        }
        ui.update(|u| {
            u.mobile_menu_open = false;
            u.close_modals();
        });
        if pathname.get_untracked() == "/" {
            ev.prevent_default();
            scroll_to_section(anchor);
        }
    };

    let logo = move || {
        let (logo_url, color) = content.with(|c| (c.settings().logo_url.clone(), c.settings().logo_color.clone()));
        if logo_url.is_empty() {
            let tint = logo_badge_color(&color);
            let ink = if is_light(&tint) { "#020617" } else { "#ffffff" };
            view! {
                <span class="navbar__badge" style=format!("background:{tint};color:{ink}")>"H"</span>
            }
            .into_any()
        } else {
            view! { <img class="navbar__logo" src=logo_url alt="Logo"/> }.into_any()
        }
    };

    let links = move |item_class: &'static str| {
        NAV_LINKS
            .iter()
            .map(|link| {
                let anchor = link.anchor;
                view! {
                    <a
                        class=item_class
                        href=format!("/#{anchor}")
                        on:click=move |ev| on_section_click(ev, anchor)
                    >
                        {link.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a class="navbar__brand" href="/#hero" on:click=move |ev| on_section_click(ev, "hero")>
                    {logo}
                    <span>{SITE_TITLE}</span>
                </a>
                <div class="navbar__links">
                    {links("navbar__link")}
                    <a class="navbar__admin" href="/admin" title="Admin Settings">"⚙"</a>
                </div>
                <button
                    class="navbar__toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| ui.update(|u| u.mobile_menu_open = !u.mobile_menu_open)
                >
                    {move || if ui.with(|u| u.mobile_menu_open) { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || ui.with(|u| u.mobile_menu_open)>
                <div class="navbar__mobile">
                    {links("navbar__mobile-link")}
                    <a
                        class="navbar__mobile-link navbar__mobile-link--admin"
                        href="/admin"
                        on:click=move |_| ui.update(|u| u.mobile_menu_open = false)
                    >
                        "Admin Settings"
                    </a>
                </div>
            </Show>
        </nav>
    }
}
