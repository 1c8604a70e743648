//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::model::content::{COPYRIGHT, SITE_TITLE};
use crate::pages::{admin::AdminPage, home::HomePage};
use crate::state::BrowserContent;
use crate::state::edit::EditSession;
use crate::state::ui::UiState;
use crate::store::BrowserStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ko">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// The server has no access to browser storage, so the first paint always
/// uses the built-in defaults. Once hydrated, the effect below swaps in the
/// stored documents.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let content = RwSignal::new(BrowserContent::with_defaults(BrowserStore));
    let session = RwSignal::new(EditSession::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(content);
    provide_context(session);
    provide_context(ui);

    Effect::new(move |_| {
        content.set(BrowserContent::load(BrowserStore));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/showreel.css"/>
        <Title text=SITE_TITLE/>

        <Router>
            <Navbar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
            </Routes>
            <footer class="footer">
                <p>{COPYRIGHT}</p>
            </footer>
        </Router>
    }
}
