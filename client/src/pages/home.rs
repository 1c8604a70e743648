//! Public one-page site: hero, about, gallery, process, contact.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::about::About;
use crate::components::contact::{ContactModal, ContactSection};
use crate::components::hero::Hero;
use crate::components::portfolio_card::PortfolioCard;
use crate::components::process_steps::ProcessSteps;
use crate::components::showreel_modal::ShowreelModal;
use crate::model::portfolio::PortfolioEntry;
use crate::state::BrowserContent;
use crate::util::scroll::{anchor_from_hash, scroll_to_section};

/// Gallery rows paired with their display position.
pub(crate) fn gallery_rows(entries: &[PortfolioEntry]) -> Vec<(usize, PortfolioEntry)> {
    entries.iter().cloned().enumerate().collect()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let content = expect_context::<RwSignal<BrowserContent>>();
    let hash = use_location().hash;

    // Arriving from another route with `/#section` lands on that section.
    Effect::new(move |_| {
        let hash = hash.get();
        if let Some(anchor) = anchor_from_hash(&hash) {
            scroll_to_section(anchor);
        }
    });

    view! {
        <main class="home">
            <Hero/>
            <About/>
            <section id="portfolio" class="portfolio">
                <div class="portfolio__header">
                    <span class="eyebrow">"Selected Works"</span>
                    <h2 class="section-title">"Portfolio"</h2>
                </div>
                <div class="portfolio__list">
                    {move || {
                        content
                            .with(|c| gallery_rows(c.portfolio()))
                            .into_iter()
                            .map(|(index, entry)| view! { <PortfolioCard index=index entry=entry/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>
            <ProcessSteps/>
            <ContactSection/>
            <ShowreelModal/>
            <ContactModal/>
        </main>
    }
}

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;
