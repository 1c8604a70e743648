//! Copy-to-clipboard with a short-lived acknowledgment.

use leptos::prelude::*;

use crate::state::ui::{ContactField, UiState};

/// Copy `text` and show the "copied" mark for `field` until the reset timer
/// fires. A newer copy supersedes an older timer.
pub fn copy_with_ack(ui: RwSignal<UiState>, field: ContactField, text: String) {
    #[cfg(feature = "hydrate")]
    {
        let Some(clipboard) = web_sys::window().and_then(|w| w.navigator().clipboard()) else {
            return;
        };
        let _ = clipboard.write_text(&text);

        let mut seq = 0;
        ui.update(|u| seq = u.acknowledge_copy(field));
        gloo_timers::callback::Timeout::new(crate::state::ui::COPY_ACK_MS, move || {
            ui.update(|u| u.expire_copy(seq));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ui, field, text);
    }
}
