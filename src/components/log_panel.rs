//! Log Panel Component
//!
//! Collapsible view of the logger's recent lines, refreshed on every store change.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn LogPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (cleared, set_cleared) = signal(0u32);

    let Some(logger) = ctx.log_history else {
        return ().into_any();
    };

    let lines = move || {
        store.schedule().track();
        store.cursor().track();
        cleared.track();
        logger.recent().join("\n")
    };

    let clear = move |_| {
        logger.clear();
        set_cleared.update(|n| *n += 1);
    };

    view! {
        <details class="log-panel">
            <summary>"Registro"</summary>
            <button class="clear-log-btn" on:click=clear>"Limpiar"</button>
            <pre class="log-lines">{lines}</pre>
        </details>
    }
    .into_any()
}
