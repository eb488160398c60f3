//! Month Navigator Component
//!
//! Title, previous/next month buttons and the displayed month label.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{store_advance_month, use_app_store, AppStateStoreFields};

#[component]
pub fn MonthNavigator() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let label = move || store.cursor().get().label(ctx.locale);

    view! {
        <div class="calendar-header">
            <h1 class="calendar-title">"Calendario de Riego"</h1>

            <div class="month-nav">
                <button class="nav-btn" on:click=move |_| store_advance_month(&store, -1)>
                    "← Mes Anterior"
                </button>
                <span class="month-label">{label}</span>
                <button class="nav-btn" on:click=move |_| store_advance_month(&store, 1)>
                    "Mes Siguiente →"
                </button>
            </div>
        </div>
    }
}
