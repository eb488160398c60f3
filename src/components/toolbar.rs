//! Toolbar Component
//!
//! Add-row button and the indicator legend.

use chrono::Local;
use leptos::prelude::*;

use crate::color::BrowserRandom;
use crate::store::{store_add_plant, use_app_store};

#[component]
pub fn Toolbar() -> impl IntoView {
    let store = use_app_store();

    let add_plant = move |_| {
        let mut rng = BrowserRandom;
        store_add_plant(&store, &mut rng, Local::now().naive_local());
    };

    view! {
        <div class="toolbar">
            <button class="add-btn" on:click=add_plant>"+ Añadir Fruto"</button>
            <div class="legend">
                <span>"💧 Día de riego"</span>
            </div>
        </div>
    }
}
