//! Plant Row Component
//!
//! Attribute cells followed by one watering indicator per visible day.

use leptos::prelude::*;

use crate::calendar::VisibleDays;
use crate::components::AttributeCell;
use crate::models::{PlantId, PlantSchedule, ScheduleField};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::watering::should_water_on;

const WATER_DROP: &str = "💧";

#[component]
pub fn PlantRow(id: PlantId, visible: Memo<VisibleDays>) -> impl IntoView {
    let store = use_app_store();
    let plant = Memo::new(move |_| store.schedule().read().get(id).cloned());

    view! {
        <tr class="plant-row">
            {ScheduleField::ALL
                .into_iter()
                .map(|field| view! { <AttributeCell id=id field=field plant=plant /> })
                .collect_view()}
            {move || {
                let VisibleDays { days, window } = visible.get();
                plant.get().map(|p| {
                    days.into_iter()
                        .map(|day| day_cell(&p, should_water_on(&p, window, day)))
                        .collect_view()
                })
            }}
        </tr>
    }
}

fn day_cell(plant: &PlantSchedule, due: bool) -> impl IntoView {
    let background = if due { plant.color.clone() } else { "transparent".to_string() };
    let style = format!(
        "text-align: center; background-color: {}; padding: 8px; min-width: 2rem;",
        background
    );
    view! {
        <td class="day-cell">
            <div style=style>{if due { WATER_DROP } else { "" }}</div>
        </td>
    }
}
