//! Attribute Cell Component
//!
//! Editable cell for one plant attribute. The name keeps a draft while the
//! user types and commits on blur; every other field commits on change and
//! snaps back to the stored value when the input could not be taken as typed.

use leptos::prelude::*;
use web_sys::HtmlInputElement;

use crate::context::AppContext;
use crate::models::{PlantId, PlantSchedule, ScheduleField};
use crate::store::{store_update_field, use_app_store};

#[component]
pub fn AttributeCell(
    id: PlantId,
    field: ScheduleField,
    plant: Memo<Option<PlantSchedule>>,
) -> impl IntoView {
    let committed = move || {
        plant.with(|p| p.as_ref().map(|p| p.field_value(field)).unwrap_or_default())
    };

    let input = match field {
        ScheduleField::Name => view! { <NameInput id=id committed=Signal::derive(committed) /> }.into_any(),
        _ => view! { <FieldInput id=id field=field committed=Signal::derive(committed) /> }.into_any(),
    };

    view! { <td class="attr-cell">{input}</td> }
}

/// Free-text name, committed on blur
#[component]
fn NameInput(id: PlantId, committed: Signal<String>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let value = move || ctx.name_draft(id).unwrap_or_else(|| committed.get());

    view! {
        <input
            type="text"
            class="name-input"
            prop:value=value
            on:input=move |ev| ctx.set_name_draft(id, event_target_value(&ev))
            on:blur=move |ev| {
                store_update_field(&store, id, ScheduleField::Name, &event_target_value(&ev));
                ctx.clear_name_draft(id);
            }
        />
    }
}

/// Number, date or color input, committed on change
#[component]
fn FieldInput(id: PlantId, field: ScheduleField, committed: Signal<String>) -> impl IntoView {
    let store = use_app_store();
    let (min, step) = field.bounds();

    let class = match field {
        ScheduleField::Color => "color-input",
        ScheduleField::LastWatered => "date-input",
        _ => "number-input",
    };

    view! {
        <input
            type=field.input_type()
            class=class
            min=min
            step=step
            prop:value=move || committed.get()
            on:change=move |ev| {
                if !store_update_field(&store, id, field, &event_target_value(&ev)) {
                    // the stored value did not move, so prop:value will not re-run
                    event_target::<HtmlInputElement>(&ev).set_value(&committed.get_untracked());
                }
            }
        />
    }
}
