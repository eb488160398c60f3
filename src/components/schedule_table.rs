//! Schedule Table Component
//!
//! Header with the attribute columns plus one column per visible day, and
//! a row per plant keyed by its id.

use chrono::Local;
use leptos::prelude::*;

use crate::calendar::visible_days;
use crate::components::PlantRow;
use crate::context::AppContext;
use crate::models::ScheduleField;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ScheduleTable() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let visible = Memo::new(move |_| {
        let cursor = store.cursor().get();
        visible_days(ctx.reference, cursor, Local::now().date_naive())
    });

    view! {
        <div class="table-scroll">
            <table class="schedule-table">
                <thead>
                    <tr>
                        {ScheduleField::ALL
                            .into_iter()
                            .map(|field| view! { <th class="attr-header">{field.header()}</th> })
                            .collect_view()}
                        {move || {
                            visible.get().days.into_iter()
                                .map(|day| view! { <th class="day-header" style="min-width: 3rem;">{day}</th> })
                                .collect_view()
                        }}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.schedule().read().ids()
                        key=|id| *id
                        children=move |id| view! { <PlantRow id=id visible=visible /> }
                    />
                </tbody>
            </table>
        </div>
    }
}
