//! Riego Frontend App
//!
//! Irrigation calendar: month header, editable schedule table, toolbar.

use std::collections::HashMap;

use leptos::prelude::*;
use reactive_stores::Store;
use rolling_logger::RollingLogger;

use crate::calendar::CalendarCursor;
use crate::components::{LogPanel, MonthNavigator, ScheduleTable, Toolbar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::PlantId;
use crate::schedule::Schedule;
use crate::seed::demo_plants;
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig, log_history: Option<&'static RollingLogger>) -> impl IntoView {
    let schedule = if config.seed_demo_data {
        Schedule::seeded(demo_plants())
    } else {
        Schedule::default()
    };
    log::info!("[APP] mounting with {} rows, reference {:?}", schedule.len(), config.reference);

    // State
    let store = Store::new(AppState::new(schedule, CalendarCursor::today()));
    let (name_drafts, set_name_drafts) = signal(HashMap::<PlantId, String>::new());

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(
        config.locale,
        config.reference,
        (name_drafts, set_name_drafts),
        log_history,
    ));

    view! {
        <div class="irrigation-calendar">
            <MonthNavigator />
            <ScheduleTable />
            <Toolbar />
            <LogPanel />
        </div>
    }
}
