//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use chrono::NaiveDateTime;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::calendar::CalendarCursor;
use crate::color::RandomSource;
use crate::models::{PlantId, ScheduleField};
use crate::schedule::{EditOutcome, Schedule};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Plant rows in display order
    pub schedule: Schedule,
    /// Month shown in the header
    pub cursor: CalendarCursor,
}

impl AppState {
    pub fn new(schedule: Schedule, cursor: CalendarCursor) -> Self {
        Self { schedule, cursor }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a field edit to a row by ID. Failures are logged and dropped.
/// Returns true when the row now holds exactly what was typed.
pub fn store_update_field(store: &AppStore, id: PlantId, field: ScheduleField, raw: &str) -> bool {
    match store.schedule().write().update_by_id(id, field, raw) {
        Ok(outcome) => outcome == EditOutcome::Applied,
        Err(e) => {
            log::warn!("[STORE] edit of {} on row {} dropped: {}", field.as_str(), id, e);
            false
        }
    }
}

/// Append a default row
pub fn store_add_plant(store: &AppStore, rng: &mut dyn RandomSource, now: NaiveDateTime) -> PlantId {
    let id = store.schedule().write().append_default(rng, now);
    log::info!("[STORE] added row {}", id);
    id
}

/// Move the displayed month
pub fn store_advance_month(store: &AppStore, delta_months: i32) {
    store.cursor().write().advance(delta_months);
    log::debug!("[STORE] cursor moved by {}", delta_months);
}
