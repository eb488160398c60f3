//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::collections::HashMap;

use leptos::prelude::*;
use rolling_logger::RollingLogger;

use crate::calendar::{Locale, ReferenceMode};
use crate::models::PlantId;

/// App-wide settings and signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Month-name table for the header label
    pub locale: Locale,
    /// Which month the day columns refer to
    pub reference: ReferenceMode,
    /// Uncommitted name edits per row - read
    pub name_drafts: ReadSignal<HashMap<PlantId, String>>,
    /// Uncommitted name edits per row - write
    set_name_drafts: WriteSignal<HashMap<PlantId, String>>,
    /// Installed logger, when this app owns it
    pub log_history: Option<&'static RollingLogger>,
}

impl AppContext {
    pub fn new(
        locale: Locale,
        reference: ReferenceMode,
        name_drafts: (ReadSignal<HashMap<PlantId, String>>, WriteSignal<HashMap<PlantId, String>>),
        log_history: Option<&'static RollingLogger>,
    ) -> Self {
        Self {
            locale,
            reference,
            name_drafts: name_drafts.0,
            set_name_drafts: name_drafts.1,
            log_history,
        }
    }

    /// Draft text for a row, if the user is typing in it
    pub fn name_draft(&self, id: PlantId) -> Option<String> {
        self.name_drafts.with(|drafts| drafts.get(&id).cloned())
    }

    /// Record a keystroke without committing it
    pub fn set_name_draft(&self, id: PlantId, text: String) {
        self.set_name_drafts.update(|drafts| {
            drafts.insert(id, text);
        });
    }

    /// Forget the draft after it was committed
    pub fn clear_name_draft(&self, id: PlantId) {
        self.set_name_drafts.update(|drafts| {
            drafts.remove(&id);
        });
    }
}
