//! Calendar Navigation
//!
//! Displayed month cursor and the day columns derived from it.

use chrono::{Datelike, Local, NaiveDate};
use serde::Deserialize;

use crate::watering::DayWindow;

/// Month-name table used for the cursor label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

const MONTHS_ES: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio",
    "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
];

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Full month name for a 1-based month
pub fn month_name(locale: Locale, month: u32) -> &'static str {
    let table = match locale {
        Locale::Es => &MONTHS_ES,
        Locale::En => &MONTHS_EN,
    };
    match month {
        1..=12 => table[(month - 1) as usize],
        _ => "?",
    }
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => next.signed_duration_since(first).num_days() as u32,
        _ => 0,
    }
}

/// Currently displayed (year, month)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCursor {
    year: i32,
    /// 1..=12
    month: u32,
}

impl CalendarCursor {
    /// `month` is clamped into 1..=12
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month: month.clamp(1, 12) }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Move by whole months, rolling the year over in either direction
    pub fn advance(&mut self, delta_months: i32) {
        let total = self.month as i32 - 1 + delta_months;
        self.year += total.div_euclid(12);
        self.month = (total.rem_euclid(12) + 1) as u32;
    }

    /// `"<month name> <year>"`, e.g. `"enero 2025"`
    pub fn label(&self, locale: Locale) -> String {
        format!("{} {}", month_name(locale, self.month), self.year)
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }
}

impl Default for CalendarCursor {
    fn default() -> Self {
        Self::today()
    }
}

/// Which month the day columns and the watering check refer to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ReferenceMode {
    /// Columns and checks follow the navigated month
    #[default]
    FollowCursor,
    /// Column count follows the real current month while checks resolve
    /// day numbers inside a fixed month; navigation only moves the label
    Pinned { year: i32, month: u32 },
}

impl ReferenceMode {
    /// The fixed window of the first release (January 2025)
    pub const LEGACY: ReferenceMode = ReferenceMode::Pinned { year: 2025, month: 1 };
}

/// Day columns to render and the window they are checked against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleDays {
    pub days: Vec<u32>,
    pub window: DayWindow,
}

pub fn visible_days(mode: ReferenceMode, cursor: CalendarCursor, today: NaiveDate) -> VisibleDays {
    match mode {
        ReferenceMode::FollowCursor => VisibleDays {
            days: (1..=cursor.days_in_month()).collect(),
            window: DayWindow::new(cursor.year(), cursor.month()),
        },
        ReferenceMode::Pinned { year, month } => VisibleDays {
            days: (1..=days_in_month(today.year(), today.month())).collect(),
            window: DayWindow::new(year, month),
        },
    }
}
