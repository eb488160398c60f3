//! Watering Check
//!
//! Decides whether a plant is due on a given calendar day: the whole days
//! elapsed since its last watering must be a multiple of its frequency.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::models::PlantSchedule;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Year/month that day-of-month numbers are resolved in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub year: i32,
    /// 1..=12
    pub month: u32,
}

impl DayWindow {
    /// Months outside 1..=12 roll into neighbouring years (13 is next January, 0 last December)
    pub fn new(year: i32, month: u32) -> Self {
        let total = i64::from(month) - 1;
        Self {
            year: year.saturating_add(total.div_euclid(12) as i32),
            month: (total.rem_euclid(12) + 1) as u32,
        }
    }

    /// Midnight of `day` in this window. Days past the end of the month
    /// spill into the next one (day 30 of February is 2 or 1 March).
    pub fn reference_date(&self, day: u32) -> Option<NaiveDateTime> {
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1)?;
        let date = first.checked_add_signed(Duration::days(i64::from(day) - 1))?;
        date.and_hms_opt(0, 0, 0)
    }
}

/// Absolute distance between two instants, rounded up to whole days
pub fn elapsed_days(reference: NaiveDateTime, last_watered: NaiveDateTime) -> i64 {
    let millis = reference.signed_duration_since(last_watered).num_milliseconds().abs();
    (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
}

/// True when the elapsed days leave no remainder against the frequency
/// (zero elapsed included). A frequency of 0 is never due; a negative one
/// behaves like its magnitude; a fractional one only matches exact multiples.
pub fn should_water(plant: &PlantSchedule, reference: NaiveDateTime) -> bool {
    let frequency = plant.frequency_days;
    if frequency == 0.0 || !frequency.is_finite() {
        return false;
    }
    elapsed_days(reference, plant.last_watered) as f64 % frequency == 0.0
}

/// `should_water` for a day-of-month inside `window`
pub fn should_water_on(plant: &PlantSchedule, window: DayWindow, day: u32) -> bool {
    window
        .reference_date(day)
        .map(|reference| should_water(plant, reference))
        .unwrap_or(false)
}

/// Due days among `days`
pub fn watering_days(plant: &PlantSchedule, window: DayWindow, days: &[u32]) -> Vec<u32> {
    days.iter()
        .copied()
        .filter(|&day| should_water_on(plant, window, day))
        .collect()
}
