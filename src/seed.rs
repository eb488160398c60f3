//! Demo Data
//!
//! Rows shown when the table first mounts.

use chrono::{NaiveDate, NaiveDateTime};

use crate::schedule::NewPlant;

fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

fn row(name: &str, frequency_days: f64, duration_hours: f64, last_watered: NaiveDateTime, color: &str) -> NewPlant {
    NewPlant {
        name: name.to_string(),
        frequency_days,
        duration_hours,
        last_watered,
        color: color.to_string(),
    }
}

pub fn demo_plants() -> Vec<NewPlant> {
    vec![
        row("Tomates", 2.0, 2.0, midnight(2025, 1, 1), "#FFB7B7"),
        row("Lechugas", 3.0, 1.0, midnight(2025, 1, 2), "#B7FFB7"),
        row("Zanahorias", 4.0, 1.5, midnight(2025, 1, 3), "#FFE4B7"),
    ]
}
