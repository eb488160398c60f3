//! Schedule Models
//!
//! Plant rows and the attributes the table can edit.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::schedule::format_input_date;

/// Row identity, assigned by the schedule when a row is inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlantId(pub u32);

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One irrigation row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantSchedule {
    pub id: PlantId,
    pub name: String,
    /// Watering cadence in days, as typed. Zero never waters; negative
    /// and fractional values are kept and checked by remainder.
    pub frequency_days: f64,
    /// Watering duration, half-hour steps in the UI
    pub duration_hours: f64,
    pub last_watered: NaiveDateTime,
    /// `#rrggbb`
    pub color: String,
}

impl PlantSchedule {
    /// Text an input control shows for `field`
    pub fn field_value(&self, field: ScheduleField) -> String {
        match field {
            ScheduleField::Name => self.name.clone(),
            ScheduleField::Frequency => self.frequency_days.to_string(),
            ScheduleField::Duration => self.duration_hours.to_string(),
            ScheduleField::LastWatered => format_input_date(self.last_watered),
            ScheduleField::Color => self.color.clone(),
        }
    }
}

/// Editable attribute columns, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduleField {
    Name,
    Frequency,
    Duration,
    LastWatered,
    Color,
}

impl ScheduleField {
    pub const ALL: [ScheduleField; 5] = [
        ScheduleField::Name,
        ScheduleField::Frequency,
        ScheduleField::Duration,
        ScheduleField::LastWatered,
        ScheduleField::Color,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleField::Name => "name",
            ScheduleField::Frequency => "frequency",
            ScheduleField::Duration => "duration",
            ScheduleField::LastWatered => "lastWatered",
            ScheduleField::Color => "color",
        }
    }

    /// `type` of the `<input>` editing this field
    pub fn input_type(&self) -> &'static str {
        match self {
            ScheduleField::Name => "text",
            ScheduleField::Frequency | ScheduleField::Duration => "number",
            ScheduleField::LastWatered => "date",
            ScheduleField::Color => "color",
        }
    }

    /// `(min, step)` for numeric inputs
    pub fn bounds(&self) -> (Option<&'static str>, Option<&'static str>) {
        match self {
            ScheduleField::Frequency => (Some("1"), None),
            ScheduleField::Duration => (Some("0.5"), Some("0.5")),
            _ => (None, None),
        }
    }

    /// Column header text
    pub fn header(&self) -> &'static str {
        match self {
            ScheduleField::Name => "Fruto",
            ScheduleField::Frequency => "Frecuencia (días)",
            ScheduleField::Duration => "Duración (horas)",
            ScheduleField::LastWatered => "Último Riego",
            ScheduleField::Color => "Color",
        }
    }
}

impl FromStr for ScheduleField {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" | "plantName" => Ok(ScheduleField::Name),
            "frequency" => Ok(ScheduleField::Frequency),
            "duration" => Ok(ScheduleField::Duration),
            "lastWatered" => Ok(ScheduleField::LastWatered),
            "color" => Ok(ScheduleField::Color),
            other => Err(ScheduleError::UnknownField(other.to_string())),
        }
    }
}
