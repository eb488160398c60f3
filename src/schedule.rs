//! Schedule Store
//!
//! Ordered plant rows with field-level edits and append-only insertion.
//! Raw UI strings are coerced into field values; bad input never fails.

use chrono::{NaiveDate, NaiveDateTime};

use crate::color::{random_hex_color, RandomSource};
use crate::error::ScheduleError;
use crate::models::{PlantId, PlantSchedule, ScheduleField};

/// Name given to rows created by the add button
pub const NEW_PLANT_NAME: &str = "Nuevo Fruto";

/// Row fields before an id is assigned
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlant {
    pub name: String,
    pub frequency_days: f64,
    pub duration_hours: f64,
    pub last_watered: NaiveDateTime,
    pub color: String,
}

impl NewPlant {
    /// Defaults of a freshly added row
    pub fn with_defaults(now: NaiveDateTime, color: String) -> Self {
        Self {
            name: NEW_PLANT_NAME.to_string(),
            frequency_days: 1.0,
            duration_hours: 1.0,
            last_watered: now,
            color,
        }
    }
}

/// What an edit did with the raw input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Stored as typed
    Applied,
    /// Unparsable number, stored as 0
    Coerced,
    /// Unparsable date, previous value kept
    Kept,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    plants: Vec<PlantSchedule>,
    next_id: u32,
}

impl Schedule {
    pub fn seeded(rows: impl IntoIterator<Item = NewPlant>) -> Self {
        let mut schedule = Self::default();
        for row in rows {
            schedule.append(row);
        }
        schedule
    }

    pub fn rows(&self) -> &[PlantSchedule] {
        &self.plants
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&PlantSchedule> {
        self.plants.get(index)
    }

    pub fn get(&self, id: PlantId) -> Option<&PlantSchedule> {
        self.plants.iter().find(|p| p.id == id)
    }

    pub fn index_of(&self, id: PlantId) -> Option<usize> {
        self.plants.iter().position(|p| p.id == id)
    }

    pub fn ids(&self) -> Vec<PlantId> {
        self.plants.iter().map(|p| p.id).collect()
    }

    /// Push a row at the end, returning its new id
    pub fn append(&mut self, plant: NewPlant) -> PlantId {
        let id = PlantId(self.next_id);
        self.next_id += 1;
        self.plants.push(PlantSchedule {
            id,
            name: plant.name,
            frequency_days: plant.frequency_days,
            duration_hours: plant.duration_hours,
            last_watered: plant.last_watered,
            color: plant.color,
        });
        id
    }

    /// Push a default "Nuevo Fruto" row with a random color
    pub fn append_default(&mut self, rng: &mut dyn RandomSource, now: NaiveDateTime) -> PlantId {
        let color = random_hex_color(rng);
        self.append(NewPlant::with_defaults(now, color))
    }

    /// Replace one field of the row at `index`, coercing `raw` into the field's type
    pub fn update_field(
        &mut self,
        index: usize,
        field: ScheduleField,
        raw: &str,
    ) -> Result<EditOutcome, ScheduleError> {
        let len = self.plants.len();
        let plant = self
            .plants
            .get_mut(index)
            .ok_or(ScheduleError::RowOutOfRange { index, len })?;
        Ok(apply_field(plant, field, raw))
    }

    /// `update_field` addressed by attribute name
    pub fn update_named_field(
        &mut self,
        index: usize,
        field: &str,
        raw: &str,
    ) -> Result<EditOutcome, ScheduleError> {
        self.update_field(index, field.parse()?, raw)
    }

    /// `update_field` addressed by row id
    pub fn update_by_id(
        &mut self,
        id: PlantId,
        field: ScheduleField,
        raw: &str,
    ) -> Result<EditOutcome, ScheduleError> {
        let index = self.index_of(id).ok_or(ScheduleError::UnknownId(id.0))?;
        self.update_field(index, field, raw)
    }
}

fn apply_field(plant: &mut PlantSchedule, field: ScheduleField, raw: &str) -> EditOutcome {
    match field {
        ScheduleField::Name => {
            plant.name = raw.to_string();
            EditOutcome::Applied
        }
        ScheduleField::Frequency => {
            let (value, outcome) = coerce_number(raw);
            plant.frequency_days = value;
            outcome
        }
        ScheduleField::Duration => {
            let (value, outcome) = coerce_number(raw);
            plant.duration_hours = value;
            outcome
        }
        ScheduleField::LastWatered => match parse_input_date(raw) {
            Some(date) => {
                plant.last_watered = date;
                EditOutcome::Applied
            }
            None => {
                log::debug!("[SCHEDULE] ignoring unparsable date {:?} for row {}", raw, plant.id);
                EditOutcome::Kept
            }
        },
        ScheduleField::Color => {
            plant.color = raw.to_string();
            EditOutcome::Applied
        }
    }
}

/// Days as typed, sign and fraction included; unparsable becomes 0
pub fn coerce_days(raw: &str) -> f64 {
    coerce_number(raw).0
}

/// Hours; anything unparsable becomes 0
pub fn coerce_hours(raw: &str) -> f64 {
    coerce_number(raw).0
}

fn coerce_number(raw: &str) -> (f64, EditOutcome) {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => (value, EditOutcome::Applied),
        _ => (0.0, EditOutcome::Coerced),
    }
}

/// `YYYY-MM-DD` from a date input, at midnight
pub fn parse_input_date(raw: &str) -> Option<NaiveDateTime> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()?
        .and_hms_opt(0, 0, 0)
}

/// Value shown by a date input
pub fn format_input_date(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::SequenceRandom;
    use crate::seed::demo_plants;
    use crate::watering::{should_water_on, DayWindow};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap().and_hms_opt(9, 15, 0).unwrap()
    }

    #[test]
    fn test_seed_rows_get_ids() {
        let schedule = Schedule::seeded(demo_plants());
        assert_eq!(schedule.ids(), vec![PlantId(0), PlantId(1), PlantId(2)]);
        assert_eq!(schedule.index_of(PlantId(2)), Some(2));
    }

    #[test]
    fn test_append_preserves_prior_rows() {
        let mut schedule = Schedule::seeded(demo_plants());
        let before = schedule.rows().to_vec();
        let mut rng = SequenceRandom::new(vec![0.1]);

        let id = schedule.append_default(&mut rng, now());

        assert_eq!(schedule.len(), before.len() + 1);
        assert_eq!(&schedule.rows()[..before.len()], &before[..]);
        let added = schedule.get(id).unwrap();
        assert_eq!(added.name, NEW_PLANT_NAME);
        assert_eq!(added.last_watered, now());
    }

    #[test]
    fn test_two_appends_get_defaults_and_distinct_colors() {
        let mut schedule = Schedule::seeded(demo_plants());
        let initial = schedule.len();
        let mut rng = SequenceRandom::new(vec![0.2, 0.7]);

        let first = schedule.append_default(&mut rng, now());
        let second = schedule.append_default(&mut rng, now());

        assert_eq!(schedule.len(), initial + 2);
        assert_ne!(first, second);
        let a = schedule.get(first).unwrap();
        let b = schedule.get(second).unwrap();
        for p in [a, b] {
            assert_eq!(p.name, "Nuevo Fruto");
            assert_eq!(p.frequency_days, 1.0);
            assert_eq!(p.duration_hours, 1.0);
        }
        assert_ne!(a.color, b.color);
    }

    #[test]
    fn test_update_frequency_touches_only_that_row() {
        let mut schedule = Schedule::seeded(demo_plants());
        let before = schedule.rows().to_vec();

        schedule.update_named_field(1, "frequency", "5").unwrap();

        let after = schedule.rows();
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
        let expected = PlantSchedule { frequency_days: 5.0, ..before[1].clone() };
        assert_eq!(after[1], expected);
    }

    #[test]
    fn test_update_each_field() {
        let mut schedule = Schedule::seeded(demo_plants());
        schedule.update_field(0, ScheduleField::Name, "Pimientos").unwrap();
        schedule.update_field(0, ScheduleField::Duration, "2.5").unwrap();
        schedule.update_field(0, ScheduleField::LastWatered, "2025-02-14").unwrap();
        schedule.update_field(0, ScheduleField::Color, "#123abc").unwrap();

        let row = schedule.row(0).unwrap();
        assert_eq!(row.name, "Pimientos");
        assert_eq!(row.duration_hours, 2.5);
        assert_eq!(format_input_date(row.last_watered), "2025-02-14");
        assert_eq!(row.color, "#123abc");
    }

    #[test]
    fn test_bad_numeric_input_coerces() {
        let mut schedule = Schedule::seeded(demo_plants());
        schedule.update_field(0, ScheduleField::Frequency, "abc").unwrap();
        schedule.update_field(1, ScheduleField::Frequency, "").unwrap();
        schedule.update_field(2, ScheduleField::Frequency, "3.7").unwrap();
        schedule.update_field(0, ScheduleField::Duration, "lots").unwrap();

        assert_eq!(schedule.row(0).unwrap().frequency_days, 0.0);
        assert_eq!(schedule.row(1).unwrap().frequency_days, 0.0);
        assert_eq!(schedule.row(2).unwrap().frequency_days, 3.7);
        assert_eq!(schedule.row(0).unwrap().duration_hours, 0.0);
        assert_eq!(coerce_days("-4"), -4.0);
        assert_eq!(coerce_days("inf"), 0.0);
    }

    #[test]
    fn test_bad_date_keeps_previous_value() {
        let mut schedule = Schedule::seeded(demo_plants());
        let before = schedule.row(0).unwrap().last_watered;
        let outcome = schedule.update_field(0, ScheduleField::LastWatered, "").unwrap();
        assert_eq!(outcome, EditOutcome::Kept);
        assert_eq!(schedule.row(0).unwrap().last_watered, before);
        assert_eq!(schedule.row(0).unwrap().field_value(ScheduleField::LastWatered), "2025-01-01");
    }

    #[test]
    fn test_edit_outcomes() {
        let mut schedule = Schedule::seeded(demo_plants());
        assert_eq!(
            schedule.update_field(0, ScheduleField::LastWatered, "2025-03-01"),
            Ok(EditOutcome::Applied)
        );
        assert_eq!(schedule.update_field(0, ScheduleField::Frequency, "7"), Ok(EditOutcome::Applied));
        assert_eq!(schedule.update_field(0, ScheduleField::Frequency, ""), Ok(EditOutcome::Coerced));
        assert_eq!(schedule.update_field(0, ScheduleField::Duration, "x"), Ok(EditOutcome::Coerced));
        assert_eq!(schedule.update_field(0, ScheduleField::Color, "#00ff00"), Ok(EditOutcome::Applied));
    }

    #[test]
    fn test_typed_negative_and_fractional_frequencies_keep_their_schedule() {
        let mut schedule = Schedule::seeded(demo_plants());
        let january = DayWindow::new(2025, 1);

        schedule.update_field(0, ScheduleField::Frequency, "-2").unwrap();
        let tomatoes = schedule.row(0).unwrap();
        assert_eq!(tomatoes.frequency_days, -2.0);
        assert!(should_water_on(tomatoes, january, 3));

        schedule.update_field(0, ScheduleField::Frequency, "2.5").unwrap();
        let tomatoes = schedule.row(0).unwrap();
        assert_eq!(tomatoes.frequency_days, 2.5);
        assert!(!should_water_on(tomatoes, january, 3));
        assert!(should_water_on(tomatoes, january, 1));
    }

    #[test]
    fn test_update_errors() {
        let mut schedule = Schedule::seeded(demo_plants());
        assert_eq!(
            schedule.update_field(7, ScheduleField::Name, "x"),
            Err(ScheduleError::RowOutOfRange { index: 7, len: 3 })
        );
        assert_eq!(
            schedule.update_named_field(0, "height", "x"),
            Err(ScheduleError::UnknownField("height".to_string()))
        );
        assert_eq!(
            schedule.update_by_id(PlantId(99), ScheduleField::Name, "x"),
            Err(ScheduleError::UnknownId(99))
        );
    }

    #[test]
    fn test_update_by_id() {
        let mut schedule = Schedule::seeded(demo_plants());
        let mut rng = SequenceRandom::new(vec![0.3]);
        let id = schedule.append_default(&mut rng, now());
        schedule.update_by_id(id, ScheduleField::Name, "Fresas").unwrap();
        assert_eq!(schedule.row(3).unwrap().name, "Fresas");
    }
}
