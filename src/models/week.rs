//! Day and week schedule models.
//!
//! A week is exactly seven consecutive days. Each day holds three shift
//! periods (morning, day, evening), and each period an ordered list of
//! slots whose first entry is conventionally the base slot.
//!
//! Slots are addressed by [`SlotRef`]: the date, the period, and the
//! slot id. Slot ids are also unique across the week, so
//! [`WeekSchedule::find`] can resolve a bare id.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Slot, SlotStatus};

/// Number of days in a week schedule.
pub const DAYS_PER_WEEK: usize = 7;

/// One of the three fixed shift periods of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftPeriod {
    /// Morning shift.
    Morning,
    /// Daytime shift.
    Day,
    /// Evening shift.
    Evening,
}

impl ShiftPeriod {
    /// All periods in display order.
    pub const ALL: [ShiftPeriod; 3] = [Self::Morning, Self::Day, Self::Evening];

    /// Lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Day => "day",
            Self::Evening => "evening",
        }
    }

    /// Single-letter code used in generated slot ids.
    pub fn code(self) -> char {
        match self {
            Self::Morning => 'm',
            Self::Day => 'd',
            Self::Evening => 'e',
        }
    }
}

impl fmt::Display for ShiftPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Locator of a slot: date, period, and slot id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotRef {
    /// Calendar date of the day.
    pub date: NaiveDate,
    /// Shift period within the day.
    pub period: ShiftPeriod,
    /// Slot identifier.
    pub slot_id: String,
}

impl SlotRef {
    /// Creates a slot locator.
    pub fn new(date: NaiveDate, period: ShiftPeriod, slot_id: impl Into<String>) -> Self {
        Self {
            date,
            period,
            slot_id: slot_id.into(),
        }
    }
}

impl fmt::Display for SlotRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.date.format("%d.%m"),
            self.period,
            self.slot_id
        )
    }
}

/// The three shift periods of a day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayShifts {
    /// Morning slots.
    pub morning: Vec<Slot>,
    /// Daytime slots.
    pub day: Vec<Slot>,
    /// Evening slots.
    pub evening: Vec<Slot>,
}

impl DayShifts {
    /// Slots of a period.
    pub fn period(&self, period: ShiftPeriod) -> &[Slot] {
        match period {
            ShiftPeriod::Morning => &self.morning,
            ShiftPeriod::Day => &self.day,
            ShiftPeriod::Evening => &self.evening,
        }
    }

    fn period_mut(&mut self, period: ShiftPeriod) -> &mut Vec<Slot> {
        match period {
            ShiftPeriod::Morning => &mut self.morning,
            ShiftPeriod::Day => &mut self.day,
            ShiftPeriod::Evening => &mut self.evening,
        }
    }
}

/// One calendar day of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Calendar date.
    pub date: NaiveDate,
    /// Short day name (e.g., "Mon").
    pub day_name: String,
    /// Morning, day and evening slots.
    pub shifts: DayShifts,
}

impl DaySchedule {
    /// Creates a day with empty periods, named after its weekday.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            day_name: short_day_name(date.weekday()).to_string(),
            shifts: DayShifts::default(),
        }
    }

    /// Overrides the day-name label.
    pub fn with_day_name(mut self, day_name: impl Into<String>) -> Self {
        self.day_name = day_name.into();
        self
    }

    /// Appends a slot to a period.
    pub fn with_slot(mut self, period: ShiftPeriod, slot: Slot) -> Self {
        self.shifts.period_mut(period).push(slot);
        self
    }

    /// Date rendered as `dd.mm`.
    pub fn date_label(&self) -> String {
        self.date.format("%d.%m").to_string()
    }

    /// Slots of a period.
    pub fn period(&self, period: ShiftPeriod) -> &[Slot] {
        self.shifts.period(period)
    }

    /// Finds a slot in a period.
    pub fn slot(&self, period: ShiftPeriod, slot_id: &str) -> Option<&Slot> {
        self.period(period).iter().find(|s| s.id == slot_id)
    }

    fn slot_mut(&mut self, period: ShiftPeriod, slot_id: &str) -> Option<&mut Slot> {
        self.shifts
            .period_mut(period)
            .iter_mut()
            .find(|s| s.id == slot_id)
    }

    /// Iterates `(period, slot)` pairs in display order.
    pub fn slots(&self) -> impl Iterator<Item = (ShiftPeriod, &Slot)> {
        ShiftPeriod::ALL
            .into_iter()
            .flat_map(move |p| self.period(p).iter().map(move |s| (p, s)))
    }
}

/// Seven consecutive days of shifts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekSchedule {
    days: Vec<DaySchedule>,
}

impl WeekSchedule {
    /// Creates a week from its days. Shape is checked by validation.
    pub fn new(days: Vec<DaySchedule>) -> Self {
        Self { days }
    }

    /// Builds the standard board layout starting at `start`.
    ///
    /// Every period gets one base slot and one extra slot, all free,
    /// with ids of the form `dd.mm-<m|d|e>-<n>`.
    pub fn standard(start: NaiveDate) -> Self {
        let days = (0..DAYS_PER_WEEK as i64)
            .map(|offset| {
                let date = start + Duration::days(offset);
                let label = date.format("%d.%m").to_string();
                ShiftPeriod::ALL
                    .into_iter()
                    .fold(DaySchedule::new(date), |day, period| {
                        let prefix = format!("{label}-{}", period.code());
                        day.with_slot(period, Slot::base(format!("{prefix}-1")))
                            .with_slot(period, Slot::extra(format!("{prefix}-2")))
                    })
            })
            .collect();
        Self { days }
    }

    /// Days in order.
    pub fn days(&self) -> &[DaySchedule] {
        &self.days
    }

    /// Finds a day by date.
    pub fn day(&self, date: NaiveDate) -> Option<&DaySchedule> {
        self.days.iter().find(|d| d.date == date)
    }

    /// Finds a day by its `dd.mm` label.
    pub fn day_by_label(&self, label: &str) -> Option<&DaySchedule> {
        self.days.iter().find(|d| d.date_label() == label)
    }

    /// Resolves a slot locator.
    pub fn slot(&self, slot_ref: &SlotRef) -> Option<&Slot> {
        self.day(slot_ref.date)?
            .slot(slot_ref.period, &slot_ref.slot_id)
    }

    pub(crate) fn slot_mut(&mut self, slot_ref: &SlotRef) -> Option<&mut Slot> {
        self.days
            .iter_mut()
            .find(|d| d.date == slot_ref.date)?
            .slot_mut(slot_ref.period, &slot_ref.slot_id)
    }

    /// Resolves a bare slot id to its locator and slot.
    pub fn find(&self, slot_id: &str) -> Option<(SlotRef, &Slot)> {
        self.slots().find(|(_, s)| s.id == slot_id)
    }

    /// Iterates every slot with its locator, day by day.
    pub fn slots(&self) -> impl Iterator<Item = (SlotRef, &Slot)> {
        self.days.iter().flat_map(|day| {
            day.slots()
                .map(move |(period, slot)| (SlotRef::new(day.date, period, &slot.id), slot))
        })
    }

    /// Number of slots carrying the urgent flag. Recounted on every call.
    pub fn urgent_count(&self) -> usize {
        self.slots().filter(|(_, s)| s.urgent).count()
    }

    /// Number of slots in a given status.
    pub fn count_status(&self, status: SlotStatus) -> usize {
        self.slots().filter(|(_, s)| s.status == status).count()
    }

    /// Number of taken slots held by an employee.
    pub fn held_by(&self, employee_id: &str) -> usize {
        self.slots().filter(|(_, s)| s.is_held_by(employee_id)).count()
    }

    /// Number of days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the week has no days.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

fn short_day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}
