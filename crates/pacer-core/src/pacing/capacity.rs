//! Teaching slot capacity for a scope.

use std::collections::BTreeSet;

use jiff::civil::Date;
use log::debug;

use crate::{
    error::Result,
    models::{DayOfWeek, Scope, TeachingSlot, TimetablePeriod},
    sources::{CalendarReader, TimetableReader},
};

/// Confirmed timetable periods keyed by weekday, built once per run.
#[derive(Debug, Default)]
pub struct WeekdayArena {
    days: [Vec<TimetablePeriod>; 7],
}

impl WeekdayArena {
    /// Load the confirmed periods of every weekday for `scope`.
    pub fn load<R>(reader: &R, scope: &Scope) -> Result<Self>
    where
        R: TimetableReader + ?Sized,
    {
        let mut arena = Self::default();
        for day in DayOfWeek::ALL {
            let mut periods = reader.periods_for(scope, day)?;
            periods.retain(|period| period.day_of_week == day && period.status.is_confirmed());
            periods.sort_by_key(|period| period.period_order);
            arena.days[day.index()] = periods;
        }
        Ok(arena)
    }

    pub fn periods(&self, day: DayOfWeek) -> &[TimetablePeriod] {
        &self.days[day.index()]
    }

    /// Periods per week across all days.
    pub fn weekly_periods(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }
}

/// Expands the school calendar into concrete teaching slots.
pub struct SlotCapacityResolver<'a, S: ?Sized> {
    source: &'a S,
    max_days: u32,
}

impl<'a, S> SlotCapacityResolver<'a, S>
where
    S: TimetableReader + CalendarReader + ?Sized,
{
    pub fn new(source: &'a S, max_days: u32) -> Self {
        Self { source, max_days }
    }

    /// Slots from `start` through `end` inclusive, in date then period
    /// order. Walks at most `max_days` dates. Holidays and events yield no
    /// slots.
    pub fn resolve(&self, scope: &Scope, start: Date, end: Date) -> Result<Vec<TeachingSlot>> {
        if end < start {
            return Ok(Vec::new());
        }

        let arena = WeekdayArena::load(self.source, scope)?;
        if arena.weekly_periods() == 0 {
            debug!("No confirmed timetable periods for {scope}");
            return Ok(Vec::new());
        }

        let blocked: BTreeSet<Date> = self
            .source
            .exceptions_between(scope, start, end)?
            .into_iter()
            .filter(|exception| exception.kind.blocks_teaching())
            .map(|exception| exception.date)
            .collect();

        let mut slots = Vec::new();
        let mut date = start;
        for _ in 0..self.max_days {
            if date > end {
                break;
            }
            if !blocked.contains(&date) {
                let day = DayOfWeek::of(date);
                slots.extend(arena.periods(day).iter().map(|period| TeachingSlot {
                    date,
                    day_of_week: day,
                    period_label: period.period_label.clone(),
                }));
            }
            date = match date.tomorrow() {
                Ok(next) => next,
                Err(_) => break,
            };
        }

        debug!(
            "Resolved {} slots for {scope} between {start} and {end} ({} blocked dates)",
            slots.len(),
            blocked.len()
        );
        Ok(slots)
    }
}
