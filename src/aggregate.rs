//! Day grouping and per-day scenario-hour summaries

use std::collections::BTreeMap;

use crate::data::Reading;
use crate::date::CalendarDate;
use crate::scenario::ScenarioId;

/// Readings grouped by calendar day.
///
/// Built once from the full dataset, read-only afterwards. Within a day
/// readings are in ascending hour order (ties keep input order).
#[derive(Debug, Clone, Default)]
pub struct DayGroups {
    groups: BTreeMap<CalendarDate, Vec<Reading>>,
}

impl DayGroups {
    /// Number of distinct days
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, day: &CalendarDate) -> Option<&[Reading]> {
        self.groups.get(day).map(Vec::as_slice)
    }

    /// Distinct days in ascending order
    pub fn days(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.groups.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CalendarDate, &[Reading])> {
        self.groups.iter().map(|(day, rows)| (day, rows.as_slice()))
    }

    /// Total readings across all days
    pub fn reading_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// Group readings by day in a single pass
pub fn group_by_day<I>(readings: I) -> DayGroups
where
    I: IntoIterator<Item = Reading>,
{
    let mut groups: BTreeMap<CalendarDate, Vec<Reading>> = BTreeMap::new();
    for reading in readings {
        groups.entry(reading.day).or_default().push(reading);
    }

    for rows in groups.values_mut() {
        if !rows.is_sorted_by_key(|r| r.hour) {
            rows.sort_by_key(|r| r.hour);
        }
    }

    DayGroups { groups }
}

/// Count of readings per scenario for one day.
///
/// Every catalog scenario is present, zero counts included. Hourly flags may
/// overlap, so counts are independent and need not sum to the day length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScenarioHourSummary {
    counts: [usize; 4],
}

impl ScenarioHourSummary {
    pub fn hours(&self, id: ScenarioId) -> usize {
        self.counts[id.index()]
    }

    /// (scenario, hours) in catalog order, zero counts included
    pub fn iter(&self) -> impl Iterator<Item = (ScenarioId, usize)> + '_ {
        ScenarioId::ALL.into_iter().map(|id| (id, self.hours(id)))
    }

    /// "Optimal 5h | Thermal Overdrive 3h", skipping zero-hour scenarios
    pub fn describe(&self) -> String {
        self.iter()
            .filter(|(_, hours)| *hours > 0)
            .map(|(id, hours)| format!("{} {}h", id.column_key().replace('_', " "), hours))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// Count readings satisfying each scenario
pub fn summarize_hours(day: &[Reading]) -> ScenarioHourSummary {
    let mut summary = ScenarioHourSummary::default();
    for reading in day {
        for id in reading.scenarios.iter() {
            summary.counts[id.index()] += 1;
        }
    }
    summary
}
