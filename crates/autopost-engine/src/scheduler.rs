//! Assigns publishing dates and time slots to the selected products.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, TimeZone};
use serde::Serialize;

use autopost_core::{BatchSize, Product};

/// Fixed daily posting times, used in rotation across a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TimeSlot {
    #[serde(rename = "10:00")]
    Morning,
    #[serde(rename = "13:00")]
    Midday,
    #[serde(rename = "18:00")]
    Evening,
    #[serde(rename = "20:00")]
    Night,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 4] = [
        TimeSlot::Morning,
        TimeSlot::Midday,
        TimeSlot::Evening,
        TimeSlot::Night,
    ];

    /// Slot for the `index`-th post of a batch.
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TimeSlot::Morning => "10:00",
            TimeSlot::Midday => "13:00",
            TimeSlot::Evening => "18:00",
            TimeSlot::Night => "20:00",
        }
    }

    #[must_use]
    pub fn time(self) -> NaiveTime {
        let hour = match self {
            TimeSlot::Morning => 10,
            TimeSlot::Midday => 13,
            TimeSlot::Evening => 18,
            TimeSlot::Night => 20,
        };
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledSlot {
    pub product: Product,
    /// Calendar date in the reference instant's zone.
    pub date: NaiveDate,
    pub time_slot: TimeSlot,
}

/// Schedules the first `batch_size` products of `ranked`.
///
/// The i-th post is dated `reference + (2i + 1)` days and gets
/// [`TimeSlot::for_index`]`(i)`. Fewer posts are returned when `ranked` is
/// shorter than the batch.
#[must_use]
pub fn schedule<Tz: TimeZone>(
    ranked: &[Product],
    batch_size: BatchSize,
    reference: &DateTime<Tz>,
) -> Vec<ScheduledSlot> {
    ranked
        .iter()
        .take(batch_size.get())
        .enumerate()
        .map(|(i, product)| ScheduledSlot {
            product: product.clone(),
            date: (reference.clone() + days_after(i)).date_naive(),
            time_slot: TimeSlot::for_index(i),
        })
        .collect()
}

fn days_after(index: usize) -> TimeDelta {
    // Batches hold at most eight posts.
    let index = i64::try_from(index).unwrap_or(i64::MAX / 2);
    TimeDelta::try_days(2 * index + 1).unwrap_or(TimeDelta::MAX)
}

/// Short date form shown on scheduled posts, e.g. `09-03-2026`.
#[must_use]
pub fn display_date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}
