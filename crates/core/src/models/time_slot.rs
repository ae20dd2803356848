use std::{fmt, str::FromStr};

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize};

use super::driver_tier::DriverTier;

/// Day of week a slot applies to. Always written lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
            Day::Saturday => "saturday",
            Day::Sunday => "sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Day::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown day '{}'", s))
    }
}

// Stored records are not consistent about capitalisation ("Monday" vs "monday").
impl<'de> Deserialize<'de> for Day {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Wall-clock window within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlotEntry {
    pub id: u32,
    pub day: Day,
    /// Unset while the operator has not picked a window yet.
    #[serde(default)]
    pub time_range: Option<TimeRange>,
    pub price: f64,
}

/// Partial update applied to one slot. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSlotPatch {
    pub day: Option<Day>,
    /// `Some(None)` clears the range.
    pub time_range: Option<Option<TimeRange>>,
    pub price: Option<f64>,
}

impl TimeSlotPatch {
    pub fn day(day: Day) -> Self {
        Self {
            day: Some(day),
            ..Self::default()
        }
    }

    pub fn time_range(range: Option<TimeRange>) -> Self {
        Self {
            time_range: Some(range),
            ..Self::default()
        }
    }

    pub fn price(price: f64) -> Self {
        Self {
            price: Some(price),
            ..Self::default()
        }
    }

    pub(crate) fn apply(&self, entry: &TimeSlotEntry) -> TimeSlotEntry {
        TimeSlotEntry {
            id: entry.id,
            day: self.day.unwrap_or(entry.day),
            time_range: self.time_range.unwrap_or(entry.time_range),
            price: self.price.unwrap_or(entry.price),
        }
    }
}

/// Time slots of an edit session, one ordered list per driver tier.
///
/// Mutating operations live in [`crate::slots`] and return a new aggregate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserTimeSlots {
    #[serde(rename = "normal-driver", default)]
    normal: Vec<TimeSlotEntry>,
    #[serde(rename = "premium-driver", default)]
    premium: Vec<TimeSlotEntry>,
    #[serde(rename = "elite-driver", default)]
    elite: Vec<TimeSlotEntry>,
}

impl UserTimeSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slots(&self, tier: DriverTier) -> &[TimeSlotEntry] {
        match tier {
            DriverTier::NormalDriver => &self.normal,
            DriverTier::PremiumDriver => &self.premium,
            DriverTier::EliteDriver => &self.elite,
        }
    }

    /// Returns a copy with `tier`'s list replaced by `slots`.
    pub fn with_slots(&self, tier: DriverTier, slots: Vec<TimeSlotEntry>) -> Self {
        let mut next = self.clone();
        match tier {
            DriverTier::NormalDriver => next.normal = slots,
            DriverTier::PremiumDriver => next.premium = slots,
            DriverTier::EliteDriver => next.elite = slots,
        }
        next
    }

    /// Total slot count across every tier.
    pub fn len(&self) -> usize {
        self.normal.len() + self.premium.len() + self.elite.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every slot tagged with its tier, normal first and elite last.
    pub fn iter(&self) -> impl Iterator<Item = (DriverTier, &TimeSlotEntry)> + '_ {
        DriverTier::ALL
            .into_iter()
            .flat_map(move |tier| self.slots(tier).iter().map(move |entry| (tier, entry)))
    }
}
