//! Add, update and remove operations over [`UserTimeSlots`].
//!
//! Every operation borrows the current aggregate and hands back a new one; the
//! caller keeps whichever value it wants. Only the named tier's list changes.

use chrono::NaiveTime;

use crate::models::{
    driver_tier::DriverTier,
    time_slot::{Day, TimeRange, TimeSlotEntry, TimeSlotPatch, UserTimeSlots},
};

/// Window a freshly added slot starts with.
pub fn default_time_range() -> TimeRange {
    TimeRange::new(
        NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
        NaiveTime::from_hms_opt(17, 0, 0).unwrap_or_default(),
    )
}

/// Next id for `entries`: one past the largest id, or 1 for an empty list.
///
/// Gaps left by removed slots are never reused.
pub fn next_slot_id(entries: &[TimeSlotEntry]) -> u32 {
    entries
        .iter()
        .map(|entry| entry.id)
        .max()
        .map_or(1, |max| max + 1)
}

impl UserTimeSlots {
    /// Appends a slot with default values to `tier`.
    pub fn add_slot(&self, tier: DriverTier) -> Self {
        let current = self.slots(tier);
        let entry = TimeSlotEntry {
            id: next_slot_id(current),
            day: Day::Monday,
            time_range: Some(default_time_range()),
            price: tier.seed_price(),
        };

        let mut slots = current.to_vec();
        slots.push(entry);
        self.with_slots(tier, slots)
    }

    /// Merges `patch` into the slot at `index` of `tier`.
    ///
    /// An out-of-range index leaves the aggregate as it was.
    pub fn update_slot(&self, tier: DriverTier, index: usize, patch: &TimeSlotPatch) -> Self {
        let current = self.slots(tier);
        let Some(entry) = current.get(index) else {
            return self.clone();
        };

        let mut slots = current.to_vec();
        slots[index] = patch.apply(entry);
        self.with_slots(tier, slots)
    }

    /// Drops the slot whose id is `id` from `tier`, if there is one.
    pub fn remove_slot(&self, tier: DriverTier, id: u32) -> Self {
        let slots = self
            .slots(tier)
            .iter()
            .filter(|entry| entry.id != id)
            .cloned()
            .collect();
        self.with_slots(tier, slots)
    }
}
