//! # Time Slot Collision Detection
//!
//! Operators may not price the same tier twice for the same moment of a day.
//! This module decides when a candidate window conflicts with the windows
//! already present for a tier.
//!
//! ## Overlap Rules
//!
//! A candidate `[start, end]` collides with an existing `[s, e]` on the same
//! day when any of the following holds:
//!
//! 1. `start` falls in `[s, e)`
//! 2. `end` falls in `(s, e]`
//! 3. the candidate covers the existing window (`start <= s` and `end >= e`)
//!
//! The rules are applied literally, including for zero-length windows. A
//! candidate `11:00-11:00` against `09:00-11:00` collides through rule 2,
//! while `11:00-12:00` against the same window does not.
//!
//! Collisions are advisory. Nothing here prevents an overlapping slot from
//! being stored or saved.

use crate::models::time_slot::{Day, TimeRange, TimeSlotEntry};

/// Returns `true` if `candidate` overlaps any entry of `existing` on `day`.
///
/// # Arguments
///
/// * `day` - Day the candidate applies to
/// * `candidate` - Window being checked; an unset window never collides
/// * `existing` - Slots of the tier currently being edited
/// * `exclude_index` - Position of the slot being edited, so it is not
///   compared against itself
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use vdrive_core::collision::has_collision;
/// use vdrive_core::models::time_slot::{Day, TimeRange, TimeSlotEntry};
///
/// let at = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
/// let existing = vec![TimeSlotEntry {
///     id: 1,
///     day: Day::Monday,
///     time_range: Some(TimeRange::new(at(9), at(11))),
///     price: 300.0,
/// }];
///
/// let candidate = TimeRange::new(at(10), at(12));
/// assert!(has_collision(Day::Monday, Some(&candidate), &existing, None));
/// assert!(!has_collision(Day::Tuesday, Some(&candidate), &existing, None));
/// ```
pub fn has_collision(
    day: Day,
    candidate: Option<&TimeRange>,
    existing: &[TimeSlotEntry],
    exclude_index: Option<usize>,
) -> bool {
    let Some(candidate) = candidate else {
        return false;
    };

    existing
        .iter()
        .enumerate()
        .filter(|(index, _)| Some(*index) != exclude_index)
        .filter(|(_, entry)| entry.day == day)
        .filter_map(|(_, entry)| entry.time_range.as_ref())
        .any(|range| overlaps(candidate, range))
}

/// Overlap test between two windows on the same day.
pub fn overlaps(candidate: &TimeRange, existing: &TimeRange) -> bool {
    let (start, end) = (candidate.start, candidate.end);
    let (existing_start, existing_end) = (existing.start, existing.end);

    let starts_inside = start >= existing_start && start < existing_end;
    let ends_inside = end > existing_start && end <= existing_end;
    let covers = start <= existing_start && end >= existing_end;

    starts_inside || ends_inside || covers
}

/// Positions of every slot in `entries` that collides with another slot of
/// the same list.
///
/// Used to highlight conflicting rows and to warn before a save.
pub fn find_collisions(entries: &[TimeSlotEntry]) -> Vec<usize> {
    entries
        .iter()
        .enumerate()
        .filter(|(index, entry)| {
            has_collision(entry.day, entry.time_range.as_ref(), entries, Some(*index))
        })
        .map(|(index, _)| index)
        .collect()
}
