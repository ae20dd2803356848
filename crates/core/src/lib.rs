//! # vDrive Core
//!
//! Pure pricing-rule logic for the vDrive admin tools: the per-tier time slot
//! collections an operator edits, the overlap check that flags conflicting
//! slots, and the transform that turns an edit session into the payload the
//! pricing-rules API accepts.
//!
//! Nothing in this crate performs I/O. Every mutation of
//! [`UserTimeSlots`](models::time_slot::UserTimeSlots) returns a new value and
//! leaves the original untouched.

/// Error types shared by the core and the API client
pub mod errors;
/// Domain models: tiers, days, time slots and pricing rule shapes
pub mod models;

/// Overlap detection between time slots of one tier
pub mod collision;
/// Validation and conversion between forms, records and payloads
pub mod payload;
/// Copy-on-write add/update/remove over the slot aggregate
pub mod slots;
