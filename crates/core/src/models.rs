pub mod driver_tier;
pub mod pricing_rule;
pub mod serde_helpers;
pub mod time_slot;
