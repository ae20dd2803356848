use serde::{Deserialize, Serialize};

use super::{
    driver_tier::DriverTier,
    serde_helpers::{number_or_string, option_number_or_string},
    time_slot::{Day, UserTimeSlots},
};

/// District a pricing rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub district_id: i64,
    pub city_id: i64,
}

/// Everything an operator edits on the pricing rule screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingRuleForm {
    /// Set when editing an existing rule.
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub global_price: f64,
    #[serde(default)]
    pub is_hotspot: bool,
    #[serde(default)]
    pub hotspot_id: Option<i64>,
    #[serde(default)]
    pub multiplier: Option<f64>,
    #[serde(default)]
    pub time_slots: UserTimeSlots,
}

/// Body sent to the pricing-rules endpoint on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRulePayload {
    pub district_id: i64,
    pub city_id: i64,
    pub global_price: f64,
    pub is_hotspot: bool,
    pub hotspot_id: Option<i64>,
    pub multiplier: Option<f64>,
    pub time_slots: Vec<TimeSlotPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlotPayload {
    pub driver_types: DriverTier,
    pub day: Day,
    /// `HH:mm:ss`
    pub from_time: String,
    /// `HH:mm:ss`
    pub to_time: String,
    pub price: f64,
}

/// A pricing rule as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRuleRecord {
    pub id: i64,
    pub district_id: i64,
    pub city_id: i64,
    #[serde(deserialize_with = "number_or_string")]
    pub global_price: f64,
    #[serde(default)]
    pub is_hotspot: bool,
    #[serde(default)]
    pub hotspot_id: Option<i64>,
    #[serde(default, deserialize_with = "option_number_or_string")]
    pub multiplier: Option<f64>,
    #[serde(default)]
    pub time_slots: Vec<TimeSlotRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlotRecord {
    pub driver_types: DriverTier,
    pub day: Day,
    pub from_time: String,
    pub to_time: String,
    #[serde(deserialize_with = "number_or_string")]
    pub price: f64,
}
