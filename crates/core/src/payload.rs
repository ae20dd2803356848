//! # Pricing Payload Transformer
//!
//! Converts between the three shapes a pricing rule takes:
//!
//! - [`PricingRuleRecord`]: what the API returns when a rule is fetched
//! - [`PricingRuleForm`]: the in-progress edit session
//! - [`PricingRulePayload`]: the flat body sent back on save
//!
//! Saving is all or nothing. A form that fails any check produces no payload.

use chrono::NaiveTime;

use crate::{
    errors::{PricingError, PricingResult, ValidationError},
    models::{
        driver_tier::DriverTier,
        pricing_rule::{
            Location, PricingRuleForm, PricingRulePayload, PricingRuleRecord, TimeSlotPayload,
        },
        time_slot::{TimeRange, TimeSlotEntry, UserTimeSlots},
    },
};

/// Wire format of slot boundaries.
pub const TIME_FORMAT: &str = "%H:%M:%S";

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

pub fn parse_time(value: &str) -> PricingResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
        .map_err(|e| PricingError::InvalidTime(format!("'{}' is not HH:mm:ss ({})", value, e)))
}

impl PricingRuleForm {
    /// Checks the form in the order an operator would fix it.
    ///
    /// # Errors
    ///
    /// * `ValidationError::MissingLocation` - No district selected
    /// * `ValidationError::MissingHotspot` - Hotspot pricing on, but no hotspot chosen
    /// * `ValidationError::NoTimeSlots` - Every tier is empty
    /// * `ValidationError::MissingTimeRange` - A slot has no window
    /// * `ValidationError::InvalidPrice` - A slot price is negative or not finite
    pub fn validate(&self) -> Result<Location, ValidationError> {
        let location = self.location.ok_or(ValidationError::MissingLocation)?;

        if self.is_hotspot && self.hotspot_id.is_none() {
            return Err(ValidationError::MissingHotspot);
        }

        if self.time_slots.is_empty() {
            return Err(ValidationError::NoTimeSlots);
        }

        for (tier, entry) in self.time_slots.iter() {
            if entry.time_range.is_none() {
                return Err(ValidationError::MissingTimeRange { tier, id: entry.id });
            }
            if !entry.price.is_finite() || entry.price < 0.0 {
                return Err(ValidationError::InvalidPrice { tier, id: entry.id });
            }
        }

        Ok(location)
    }

    /// Validates the form and flattens it into the body the API accepts.
    ///
    /// Slots are emitted tier by tier (normal, premium, elite), each in its
    /// list order. Hotspot fields are sent as `null` unless hotspot pricing is
    /// enabled.
    pub fn to_payload(&self) -> PricingResult<PricingRulePayload> {
        let location = self.validate()?;

        let time_slots = self
            .time_slots
            .iter()
            .map(|(tier, entry)| slot_payload(tier, entry))
            .collect::<Result<Vec<_>, _>>()?;

        let (hotspot_id, multiplier) = if self.is_hotspot {
            (self.hotspot_id, self.multiplier)
        } else {
            (None, None)
        };

        Ok(PricingRulePayload {
            district_id: location.district_id,
            city_id: location.city_id,
            global_price: self.global_price,
            is_hotspot: self.is_hotspot,
            hotspot_id,
            multiplier,
            time_slots,
        })
    }

    /// Rebuilds an edit session from a fetched rule.
    ///
    /// Slots are grouped by tier in the order they were returned and numbered
    /// from 1 within each tier.
    pub fn from_record(record: &PricingRuleRecord) -> PricingResult<Self> {
        let mut time_slots = UserTimeSlots::new();

        for tier in DriverTier::ALL {
            let entries = record
                .time_slots
                .iter()
                .filter(|slot| slot.driver_types == tier)
                .zip(1..)
                .map(|(slot, id)| {
                    let range =
                        TimeRange::new(parse_time(&slot.from_time)?, parse_time(&slot.to_time)?);
                    Ok(TimeSlotEntry {
                        id,
                        day: slot.day,
                        time_range: Some(range),
                        price: slot.price,
                    })
                })
                .collect::<PricingResult<Vec<_>>>()?;
            time_slots = time_slots.with_slots(tier, entries);
        }

        Ok(Self {
            id: Some(record.id),
            location: Some(Location {
                district_id: record.district_id,
                city_id: record.city_id,
            }),
            global_price: record.global_price,
            is_hotspot: record.is_hotspot,
            hotspot_id: record.hotspot_id,
            multiplier: record.multiplier,
            time_slots,
        })
    }
}

fn slot_payload(tier: DriverTier, entry: &TimeSlotEntry) -> Result<TimeSlotPayload, ValidationError> {
    let range = entry
        .time_range
        .ok_or(ValidationError::MissingTimeRange { tier, id: entry.id })?;

    Ok(TimeSlotPayload {
        driver_types: tier,
        day: entry.day,
        from_time: format_time(range.start),
        to_time: format_time(range.end),
        price: entry.price,
    })
}
