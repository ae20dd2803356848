//! Load and save flow for the pricing rule screen.

use tracing::{error, info, warn};
use vdrive_core::{
    collision::find_collisions,
    errors::PricingResult,
    models::{driver_tier::DriverTier, pricing_rule::PricingRuleForm, time_slot::UserTimeSlots},
};

use crate::api::PricingRuleApi;

/// Drives a pricing rule edit session against a [`PricingRuleApi`].
pub struct PricingRuleEditor<A> {
    api: A,
}

impl<A: PricingRuleApi> PricingRuleEditor<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Fetches rule `id` and turns it into an editable form.
    pub async fn load(&self, id: i64) -> PricingResult<PricingRuleForm> {
        let record = self.api.fetch_pricing_rule(id).await?;
        let form = PricingRuleForm::from_record(&record)?;
        info!(
            rule_id = id,
            slots = form.time_slots.len(),
            "Loaded pricing rule"
        );
        Ok(form)
    }

    /// Validates `form` and sends it in a single update-or-create request.
    ///
    /// Overlapping slots are logged but do not stop the save. A form that
    /// fails validation is rejected before any request is made.
    pub async fn save(&self, form: &PricingRuleForm) -> PricingResult<()> {
        for (tier, ids) in conflicting_slot_ids(&form.time_slots) {
            warn!(tier = %tier, slot_ids = ?ids, "Saving overlapping time slots");
        }

        let payload = form.to_payload().inspect_err(|err| {
            warn!("Pricing rule not submitted: {}", err.user_message());
        })?;

        info!(
            rule_id = ?form.id,
            slots = payload.time_slots.len(),
            "Submitting pricing rule"
        );

        match self.api.update_or_create(form.id, &payload).await {
            Ok(()) => {
                info!(rule_id = ?form.id, "Pricing rule saved");
                Ok(())
            }
            Err(err) => {
                error!("Failed to save pricing rule: {}", err);
                Err(err)
            }
        }
    }
}

/// Ids of overlapping slots, grouped by tier. Tiers without overlaps are left out.
pub fn conflicting_slot_ids(slots: &UserTimeSlots) -> Vec<(DriverTier, Vec<u32>)> {
    DriverTier::ALL
        .into_iter()
        .filter_map(|tier| {
            let entries = slots.slots(tier);
            let ids: Vec<u32> = find_collisions(entries)
                .into_iter()
                .map(|index| entries[index].id)
                .collect();
            (!ids.is_empty()).then_some((tier, ids))
        })
        .collect()
}
