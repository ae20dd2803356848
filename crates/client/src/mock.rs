use async_trait::async_trait;
use mockall::mock;
use vdrive_core::{
    errors::PricingResult,
    models::pricing_rule::{PricingRulePayload, PricingRuleRecord},
};

use crate::api::PricingRuleApi;

// Mock pricing API for testing
mock! {
    pub PricingRuleApi {}

    #[async_trait]
    impl PricingRuleApi for PricingRuleApi {
        async fn fetch_pricing_rule(&self, id: i64) -> PricingResult<PricingRuleRecord>;

        async fn update_or_create(
            &self,
            id: Option<i64>,
            payload: &PricingRulePayload,
        ) -> PricingResult<()>;
    }
}
