//! # vDrive Client
//!
//! Connects the pricing rule editor in `vdrive-core` to the vDrive admin API.
//!
//! - **Config**: API location, credentials and log level from the environment
//! - **Api**: the [`PricingRuleApi`](api::PricingRuleApi) seam and its HTTP implementation
//! - **Editor**: the load/save flow used by the admin tools
//! - **Mock**: a mockall double of the API for tests

/// Configuration loaded from environment variables
pub mod config;
/// Pricing-rules endpoints
pub mod api;
/// Load and save flow for a pricing rule edit session
pub mod editor;
/// Mock API for testing
pub mod mock;

pub use api::{HttpPricingRuleApi, PricingRuleApi};
pub use config::ClientConfig;
pub use editor::PricingRuleEditor;
