//! Campaign service business logic.

mod campaign_service;

pub use campaign_service::{CampaignManager, CampaignService};
