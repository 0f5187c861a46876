//! Repository contract for campaign storage.

mod campaign_repository;

pub use campaign_repository::CampaignRepository;

#[cfg(any(test, feature = "test-utils"))]
pub use campaign_repository::MockCampaignRepository;
