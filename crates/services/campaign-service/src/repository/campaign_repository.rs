//! Campaign repository contract.
//!
//! Each call is atomic on its own; nothing here spans a transaction.
//! Returned campaigns carry their images.

use async_trait::async_trait;

use common::AppResult;
use domain::{Campaign, CampaignId, CampaignImage, NewCampaign, NewCampaignImage, UserId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Campaign repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CampaignRepository: Send + Sync {
    /// List every campaign
    async fn find_all(&self) -> AppResult<Vec<Campaign>>;

    /// List campaigns owned by a user
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Campaign>>;

    /// Find campaign by ID
    async fn find_by_id(&self, id: CampaignId) -> AppResult<Option<Campaign>>;

    /// Find campaign by slug
    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Campaign>>;

    /// Store a new campaign; storage assigns the id
    async fn save(&self, campaign: NewCampaign) -> AppResult<Campaign>;

    /// Persist changes to an existing campaign
    async fn update(&self, campaign: Campaign) -> AppResult<Campaign>;

    /// Clear the primary flag on every image of a campaign.
    ///
    /// Returns the number of images changed.
    async fn mark_all_images_non_primary(&self, campaign_id: CampaignId) -> AppResult<u64>;

    /// Store a new campaign image
    async fn create_image(&self, image: NewCampaignImage) -> AppResult<CampaignImage>;
}
