//! Campaign service - Handles campaign business rules.
//!
//! Only the owning user may edit a campaign or attach images to it. Owner
//! checks run before any write, so a rejected call leaves storage untouched.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

use common::{AppError, AppResult, OptionExt};
use domain::{
    campaign_slug, Campaign, CampaignId, CampaignImage, CreateCampaignInput, NewCampaign,
    NewCampaignImage, Patch, SaveCampaignImageInput, UpdateCampaignInput, UserId,
    NO_OWNER_FILTER,
};

use crate::repository::CampaignRepository;

/// Campaign service trait for dependency injection.
#[async_trait]
pub trait CampaignService: Send + Sync {
    /// List campaigns, optionally only those owned by `owner`
    ///
    /// `Some(0)` is treated like `None`.
    async fn get_campaigns(&self, owner: Option<UserId>) -> AppResult<Vec<Campaign>>;

    /// Get campaign by ID
    async fn get_campaign_by_id(&self, id: CampaignId) -> AppResult<Campaign>;

    /// Get campaign by slug
    async fn get_campaign_by_slug(&self, slug: &str) -> AppResult<Campaign>;

    /// Create a campaign owned by `input.owner_id`
    async fn create_campaign(&self, input: CreateCampaignInput) -> AppResult<Campaign>;

    /// Apply a sparse update; only the owner may do this
    async fn update_campaign(
        &self,
        id: CampaignId,
        input: UpdateCampaignInput,
    ) -> AppResult<Campaign>;

    /// Attach an already-stored image file to a campaign
    ///
    /// A primary image demotes every existing image of the campaign first.
    async fn save_campaign_image(
        &self,
        input: SaveCampaignImageInput,
        file_location: String,
    ) -> AppResult<CampaignImage>;
}

/// Concrete implementation of CampaignService using repository.
pub struct CampaignManager {
    repo: Arc<dyn CampaignRepository>,
}

impl CampaignManager {
    /// Create new campaign service instance with repository
    pub fn new(repo: Arc<dyn CampaignRepository>) -> Self {
        Self { repo }
    }

    async fn find_owned(&self, id: CampaignId, actor: UserId) -> AppResult<Campaign> {
        let campaign = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_not_found("Campaign")?;

        if !campaign.is_owned_by(actor) {
            warn!(
                campaign_id = id,
                actor_id = actor,
                owner_id = campaign.user_id,
                "Rejected change to campaign by non-owner"
            );
            return Err(AppError::Forbidden);
        }

        Ok(campaign)
    }
}

#[async_trait]
impl CampaignService for CampaignManager {
    async fn get_campaigns(&self, owner: Option<UserId>) -> AppResult<Vec<Campaign>> {
        match owner.filter(|id| *id != NO_OWNER_FILTER) {
            Some(user_id) => self.repo.find_by_user_id(user_id).await,
            None => self.repo.find_all().await,
        }
    }

    async fn get_campaign_by_id(&self, id: CampaignId) -> AppResult<Campaign> {
        self.repo.find_by_id(id).await?.ok_or_not_found("Campaign")
    }

    async fn get_campaign_by_slug(&self, slug: &str) -> AppResult<Campaign> {
        self.repo.find_by_slug(slug).await?.ok_or_not_found("Campaign")
    }

    async fn create_campaign(&self, input: CreateCampaignInput) -> AppResult<Campaign> {
        let slug = campaign_slug(&input.name, input.owner_id);

        let campaign = self
            .repo
            .save(NewCampaign {
                user_id: input.owner_id,
                name: input.name,
                short_description: input.short_description,
                description: input.description,
                perks: input.perks,
                goal_amount: input.goal_amount,
                slug,
            })
            .await?;

        info!(
            campaign_id = campaign.id,
            owner_id = campaign.user_id,
            slug = %campaign.slug,
            "Campaign created"
        );
        Ok(campaign)
    }

    async fn update_campaign(
        &self,
        id: CampaignId,
        input: UpdateCampaignInput,
    ) -> AppResult<Campaign> {
        let mut campaign = self.find_owned(id, input.owner_id).await?;

        if input.apply(&mut campaign) {
            campaign.touch();
        } else {
            debug!(campaign_id = id, "Campaign patch changed nothing");
        }

        self.repo.update(campaign).await
    }

    async fn save_campaign_image(
        &self,
        input: SaveCampaignImageInput,
        file_location: String,
    ) -> AppResult<CampaignImage> {
        let campaign = self.find_owned(input.campaign_id, input.owner_id).await?;

        // Demotion must finish before the insert starts.
        if input.is_primary {
            let demoted = self.repo.mark_all_images_non_primary(campaign.id).await?;
            debug!(campaign_id = campaign.id, demoted, "Cleared previous primary image");
        }

        let image = self
            .repo
            .create_image(NewCampaignImage {
                campaign_id: campaign.id,
                file_name: file_location,
                is_primary: input.is_primary,
            })
            .await?;

        info!(
            campaign_id = image.campaign_id,
            image_id = image.id,
            is_primary = image.is_primary,
            "Campaign image saved"
        );
        Ok(image)
    }
}
