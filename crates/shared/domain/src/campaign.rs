//! Campaign domain entities, inputs and response projections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::impl_patch;
use crate::patch::{empty_string_as_none, non_positive_as_none, perks_as_option, perks_list_or_joined};
use crate::user::UserId;

/// Storage-assigned campaign identifier
pub type CampaignId = i64;

/// Storage-assigned campaign image identifier
pub type CampaignImageId = i64;

/// Campaign domain entity
///
/// Ownership is held by `user_id` only; the owner is never embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: CampaignId,
    pub user_id: UserId,
    pub name: String,
    pub short_description: String,
    pub description: String,
    pub perks: Vec<String>,
    pub backer_count: i64,
    pub goal_amount: i64,
    pub current_amount: i64,
    /// Derived from name and owner at creation, never changed afterwards
    pub slug: String,
    #[serde(default)]
    pub images: Vec<CampaignImage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Campaign {
    /// Check whether `user_id` owns this campaign
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    /// The image currently marked primary, if any
    pub fn primary_image(&self) -> Option<&CampaignImage> {
        self.images.iter().find(|image| image.is_primary)
    }

    /// Refresh the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// A campaign that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCampaign {
    pub user_id: UserId,
    pub name: String,
    pub short_description: String,
    pub description: String,
    pub perks: Vec<String>,
    pub goal_amount: i64,
    pub slug: String,
}

/// Image attached to a campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignImage {
    pub id: CampaignImageId,
    pub campaign_id: CampaignId,
    pub file_name: String,
    pub is_primary: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An image that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCampaignImage {
    pub campaign_id: CampaignId,
    pub file_name: String,
    pub is_primary: bool,
}

/// Campaign creation input
///
/// `owner_id` is never read from the payload; the caller fills it from the
/// authenticated identity.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateCampaignInput {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Short description is required"))]
    pub short_description: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(range(min = 0, message = "Goal amount cannot be negative"))]
    pub goal_amount: i64,
    #[serde(default, deserialize_with = "perks_list_or_joined")]
    pub perks: Vec<String>,
    #[serde(skip)]
    pub owner_id: UserId,
}

/// Sparse campaign update
///
/// Only `Some` fields are applied. On the wire, `""`, non-positive amounts
/// and empty perk lists deserialize as absent.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCampaignInput {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(min = 1, message = "Short description cannot be empty"))]
    pub short_description: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "non_positive_as_none")]
    #[validate(range(min = 0, message = "Goal amount cannot be negative"))]
    pub goal_amount: Option<i64>,
    #[serde(default, deserialize_with = "perks_as_option")]
    pub perks: Option<Vec<String>>,
    #[serde(skip)]
    pub owner_id: UserId,
}

impl_patch!(UpdateCampaignInput => Campaign {
    name,
    short_description,
    description,
    goal_amount,
    perks,
});

/// Campaign image upload input
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SaveCampaignImageInput {
    #[validate(range(min = 1, message = "Campaign id is required"))]
    pub campaign_id: CampaignId,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(skip)]
    pub owner_id: UserId,
}

/// Campaign list item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignResponse {
    pub id: CampaignId,
    pub user_id: UserId,
    pub name: String,
    pub short_description: String,
    /// Primary image location, empty when none is set
    pub image_url: String,
    pub goal_amount: i64,
    pub current_amount: i64,
    pub slug: String,
}

impl From<&Campaign> for CampaignResponse {
    fn from(campaign: &Campaign) -> Self {
        Self {
            id: campaign.id,
            user_id: campaign.user_id,
            name: campaign.name.clone(),
            short_description: campaign.short_description.clone(),
            image_url: campaign
                .primary_image()
                .map(|image| image.file_name.clone())
                .unwrap_or_default(),
            goal_amount: campaign.goal_amount,
            current_amount: campaign.current_amount,
            slug: campaign.slug.clone(),
        }
    }
}

/// Image entry of a campaign detail
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignImageResponse {
    pub image_url: String,
    pub is_primary: bool,
}

impl From<&CampaignImage> for CampaignImageResponse {
    fn from(image: &CampaignImage) -> Self {
        Self {
            image_url: image.file_name.clone(),
            is_primary: image.is_primary,
        }
    }
}

/// Full campaign view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignDetailResponse {
    #[serde(flatten)]
    pub summary: CampaignResponse,
    pub description: String,
    pub backer_count: i64,
    pub perks: Vec<String>,
    pub images: Vec<CampaignImageResponse>,
}

impl From<&Campaign> for CampaignDetailResponse {
    fn from(campaign: &Campaign) -> Self {
        Self {
            summary: CampaignResponse::from(campaign),
            description: campaign.description.clone(),
            backer_count: campaign.backer_count,
            perks: campaign.perks.clone(),
            images: campaign.images.iter().map(CampaignImageResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::Patch;

    fn image(id: CampaignImageId, is_primary: bool) -> CampaignImage {
        let now = Utc::now();
        CampaignImage {
            id,
            campaign_id: 1,
            file_name: format!("images/{}.png", id),
            is_primary,
            created_at: now,
            updated_at: now,
        }
    }

    fn campaign() -> Campaign {
        let now = Utc::now();
        Campaign {
            id: 1,
            user_id: 7,
            name: "Help My Cat".to_string(),
            short_description: "Vet bills".to_string(),
            description: "Long story".to_string(),
            perks: vec!["Sticker".to_string(), "Photo".to_string()],
            backer_count: 2,
            goal_amount: 1_000,
            current_amount: 150,
            slug: "help-my-cat-7".to_string(),
            images: vec![image(1, false), image(2, true)],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_ownership() {
        let c = campaign();
        assert!(c.is_owned_by(7));
        assert!(!c.is_owned_by(8));
    }

    #[test]
    fn test_response_uses_primary_image() {
        let c = campaign();
        let response = CampaignResponse::from(&c);

        assert_eq!(response.image_url, "images/2.png");

        let mut without = campaign();
        without.images.clear();
        assert_eq!(CampaignResponse::from(&without).image_url, "");
    }

    #[test]
    fn test_detail_response_lists_images() {
        let detail = CampaignDetailResponse::from(&campaign());

        assert_eq!(detail.images.len(), 2);
        assert!(detail.images[1].is_primary);
        assert_eq!(detail.perks, vec!["Sticker".to_string(), "Photo".to_string()]);
    }

    #[test]
    fn test_update_patch_leaves_owner_and_slug() {
        let mut c = campaign();
        let patch = UpdateCampaignInput {
            name: Some("Help My Dog".to_string()),
            goal_amount: Some(2_000),
            owner_id: 99,
            ..Default::default()
        };

        assert!(patch.apply(&mut c));
        assert_eq!(c.name, "Help My Dog");
        assert_eq!(c.goal_amount, 2_000);
        assert_eq!(c.user_id, 7);
        assert_eq!(c.slug, "help-my-cat-7");
        assert_eq!(c.current_amount, 150);
        assert_eq!(c.short_description, "Vet bills");
    }

    #[test]
    fn test_create_input_accepts_joined_perks() {
        let input: CreateCampaignInput = serde_json::from_str(
            r#"{"name":"N","short_description":"S","description":"D","goal_amount":5,"perks":"a, b"}"#,
        )
        .unwrap();

        assert_eq!(input.perks, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(input.owner_id, 0);
    }

    #[test]
    fn test_update_input_validation() {
        let input = UpdateCampaignInput {
            name: Some(String::new()),
            goal_amount: Some(-1),
            ..Default::default()
        };

        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("goal_amount"));
        assert!(UpdateCampaignInput::default().validate().is_ok());
    }
}
