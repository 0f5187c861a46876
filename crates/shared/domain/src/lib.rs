//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! users, campaigns and their images, password hashing, slug derivation and
//! the partial-update merge used by campaign edits.

pub mod campaign;
pub mod constants;
pub mod error;
pub mod password;
pub mod patch;
pub mod slug;
pub mod user;

pub use campaign::{
    Campaign, CampaignDetailResponse, CampaignId, CampaignImage, CampaignImageId,
    CampaignImageResponse, CampaignResponse, CreateCampaignInput, NewCampaign, NewCampaignImage,
    SaveCampaignImageInput, UpdateCampaignInput,
};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use password::{HashCost, Password};
pub use patch::{split_perks, Patch};
pub use slug::{campaign_slug, slugify};
pub use user::{
    CheckEmailInput, LoginInput, NewUser, RegisterUserInput, User, UserId, UserResponse, UserRole,
};
