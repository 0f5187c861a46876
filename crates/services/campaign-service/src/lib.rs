//! Campaign Service Library
//!
//! Listing, lookup, creation and owner-only editing of crowdfunding
//! campaigns, plus campaign image uploads with a single primary image per
//! campaign. Storage is reached through [`repository::CampaignRepository`].

pub mod repository;
pub mod service;

pub use repository::CampaignRepository;
pub use service::{CampaignManager, CampaignService};

#[cfg(any(test, feature = "test-utils"))]
pub use repository::MockCampaignRepository;
