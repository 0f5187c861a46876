//! Fixed values shared by the user and campaign models.

// =============================================================================
// Roles
// =============================================================================

/// Role given to every self-registered account
pub const ROLE_USER: &str = "user";

/// Platform staff
pub const ROLE_ADMIN: &str = "admin";

// =============================================================================
// Campaigns
// =============================================================================

/// Separator placed between words of a slug
pub const SLUG_SEPARATOR: char = '-';

/// Separator used when perks arrive as a single string
pub const PERKS_SEPARATOR: char = ',';

/// Sentinel owner id meaning "no owner filter"
pub const NO_OWNER_FILTER: i64 = 0;
