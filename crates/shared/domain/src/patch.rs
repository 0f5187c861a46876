//! Partial-update merge engine.
//!
//! A patch is a struct of `Option` fields whose names match fields on the
//! target entity. [`impl_patch!`] generates the merge for a patch/target pair
//! from the list of shared field names: every `Some` overwrites, every `None`
//! leaves the target untouched, and target fields not listed are never read
//! or written.
//!
//! The serde helpers at the bottom map the "zero value means absent"
//! convention of sparse JSON payloads onto `None`, so `""` or a non-positive
//! amount on the wire never overwrites stored data.

use serde::{Deserialize, Deserializer};

use crate::constants::PERKS_SEPARATOR;

/// Merge a sparse patch into a target entity.
pub trait Patch<T> {
    /// Overwrite every target field the patch carries a value for.
    ///
    /// Returns `true` if any target field changed value.
    fn apply(self, target: &mut T) -> bool;
}

/// Generate a [`Patch`] implementation over matching field names.
///
/// ```ignore
/// impl_patch!(UpdateCampaignInput => Campaign { name, goal_amount });
/// ```
#[macro_export]
macro_rules! impl_patch {
    ($patch:ty => $target:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::patch::Patch<$target> for $patch {
            fn apply(self, target: &mut $target) -> bool {
                let mut changed = false;
                $(
                    if let Some(value) = self.$field {
                        if target.$field != value {
                            target.$field = value;
                            changed = true;
                        }
                    }
                )+
                changed
            }
        }
    };
}

/// Deserialize an optional string, treating `""` as absent.
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Deserialize an optional amount, treating zero and negatives as absent.
pub fn non_positive_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<i64>::deserialize(deserializer)?;
    Ok(value.filter(|v| *v > 0))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PerksRepr {
    List(Vec<String>),
    Joined(String),
}

/// Split a comma-separated perk list into trimmed, non-empty entries.
pub fn split_perks(joined: &str) -> Vec<String> {
    joined
        .split(PERKS_SEPARATOR)
        .map(str::trim)
        .filter(|perk| !perk.is_empty())
        .map(str::to_string)
        .collect()
}

fn normalize_perks(repr: PerksRepr) -> Vec<String> {
    match repr {
        PerksRepr::List(list) => list
            .iter()
            .map(|perk| perk.trim())
            .filter(|perk| !perk.is_empty())
            .map(str::to_string)
            .collect(),
        PerksRepr::Joined(joined) => split_perks(&joined),
    }
}

/// Deserialize perks from either a list or a comma-separated string.
pub fn perks_list_or_joined<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(normalize_perks(PerksRepr::deserialize(deserializer)?))
}

/// Optional variant of [`perks_list_or_joined`]; an empty list is absent.
pub fn perks_as_option<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<PerksRepr>::deserialize(deserializer)?;
    Ok(value.map(normalize_perks).filter(|perks| !perks.is_empty()))
}
