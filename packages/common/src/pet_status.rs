#[cfg(feature = "sea-orm")]
use sea_orm::prelude::StringLen;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Adoption lifecycle state of a pet record.
///
/// Serialized as the human-readable label shown on the dashboard. When the
/// `sea-orm` feature is enabled, this enum can be used directly in SeaORM entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::None)")
)]
pub enum PetStatus {
    /// Listed and waiting for a home.
    #[serde(rename = "Available for Adoption")]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Available for Adoption"))]
    AvailableForAdoption,
    #[serde(rename = "Adopted")]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Adopted"))]
    Adopted,
    /// Adopted, but still staying at the shelter (e.g. recovering).
    #[serde(rename = "In Care (Adopted)")]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "In Care (Adopted)"))]
    InCareAdopted,
    /// Under treatment and not yet available.
    #[serde(rename = "In Care (Not Adopted)")]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "In Care (Not Adopted)"))]
    InCareNotAdopted,
}

impl PetStatus {
    /// All statuses, in the order the dashboard offers them.
    pub const ALL: &'static [PetStatus] = &[
        Self::AvailableForAdoption,
        Self::Adopted,
        Self::InCareAdopted,
        Self::InCareNotAdopted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AvailableForAdoption => "Available for Adoption",
            Self::Adopted => "Adopted",
            Self::InCareAdopted => "In Care (Adopted)",
            Self::InCareNotAdopted => "In Care (Not Adopted)",
        }
    }
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for PetStatus {
    fn default() -> Self {
        Self::AvailableForAdoption
    }
}

/// Error when parsing an invalid status string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatusError {
    invalid: String,
}

impl fmt::Display for ParseStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid status '{}'. Valid values: {}",
            self.invalid,
            PetStatus::ALL
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::error::Error for ParseStatusError {}

impl FromStr for PetStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PetStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError {
                invalid: s.to_string(),
            })
    }
}
