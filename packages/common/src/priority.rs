#[cfg(feature = "sea-orm")]
use sea_orm::prelude::StringLen;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shelter-assigned urgency of a pet record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::None)")
)]
pub enum Priority {
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Low"))]
    Low,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Medium"))]
    Medium,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "High"))]
    High,
}

impl Priority {
    pub const ALL: &'static [Priority] = &[Self::Low, Self::Medium, Self::High];

    /// Sort rank used by the list view: Low = 1, Medium = 2, High = 3.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

/// Error when parsing an invalid priority string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePriorityError {
    invalid: String,
}

impl fmt::Display for ParsePriorityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid priority '{}'. Valid values: Low, Medium, High",
            self.invalid
        )
    }
}

impl std::error::Error for ParsePriorityError {}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            _ => Err(ParsePriorityError {
                invalid: s.to_string(),
            }),
        }
    }
}
