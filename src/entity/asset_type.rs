//! The closed set of asset kinds a star can point at.

use std::fmt;
use std::str::FromStr;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Kind of asset referenced by a star.
///
/// Stored as its canonical string (`"Audience"`, `"Chart"`, `"Insight"`).
/// Both the DB decode path and serde reject any other value, so an invalid
/// kind is never representable in memory.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum AssetType {
    #[sea_orm(string_value = "Audience")]
    Audience,
    #[sea_orm(string_value = "Chart")]
    Chart,
    #[sea_orm(string_value = "Insight")]
    Insight,
}

impl AssetType {
    /// Canonical string form, as persisted and as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Audience => "Audience",
            AssetType::Chart => "Chart",
            AssetType::Insight => "Insight",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = String;

    /// Case-sensitive parse; only the three canonical names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Audience" => Ok(AssetType::Audience),
            "Chart" => Ok(AssetType::Chart),
            "Insight" => Ok(AssetType::Insight),
            other => Err(format!("invalid asset type: {other:?}")),
        }
    }
}
