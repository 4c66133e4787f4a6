use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::asset_type::AssetType;

/// A user's record of having starred one asset.
///
/// The same `(userid, type, assetid)` triple may legitimately appear more
/// than once; there is no uniqueness constraint on stars.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_stars")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "userid")]
    pub user_id: i64,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    #[serde(rename = "assetid")]
    pub asset_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_payload() {
        let star: Model =
            serde_json::from_str(r#"{"userid": 1, "type": "Audience", "assetid": 42}"#).unwrap();
        assert_eq!(star.id, 0);
        assert_eq!(star.user_id, 1);
        assert_eq!(star.asset_type, AssetType::Audience);
        assert_eq!(star.asset_id, 42);
    }

    #[test]
    fn rejects_invalid_asset_type() {
        let err = serde_json::from_str::<Model>(r#"{"userid": 1, "type": "audience", "assetid": 42}"#);
        assert!(err.is_err());
    }
}
