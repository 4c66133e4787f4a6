use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "audiences")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(default)]
    pub id: i64,
    pub gender: String,
    #[serde(rename = "birthcountry")]
    pub birth_country: String,
    #[serde(rename = "agegroup")]
    pub age_group: String,
    #[serde(rename = "dailyhours")]
    pub daily_hours: i32,
    #[serde(rename = "noofpurchases")]
    pub no_of_purchases: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
