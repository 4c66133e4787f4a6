//! sea-orm backed store.

use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::entity::{audience, chart, insight, user_star};
use crate::error::Result;

use super::{AssetStore, StarReader};

/// Store implementation over a sea-orm connection pool.
///
/// Holds only the pool handle; cloning is cheap and every method checks a
/// connection out for the duration of one query.
#[derive(Clone)]
pub struct PostgresStore {
    db: DatabaseConnection,
}

impl PostgresStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StarReader for PostgresStore {
    async fn find_stars_by_user(&self, user_id: i64) -> Result<Vec<user_star::Model>> {
        let stars = user_star::Entity::find()
            .filter(user_star::Column::UserId.eq(user_id))
            .order_by_asc(user_star::Column::Id)
            .all(&self.db)
            .await?;
        Ok(stars)
    }

    async fn audiences_by_ids(&self, ids: &[i64]) -> Result<Vec<audience::Model>> {
        let rows = audience::Entity::find()
            .filter(audience::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn charts_by_ids(&self, ids: &[i64]) -> Result<Vec<chart::Model>> {
        let rows = chart::Entity::find()
            .filter(chart::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn insights_by_ids(&self, ids: &[i64]) -> Result<Vec<insight::Model>> {
        let rows = insight::Entity::find()
            .filter(insight::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await?;
        Ok(rows)
    }
}

#[async_trait]
impl AssetStore for PostgresStore {
    async fn create_audience(&self, input: audience::Model) -> Result<audience::Model> {
        let row = audience::ActiveModel {
            id: NotSet,
            gender: Set(input.gender),
            birth_country: Set(input.birth_country),
            age_group: Set(input.age_group),
            daily_hours: Set(input.daily_hours),
            no_of_purchases: Set(input.no_of_purchases),
        }
        .insert(&self.db)
        .await?;
        Ok(row)
    }

    async fn list_audiences(&self) -> Result<Vec<audience::Model>> {
        Ok(audience::Entity::find().all(&self.db).await?)
    }

    async fn get_audience(&self, id: i64) -> Result<Option<audience::Model>> {
        Ok(audience::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn update_audience(
        &self,
        id: i64,
        input: audience::Model,
    ) -> Result<Option<audience::Model>> {
        let row = audience::ActiveModel {
            id: Set(id),
            gender: Set(input.gender),
            birth_country: Set(input.birth_country),
            age_group: Set(input.age_group),
            daily_hours: Set(input.daily_hours),
            no_of_purchases: Set(input.no_of_purchases),
        };
        match row.update(&self.db).await {
            Ok(updated) => Ok(Some(updated)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn delete_audience(&self, id: i64) -> Result<bool> {
        let res = audience::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }

    async fn create_chart(&self, input: chart::Model) -> Result<chart::Model> {
        let row = chart::ActiveModel {
            id: NotSet,
            title: Set(input.title),
            x_axis_title: Set(input.x_axis_title),
            y_axis_title: Set(input.y_axis_title),
        }
        .insert(&self.db)
        .await?;
        Ok(row)
    }

    async fn list_charts(&self) -> Result<Vec<chart::Model>> {
        Ok(chart::Entity::find().all(&self.db).await?)
    }

    async fn get_chart(&self, id: i64) -> Result<Option<chart::Model>> {
        Ok(chart::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn update_chart(&self, id: i64, input: chart::Model) -> Result<Option<chart::Model>> {
        let row = chart::ActiveModel {
            id: Set(id),
            title: Set(input.title),
            x_axis_title: Set(input.x_axis_title),
            y_axis_title: Set(input.y_axis_title),
        };
        match row.update(&self.db).await {
            Ok(updated) => Ok(Some(updated)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn delete_chart(&self, id: i64) -> Result<bool> {
        let res = chart::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }

    async fn create_insight(&self, input: insight::Model) -> Result<insight::Model> {
        let row = insight::ActiveModel {
            id: NotSet,
            text: Set(input.text),
        }
        .insert(&self.db)
        .await?;
        Ok(row)
    }

    async fn list_insights(&self) -> Result<Vec<insight::Model>> {
        Ok(insight::Entity::find().all(&self.db).await?)
    }

    async fn get_insight(&self, id: i64) -> Result<Option<insight::Model>> {
        Ok(insight::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn update_insight(
        &self,
        id: i64,
        input: insight::Model,
    ) -> Result<Option<insight::Model>> {
        let row = insight::ActiveModel {
            id: Set(id),
            text: Set(input.text),
        };
        match row.update(&self.db).await {
            Ok(updated) => Ok(Some(updated)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn delete_insight(&self, id: i64) -> Result<bool> {
        let res = insight::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }

    async fn create_star(&self, input: user_star::Model) -> Result<user_star::Model> {
        let row = user_star::ActiveModel {
            id: NotSet,
            user_id: Set(input.user_id),
            asset_type: Set(input.asset_type),
            asset_id: Set(input.asset_id),
        }
        .insert(&self.db)
        .await?;
        Ok(row)
    }

    async fn list_stars(&self) -> Result<Vec<user_star::Model>> {
        Ok(user_star::Entity::find().all(&self.db).await?)
    }

    async fn get_star(&self, id: i64) -> Result<Option<user_star::Model>> {
        Ok(user_star::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn update_star(
        &self,
        id: i64,
        input: user_star::Model,
    ) -> Result<Option<user_star::Model>> {
        let row = user_star::ActiveModel {
            id: Set(id),
            user_id: Set(input.user_id),
            asset_type: Set(input.asset_type),
            asset_id: Set(input.asset_id),
        };
        match row.update(&self.db).await {
            Ok(updated) => Ok(Some(updated)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn delete_star(&self, id: i64) -> Result<bool> {
        let res = user_star::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
