use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Audiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Audiences::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Audiences::Gender).string().not_null())
                    .col(ColumnDef::new(Audiences::BirthCountry).string().not_null())
                    .col(ColumnDef::new(Audiences::AgeGroup).string().not_null())
                    .col(ColumnDef::new(Audiences::DailyHours).integer().not_null())
                    .col(
                        ColumnDef::new(Audiences::NoOfPurchases)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Charts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Charts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Charts::Title).string().not_null())
                    .col(ColumnDef::new(Charts::XAxisTitle).string().not_null())
                    .col(ColumnDef::new(Charts::YAxisTitle).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Insights::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Insights::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Insights::Text).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserStars::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserStars::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserStars::UserId).big_integer().not_null())
                    .col(ColumnDef::new(UserStars::AssetType).string().not_null())
                    .col(ColumnDef::new(UserStars::AssetId).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // The aggregation reads stars by (user, type); the plain user index
        // serves the by-user REST listing.
        manager
            .create_index(
                Index::create()
                    .name("idx_user_stars_user_type")
                    .table(UserStars::Table)
                    .col(UserStars::UserId)
                    .col(UserStars::AssetType)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_user_stars_user_id")
                    .table(UserStars::Table)
                    .col(UserStars::UserId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_user_stars_asset_id")
                    .table(UserStars::Table)
                    .col(UserStars::AssetId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserStars::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Insights::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Charts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Audiences::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Audiences {
    Table,
    Id,
    Gender,
    BirthCountry,
    AgeGroup,
    DailyHours,
    NoOfPurchases,
}

#[derive(DeriveIden)]
enum Charts {
    Table,
    Id,
    Title,
    XAxisTitle,
    YAxisTitle,
}

#[derive(DeriveIden)]
enum Insights {
    Table,
    Id,
    Text,
}

#[derive(DeriveIden)]
enum UserStars {
    Table,
    Id,
    UserId,
    AssetType,
    AssetId,
}
