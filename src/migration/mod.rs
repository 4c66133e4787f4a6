//! Programmatic schema migrations, applied at startup.

mod m20250101_000001_create_tables;

pub use sea_orm_migration::MigratorTrait;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn sea_orm_migration::MigrationTrait>> {
        vec![Box::new(m20250101_000001_create_tables::Migration)]
    }
}
