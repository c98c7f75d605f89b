use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_enquiries_created_at")
                    .table(Enquiries::Table)
                    .col(Enquiries::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_enquiries_status")
                    .table(Enquiries::Table)
                    .col(Enquiries::Status)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_enquiries_status")
                    .table(Enquiries::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_enquiries_created_at")
                    .table(Enquiries::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Enquiries {
    Table,
    CreatedAt,
    Status,
}
