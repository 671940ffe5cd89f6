//! Create `feedback` table.
//!
//! `id` is a store-assigned bigint; every other column is nullable client text.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Feedback::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Feedback::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Feedback::UserName).string_len(255).null())
                    .col(ColumnDef::new(Feedback::Email).string_len(255).null())
                    .col(ColumnDef::new(Feedback::Message).text().null())
                    .col(ColumnDef::new(Feedback::Source).string_len(64).null())
                    .col(ColumnDef::new(Feedback::CreatedAt).string_len(64).null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Feedback::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Feedback { Table, Id, UserName, Email, Message, Source, CreatedAt }
