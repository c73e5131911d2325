//! Migration: Create scrap item, company, sale and ledger tables.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ScrapItems::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ScrapItems::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(ScrapItems::UserId).uuid().not_null())
                    .col(ColumnDef::new(ScrapItems::ScrapType).string().not_null())
                    .col(ColumnDef::new(ScrapItems::Weight).double().not_null())
                    .col(ColumnDef::new(ScrapItems::PriceOffered).double().not_null())
                    .col(ColumnDef::new(ScrapItems::Status).string_len(16).not_null())
                    .col(ColumnDef::new(ScrapItems::Description).text().null())
                    .col(
                        ColumnDef::new(ScrapItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScrapItems::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scrap_items_user_id")
                            .from(ScrapItems::Table, ScrapItems::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_scrap_items_user_id")
                    .table(ScrapItems::Table)
                    .col(ScrapItems::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_scrap_items_status")
                    .table(ScrapItems::Table)
                    .col(ScrapItems::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Companies::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Companies::Name).string().not_null())
                    .col(ColumnDef::new(Companies::Contact).string().not_null())
                    .col(ColumnDef::new(Companies::Address).string().not_null())
                    .col(ColumnDef::new(Companies::Email).string().null())
                    .col(
                        ColumnDef::new(Companies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Sales::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Sales::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Sales::ScrapItemId).uuid().not_null())
                    .col(ColumnDef::new(Sales::CompanyId).uuid().not_null())
                    .col(ColumnDef::new(Sales::SellingPrice).double().not_null())
                    .col(ColumnDef::new(Sales::Profit).double().not_null())
                    .col(
                        ColumnDef::new(Sales::SoldAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sales_scrap_item_id")
                            .from(Sales::Table, Sales::ScrapItemId)
                            .to(ScrapItems::Table, ScrapItems::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sales_company_id")
                            .from(Sales::Table, Sales::CompanyId)
                            .to(Companies::Table, Companies::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // A sold item has exactly one sale
        manager
            .create_index(
                Index::create()
                    .name("idx_sales_scrap_item_id")
                    .table(Sales::Table)
                    .col(Sales::ScrapItemId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Transactions::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Transactions::UserId).uuid().not_null())
                    .col(ColumnDef::new(Transactions::ScrapItemId).uuid().not_null())
                    .col(ColumnDef::new(Transactions::Amount).double().not_null())
                    .col(
                        ColumnDef::new(Transactions::TransactionType)
                            .string_len(8)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Transactions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transactions_user_id")
                            .from(Transactions::Table, Transactions::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transactions_scrap_item_id")
                            .from(Transactions::Table, Transactions::ScrapItemId)
                            .to(ScrapItems::Table, ScrapItems::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // One entry per item and direction
        manager
            .create_index(
                Index::create()
                    .name("idx_transactions_item_type")
                    .table(Transactions::Table)
                    .col(Transactions::ScrapItemId)
                    .col(Transactions::TransactionType)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_transactions_user_id")
                    .table(Transactions::Table)
                    .col(Transactions::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Sales::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Companies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ScrapItems::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ScrapItems {
    Table,
    Id,
    UserId,
    ScrapType,
    Weight,
    PriceOffered,
    Status,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Companies {
    Table,
    Id,
    Name,
    Contact,
    Address,
    Email,
    CreatedAt,
}

#[derive(Iden)]
enum Sales {
    Table,
    Id,
    ScrapItemId,
    CompanyId,
    SellingPrice,
    Profit,
    SoldAt,
}

#[derive(Iden)]
enum Transactions {
    Table,
    Id,
    UserId,
    ScrapItemId,
    Amount,
    TransactionType,
    CreatedAt,
}
