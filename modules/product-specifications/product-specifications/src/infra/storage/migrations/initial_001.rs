//! Catalog tables read by this module and the assignment tables it writes.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn id_column<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    #[allow(clippy::too_many_lines)]
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(id_column(Products::Id))
                    .col(ColumnDef::new(Products::CreatorId).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProductSpecifications::Table)
                    .if_not_exists()
                    .col(id_column(ProductSpecifications::Id))
                    .col(
                        ColumnDef::new(ProductSpecifications::InputType)
                            .string_len(32)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProductSpecificationTranslations::Table)
                    .if_not_exists()
                    .col(id_column(ProductSpecificationTranslations::Id))
                    .col(
                        ColumnDef::new(ProductSpecificationTranslations::ProductSpecificationId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductSpecificationTranslations::Locale)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductSpecificationTranslations::Title)
                            .string()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                ProductSpecificationTranslations::Table,
                                ProductSpecificationTranslations::ProductSpecificationId,
                            )
                            .to(ProductSpecifications::Table, ProductSpecifications::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProductSpecificationMultiValues::Table)
                    .if_not_exists()
                    .col(id_column(ProductSpecificationMultiValues::Id))
                    .col(
                        ColumnDef::new(ProductSpecificationMultiValues::SpecificationId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                ProductSpecificationMultiValues::Table,
                                ProductSpecificationMultiValues::SpecificationId,
                            )
                            .to(ProductSpecifications::Table, ProductSpecifications::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProductSpecificationMultiValueTranslations::Table)
                    .if_not_exists()
                    .col(id_column(ProductSpecificationMultiValueTranslations::Id))
                    .col(
                        ColumnDef::new(
                            ProductSpecificationMultiValueTranslations::ProductSpecificationMultiValueId,
                        )
                        .big_integer()
                        .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductSpecificationMultiValueTranslations::Locale)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductSpecificationMultiValueTranslations::Title)
                            .string()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                ProductSpecificationMultiValueTranslations::Table,
                                ProductSpecificationMultiValueTranslations::ProductSpecificationMultiValueId,
                            )
                            .to(
                                ProductSpecificationMultiValues::Table,
                                ProductSpecificationMultiValues::Id,
                            )
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProductSpecificationCategories::Table)
                    .if_not_exists()
                    .col(id_column(ProductSpecificationCategories::Id))
                    .col(
                        ColumnDef::new(ProductSpecificationCategories::SpecificationId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductSpecificationCategories::CategoryId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                ProductSpecificationCategories::Table,
                                ProductSpecificationCategories::SpecificationId,
                            )
                            .to(ProductSpecifications::Table, ProductSpecifications::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_product_specification_categories_category")
                    .table(ProductSpecificationCategories::Table)
                    .col(ProductSpecificationCategories::CategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProductSelectedSpecifications::Table)
                    .if_not_exists()
                    .col(id_column(ProductSelectedSpecifications::Id))
                    .col(
                        ColumnDef::new(ProductSelectedSpecifications::CreatorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductSelectedSpecifications::ProductId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductSelectedSpecifications::ProductSpecificationId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductSelectedSpecifications::Type)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductSelectedSpecifications::AllowSelection)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(ProductSelectedSpecifications::Order).integer())
                    .col(
                        ColumnDef::new(ProductSelectedSpecifications::Status)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductSelectedSpecifications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                ProductSelectedSpecifications::Table,
                                ProductSelectedSpecifications::ProductId,
                            )
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                ProductSelectedSpecifications::Table,
                                ProductSelectedSpecifications::ProductSpecificationId,
                            )
                            .to(ProductSpecifications::Table, ProductSpecifications::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_product_selected_specifications_product")
                    .table(ProductSelectedSpecifications::Table)
                    .col(ProductSelectedSpecifications::ProductId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProductSelectedSpecificationTranslations::Table)
                    .if_not_exists()
                    .col(id_column(ProductSelectedSpecificationTranslations::Id))
                    .col(
                        ColumnDef::new(
                            ProductSelectedSpecificationTranslations::ProductSelectedSpecificationId,
                        )
                        .big_integer()
                        .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductSelectedSpecificationTranslations::Locale)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductSelectedSpecificationTranslations::Value)
                            .text()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                ProductSelectedSpecificationTranslations::Table,
                                ProductSelectedSpecificationTranslations::ProductSelectedSpecificationId,
                            )
                            .to(
                                ProductSelectedSpecifications::Table,
                                ProductSelectedSpecifications::Id,
                            )
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Upsert target for the translated scalar value.
        manager
            .create_index(
                Index::create()
                    .name("uq_product_selected_specification_translations_locale")
                    .table(ProductSelectedSpecificationTranslations::Table)
                    .col(ProductSelectedSpecificationTranslations::ProductSelectedSpecificationId)
                    .col(ProductSelectedSpecificationTranslations::Locale)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // No foreign key to the option table: option ids are stored as submitted.
        manager
            .create_table(
                Table::create()
                    .table(ProductSelectedSpecificationMultiValues::Table)
                    .if_not_exists()
                    .col(id_column(ProductSelectedSpecificationMultiValues::Id))
                    .col(
                        ColumnDef::new(
                            ProductSelectedSpecificationMultiValues::SelectedSpecificationId,
                        )
                        .big_integer()
                        .not_null(),
                    )
                    .col(
                        ColumnDef::new(
                            ProductSelectedSpecificationMultiValues::SpecificationMultiValueId,
                        )
                        .big_integer()
                        .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                ProductSelectedSpecificationMultiValues::Table,
                                ProductSelectedSpecificationMultiValues::SelectedSpecificationId,
                            )
                            .to(
                                ProductSelectedSpecifications::Table,
                                ProductSelectedSpecifications::Id,
                            )
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ProductSelectedSpecificationMultiValues::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(ProductSelectedSpecificationTranslations::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(ProductSelectedSpecifications::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(ProductSpecificationCategories::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(ProductSpecificationMultiValueTranslations::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(ProductSpecificationMultiValues::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(ProductSpecificationTranslations::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(ProductSpecifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    CreatorId,
}

#[derive(DeriveIden)]
enum ProductSpecifications {
    Table,
    Id,
    InputType,
}

#[derive(DeriveIden)]
enum ProductSpecificationTranslations {
    Table,
    Id,
    ProductSpecificationId,
    Locale,
    Title,
}

#[derive(DeriveIden)]
enum ProductSpecificationMultiValues {
    Table,
    Id,
    SpecificationId,
}

#[derive(DeriveIden)]
enum ProductSpecificationMultiValueTranslations {
    Table,
    Id,
    ProductSpecificationMultiValueId,
    Locale,
    Title,
}

#[derive(DeriveIden)]
enum ProductSpecificationCategories {
    Table,
    Id,
    SpecificationId,
    CategoryId,
}

#[derive(DeriveIden)]
enum ProductSelectedSpecifications {
    Table,
    Id,
    CreatorId,
    ProductId,
    ProductSpecificationId,
    Type,
    AllowSelection,
    Order,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ProductSelectedSpecificationTranslations {
    Table,
    Id,
    ProductSelectedSpecificationId,
    Locale,
    Value,
}

#[derive(DeriveIden)]
enum ProductSelectedSpecificationMultiValues {
    Table,
    Id,
    SelectedSpecificationId,
    SpecificationMultiValueId,
}
