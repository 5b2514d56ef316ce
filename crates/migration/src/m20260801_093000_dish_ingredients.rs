use sea_orm_migration::prelude::*;

use super::{m20260801_091000_ingredients::Ingredients, m20260801_092000_dishes::Dishes};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DishIngredients::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(DishIngredients::DishId).integer().not_null())
                    .col(
                        ColumnDef::new(DishIngredients::IngredientId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(DishIngredients::DishId)
                            .col(DishIngredients::IngredientId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-dish_ingredients-dish_id")
                            .from(DishIngredients::Table, DishIngredients::DishId)
                            .to(Dishes::Table, Dishes::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-dish_ingredients-ingredient_id")
                            .from(DishIngredients::Table, DishIngredients::IngredientId)
                            .to(Ingredients::Table, Ingredients::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DishIngredients::Table).to_owned())
            .await
    }
}

/// Learn more at https://docs.rs/sea-query#iden
#[derive(Iden)]
pub enum DishIngredients {
    Table,
    DishId,
    IngredientId,
}
