//! The module contains the representation of a dish on the menu.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{Category, Ingredient, Price};

/// A dish on the menu.
///
/// A dish belongs to exactly one category and uses any number of
/// ingredients. Dish names are not unique: two dishes may share a name as
/// long as they have distinct ids. The `category` and `ingredients` fields
/// carry the rows resolved at load time; they are snapshots, not live
/// references.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: i32,
    pub name: String,
    pub price: Price,
    pub description: Option<String>,
    pub category: Category,
    pub ingredients: Vec<Ingredient>,
}

impl Dish {
    pub(crate) fn from_models(
        dish: Model,
        category: super::categories::Model,
        ingredients: Vec<super::ingredients::Model>,
    ) -> Self {
        Self {
            id: dish.id,
            name: dish.name,
            price: Price::new(dish.price_cents),
            description: dish.description,
            category: category.into(),
            ingredients: ingredients.into_iter().map(Ingredient::from).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "dishes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub price_cents: i64,
    pub description: Option<String>,
    pub category_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Categories,
    #[sea_orm(has_many = "super::dish_ingredients::Entity")]
    DishIngredients,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl Related<super::dish_ingredients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DishIngredients.def()
    }
}

impl Related<super::ingredients::Entity> for Entity {
    fn to() -> RelationDef {
        super::dish_ingredients::Relation::Ingredients.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::dish_ingredients::Relation::Dishes.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
