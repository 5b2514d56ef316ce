//! The module contains the representation of an ingredient.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// An ingredient usable by any number of dishes.
///
/// Like categories, ingredients are created and deleted, never updated, and
/// deletion is blocked while a dish still uses the ingredient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ingredients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::dish_ingredients::Entity")]
    DishIngredients,
}

impl Related<super::dish_ingredients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DishIngredients.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Ingredient {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}
