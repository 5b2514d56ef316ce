pub use categories::Category;
pub use dishes::Dish;
pub use error::EngineError;
pub use ingredients::Ingredient;
pub use price::Price;
use sea_orm::{
    ActiveValue, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait, prelude::*,
};

mod categories;
mod dish_ingredients;
mod dishes;
mod error;
mod ingredients;
mod price;

type ResultEngine<T> = Result<T, EngineError>;

/// The storage model for the restaurant menu.
///
/// Owns the database connection for the process lifetime. Every operation is
/// atomic against the store; multi-row writes run inside one database
/// transaction.
#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Returns a builder for [`Engine`].
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// List all categories in id order.
    pub async fn list_categories(&self) -> ResultEngine<Vec<Category>> {
        let models = categories::Entity::find()
            .order_by_asc(categories::Column::Id)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(Category::from).collect())
    }

    /// List all ingredients in id order.
    pub async fn list_ingredients(&self) -> ResultEngine<Vec<Ingredient>> {
        let models = ingredients::Entity::find()
            .order_by_asc(ingredients::Column::Id)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(Ingredient::from).collect())
    }

    /// List all dishes in id order, each resolved with its category and its
    /// ingredients (id order).
    pub async fn list_dishes(&self) -> ResultEngine<Vec<Dish>> {
        let dish_models = dishes::Entity::find()
            .order_by_asc(dishes::Column::Id)
            .all(&self.database)
            .await?;

        let mut out = Vec::with_capacity(dish_models.len());
        for dish_model in dish_models {
            let category = categories::Entity::find_by_id(dish_model.category_id)
                .one(&self.database)
                .await?
                .ok_or_else(|| {
                    EngineError::NotFound(format!("category {}", dish_model.category_id))
                })?;
            let ingredient_models = dish_model
                .find_related(ingredients::Entity)
                .order_by_asc(ingredients::Column::Id)
                .all(&self.database)
                .await?;
            out.push(Dish::from_models(dish_model, category, ingredient_models));
        }
        Ok(out)
    }

    /// Add a new category.
    pub async fn create_category(&self, name: &str) -> ResultEngine<Category> {
        let name = validate_name(name)?;
        if categories::Entity::find()
            .filter(categories::Column::Name.eq(name.as_str()))
            .one(&self.database)
            .await?
            .is_some()
        {
            return Err(EngineError::DuplicateName(name));
        }

        let model = categories::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(name),
        }
        .insert(&self.database)
        .await?;

        Ok(model.into())
    }

    /// Add a new ingredient.
    pub async fn create_ingredient(&self, name: &str) -> ResultEngine<Ingredient> {
        let name = validate_name(name)?;
        if ingredients::Entity::find()
            .filter(ingredients::Column::Name.eq(name.as_str()))
            .one(&self.database)
            .await?
            .is_some()
        {
            return Err(EngineError::DuplicateName(name));
        }

        let model = ingredients::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(name),
        }
        .insert(&self.database)
        .await?;

        Ok(model.into())
    }

    /// Add a new dish with its ingredient associations.
    ///
    /// Duplicate ingredient ids collapse to a single association. The dish
    /// row and its join rows are written inside one transaction, so a failed
    /// creation leaves neither an orphaned dish nor dangling join rows.
    pub async fn create_dish(
        &self,
        name: &str,
        price: Price,
        description: Option<&str>,
        category_id: i32,
        ingredient_ids: &[i32],
    ) -> ResultEngine<Dish> {
        let mut distinct_ids: Vec<i32> = Vec::with_capacity(ingredient_ids.len());
        for id in ingredient_ids {
            if !distinct_ids.contains(id) {
                distinct_ids.push(*id);
            }
        }

        let db_tx = self.database.begin().await?;

        let category = categories::Entity::find_by_id(category_id)
            .one(&db_tx)
            .await?
            .ok_or_else(|| EngineError::NotFound(format!("category {category_id}")))?;

        let mut ingredient_models = Vec::with_capacity(distinct_ids.len());
        for ingredient_id in &distinct_ids {
            let model = ingredients::Entity::find_by_id(*ingredient_id)
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::NotFound(format!("ingredient {ingredient_id}")))?;
            ingredient_models.push(model);
        }
        ingredient_models.sort_by_key(|model| model.id);

        let dish = dishes::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(name.to_string()),
            price_cents: ActiveValue::Set(price.cents()),
            description: ActiveValue::Set(description.map(str::to_string)),
            category_id: ActiveValue::Set(category_id),
        }
        .insert(&db_tx)
        .await?;

        for ingredient_id in &distinct_ids {
            dish_ingredients::ActiveModel {
                dish_id: ActiveValue::Set(dish.id),
                ingredient_id: ActiveValue::Set(*ingredient_id),
            }
            .insert(&db_tx)
            .await?;
        }

        db_tx.commit().await?;

        Ok(Dish::from_models(dish, category, ingredient_models))
    }

    /// Delete a category.
    ///
    /// Blocked while any dish references the category.
    pub async fn delete_category(&self, id: i32) -> ResultEngine<()> {
        let category = categories::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::NotFound(format!("category {id}")))?;

        let referencing = dishes::Entity::find()
            .filter(dishes::Column::CategoryId.eq(id))
            .count(&self.database)
            .await?;
        if referencing > 0 {
            return Err(EngineError::InUse(category.name));
        }

        category.delete(&self.database).await?;
        Ok(())
    }

    /// Delete an ingredient.
    ///
    /// Blocked while any dish uses the ingredient. An ingredient no longer
    /// referenced by any dish is deletable, even if dishes used it in the
    /// past.
    pub async fn delete_ingredient(&self, id: i32) -> ResultEngine<()> {
        let ingredient = ingredients::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::NotFound(format!("ingredient {id}")))?;

        let referencing = dish_ingredients::Entity::find()
            .filter(dish_ingredients::Column::IngredientId.eq(id))
            .count(&self.database)
            .await?;
        if referencing > 0 {
            return Err(EngineError::InUse(ingredient.name));
        }

        ingredient.delete(&self.database).await?;
        Ok(())
    }

    /// Delete a dish together with all of its ingredient associations.
    pub async fn delete_dish(&self, id: i32) -> ResultEngine<()> {
        let dish = dishes::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::NotFound(format!("dish {id}")))?;

        let db_tx = self.database.begin().await?;

        dish_ingredients::Entity::delete_many()
            .filter(dish_ingredients::Column::DishId.eq(id))
            .exec(&db_tx)
            .await?;
        dish.delete(&db_tx).await?;

        db_tx.commit().await?;
        Ok(())
    }
}

fn validate_name(name: &str) -> ResultEngine<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidInput("name must not be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Sets the backing database connection.
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Builds the `Engine`.
    pub fn build(self) -> Engine {
        Engine {
            database: self.database,
        }
    }
}
