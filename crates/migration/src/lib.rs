pub use sea_orm_migration::prelude::*;

mod m20260801_090000_categories;
mod m20260801_091000_ingredients;
mod m20260801_092000_dishes;
mod m20260801_093000_dish_ingredients;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_090000_categories::Migration),
            Box::new(m20260801_091000_ingredients::Migration),
            Box::new(m20260801_092000_dishes::Migration),
            Box::new(m20260801_093000_dish_ingredients::Migration),
        ]
    }
}
