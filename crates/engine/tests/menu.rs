use engine::{Engine, EngineError, Price};
use migration::MigratorTrait;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder().database(db.clone()).build();
    (engine, db)
}

async fn count_rows(db: &DatabaseConnection, table: &str) -> i64 {
    let backend = db.get_database_backend();
    let row = db
        .query_one(Statement::from_string(
            backend,
            format!("SELECT COUNT(*) AS count FROM {table};"),
        ))
        .await
        .unwrap()
        .expect("count query returns one row");
    row.try_get("", "count").unwrap()
}

#[tokio::test]
async fn creates_and_lists_categories_in_id_order() {
    let (engine, _db) = engine_with_db().await;

    assert!(engine.list_categories().await.unwrap().is_empty());

    let soups = engine.create_category("Soups").await.unwrap();
    let salads = engine.create_category("Salads").await.unwrap();
    assert!(soups.id < salads.id);

    let listed = engine.list_categories().await.unwrap();
    assert_eq!(
        listed.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
        vec!["Soups", "Salads"]
    );
}

#[tokio::test]
async fn duplicate_category_name_is_rejected() {
    let (engine, _db) = engine_with_db().await;

    engine.create_category("Soups").await.unwrap();
    let err = engine.create_category("Soups").await.unwrap_err();
    assert_eq!(err, EngineError::DuplicateName("Soups".to_string()));

    // Different case is a different name.
    engine.create_category("soups").await.unwrap();

    assert_eq!(engine.list_categories().await.unwrap().len(), 2);
}

#[tokio::test]
async fn duplicate_ingredient_name_is_rejected() {
    let (engine, _db) = engine_with_db().await;

    engine.create_ingredient("Salt").await.unwrap();
    let err = engine.create_ingredient("Salt").await.unwrap_err();
    assert_eq!(err, EngineError::DuplicateName("Salt".to_string()));
    assert_eq!(engine.list_ingredients().await.unwrap().len(), 1);
}

#[tokio::test]
async fn empty_names_are_rejected() {
    let (engine, _db) = engine_with_db().await;

    assert!(matches!(
        engine.create_category("   ").await.unwrap_err(),
        EngineError::InvalidInput(_)
    ));
    assert!(matches!(
        engine.create_ingredient("").await.unwrap_err(),
        EngineError::InvalidInput(_)
    ));
    assert!(engine.list_categories().await.unwrap().is_empty());
    assert!(engine.list_ingredients().await.unwrap().is_empty());
}

#[tokio::test]
async fn dish_round_trip() {
    let (engine, _db) = engine_with_db().await;

    let soups = engine.create_category("Soups").await.unwrap();
    let salt = engine.create_ingredient("Salt").await.unwrap();

    let price: Price = "150.00".parse().unwrap();
    engine
        .create_dish("Tomato Soup", price, None, soups.id, &[salt.id])
        .await
        .unwrap();

    let dishes = engine.list_dishes().await.unwrap();
    assert_eq!(dishes.len(), 1);

    let dish = &dishes[0];
    assert_eq!(dish.name, "Tomato Soup");
    assert_eq!(dish.category.name, "Soups");
    assert_eq!(
        dish.ingredients
            .iter()
            .map(|i| i.name.as_str())
            .collect::<Vec<_>>(),
        vec!["Salt"]
    );
    assert_eq!(dish.price.to_string(), "150.00");
    assert_eq!(dish.description, None);
}

#[tokio::test]
async fn dish_description_is_kept_when_present() {
    let (engine, _db) = engine_with_db().await;

    let soups = engine.create_category("Soups").await.unwrap();
    let salt = engine.create_ingredient("Salt").await.unwrap();

    let dish = engine
        .create_dish(
            "Tomato Soup",
            Price::new(990),
            Some("with basil"),
            soups.id,
            &[salt.id],
        )
        .await
        .unwrap();
    assert_eq!(dish.description.as_deref(), Some("with basil"));
    assert_eq!(dish.price.to_string(), "9.90");
}

#[tokio::test]
async fn dish_with_unknown_category_leaves_no_rows() {
    let (engine, db) = engine_with_db().await;

    let salt = engine.create_ingredient("Salt").await.unwrap();

    let err = engine
        .create_dish("Tomato Soup", Price::new(15000), None, 99, &[salt.id])
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::NotFound("category 99".to_string()));

    assert_eq!(count_rows(&db, "dishes").await, 0);
    assert_eq!(count_rows(&db, "dish_ingredients").await, 0);
}

#[tokio::test]
async fn dish_with_unknown_ingredient_leaves_no_rows() {
    let (engine, db) = engine_with_db().await;

    let soups = engine.create_category("Soups").await.unwrap();
    let salt = engine.create_ingredient("Salt").await.unwrap();

    let err = engine
        .create_dish(
            "Tomato Soup",
            Price::new(15000),
            None,
            soups.id,
            &[salt.id, 99],
        )
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::NotFound("ingredient 99".to_string()));

    assert_eq!(count_rows(&db, "dishes").await, 0);
    assert_eq!(count_rows(&db, "dish_ingredients").await, 0);
    assert!(engine.list_dishes().await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_ingredient_ids_collapse_to_one_association() {
    let (engine, db) = engine_with_db().await;

    let soups = engine.create_category("Soups").await.unwrap();
    let salt = engine.create_ingredient("Salt").await.unwrap();
    let pepper = engine.create_ingredient("Pepper").await.unwrap();

    let dish = engine
        .create_dish(
            "Tomato Soup",
            Price::new(15000),
            None,
            soups.id,
            &[salt.id, salt.id, pepper.id],
        )
        .await
        .unwrap();

    assert_eq!(dish.ingredients.len(), 2);
    assert_eq!(count_rows(&db, "dish_ingredients").await, 2);
}

#[tokio::test]
async fn referenced_category_cannot_be_deleted() {
    let (engine, _db) = engine_with_db().await;

    let soups = engine.create_category("Soups").await.unwrap();
    let salt = engine.create_ingredient("Salt").await.unwrap();
    engine
        .create_dish("Tomato Soup", Price::new(15000), None, soups.id, &[salt.id])
        .await
        .unwrap();

    let err = engine.delete_category(soups.id).await.unwrap_err();
    assert_eq!(err, EngineError::InUse("Soups".to_string()));
    assert_eq!(engine.list_categories().await.unwrap().len(), 1);
}

#[tokio::test]
async fn referenced_ingredient_cannot_be_deleted() {
    let (engine, _db) = engine_with_db().await;

    let soups = engine.create_category("Soups").await.unwrap();
    let salt = engine.create_ingredient("Salt").await.unwrap();
    engine
        .create_dish("Tomato Soup", Price::new(15000), None, soups.id, &[salt.id])
        .await
        .unwrap();

    let err = engine.delete_ingredient(salt.id).await.unwrap_err();
    assert_eq!(err, EngineError::InUse("Salt".to_string()));
    assert_eq!(engine.list_ingredients().await.unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_a_dish_removes_its_associations() {
    let (engine, db) = engine_with_db().await;

    let soups = engine.create_category("Soups").await.unwrap();
    let salt = engine.create_ingredient("Salt").await.unwrap();
    let dish = engine
        .create_dish("Tomato Soup", Price::new(15000), None, soups.id, &[salt.id])
        .await
        .unwrap();

    engine.delete_dish(dish.id).await.unwrap();

    assert_eq!(count_rows(&db, "dishes").await, 0);
    assert_eq!(count_rows(&db, "dish_ingredients").await, 0);

    // With the dish gone both the ingredient and the category are free again.
    engine.delete_ingredient(salt.id).await.unwrap();
    engine.delete_category(soups.id).await.unwrap();
}

#[tokio::test]
async fn deleting_missing_rows_reports_not_found() {
    let (engine, _db) = engine_with_db().await;

    assert_eq!(
        engine.delete_category(1).await.unwrap_err(),
        EngineError::NotFound("category 1".to_string())
    );
    assert_eq!(
        engine.delete_ingredient(2).await.unwrap_err(),
        EngineError::NotFound("ingredient 2".to_string())
    );
    assert_eq!(
        engine.delete_dish(3).await.unwrap_err(),
        EngineError::NotFound("dish 3".to_string())
    );
}

#[tokio::test]
async fn bootstrap_is_idempotent() {
    let (engine, db) = engine_with_db().await;

    engine.create_category("Soups").await.unwrap();

    migration::Migrator::up(&db, None).await.unwrap();

    let listed = engine.list_categories().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Soups");
}
