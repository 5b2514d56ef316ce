use sea_orm::Database;
use sea_orm_migration::prelude::*;

fn database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:./trattoria.db?mode=rwc".to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cmd = std::env::args().nth(1);
    let db = Database::connect(database_url()).await?;

    match cmd.as_deref() {
        Some("up") | None => migration::Migrator::up(&db, None).await?,
        Some("down") => migration::Migrator::down(&db, None).await?,
        Some("fresh") => migration::Migrator::fresh(&db).await?,
        Some("status") => migration::Migrator::status(&db).await?,
        Some(other) => {
            eprintln!("unknown command: {other}");
            eprintln!("usage: cargo run -p migration -- [up|down|fresh|status]");
            std::process::exit(2);
        }
    }

    Ok(())
}
