use std::error::Error;

use clap::Parser;
use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};

mod console;
mod parsing;
mod settings;

#[derive(Parser, Debug)]
#[command(name = "trattoria")]
#[command(about = "Menu management console for a small restaurant")]
struct Cli {
    /// Database connection string (also read from `DATABASE_URL`). Overrides
    /// the path configured in `settings.toml`.
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

async fn connect_db(
    database_url: &str,
) -> Result<DatabaseConnection, Box<dyn Error + Send + Sync>> {
    let db = Database::connect(database_url).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "trattoria={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let database_url = cli
        .database_url
        .unwrap_or_else(|| format!("sqlite:{}?mode=rwc", settings.sqlite.path));

    tracing::info!("Opening menu database at {database_url}");
    let db = connect_db(&database_url).await?;
    let engine = engine::Engine::builder().database(db).build();

    console::Console::new(engine).run().await?;

    tracing::info!("Shutting down");
    Ok(())
}
