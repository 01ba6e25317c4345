use job_board_backend::database::{
    pool::{create_pool, run_migrations},
    seed::seed_candidates,
};
use tracing::info;

/// Resets the candidates table to the demo profiles.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://database.sqlite".to_string());

    let pool = create_pool(&database_url).await?;
    run_migrations(&pool).await?;
    info!("Table created/verified");

    let inserted = seed_candidates(&pool).await?;
    info!("Database seeded with {} candidates", inserted);

    pool.close().await;
    Ok(())
}
