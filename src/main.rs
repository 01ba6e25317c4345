use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use job_board_backend::{
    config::{get_config, init_config},
    database::pool::{create_pool, run_migrations},
    routes,
    services::ai_service::AIService,
    AppState,
};
use reqwest::Client;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("job_board_backend=info,tower_http=info"));
    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();
    init_config()?;
    let config = get_config();

    let pool = create_pool(&config.database_url).await?;
    run_migrations(&pool).await?;
    info!("Candidates table ready");

    let http_client = Client::builder()
        .timeout(Duration::from_secs(config.llm_timeout_secs))
        .build()?;
    let interpreter = Arc::new(AIService::from_config(config, http_client));

    let app = routes::router(AppState::new(pool, interpreter));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    info!("API endpoints:");
    info!("   POST /api/search - AI-powered search");
    info!("   POST /api/candidates - Register candidate");
    info!("   GET  /api/candidates - List all candidates");
    info!("   GET  /api/health - Health check");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
