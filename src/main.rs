use cinematch::{
    api::{create_router, AppState},
    config::Config,
    services::{pipeline, CsvCatalog},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinematch=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Build the corpus and similarity matrix once, before serving
    let extractor = pipeline::keyword_extractor(&config)?;
    let catalog = CsvCatalog::new(&config.catalog_path);
    let recommender = pipeline::build_recommender(&catalog, &extractor)?;

    let state = AppState::new(recommender, &config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %config.bind_addr(), "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
