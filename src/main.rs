use axum::{
    Router,
    extract::Extension,
    routing::get,
};
use std::sync::Arc;

use watchlist_search::config::Config;
use watchlist_search::data::downloader::HttpListSource;
use watchlist_search::refresh::handlers::{downloads, manual_refresh};
use watchlist_search::refresh::pipeline::{RefreshPipeline, start_periodic};
use watchlist_search::search::handlers::{ping, search};
use watchlist_search::search::searcher::{Searcher, SharedSearcher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut config = Config::from_env()?;

    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                match args.get(i + 1) {
                    Some(addr) => config.bind_address = addr.clone(),
                    None => {
                        eprintln!("Usage: {} [--bind <addr:port>]", args[0]);
                        std::process::exit(1);
                    }
                }
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. Empty searcher until the first download lands:
    let searcher = SharedSearcher::new(Searcher::default());

    // 2. Refresh pipeline over the public list endpoints:
    let source = HttpListSource::new(config.download.clone())?;
    let pipeline = Arc::new(RefreshPipeline::new(source, searcher.clone()));

    match pipeline.refresh().await {
        Ok(stats) => tracing::info!(
            sdns = stats.sdns,
            alt_names = stats.alt_names,
            addresses = stats.addresses,
            denied_persons = stats.denied_persons,
            "initial download complete"
        ),
        Err(err) => tracing::error!(%err, "initial download failed, serving empty lists"),
    }

    start_periodic(pipeline.clone(), config.refresh_interval);

    // 3. HTTP router:
    let app = Router::new()
        .route("/search", get(search))
        .route("/data/refresh", get(manual_refresh::<HttpListSource>))
        .route("/downloads", get(downloads::<HttpListSource>))
        .route("/ping", get(ping))
        .layer(Extension(searcher))
        .layer(Extension(pipeline));

    tracing::info!("listening on {}", config.bind_address);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await?;

    Ok(())
}
