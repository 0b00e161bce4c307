use anyhow::{Context, Result};
use chrono::NaiveDate;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mispclient::{Client, ClientConfig, SearchRequest};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv();
    init_tracing();

    let cfg = ClientConfig::from_env()?;
    let client = Client::new(cfg)?;
    info!("searching {}", client.base_url());

    let request = request_from_env()?;
    let results = client.search(&request).await?;
    info!("search returned {} events", results.len());

    for result in &results {
        let event = &result.event;
        info!(
            id = %event.id,
            date = %event.date,
            attributes = event.attributes.len(),
            info = %event.info,
            "event"
        );
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn request_from_env() -> Result<SearchRequest> {
    let mut request = SearchRequest::new()
        .with_from(env_date("SEARCH_FROM")?)
        .with_to(env_date("SEARCH_TO")?);
    if let Ok(type_) = std::env::var("SEARCH_TYPE") {
        request = request.with_type(type_);
    }
    if let Ok(value) = std::env::var("SEARCH_VALUE") {
        request = request.with_value(value);
    }
    Ok(request)
}

fn env_date(key: &str) -> Result<NaiveDate> {
    let raw = std::env::var(key).with_context(|| format!("{key} is required (YYYY-MM-DD)"))?;
    raw.parse::<NaiveDate>()
        .with_context(|| format!("{key} must be YYYY-MM-DD, got {raw:?}"))
}
