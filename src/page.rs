// src/page.rs

use std::fs;

use tracing::{info, warn};

use crate::client::Fetch;
use crate::config::LeafletConfig;
use crate::error::ScraperError;

/// Fetches the leaflet page as UTF-8 text and dumps it to the debug file.
///
/// Network or status failures are returned to the caller, which treats them as fatal.
/// A failed debug write only warns.
pub fn fetch_page(fetcher: &dyn Fetch, config: &LeafletConfig) -> Result<String, ScraperError> {
    info!("🌐 전단지 페이지 요청 중: {}", config.page_url);
    let body = fetcher.get(&config.page_url)?;
    let html = String::from_utf8_lossy(&body).into_owned();

    match fs::write(&config.debug_html_path, &html) {
        Ok(()) => info!(
            "📄 페이지 소스 저장: {} ({} bytes)",
            config.debug_html_path.display(),
            html.len()
        ),
        Err(e) => warn!(
            "페이지 소스 저장 실패 {}: {}",
            config.debug_html_path.display(),
            e
        ),
    }

    Ok(html)
}
