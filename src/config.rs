// src/config.rs

use std::path::PathBuf;
use std::time::Duration;

// --- Configuration ---
const PAGE_URL: &str = "https://emartapp.emart.com/leaflet/leafletView_EL.do?&image_pop=true";
const IMAGE_ORIGIN: &str = "https://stimg.emart.com";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const ACCEPT_LANGUAGE: &str = "ko-KR,ko;q=0.9,en-US;q=0.8,en;q=0.7";
const CONNECTION: &str = "keep-alive";
const REQUEST_TIMEOUT_SECS: u64 = 30;
const DOWNLOAD_DELAY_MS: u64 = 1000;
const DEBUG_HTML_FILE: &str = "emart.html";
const OUTPUT_ROOT: &str = "leaflets";

/// Everything a run needs to know. `Default` carries the compiled-in values;
/// tests swap in temp paths and fake hosts.
#[derive(Debug, Clone)]
pub struct LeafletConfig {
    pub page_url: String,
    /// Origin prepended to `data-src` paths that start with `/`.
    pub image_origin: String,
    pub user_agent: String,
    pub accept: String,
    pub accept_language: String,
    pub connection: String,
    pub timeout: Duration,
    /// Pause between two image downloads.
    pub download_interval: Duration,
    /// Raw page source is dumped here on every successful fetch.
    pub debug_html_path: PathBuf,
    /// Date folders live under this directory; legacy flat files are read from it too.
    pub output_root: PathBuf,
}

impl Default for LeafletConfig {
    fn default() -> Self {
        Self {
            page_url: PAGE_URL.to_string(),
            image_origin: IMAGE_ORIGIN.to_string(),
            user_agent: USER_AGENT.to_string(),
            accept: ACCEPT.to_string(),
            accept_language: ACCEPT_LANGUAGE.to_string(),
            connection: CONNECTION.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            download_interval: Duration::from_millis(DOWNLOAD_DELAY_MS),
            debug_html_path: PathBuf::from(DEBUG_HTML_FILE),
            output_root: PathBuf::from(OUTPUT_ROOT),
        }
    }
}
