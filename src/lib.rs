// src/lib.rs

pub mod client;
pub mod config;
pub mod download;
pub mod error;
pub mod locate;
pub mod logging;
pub mod organize;
pub mod page;
pub mod throttle;

use chrono::NaiveDate;
use tracing::info;

pub use client::{Fetch, HttpFetcher};
pub use config::LeafletConfig;
pub use download::{DownloadOutcome, DownloadResult, RunSummary};
pub use error::ScraperError;
pub use locate::LeafletImage;
pub use organize::OrganizeReport;
pub use throttle::{FixedInterval, NoThrottle, Throttle};

/// How a run ended when nothing fatal happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The page loaded but carried no leaflet images.
    NoImages,
    Downloaded(RunSummary),
}

/// One full pass: tidy legacy files, fetch the page, locate images, download them
/// into the folder for `date`.
///
/// Only a failed page fetch (or an uncreatable date folder) is returned as `Err`;
/// per-image problems end up in the summary.
pub fn run_scraper(
    config: &LeafletConfig,
    fetcher: &dyn Fetch,
    throttle: &mut dyn Throttle,
    date: NaiveDate,
) -> Result<RunOutcome, ScraperError> {
    let report = organize::organize_legacy(&config.output_root);
    if !report.moved.is_empty() || report.collisions > 0 {
        info!(
            "🗂️ 기존 파일 정리: {}개 이동, {}개 건너뜀",
            report.moved.len(),
            report.collisions
        );
    }

    let html = page::fetch_page(fetcher, config)?;

    let images = locate::locate_images(&html);
    if images.is_empty() {
        return Ok(RunOutcome::NoImages);
    }
    info!("🔍 전단지 이미지 {}개 발견", images.len());

    let date_folder = config
        .output_root
        .join(date.format("%Y-%m-%d").to_string());
    let summary = download::download_all(
        fetcher,
        throttle,
        &images,
        &config.image_origin,
        &date_folder,
    )?;

    Ok(RunOutcome::Downloaded(summary))
}
