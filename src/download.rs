// src/download.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::client::Fetch;
use crate::error::ScraperError;
use crate::locate::LeafletImage;
use crate::throttle::Throttle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Saved { bytes: usize },
    Failed { reason: String },
}

/// What happened to one leaflet image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadResult {
    pub ordinal: u32,
    /// Absolute URL actually requested.
    pub url: String,
    pub destination: PathBuf,
    pub outcome: DownloadOutcome,
}

impl DownloadResult {
    pub fn success(&self) -> bool {
        matches!(self.outcome, DownloadOutcome::Saved { .. })
    }

    pub fn byte_size(&self) -> usize {
        match self.outcome {
            DownloadOutcome::Saved { bytes } => bytes,
            DownloadOutcome::Failed { .. } => 0,
        }
    }
}

/// Per-run tally handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub date_folder: PathBuf,
    pub results: Vec<DownloadResult>,
}

impl RunSummary {
    pub fn saved(&self) -> usize {
        self.results.iter().filter(|r| r.success()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.saved()
    }

    pub fn total_bytes(&self) -> usize {
        self.results.iter().map(DownloadResult::byte_size).sum()
    }
}

/// Turns a root-relative `data-src` into an absolute URL on the image host.
///
/// Any leading `/` counts, so a protocol-relative `//host/x.jpg` is also prefixed
/// with the origin rather than given a scheme.
pub fn resolve_url(src: &str, image_origin: &str) -> String {
    if src.starts_with('/') {
        format!("{}{}", image_origin.trim_end_matches('/'), src)
    } else {
        src.to_string()
    }
}

pub fn leaflet_file_name(ordinal: u32) -> String {
    format!("emart_leaflet_{:02}.jpg", ordinal)
}

/// Downloads every image into `date_folder`, one at a time, in ordinal order.
///
/// A failure on one image is recorded and the loop moves on. Only failing to create
/// `date_folder` itself aborts.
pub fn download_all(
    fetcher: &dyn Fetch,
    throttle: &mut dyn Throttle,
    images: &[LeafletImage],
    image_origin: &str,
    date_folder: &Path,
) -> Result<RunSummary, ScraperError> {
    fs::create_dir_all(date_folder)?;

    let mut results = Vec::with_capacity(images.len());
    for (index, image) in images.iter().enumerate() {
        let url = resolve_url(&image.source_url, image_origin);
        let destination = date_folder.join(leaflet_file_name(image.ordinal));

        let outcome = match save_image(fetcher, &url, &destination) {
            Ok(bytes) => {
                info!(
                    "✅ [{}/{}] {} 저장: {} ({} bytes)",
                    image.ordinal,
                    images.len(),
                    image.label,
                    destination.display(),
                    bytes
                );
                DownloadOutcome::Saved { bytes }
            }
            Err(e) => {
                warn!("❌ 이미지 다운로드 실패 {}: {}", url, e);
                DownloadOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };

        results.push(DownloadResult {
            ordinal: image.ordinal,
            url,
            destination,
            outcome,
        });

        // Paced after every attempt, failed or not.
        if index + 1 < images.len() {
            throttle.pause();
        }
    }

    Ok(RunSummary {
        date_folder: date_folder.to_path_buf(),
        results,
    })
}

fn save_image(fetcher: &dyn Fetch, url: &str, destination: &Path) -> Result<usize, ScraperError> {
    let bytes = fetcher.get(url)?;
    fs::write(destination, &bytes)?;
    Ok(bytes.len())
}
