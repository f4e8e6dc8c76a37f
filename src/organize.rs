// src/organize.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::{debug, info, warn};

// Older downloads embedded the date in the file name instead of using a folder.
static LEGACY_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^emart_leaflet_(\d{8})_(\d{2})\.jpg$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub from: PathBuf,
    pub to: PathBuf,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OrganizeReport {
    pub moved: Vec<Move>,
    /// Files left in place because the destination already existed.
    pub collisions: usize,
}

/// Where a legacy flat file belongs: `(date folder name, new file name)`.
pub fn legacy_target(file_name: &str) -> Option<(String, String)> {
    let caps = LEGACY_NAME.captures(file_name)?;
    let date = NaiveDate::parse_from_str(&caps[1], "%Y%m%d").ok()?;
    Some((
        date.format("%Y-%m-%d").to_string(),
        format!("emart_leaflet_{}.jpg", &caps[2]),
    ))
}

/// Moves `emart_leaflet_YYYYMMDD_NN.jpg` files sitting directly in `base` into
/// `base/YYYY-MM-DD/emart_leaflet_NN.jpg`. Never fails; problems are logged and skipped.
pub fn organize_legacy(base: &Path) -> OrganizeReport {
    let mut report = OrganizeReport::default();
    if !base.is_dir() {
        return report;
    }

    let entries = match fs::read_dir(base) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("기존 파일 정리 실패 {}: {}", base.display(), e);
            return report;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some((folder, new_name)) = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(legacy_target)
        else {
            continue;
        };

        let date_dir = base.join(&folder);
        if let Err(e) = fs::create_dir_all(&date_dir) {
            warn!("폴더 생성 실패 {}: {}", date_dir.display(), e);
            continue;
        }

        let destination = date_dir.join(&new_name);
        if destination.exists() {
            debug!(from = %path.display(), to = %destination.display(), "destination exists, leaving file");
            report.collisions += 1;
            continue;
        }

        match fs::rename(&path, &destination) {
            Ok(()) => {
                info!("📁 이동: {} → {}", path.display(), destination.display());
                report.moved.push(Move {
                    from: path,
                    to: destination,
                });
            }
            Err(e) => warn!("파일 이동 실패 {}: {}", path.display(), e),
        }
    }

    report
}
