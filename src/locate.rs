// src/locate.rs

use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::debug;

// Leaflet pages are lazy-loaded: the real URL sits in data-src, not src.
static LEAFLET_IMG: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.img_detail img[data-src]").unwrap());

/// One page of the leaflet as it appears on the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafletImage {
    /// 1-based, contiguous, document order.
    pub ordinal: u32,
    /// As found in `data-src`; may be relative to the image host.
    pub source_url: String,
    pub label: String,
}

/// Collects every leaflet image on the page. An empty vector means the page had none,
/// which is a normal outcome.
pub fn locate_images(html: &str) -> Vec<LeafletImage> {
    let document = Html::parse_document(html);

    document
        .select(&LEAFLET_IMG)
        .zip(1..)
        .map(|(img, ordinal)| {
            let element = img.value();
            let source_url = element.attr("data-src").unwrap_or_default().trim().to_string();
            let label = match element.attr("alt").map(str::trim) {
                Some(alt) if !alt.is_empty() => alt.to_string(),
                _ => default_label(ordinal),
            };
            debug!(ordinal, url = %source_url, label = %label, "located");
            LeafletImage {
                ordinal,
                source_url,
                label,
            }
        })
        .collect()
}

fn default_label(ordinal: u32) -> String {
    format!("전단지 {}면", ordinal)
}
