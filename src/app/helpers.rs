//! Async startup helpers: item loading and image probing

use std::path::PathBuf;

use anyhow::Context;
use tracing::{info, warn};

use crate::carousel::CarouselItem;

/// Path of the user-supplied item list
pub fn items_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "loopreel", "Loopreel")
        .map(|dirs| dirs.config_dir().join("banners.json"))
}

/// Load carousel items from the config directory, falling back to the
/// built-in sample set when the file is absent or malformed.
pub async fn load_items() -> Vec<CarouselItem> {
    let Some(path) = items_path() else {
        warn!("Could not determine config directory, using sample items");
        return sample_items();
    };

    if !path.exists() {
        info!("No item list at {}, using sample items", path.display());
        return sample_items();
    }

    match read_items(&path).await {
        Ok(items) => {
            info!("Loaded {} items from {}", items.len(), path.display());
            items
        }
        Err(e) => {
            warn!("Failed to load {}: {:#}", path.display(), e);
            sample_items()
        }
    }
}

async fn read_items(path: &std::path::Path) -> anyhow::Result<Vec<CarouselItem>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .context("reading item list")?;
    serde_json::from_str(&content).context("parsing item list")
}

/// Probe an image for its dimensions without decoding the pixels.
///
/// Returns `None` for remote URLs and unreadable files; the slide renderer
/// falls back to a colored card in that case.
pub async fn probe_image(id: u64, image: String) -> Option<(u64, PathBuf, u32, u32)> {
    let path = PathBuf::from(&image);
    if !path.is_file() {
        return None;
    }

    let probed =
        tokio::task::spawn_blocking(move || image::image_dimensions(&path).map(|(w, h)| (path, w, h)))
            .await;

    match probed {
        Ok(Ok((path, width, height))) => Some((id, path, width, height)),
        Ok(Err(e)) => {
            warn!("Failed to probe image {}: {}", image, e);
            None
        }
        Err(e) => {
            warn!("Image probe task panicked for {}: {}", image, e);
            None
        }
    }
}

/// Built-in demo items shown when no item list is configured.
pub fn sample_items() -> Vec<CarouselItem> {
    let titles = [
        ("Midnight Sessions", Some("https://example.com/midnight")),
        ("Fresh Arrivals", Some("https://example.com/fresh")),
        ("Editor's Picks", None),
        ("Live This Weekend", Some("https://example.com/live")),
        ("Throwback Corner", None),
        ("Hidden Gems", Some("https://example.com/gems")),
    ];

    titles
        .into_iter()
        .enumerate()
        .map(|(i, (title, landing_page))| CarouselItem {
            id: i as u64 + 1,
            title: title.to_string(),
            image: String::new(),
            landing_page: landing_page.map(str::to_string),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_items_have_unique_ids() {
        let items = sample_items();
        let mut ids: Vec<u64> = items.iter().map(|i| i.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), items.len(), "item ids must be unique");
    }

    #[test]
    fn sample_set_is_large_enough_for_default_cloning() {
        assert!(
            sample_items().len() >= 3,
            "sample set must satisfy the default clone count"
        );
    }
}
