//! Poster and backdrop images
//!
//! Images are fetched on tokio tasks, decoded with the `image` crate and
//! drawn as half-block cells (`▀`, foreground = top pixel, background =
//! bottom pixel). Rasters are cached per target size so a steady frame does
//! no resizing.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, bail, Result};
use bytes::Bytes;
use image::{imageops::FilterType, DynamicImage};
use tokio::sync::mpsc;

use crate::event::ImageLoadResult;

/// Load state of one image URI
#[derive(Debug, Clone)]
pub enum ImageState {
    Loading,
    Ready(Arc<DynamicImage>),
    Failed(String),
}

/// Image scaled to a cell grid; two pixels per cell
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    pub cols: u16,
    pub rows: u16,
    pixels: Vec<(u8, u8, u8)>,
}

impl Raster {
    /// Top and bottom pixel of a cell
    pub fn cell(&self, col: u16, row: u16) -> Option<((u8, u8, u8), (u8, u8, u8))> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        let width = self.cols as usize;
        let top = (row as usize * 2) * width + col as usize;
        let bottom = top + width;
        Some((self.pixels[top], self.pixels[bottom]))
    }
}

/// Scale an image to fill `cols × rows` cells, cropping the overflow
pub fn rasterize(img: &DynamicImage, cols: u16, rows: u16) -> Raster {
    if cols == 0 || rows == 0 {
        return Raster {
            cols: 0,
            rows: 0,
            pixels: Vec::new(),
        };
    }

    let width = cols as u32;
    let height = rows as u32 * 2;
    let rgb = img.resize_to_fill(width, height, FilterType::Triangle).to_rgb8();

    let mut pixels = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            // resize_to_fill may round a side down by a pixel
            let px = rgb.get_pixel(x.min(rgb.width() - 1), y.min(rgb.height() - 1));
            pixels.push((px[0], px[1], px[2]));
        }
    }

    Raster { cols, rows, pixels }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RasterKey {
    uri: String,
    cols: u16,
    rows: u16,
}

/// In-memory image store keyed by URI
#[derive(Debug, Default)]
pub struct ImageCache {
    states: HashMap<String, ImageState>,
    rasters: HashMap<RasterKey, Arc<Raster>>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this URI was never requested
    pub fn is_unrequested(&self, uri: &str) -> bool {
        !self.states.contains_key(uri)
    }

    pub fn state(&self, uri: &str) -> Option<&ImageState> {
        self.states.get(uri)
    }

    pub fn start_loading(&mut self, uri: &str) {
        self.states.insert(uri.to_string(), ImageState::Loading);
    }

    pub fn set_loaded(&mut self, uri: &str, image: DynamicImage) {
        self.rasters.retain(|key, _| key.uri != uri);
        self.states
            .insert(uri.to_string(), ImageState::Ready(Arc::new(image)));
    }

    pub fn set_failed(&mut self, uri: &str, error: String) {
        self.states.insert(uri.to_string(), ImageState::Failed(error));
    }

    /// Raster for a loaded image at the given cell size
    pub fn raster(&mut self, uri: &str, cols: u16, rows: u16) -> Option<Arc<Raster>> {
        let image = match self.states.get(uri) {
            Some(ImageState::Ready(image)) => Arc::clone(image),
            _ => return None,
        };

        let key = RasterKey {
            uri: uri.to_string(),
            cols,
            rows,
        };
        let raster = self
            .rasters
            .entry(key)
            .or_insert_with(|| Arc::new(rasterize(&image, cols, rows)));
        Some(Arc::clone(raster))
    }

    /// Forget cached rasters; decoded images stay
    pub fn drop_rasters(&mut self) {
        self.rasters.clear();
    }

    pub fn raster_count(&self) -> usize {
        self.rasters.len()
    }

    /// Drop everything (used when the movie list is replaced)
    pub fn clear(&mut self) {
        self.states.clear();
        self.rasters.clear();
    }
}

/// Build the HTTP client shared by image downloads
pub fn image_client(timeout_secs: u64) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("reelview/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(timeout_secs))
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| anyhow!("Client error: {}", e))
}

/// Fetch raw bytes from an http(s) URL or a local path
pub async fn fetch_image_bytes(client: &reqwest::Client, uri: &str) -> Result<Bytes> {
    if uri.starts_with("http://") || uri.starts_with("https://") {
        let response = client
            .get(uri)
            .header("Accept", "image/png,image/jpeg,image/webp,image/*;q=0.8")
            .send()
            .await?;
        if !response.status().is_success() {
            bail!("HTTP {}", response.status());
        }
        Ok(response.bytes().await?)
    } else {
        let path = uri.strip_prefix("file://").unwrap_or(uri);
        let data = tokio::fs::read(Path::new(path)).await?;
        Ok(Bytes::from(data))
    }
}

/// Decode image bytes, detecting the format from its magic bytes
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    if bytes.is_empty() {
        bail!("Empty data");
    }
    image::load_from_memory(bytes).map_err(|e| anyhow!("Decode failed ({}B): {}", bytes.len(), e))
}

/// Download and decode on a tokio task; the result arrives on `tx`
pub fn spawn_image_load(
    client: reqwest::Client,
    uri: String,
    tx: mpsc::UnboundedSender<ImageLoadResult>,
) {
    tokio::spawn(async move {
        let result = match fetch_image_bytes(&client, &uri).await {
            Ok(bytes) => {
                // Decoding is CPU-bound
                tokio::task::spawn_blocking(move || decode_image(&bytes))
                    .await
                    .map_err(|e| anyhow!("Task failed: {}", e))
                    .and_then(|r| r)
            }
            Err(e) => Err(e),
        };

        let message = match result {
            Ok(image) => ImageLoadResult::Success { uri, image },
            Err(e) => ImageLoadResult::Failure {
                uri,
                error: e.to_string(),
            },
        };
        let _ = tx.send(message);
    });
}
