//! Async image loading.
//!
//! File reads go through `tokio::fs`; decoding is CPU bound and runs on the
//! blocking pool so the runtime stays responsive.

use crate::error::{TraceError, TraceResult};
use image::DynamicImage;
use std::path::Path;

/// Reads and decodes the image at `path`.
pub async fn decode_image(path: impl AsRef<Path>) -> TraceResult<DynamicImage> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await.map_err(|source| TraceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());
    decode_bytes(bytes).await
}

/// Decodes an in-memory image of any format `image` recognises.
pub async fn decode_bytes(bytes: Vec<u8>) -> TraceResult<DynamicImage> {
    let decoded = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes))
        .await
        .map_err(|e| TraceError::Task(e.to_string()))??;
    tracing::info!("Decoded {}x{} image", decoded.width(), decoded.height());
    Ok(decoded)
}
