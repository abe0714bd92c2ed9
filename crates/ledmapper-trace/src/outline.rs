//! Image to [`TracedContour`].
//!
//! The image is converted to grayscale and resized to
//! `(width * pixels_per_cell) × (height * pixels_per_cell)`; that raster is
//! the source space of the returned contour.

use crate::decode::decode_image;
use crate::error::{TraceError, TraceResult};
use crate::extract::{ContourExtractor, EdgeContourExtractor};
use image::imageops::FilterType;
use image::{DynamicImage, GrayImage};
use ledmapper_designer::TracedContour;
use std::path::Path;

/// Default raster pixels per grid cell.
pub const DEFAULT_PIXELS_PER_CELL: u32 = 10;

/// Traces shape images for a grid of a given size.
#[derive(Debug, Clone)]
pub struct OutlineTracer<E = EdgeContourExtractor> {
    pub pixels_per_cell: u32,
    pub extractor: E,
}

impl Default for OutlineTracer<EdgeContourExtractor> {
    fn default() -> Self {
        Self {
            pixels_per_cell: DEFAULT_PIXELS_PER_CELL,
            extractor: EdgeContourExtractor::default(),
        }
    }
}

impl<E: ContourExtractor> OutlineTracer<E> {
    pub fn new(pixels_per_cell: u32, extractor: E) -> Self {
        Self {
            pixels_per_cell,
            extractor,
        }
    }

    /// Grayscale raster sized for a `grid_width` × `grid_height` grid.
    pub fn prepare(
        &self,
        image: &DynamicImage,
        grid_width: usize,
        grid_height: usize,
    ) -> TraceResult<GrayImage> {
        let width = raster_side(grid_width, self.pixels_per_cell);
        let height = raster_side(grid_height, self.pixels_per_cell);
        if width == 0 || height == 0 {
            return Err(TraceError::InvalidSize { width, height });
        }

        let gray = image.to_luma8();
        if gray.dimensions() == (width, height) {
            return Ok(gray);
        }
        Ok(image::imageops::resize(
            &gray,
            width,
            height,
            FilterType::Triangle,
        ))
    }

    /// Extracts the outline of `image` as one flattened vertex stream.
    ///
    /// An image with no usable edges gives an empty contour, not an error.
    pub fn trace(
        &self,
        image: &DynamicImage,
        grid_width: usize,
        grid_height: usize,
    ) -> TraceResult<TracedContour> {
        let raster = self.prepare(image, grid_width, grid_height)?;
        let polylines = self.extractor.extract(&raster);
        let contour = TracedContour::from_polylines(
            polylines,
            f64::from(raster.width()),
            f64::from(raster.height()),
        );

        if contour.is_empty() {
            tracing::warn!("No contours found in {}x{} raster", raster.width(), raster.height());
        } else {
            tracing::info!(
                "Traced {} vertices from {}x{} raster",
                contour.vertices.len(),
                raster.width(),
                raster.height()
            );
        }
        Ok(contour)
    }

    /// Decodes the image at `path`, then traces it.
    pub async fn trace_file(
        &self,
        path: impl AsRef<Path>,
        grid_width: usize,
        grid_height: usize,
    ) -> TraceResult<TracedContour> {
        let image = decode_image(path).await?;
        self.trace(&image, grid_width, grid_height)
    }
}

fn raster_side(cells: usize, pixels_per_cell: u32) -> u32 {
    u32::try_from(cells)
        .ok()
        .and_then(|cells| cells.checked_mul(pixels_per_cell))
        .unwrap_or(0)
}
