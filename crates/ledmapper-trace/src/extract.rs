//! Contour extraction: raster in, polylines out.
//!
//! [`ContourExtractor`] is the seam between the mapping engine and the
//! image-processing backend. The shipped [`EdgeContourExtractor`] runs Canny
//! edge detection followed by Suzuki-Abe border following, both from
//! `imageproc`.

use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use ledmapper_core::Vertex;
use serde::{Deserialize, Serialize};

/// Produces zero or more polylines, in pixel coordinates, from a raster.
pub trait ContourExtractor {
    fn extract(&self, image: &GrayImage) -> Vec<Vec<Vertex>>;
}

/// Canny edges plus outer-border following.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeContourExtractor {
    /// Gradients below this are never edges.
    pub canny_low: f32,
    /// Gradients above this are always edges.
    pub canny_high: f32,
    /// Contours with fewer points are dropped.
    pub min_contour_points: usize,
}

impl Default for EdgeContourExtractor {
    fn default() -> Self {
        Self {
            canny_low: 50.0,
            canny_high: 100.0,
            min_contour_points: 2,
        }
    }
}

impl ContourExtractor for EdgeContourExtractor {
    fn extract(&self, image: &GrayImage) -> Vec<Vec<Vertex>> {
        let edges = imageproc::edges::canny(image, self.canny_low, self.canny_high);
        let contours = find_contours::<i32>(&edges);
        let found = contours.len();

        let polylines: Vec<Vec<Vertex>> = contours
            .into_iter()
            .filter(|c| c.border_type == BorderType::Outer)
            .filter(|c| c.points.len() >= self.min_contour_points)
            .map(|c| {
                c.points
                    .into_iter()
                    .map(|p| Vertex::new(f64::from(p.x), f64::from(p.y)))
                    .collect()
            })
            .collect();

        tracing::debug!(
            "Kept {} of {} contours from {}x{} edge map",
            polylines.len(),
            found,
            image.width(),
            image.height()
        );
        polylines
    }
}
