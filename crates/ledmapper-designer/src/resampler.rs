//! Contour resampler
//!
//! Turns a raw traced contour (image pixel space, any length, possibly open
//! or self-intersecting) into integer grid-space vertices:
//!
//! 1. gap-fill so consecutive raw vertices are at most `max_step` apart
//! 2. scale each axis independently by `target / source` (no aspect lock)
//! 3. round to integer cells, clamped inside the grid
//! 4. drop repeats, keeping first-seen order
//! 5. fit to the LED count: evenly thin out extras, or pad by repeating
//!    from the start

use ledmapper_core::{fill_gaps, resample_to_count, unique_vertices, Vertex};
use serde::{Deserialize, Serialize};

/// Default largest allowed distance between raw vertices, in pixels.
pub const DEFAULT_MAX_STEP: f64 = 1.0;

/// Flattened vertex stream produced by contour extraction.
///
/// `source_width` × `source_height` is the raster the vertices live in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TracedContour {
    pub vertices: Vec<Vertex>,
    pub source_width: f64,
    pub source_height: f64,
}

impl TracedContour {
    pub fn new(vertices: Vec<Vertex>, source_width: f64, source_height: f64) -> Self {
        Self {
            vertices,
            source_width,
            source_height,
        }
    }

    /// Flattens several polylines into one stream.
    pub fn from_polylines(polylines: Vec<Vec<Vertex>>, source_width: f64, source_height: f64) -> Self {
        Self::new(
            polylines.into_iter().flatten().collect(),
            source_width,
            source_height,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContourResampler {
    pub max_step: f64,
}

impl Default for ContourResampler {
    fn default() -> Self {
        Self {
            max_step: DEFAULT_MAX_STEP,
        }
    }
}

impl ContourResampler {
    pub fn new(max_step: f64) -> Self {
        Self { max_step }
    }

    /// Maps `contour` onto a `target_width` × `target_height` grid.
    ///
    /// With `count = Some(n)` exactly `n` vertices come back (padded ones
    /// repeat earlier positions); with `None` every unique cell is kept.
    pub fn resample(
        &self,
        contour: &TracedContour,
        target_width: usize,
        target_height: usize,
        count: Option<usize>,
    ) -> Vec<Vertex> {
        if contour.is_empty()
            || target_width == 0
            || target_height == 0
            || contour.source_width <= 0.0
            || contour.source_height <= 0.0
        {
            return Vec::new();
        }

        let filled = fill_gaps(&contour.vertices, self.max_step);

        let scale_x = target_width as f64 / contour.source_width;
        let scale_y = target_height as f64 / contour.source_height;
        let max_x = (target_width - 1) as f64;
        let max_y = (target_height - 1) as f64;

        let scaled: Vec<Vertex> = filled
            .iter()
            .map(|v| {
                Vertex::new(
                    (v.x * scale_x).round().clamp(0.0, max_x),
                    (v.y * scale_y).round().clamp(0.0, max_y),
                )
            })
            .collect();

        let unique = unique_vertices(&scaled);
        tracing::debug!(
            "Resampled {} raw vertices into {} unique grid points",
            contour.vertices.len(),
            unique.len()
        );

        match count {
            None => unique,
            Some(n) if unique.len() >= n => resample_to_count(&unique, n),
            Some(n) => unique.iter().cycle().take(n).copied().collect(),
        }
    }
}
