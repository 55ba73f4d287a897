//! Linear transforms between normalized data space and drawing-surface pixels.
//!
//! Data space is `[0,1]×[0,1]` with the origin at the bottom-left. Pixel space
//! is surface-local: `(0,0)` is the top-left corner of the drawing surface
//! (margins already removed), so the Y axis is inverted.

use crate::config::Margins;
use crate::error::{DotPlotError, Result};

/// Bidirectional mapping for a surface of fixed `width × height` pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    width: f64,
    height: f64,
}

impl CoordinateMapper {
    /// Build a mapper for a surface of the given pixel size.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(DotPlotError::DegenerateSurface { width, height });
        }
        Ok(Self { width, height })
    }

    /// Derive the surface from the viewport size, once, at startup.
    ///
    /// The plot occupies the top half of the viewport; the coordinate table is
    /// laid out underneath.
    pub fn from_viewport(viewport_w: f64, viewport_h: f64, margins: &Margins) -> Result<Self> {
        let width = viewport_w - margins.left - margins.right;
        let height = viewport_h / 2.0 - margins.top - margins.bottom;
        Self::new(width, height)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn to_pixel_x(&self, data_x: f64) -> f64 {
        data_x * self.width
    }

    pub fn to_data_x(&self, pixel_x: f64) -> f64 {
        pixel_x / self.width
    }

    pub fn to_pixel_y(&self, data_y: f64) -> f64 {
        (1.0 - data_y) * self.height
    }

    pub fn to_data_y(&self, pixel_y: f64) -> f64 {
        1.0 - pixel_y / self.height
    }

    /// Map a data-space point to surface pixels.
    pub fn to_pixel(&self, data: [f64; 2]) -> [f64; 2] {
        [self.to_pixel_x(data[0]), self.to_pixel_y(data[1])]
    }

    /// Map surface pixels to a data-space point.
    pub fn to_data(&self, pixel: [f64; 2]) -> [f64; 2] {
        [self.to_data_x(pixel[0]), self.to_data_y(pixel[1])]
    }

    /// Whether a surface-local pixel lies on the drawing surface.
    pub fn contains_pixel(&self, pixel: [f64; 2]) -> bool {
        (0.0..=self.width).contains(&pixel[0]) && (0.0..=self.height).contains(&pixel[1])
    }

    /// Clamp a surface-local pixel onto the drawing surface.
    pub fn clamp_pixel(&self, pixel: [f64; 2]) -> [f64; 2] {
        [pixel[0].clamp(0.0, self.width), pixel[1].clamp(0.0, self.height)]
    }
}

/// Evenly spaced data values `0, 1/count, …, 1` for axis ticks.
pub fn ticks(count: usize) -> Vec<f64> {
    if count == 0 {
        return vec![0.0, 1.0];
    }
    (0..=count).map(|i| i as f64 / count as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_axis_is_inverted() {
        let m = CoordinateMapper::new(200.0, 100.0).unwrap();
        assert_eq!(m.to_pixel_y(0.0), 100.0);
        assert_eq!(m.to_pixel_y(1.0), 0.0);
        assert_eq!(m.to_data_y(100.0), 0.0);
    }

    #[test]
    fn degenerate_surface_is_rejected() {
        assert!(CoordinateMapper::new(0.0, 10.0).is_err());
        assert!(CoordinateMapper::new(10.0, -1.0).is_err());
        assert!(CoordinateMapper::new(f64::NAN, 10.0).is_err());
    }

    #[test]
    fn ticks_cover_unit_interval() {
        let t = ticks(10);
        assert_eq!(t.len(), 11);
        assert_eq!(t[0], 0.0);
        assert_eq!(t[10], 1.0);
        assert_eq!(ticks(0), vec![0.0, 1.0]);
    }
}
