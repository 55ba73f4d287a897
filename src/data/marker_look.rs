//! MarkerLook: visual styling for point markers.

use eframe::egui;

/// category10 palette, in order.
pub const PALETTE: [egui::Color32; 10] = [
    egui::Color32::from_rgb(31, 119, 180),
    egui::Color32::from_rgb(255, 127, 14),
    egui::Color32::from_rgb(44, 160, 44),
    egui::Color32::from_rgb(214, 39, 40),
    egui::Color32::from_rgb(148, 103, 189),
    egui::Color32::from_rgb(140, 86, 75),
    egui::Color32::from_rgb(227, 119, 194),
    egui::Color32::from_rgb(127, 127, 127),
    egui::Color32::from_rgb(188, 189, 34),
    egui::Color32::from_rgb(23, 190, 207),
];

/// How a marker is drawn: filled disc with an outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerLook {
    pub fill: egui::Color32,
    pub radius: f32,
    pub stroke: egui::Stroke,
}

impl Default for MarkerLook {
    fn default() -> Self {
        Self {
            fill: PALETTE[0],
            radius: 16.0,
            stroke: egui::Stroke::new(2.0, egui::Color32::BLACK),
        }
    }
}

impl MarkerLook {
    /// Look for the point with `id`, at the given radius.
    pub fn for_id(id: u32, radius: f32) -> Self {
        Self {
            fill: Self::color_for_id(id),
            radius,
            ..Default::default()
        }
    }

    /// Palette colour keyed by point id. Ids 1..=10 map to entries 0..=9.
    pub fn color_for_id(id: u32) -> egui::Color32 {
        let len = PALETTE.len() as u64;
        let idx = ((u64::from(id) + len - 1) % len) as usize;
        PALETTE[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles_by_id() {
        assert_eq!(MarkerLook::color_for_id(1), PALETTE[0]);
        assert_eq!(MarkerLook::color_for_id(10), PALETTE[9]);
        assert_eq!(MarkerLook::color_for_id(11), PALETTE[0]);
        assert_eq!(MarkerLook::color_for_id(0), PALETTE[9]);
    }
}
