use egui::Ui;

use crate::plot::DotPlot;

/// A region of the dot plot window.
pub trait Panel {
    fn title(&self) -> &'static str;

    /// Phosphor glyph shown next to the title, if any.
    fn icon_only(&self) -> Option<&'static str> {
        None
    }

    fn title_and_icon(&self) -> String {
        match self.icon_only() {
            Some(icon) => format!("{icon} {}", self.title()),
            None => self.title().to_string(),
        }
    }

    fn show(&mut self, ui: &mut Ui, plot: &mut DotPlot);
}
