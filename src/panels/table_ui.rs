//! Live coordinate table below the plot.

use egui::Ui;
use egui_table::{HeaderRow, Table, TableDelegate};

use super::panel_trait::Panel;
use crate::plot::DotPlot;
use crate::render::TableRow;

pub struct TablePanel {
    precision: Option<usize>,
}

impl TablePanel {
    pub fn new(precision: Option<usize>) -> Self {
        Self { precision }
    }
}

impl Default for TablePanel {
    fn default() -> Self {
        Self::new(None)
    }
}

struct RowsDelegate<'a> {
    rows: &'a [TableRow],
    precision: Option<usize>,
}

impl TableDelegate for RowsDelegate<'_> {
    fn header_cell_ui(&mut self, ui: &mut egui::Ui, cell: &egui_table::HeaderCellInfo) {
        let text = match cell.col_range.start {
            0 => "id",
            1 => "x",
            2 => "y",
            _ => "",
        };
        ui.add_space(4.0);
        ui.strong(text);
    }

    fn cell_ui(&mut self, ui: &mut egui::Ui, cell: &egui_table::CellInfo) {
        if let Some(row) = self.rows.get(cell.row_nr as usize) {
            ui.add_space(4.0);
            ui.label(row.cell_text(cell.col_nr, self.precision));
        }
    }
}

impl Panel for TablePanel {
    fn title(&self) -> &'static str {
        "Coordinates"
    }

    fn icon_only(&self) -> Option<&'static str> {
        Some(egui_phosphor::regular::TABLE)
    }

    fn show(&mut self, ui: &mut Ui, plot: &mut DotPlot) {
        let rows = plot.scene().rows();
        let mut delegate = RowsDelegate {
            rows,
            precision: self.precision,
        };
        let cols = vec![
            egui_table::Column::new(60.0),
            egui_table::Column::new(220.0),
            egui_table::Column::new(220.0),
        ];
        // Expand table to the bottom of the window
        let avail_w = ui.available_width();
        let remaining_h = ui.available_height();
        let (rect, _resp) =
            ui.allocate_exact_size(egui::vec2(avail_w, remaining_h), egui::Sense::hover());
        let ui_builder = egui::UiBuilder::new()
            .max_rect(rect)
            .layout(egui::Layout::left_to_right(egui::Align::Min));
        let mut table_ui = ui.new_child(ui_builder);
        Table::new()
            .id_salt("dotplot_coordinates")
            .num_rows(rows.len() as u64)
            .columns(cols)
            .headers(vec![HeaderRow::new(24.0)])
            .show(&mut table_ui, &mut delegate);
    }
}
