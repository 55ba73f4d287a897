//! The drawing surface: axes, markers and pointer input.

use egui::{Align2, Color32, CursorIcon, FontId, Painter, Pos2, Response, Sense, Stroke, Ui};

use super::panel_trait::Panel;
use crate::config::{DotPlotConfig, Margins};
use crate::interaction::PointerEvent;
use crate::mapper::{ticks, CoordinateMapper};
use crate::plot::DotPlot;

const TICK_LEN: f32 = 6.0;

pub struct PlotPanel {
    margins: Margins,
    tick_count: usize,
    show_axes: bool,
}

impl PlotPanel {
    pub fn new(cfg: &DotPlotConfig) -> Self {
        Self {
            margins: cfg.margins,
            tick_count: cfg.tick_count,
            show_axes: cfg.features.axes,
        }
    }

    /// Top-left corner of the drawing surface inside the allocated rect.
    fn surface_origin(&self, response: &Response) -> Pos2 {
        response.rect.min + egui::vec2(self.margins.left as f32, self.margins.top as f32)
    }

    /// Translate this frame's raw pointer input into surface-local events.
    fn pointer_events(ui: &Ui, response: &Response, origin: Pos2) -> Vec<PointerEvent> {
        let to_local = |p: Pos2| [f64::from(p.x - origin.x), f64::from(p.y - origin.y)];
        ui.input(|i| {
            let mut out = Vec::new();
            let pos = i.pointer.interact_pos();
            if i.pointer.primary_pressed() {
                if let Some(p) = pos.filter(|_| response.contains_pointer()) {
                    out.push(PointerEvent::Press(to_local(p)));
                }
            } else if (i.pointer.primary_down() || i.pointer.primary_released())
                && i.pointer.delta() != egui::Vec2::ZERO
            {
                // a release frame can carry motion too; deliver it before the release
                if let Some(p) = pos {
                    out.push(PointerEvent::Move(to_local(p)));
                }
            }
            if i.pointer.primary_released() {
                match pos {
                    Some(p) => out.push(PointerEvent::Release(to_local(p))),
                    None => out.push(PointerEvent::Cancel),
                }
            } else if !i.pointer.has_pointer() {
                out.push(PointerEvent::Cancel);
            }
            out
        })
    }

    fn paint_axes(&self, painter: &Painter, origin: Pos2, mapper: &CoordinateMapper, color: Color32) {
        let stroke = Stroke::new(1.0, color);
        let font = FontId::proportional(10.0);
        let w = mapper.width() as f32;
        let h = mapper.height() as f32;

        // bottom
        painter.line_segment([origin + egui::vec2(0.0, h), origin + egui::vec2(w, h)], stroke);
        // left
        painter.line_segment([origin, origin + egui::vec2(0.0, h)], stroke);

        for v in ticks(self.tick_count) {
            let label = format!("{v:.1}");

            let x = origin.x + mapper.to_pixel_x(v) as f32;
            let base = Pos2::new(x, origin.y + h);
            painter.line_segment([base, base + egui::vec2(0.0, TICK_LEN)], stroke);
            painter.text(
                base + egui::vec2(0.0, TICK_LEN + 2.0),
                Align2::CENTER_TOP,
                &label,
                font.clone(),
                color,
            );

            let y = origin.y + mapper.to_pixel_y(v) as f32;
            let base = Pos2::new(origin.x, y);
            painter.line_segment([base, base - egui::vec2(TICK_LEN, 0.0)], stroke);
            painter.text(
                base - egui::vec2(TICK_LEN + 2.0, 0.0),
                Align2::RIGHT_CENTER,
                &label,
                font.clone(),
                color,
            );
        }
    }
}

impl Panel for PlotPanel {
    fn title(&self) -> &'static str {
        "Plot"
    }

    fn show(&mut self, ui: &mut Ui, plot: &mut DotPlot) {
        let mapper = *plot.mapper();
        let size = egui::vec2(
            (mapper.width() + self.margins.left + self.margins.right) as f32,
            (mapper.height() + self.margins.top + self.margins.bottom) as f32,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
        let origin = self.surface_origin(&response);

        for event in Self::pointer_events(ui, &response, origin) {
            plot.handle(event);
        }

        if plot.interaction().dragged_id().is_some() {
            ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
        } else if let Some(hover) = response.hover_pos() {
            let local = [f64::from(hover.x - origin.x), f64::from(hover.y - origin.y)];
            if plot
                .interaction()
                .hit_test(plot.store(), &mapper, local)
                .is_some()
            {
                ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
            }
        }

        if self.show_axes {
            self.paint_axes(&painter, origin, &mapper, ui.visuals().text_color());
        }

        for marker in plot.scene().markers() {
            let center = origin + egui::vec2(marker.center[0] as f32, marker.center[1] as f32);
            painter.circle(center, marker.look.radius, marker.look.fill, marker.look.stroke);
        }
    }
}
