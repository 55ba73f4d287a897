//! Render/sync loop: keeps markers and table rows in step with the point store.
//!
//! Two refresh levels exist:
//!
//! * **[`render_full`](Scene::render_full)** reconciles the marker set against
//!   the store by id (create new markers, update existing ones in place, drop
//!   stale ones) and then rebuilds the table.
//! * **[`render_table`](Scene::render_table)** rebuilds only the table rows.
//!   The drag path calls it on every pointer move together with
//!   [`move_marker`](Scene::move_marker).
//!
//! The scene only ever reads the store.

use std::collections::HashMap;

use crate::data::marker_look::MarkerLook;
use crate::data::points::PointStore;
use crate::mapper::CoordinateMapper;

#[cfg(feature = "reconcile_debug")]
macro_rules! reconcile_debug { ($($arg:tt)*) => { log::debug!($($arg)*); } }
#[cfg(not(feature = "reconcile_debug"))]
macro_rules! reconcile_debug { ($($arg:tt)*) => {}; }

/// Visual representation of one point, keyed by its id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub id: u32,
    /// Center in surface-local pixels.
    pub center: [f64; 2],
    pub look: MarkerLook,
}

/// One table row: id and the stored normalized coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow {
    pub id: u32,
    pub x: f64,
    pub y: f64,
}

impl TableRow {
    /// Cell text for column 0 (id), 1 (x) or 2 (y).
    pub fn cell_text(&self, col: usize, precision: Option<usize>) -> String {
        match col {
            0 => self.id.to_string(),
            1 => format_value(self.x, precision),
            2 => format_value(self.y, precision),
            _ => String::new(),
        }
    }
}

pub fn format_value(v: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{v:.p$}"),
        None => v.to_string(),
    }
}

/// Outcome of a marker reconcile pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub created: usize,
    pub updated: usize,
    pub removed: usize,
}

/// Markers and table rows derived from the point store.
#[derive(Debug, Clone)]
pub struct Scene {
    markers: Vec<Marker>,
    rows: Vec<TableRow>,
    radius: f32,
}

impl Scene {
    pub fn new(radius: f32) -> Self {
        Self {
            markers: Vec::new(),
            rows: Vec::new(),
            radius,
        }
    }

    /// Rebind markers to the store by id, then rebuild the table.
    pub fn render_full(&mut self, store: &PointStore, mapper: &CoordinateMapper) -> ReconcileSummary {
        let mut existing: HashMap<u32, Marker> =
            self.markers.drain(..).map(|m| (m.id, m)).collect();
        let mut summary = ReconcileSummary::default();

        for p in store.iter() {
            let center = mapper.to_pixel(p.data());
            let marker = match existing.remove(&p.id) {
                Some(mut m) => {
                    m.center = center;
                    m.look = MarkerLook::for_id(p.id, self.radius);
                    summary.updated += 1;
                    m
                }
                None => {
                    summary.created += 1;
                    Marker {
                        id: p.id,
                        center,
                        look: MarkerLook::for_id(p.id, self.radius),
                    }
                }
            };
            self.markers.push(marker);
        }
        summary.removed = existing.len();
        reconcile_debug!("reconcile: {:?}", summary);

        self.render_table(store);
        summary
    }

    /// Rebuild the table rows in store order.
    pub fn render_table(&mut self, store: &PointStore) {
        self.rows.clear();
        self.rows.extend(store.iter().map(|p| TableRow {
            id: p.id,
            x: p.x,
            y: p.y,
        }));
    }

    /// Drag path: move a single marker without reconciling the rest.
    pub fn move_marker(&mut self, id: u32, center: [f64; 2]) -> bool {
        match self.markers.iter_mut().find(|m| m.id == id) {
            Some(m) => {
                m.center = center;
                true
            }
            None => false,
        }
    }

    /// Markers in paint order; the last one is drawn on top.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn marker(&self, id: u32) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id == id)
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}
