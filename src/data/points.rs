//! The point store: labeled points in normalized data space.

use rand::Rng;

use crate::mapper::CoordinateMapper;

/// A labeled point in data space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub id: u32,
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn data(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

/// Ordered collection of points, exclusively owned by the plot state.
///
/// Insertion order is preserved and drives the table row order. Markers are
/// matched to points by id, never by position.
#[derive(Debug, Clone, Default)]
pub struct PointStore {
    points: Vec<Point>,
}

impl PointStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `n` points with evenly spaced X (`(i + 0.5) / n`) and random Y.
    pub fn with_initial<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let points = (0..n)
            .map(|i| Point {
                id: i as u32 + 1,
                x: (i as f64 + 0.5) / n as f64,
                y: rng.gen::<f64>(),
            })
            .collect();
        Self { points }
    }

    /// Build a store from explicit points, e.g. for embedding or tests.
    ///
    /// Later duplicates of an id are dropped so ids stay unique.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        let mut store = Self::new();
        for p in points {
            if store.get(p.id).is_none() {
                store.points.push(p);
            }
        }
        store
    }

    /// Id the next created point will get: max live id + 1, or 1 when empty.
    ///
    /// Once `u32::MAX` is live, the lowest free id is handed out instead.
    pub fn next_id(&self) -> u32 {
        match self.points.iter().map(|p| p.id).max() {
            None => 1,
            Some(max) => max
                .checked_add(1)
                .or_else(|| (1..=u32::MAX).find(|id| self.get(*id).is_none()))
                .unwrap_or(max),
        }
    }

    /// Conjure a point at a surface-local pixel position.
    pub fn create(&mut self, pixel_x: f64, pixel_y: f64, mapper: &CoordinateMapper) -> Point {
        let point = Point {
            id: self.next_id(),
            x: mapper.to_data_x(pixel_x),
            y: mapper.to_data_y(pixel_y),
        };
        self.points.push(point);
        point
    }

    /// Destroy the point with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: u32) -> Option<Point> {
        let idx = self.points.iter().position(|p| p.id == id)?;
        Some(self.points.remove(idx))
    }

    /// Move point `id` to a surface-local pixel position. Returns `false` when
    /// no such point exists.
    pub fn update_position(
        &mut self,
        id: u32,
        pixel_x: f64,
        pixel_y: f64,
        mapper: &CoordinateMapper,
    ) -> bool {
        match self.points.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                p.x = mapper.to_data_x(pixel_x);
                p.y = mapper.to_data_y(pixel_y);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: u32) -> Option<&Point> {
        self.points.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn ids(&self) -> Vec<u32> {
        self.points.iter().map(|p| p.id).collect()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}
