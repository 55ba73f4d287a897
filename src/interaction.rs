//! Pointer gesture state machine.
//!
//! Raw pointer input is translated into [`PointerEvent`]s carrying
//! surface-local pixel positions. [`InteractionHandler::handle`] turns them
//! into point store mutations and tells the caller how much of the scene must
//! be refreshed.
//!
//! ```text
//! Idle ──press on marker──▶ Dragging{moved: false} ──move > threshold──▶ Dragging{moved: true}
//!   │                            │ release                                 │ release
//!   │                            ▼                                         ▼
//!   │             destroy, Idle (or move, Idle if past threshold)         Idle
//!   └─press on background──▶ PressedBackground ──release on surface──▶ conjure, Idle
//! ```

use crate::config::ClampPolicy;
use crate::data::points::PointStore;
use crate::mapper::CoordinateMapper;

/// Pointer input in surface-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press([f64; 2]),
    Move([f64; 2]),
    Release([f64; 2]),
    /// The pointer left the window or input focus was lost.
    Cancel,
}

/// How much of the scene must be refreshed after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    None,
    /// A point moved: update its marker and the table.
    Table,
    /// Points were added or removed: reconcile all markers and the table.
    Full,
}

/// Payload of an active press on a marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub id: u32,
    /// Marker center minus press position, kept so the marker doesn't jump.
    pub offset: [f64; 2],
    pub origin: [f64; 2],
    /// Set once the pointer travelled past the drag threshold. Suppresses
    /// the destroy on release.
    pub moved: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    PressedBackground {
        origin: [f64; 2],
    },
    Dragging(DragState),
}

/// Owns the gesture state and applies gestures to the point store.
#[derive(Debug, Clone)]
pub struct InteractionHandler {
    gesture: Gesture,
    radius: f64,
    drag_threshold: f64,
    clamp: ClampPolicy,
}

impl InteractionHandler {
    pub fn new(radius: f64, drag_threshold: f64, clamp: ClampPolicy) -> Self {
        Self {
            gesture: Gesture::Idle,
            radius,
            drag_threshold: drag_threshold.max(0.0),
            clamp,
        }
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// Id of the marker currently being dragged (after the threshold).
    pub fn dragged_id(&self) -> Option<u32> {
        match self.gesture {
            Gesture::Dragging(d) if d.moved => Some(d.id),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.gesture == Gesture::Idle
    }

    /// Topmost marker whose disc contains `pixel`.
    pub fn hit_test(
        &self,
        store: &PointStore,
        mapper: &CoordinateMapper,
        pixel: [f64; 2],
    ) -> Option<u32> {
        let r2 = self.radius * self.radius;
        store
            .iter()
            .rev()
            .find(|p| {
                let c = mapper.to_pixel(p.data());
                let dx = c[0] - pixel[0];
                let dy = c[1] - pixel[1];
                dx * dx + dy * dy <= r2
            })
            .map(|p| p.id)
    }

    pub fn handle(
        &mut self,
        event: PointerEvent,
        store: &mut PointStore,
        mapper: &CoordinateMapper,
    ) -> Refresh {
        match event {
            PointerEvent::Press(pos) => {
                self.press(pos, store, mapper);
                Refresh::None
            }
            PointerEvent::Move(pos) => self.moved(pos, store, mapper),
            PointerEvent::Release(pos) => self.release(pos, store, mapper),
            PointerEvent::Cancel => {
                if let Gesture::Dragging(d) = self.gesture {
                    log::debug!("drag of point {} cancelled", d.id);
                }
                self.gesture = Gesture::Idle;
                Refresh::None
            }
        }
    }

    fn press(&mut self, pos: [f64; 2], store: &PointStore, mapper: &CoordinateMapper) {
        self.gesture = match self.hit_test(store, mapper, pos) {
            Some(id) => {
                // hit_test only returns live ids
                let center = store.get(id).map_or(pos, |p| mapper.to_pixel(p.data()));
                Gesture::Dragging(DragState {
                    id,
                    offset: [center[0] - pos[0], center[1] - pos[1]],
                    origin: pos,
                    moved: false,
                })
            }
            None if mapper.contains_pixel(pos) => Gesture::PressedBackground { origin: pos },
            None => Gesture::Idle,
        };
    }

    fn past_threshold(&self, drag: &DragState, pos: [f64; 2]) -> bool {
        let dx = pos[0] - drag.origin[0];
        let dy = pos[1] - drag.origin[1];
        (dx * dx + dy * dy).sqrt() > self.drag_threshold
    }

    /// Surface pixel the dragged marker's center follows for pointer `pos`.
    fn drag_target(&self, drag: &DragState, pos: [f64; 2], mapper: &CoordinateMapper) -> [f64; 2] {
        let target = [pos[0] + drag.offset[0], pos[1] + drag.offset[1]];
        match self.clamp {
            ClampPolicy::None => target,
            ClampPolicy::Surface => mapper.clamp_pixel(target),
        }
    }

    fn moved(&mut self, pos: [f64; 2], store: &mut PointStore, mapper: &CoordinateMapper) -> Refresh {
        let Gesture::Dragging(mut drag) = self.gesture else {
            return Refresh::None;
        };
        if !drag.moved {
            if !self.past_threshold(&drag, pos) {
                return Refresh::None;
            }
            drag.moved = true;
            self.gesture = Gesture::Dragging(drag);
            log::debug!("drag of point {} started", drag.id);
        }

        let target = self.drag_target(&drag, pos, mapper);
        if store.update_position(drag.id, target[0], target[1], mapper) {
            Refresh::Table
        } else {
            self.gesture = Gesture::Idle;
            Refresh::None
        }
    }

    fn release(&mut self, pos: [f64; 2], store: &mut PointStore, mapper: &CoordinateMapper) -> Refresh {
        let gesture = std::mem::take(&mut self.gesture);
        match gesture {
            // Motion that arrived only with the release still makes it a drag.
            Gesture::Dragging(drag) if !drag.moved && self.past_threshold(&drag, pos) => {
                let target = self.drag_target(&drag, pos, mapper);
                if store.update_position(drag.id, target[0], target[1], mapper) {
                    log::debug!("point {} dragged in a single step", drag.id);
                    // the marker is no longer tracked as dragged, so reconcile all
                    Refresh::Full
                } else {
                    Refresh::None
                }
            }
            Gesture::Dragging(DragState { id, moved: false, .. }) => match store.remove(id) {
                Some(_) => {
                    log::debug!("destroyed point {id}");
                    Refresh::Full
                }
                None => Refresh::None,
            },
            Gesture::Dragging(DragState { id, .. }) => {
                if let Some(p) = store.get(id) {
                    log::debug!("drag of point {id} ended at ({}, {})", p.x, p.y);
                }
                Refresh::None
            }
            Gesture::PressedBackground { .. } => {
                if !mapper.contains_pixel(pos) || self.hit_test(store, mapper, pos).is_some() {
                    return Refresh::None;
                }
                let p = store.create(pos[0], pos[1], mapper);
                log::debug!("conjured point {} at ({}, {})", p.id, p.x, p.y);
                Refresh::Full
            }
            Gesture::Idle => Refresh::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::points::Point;

    fn setup() -> (InteractionHandler, PointStore, CoordinateMapper) {
        let mapper = CoordinateMapper::new(100.0, 100.0).unwrap();
        let store = PointStore::from_points([
            Point { id: 1, x: 0.5, y: 0.5 },
            Point { id: 2, x: 0.55, y: 0.5 },
        ]);
        (InteractionHandler::new(16.0, 0.0, ClampPolicy::None), store, mapper)
    }

    #[test]
    fn overlapping_markers_hit_the_topmost() {
        let (h, store, mapper) = setup();
        assert_eq!(h.hit_test(&store, &mapper, [52.0, 50.0]), Some(2));
        assert_eq!(h.hit_test(&store, &mapper, [5.0, 5.0]), None);
    }

    #[test]
    fn press_outside_surface_stays_idle() {
        let (mut h, mut store, mapper) = setup();
        h.handle(PointerEvent::Press([-20.0, 50.0]), &mut store, &mapper);
        assert!(h.is_idle());
    }

    #[test]
    fn threshold_delays_drag_start() {
        let (_, mut store, mapper) = setup();
        let mut h = InteractionHandler::new(16.0, 3.0, ClampPolicy::None);
        h.handle(PointerEvent::Press([55.0, 50.0]), &mut store, &mapper);
        let r = h.handle(PointerEvent::Move([56.0, 51.0]), &mut store, &mapper);
        assert_eq!(r, Refresh::None);
        assert_eq!(h.dragged_id(), None);
        let r = h.handle(PointerEvent::Move([60.0, 50.0]), &mut store, &mapper);
        assert_eq!(r, Refresh::Table);
        assert_eq!(h.dragged_id(), Some(2));
    }

    #[test]
    fn release_far_from_press_moves_instead_of_destroying() {
        let (mut h, mut store, mapper) = setup();
        h.handle(PointerEvent::Press([36.0, 50.0]), &mut store, &mapper);
        let r = h.handle(PointerEvent::Release([66.0, 20.0]), &mut store, &mapper);
        assert_eq!(r, Refresh::Full);
        assert_eq!(store.len(), 2);
        // pressed 14 px left of point 1's center
        let p = store.get(1).unwrap();
        assert!((p.x - 0.8).abs() < 1e-9);
        assert!((p.y - 0.8).abs() < 1e-9);
        assert!(h.is_idle());
    }

    #[test]
    fn release_within_threshold_still_destroys() {
        let (_, mut store, mapper) = setup();
        let mut h = InteractionHandler::new(16.0, 3.0, ClampPolicy::None);
        h.handle(PointerEvent::Press([36.0, 50.0]), &mut store, &mapper);
        let r = h.handle(PointerEvent::Release([37.0, 51.0]), &mut store, &mapper);
        assert_eq!(r, Refresh::Full);
        assert_eq!(store.ids(), vec![2]);
    }

    #[test]
    fn cancel_returns_to_idle_and_keeps_point() {
        let (mut h, mut store, mapper) = setup();
        h.handle(PointerEvent::Press([55.0, 50.0]), &mut store, &mapper);
        h.handle(PointerEvent::Cancel, &mut store, &mapper);
        assert!(h.is_idle());
        assert_eq!(store.len(), 2);
    }
}
