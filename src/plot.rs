//! [`DotPlot`]: the owned plot state tying store, mapper, scene and gesture
//! handling together.
//!
//! Only [`DotPlot::handle`] (through the interaction handler) and the explicit
//! reset/clear helpers mutate the store. Everything else reads it.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::DotPlotConfig;
use crate::data::points::PointStore;
use crate::error::Result;
use crate::interaction::{InteractionHandler, PointerEvent, Refresh};
use crate::mapper::CoordinateMapper;
use crate::render::Scene;

pub struct DotPlot {
    store: PointStore,
    mapper: CoordinateMapper,
    scene: Scene,
    interaction: InteractionHandler,
    rng: StdRng,
    initial_points: usize,
}

impl DotPlot {
    /// Build the plot for a viewport, seeding the initial points.
    pub fn new(cfg: &DotPlotConfig) -> Result<Self> {
        let mapper = CoordinateMapper::from_viewport(
            f64::from(cfg.viewport[0]),
            f64::from(cfg.viewport[1]),
            &cfg.margins,
        )?;
        let rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self::with_mapper(cfg, mapper, rng))
    }

    /// Build the plot with an explicit mapper and random source.
    pub fn with_mapper(cfg: &DotPlotConfig, mapper: CoordinateMapper, mut rng: StdRng) -> Self {
        let store = PointStore::with_initial(cfg.initial_points, &mut rng);
        let mut plot = Self {
            store,
            mapper,
            scene: Scene::new(cfg.dot_radius),
            interaction: InteractionHandler::new(
                f64::from(cfg.dot_radius),
                cfg.drag_threshold,
                cfg.clamp,
            ),
            rng,
            initial_points: cfg.initial_points,
        };
        plot.scene.render_full(&plot.store, &plot.mapper);
        log::info!(
            "dot plot ready: {} points on a {}x{} px surface",
            plot.store.len(),
            mapper.width(),
            mapper.height()
        );
        plot
    }

    /// Feed one pointer event through the gesture state machine and sync the
    /// scene.
    pub fn handle(&mut self, event: PointerEvent) -> Refresh {
        let refresh = self
            .interaction
            .handle(event, &mut self.store, &self.mapper);
        self.sync(refresh);
        refresh
    }

    fn sync(&mut self, refresh: Refresh) {
        match refresh {
            Refresh::None => {}
            Refresh::Table => {
                if let Some(p) = self.interaction.dragged_id().and_then(|id| self.store.get(id)) {
                    self.scene.move_marker(p.id, self.mapper.to_pixel(p.data()));
                }
                self.scene.render_table(&self.store);
            }
            Refresh::Full => {
                self.scene.render_full(&self.store, &self.mapper);
            }
        }
    }

    /// Replace all points with a fresh initial set.
    pub fn reset(&mut self) {
        self.interaction.handle(PointerEvent::Cancel, &mut self.store, &self.mapper);
        self.store = PointStore::with_initial(self.initial_points, &mut self.rng);
        self.scene.render_full(&self.store, &self.mapper);
        log::info!("reset to {} points", self.store.len());
    }

    /// Remove every point.
    pub fn clear(&mut self) {
        self.interaction.handle(PointerEvent::Cancel, &mut self.store, &self.mapper);
        self.store.clear();
        self.scene.render_full(&self.store, &self.mapper);
        log::info!("cleared all points");
    }

    pub fn store(&self) -> &PointStore {
        &self.store
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn interaction(&self) -> &InteractionHandler {
        &self.interaction
    }
}
