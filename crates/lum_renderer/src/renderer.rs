//! Render driver: validation, lane dispatch and result assembly.

use std::time::Instant;

use lum_core::Scene;

use crate::backend::{ExecutionBackend, RayonBackend};
use crate::config::RenderConfig;
use crate::error::{RenderError, RenderResult};
use crate::kernel::render_lane;
use crate::output::RadianceBuffer;
use crate::partition::Partition;

/// Renders scenes with a fixed configuration and backend.
pub struct Renderer {
    config: RenderConfig,
    backend: Box<dyn ExecutionBackend>,
}

impl Renderer {
    /// Create a renderer on the rayon backend.
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            backend: Box::new(RayonBackend::new()),
        }
    }

    /// Replace the execution backend.
    pub fn with_backend(mut self, backend: impl ExecutionBackend + 'static) -> Self {
        self.backend = Box::new(backend);
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `scene` into a radiance buffer.
    ///
    /// The scene and configuration are validated before any lane starts.
    /// Either every pixel is written or an error is returned; there is no
    /// partial result.
    pub fn render(&self, scene: &Scene) -> RenderResult<RadianceBuffer> {
        scene.validate()?;
        self.config.validate()?;

        let partition = Partition::new(self.config.lanes, scene.pixel_count());
        log::info!(
            "Rendering {}x{} @ {} spp, depth {}, {} lanes on {} backend",
            scene.width(),
            scene.height(),
            self.config.samples_per_pixel,
            self.config.max_depth,
            partition.lanes(),
            self.backend.name()
        );

        let start = Instant::now();
        let config = &self.config;
        let lane_fn = |lane: usize| render_lane(scene, config, &partition, lane);
        let lanes = self.backend.run_lanes(partition.lanes(), &lane_fn)?;

        let buffer = assemble(scene, &partition, lanes)?;
        log::info!("Rendered in {:?}", start.elapsed());

        let bad = buffer.non_finite_count();
        if bad > 0 {
            log::warn!("{} channels are NaN or infinite (degenerate geometry)", bad);
        }

        Ok(buffer)
    }
}

/// Scatter lane results into the output buffer. Each cell is written by
/// exactly one lane's result.
fn assemble(
    scene: &Scene,
    partition: &Partition,
    lanes: Vec<Vec<lum_math::Color>>,
) -> RenderResult<RadianceBuffer> {
    if lanes.len() != partition.lanes() {
        return Err(RenderError::Backend(format!(
            "backend returned {} lane results, expected {}",
            lanes.len(),
            partition.lanes()
        )));
    }

    let mut buffer = RadianceBuffer::new(scene.width(), scene.height());
    for (lane, pixels) in lanes.iter().enumerate() {
        let expected = partition.lane_len(lane);
        if pixels.len() != expected {
            return Err(RenderError::Backend(format!(
                "lane {} returned {} pixels, expected {}",
                lane,
                pixels.len(),
                expected
            )));
        }
        for (index, color) in partition.lane_pixels(lane).zip(pixels) {
            buffer.set_index(index, *color);
        }
    }

    Ok(buffer)
}

/// Render `scene` with default settings and `samples` samples per pixel.
pub fn render(scene: &Scene, samples: u32) -> RenderResult<RadianceBuffer> {
    Renderer::new(RenderConfig::default().with_samples(samples)).render(scene)
}
