//! Execution backends.
//!
//! A backend runs a lane function once per lane and hands back each lane's
//! output in lane order. Lanes share nothing mutable, so a backend is free
//! to run them in any order or all at once.

use lum_math::Color;
use rayon::prelude::*;

use crate::error::{RenderError, RenderResult};

/// Work done by one lane: pixel radiances in stride order.
pub type LaneFn<'a> = dyn Fn(usize) -> Vec<Color> + Sync + 'a;

/// Runs lanes to completion.
pub trait ExecutionBackend: Send + Sync {
    /// Short name for logging.
    fn name(&self) -> &str;

    /// Invoke `lane_fn` for every lane in `0..lanes` and return the results
    /// indexed by lane. Returns only after every lane has finished.
    fn run_lanes(&self, lanes: usize, lane_fn: &LaneFn<'_>) -> RenderResult<Vec<Vec<Color>>>;
}

/// Runs lanes one after another on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialBackend;

impl ExecutionBackend for SerialBackend {
    fn name(&self) -> &str {
        "serial"
    }

    fn run_lanes(&self, lanes: usize, lane_fn: &LaneFn<'_>) -> RenderResult<Vec<Vec<Color>>> {
        Ok((0..lanes).map(lane_fn).collect())
    }
}

/// Runs lanes on a rayon thread pool.
///
/// With no thread count the global pool is used; otherwise a dedicated
/// pool of that size is built per render.
#[derive(Debug, Clone, Copy, Default)]
pub struct RayonBackend {
    threads: Option<usize>,
}

impl RayonBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a dedicated pool with `threads` workers.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }
}

impl ExecutionBackend for RayonBackend {
    fn name(&self) -> &str {
        "rayon"
    }

    fn run_lanes(&self, lanes: usize, lane_fn: &LaneFn<'_>) -> RenderResult<Vec<Vec<Color>>> {
        let run = || -> Vec<Vec<Color>> { (0..lanes).into_par_iter().map(lane_fn).collect() };

        match self.threads {
            None => Ok(run()),
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| RenderError::Backend(e.to_string()))?;
                log::debug!("Built rayon pool with {} threads", pool.current_num_threads());
                Ok(pool.install(run))
            }
        }
    }
}
