// Dashboard service - Use case for rendering the usage charts of a page
use crate::application::chart_renderer::{chart_configs, ChartRenderer};
use crate::application::charting_library::{Frame, SurfaceProvider};
use crate::domain::chart::ChartConfig;
use crate::domain::error::RenderError;
use crate::domain::usage::UsageSamples;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Clone, Serialize)]
pub struct SurfaceSummary {
    pub surface_id: String,
    pub generation: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderSummary {
    pub surfaces: Vec<SurfaceSummary>,
    pub points: usize,
    pub rendered_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct DashboardService {
    renderer: ChartRenderer,
    surfaces: Arc<dyn SurfaceProvider>,
}

impl DashboardService {
    pub fn new(renderer: ChartRenderer, surfaces: Arc<dyn SurfaceProvider>) -> Self {
        Self { renderer, surfaces }
    }

    /// Render both usage charts onto the page's surfaces
    pub fn render_usage(&self, samples: &UsageSamples) -> Result<RenderSummary, RenderError> {
        let start_time = Instant::now();
        if samples.is_empty() {
            tracing::debug!("Rendering usage charts without samples");
        }

        let instances = self.renderer.render_instances(
            self.surfaces.as_ref(),
            &samples.cpu,
            &samples.memory,
            &samples.timestamps,
        )?;

        // Generations come from this call's own presents, not a later re-read
        // that a concurrent render could have moved on
        let surfaces = instances
            .into_iter()
            .map(|instance| SurfaceSummary {
                surface_id: instance.surface_id,
                generation: instance.generation,
            })
            .collect();

        tracing::info!(
            "Rendered usage charts with {} points in {}ms",
            samples.len(),
            start_time.elapsed().as_millis()
        );

        Ok(RenderSummary {
            surfaces,
            points: samples.len(),
            rendered_at: Utc::now(),
        })
    }

    /// Chart configurations for `samples` without drawing anything
    pub fn chart_configs(&self, samples: &UsageSamples) -> Result<[ChartConfig; 2], RenderError> {
        chart_configs(&samples.cpu, &samples.memory, &samples.timestamps)
    }

    pub fn latest_frame(&self, surface_id: &str) -> Option<Frame> {
        self.surfaces.surface(surface_id)?.snapshot().frame
    }
}
