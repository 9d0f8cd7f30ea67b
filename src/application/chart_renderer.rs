// Chart renderer - Builds the CPU and memory charts and submits them to the charting library
use crate::application::charting_library::{
    ChartInstance, ChartingLibrary, Surface, SurfaceProvider,
};
use crate::domain::chart::{
    AxisBounds, ChartConfig, ChartOptions, Dataset, Rgba, CPU_SURFACE_ID, MEMORY_SURFACE_ID,
};
use crate::domain::error::RenderError;
use crate::domain::usage::validate_lengths;
use std::sync::Arc;

const CPU_LABEL: &str = "CPU Usage";
const MEMORY_LABEL: &str = "Memory Usage";
const CPU_COLOR: Rgba = Rgba::opaque(255, 99, 132);
const MEMORY_COLOR: Rgba = Rgba::opaque(255, 206, 86);
const LINE_TENSION: f64 = 0.1;
const Y_AXIS_MAX: f64 = 100.0;

#[derive(Clone)]
pub struct ChartRenderer {
    library: Arc<dyn ChartingLibrary>,
}

impl ChartRenderer {
    pub fn new(library: Arc<dyn ChartingLibrary>) -> Self {
        Self { library }
    }

    /// Draw the CPU chart on `cpuChart` and the memory chart on `memoryChart`.
    ///
    /// Every call creates two new chart instances; whatever a surface showed
    /// before is replaced, not destroyed or reused. Nothing is submitted unless
    /// the inputs are valid and both surfaces exist.
    pub fn render(
        &self,
        surfaces: &dyn SurfaceProvider,
        cpu: &[f64],
        memory: &[f64],
        timestamps: &[String],
    ) -> Result<(), RenderError> {
        self.render_instances(surfaces, cpu, memory, timestamps)?;
        Ok(())
    }

    /// Same as [`ChartRenderer::render`], returning the CPU and memory chart
    /// instances as the library created them
    pub fn render_instances(
        &self,
        surfaces: &dyn SurfaceProvider,
        cpu: &[f64],
        memory: &[f64],
        timestamps: &[String],
    ) -> Result<[ChartInstance; 2], RenderError> {
        let [cpu_config, memory_config] = chart_configs(cpu, memory, timestamps)?;

        let cpu_surface = locate(surfaces, CPU_SURFACE_ID)?;
        let memory_surface = locate(surfaces, MEMORY_SURFACE_ID)?;

        let cpu_instance = self.submit(cpu_surface.as_ref(), &cpu_config)?;
        let memory_instance = self.submit(memory_surface.as_ref(), &memory_config)?;

        Ok([cpu_instance, memory_instance])
    }

    fn submit(&self, surface: &dyn Surface, config: &ChartConfig) -> Result<ChartInstance, RenderError> {
        let instance = self.library.create_chart(surface, config)?;
        tracing::debug!(
            "Created {:?} chart {} on {} (generation {}) with {} points",
            instance.kind,
            instance.id,
            instance.surface_id,
            instance.generation,
            config.point_count()
        );
        Ok(instance)
    }
}

/// Build the CPU and memory chart configurations, in that order
pub fn chart_configs(
    cpu: &[f64],
    memory: &[f64],
    timestamps: &[String],
) -> Result<[ChartConfig; 2], RenderError> {
    validate_lengths(cpu, memory, timestamps)?;

    Ok([
        usage_chart(CPU_SURFACE_ID, CPU_LABEL, CPU_COLOR, true, cpu, timestamps),
        usage_chart(MEMORY_SURFACE_ID, MEMORY_LABEL, MEMORY_COLOR, false, memory, timestamps),
    ])
}

fn usage_chart(
    surface_id: &str,
    label: &str,
    color: Rgba,
    fill: bool,
    data: &[f64],
    timestamps: &[String],
) -> ChartConfig {
    let dataset = Dataset::new(label, data.to_vec(), color)
        .tension(LINE_TENSION)
        .fill(fill);

    ChartConfig::line(surface_id, timestamps.to_vec(), vec![dataset]).with_options(ChartOptions {
        responsive: true,
        legend_display: false,
        y_axis: AxisBounds::from_zero(Y_AXIS_MAX),
    })
}

fn locate(surfaces: &dyn SurfaceProvider, id: &str) -> Result<Arc<dyn Surface>, RenderError> {
    surfaces
        .surface(id)
        .ok_or_else(|| RenderError::SurfaceNotFound(id.to_string()))
}
