// Plotters charting library - Draws chart configurations as SVG documents
use crate::application::charting_library::{ChartInstance, ChartingLibrary, Frame, Surface};
use crate::domain::chart::{ChartConfig, ChartKind, Dataset, Rgba};
use crate::infrastructure::spline::smooth;
use plotters::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};

const CURVE_STEPS: usize = 8;
const FILL_OPACITY: f64 = 0.2;
const LINE_WIDTH: u32 = 2;
const MAX_X_LABELS: usize = 10;
const Y_LABELS: usize = 6;

#[derive(Debug, Default)]
pub struct PlottersChartLibrary {
    next_id: AtomicU64,
}

impl PlottersChartLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw `config` into a standalone SVG document of the given size
    pub fn draw_svg(config: &ChartConfig, (width, height): (u32, u32)) -> anyhow::Result<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(drawing_error)?;

            let y_axis = config.options.y_axis;
            let x_max = config.labels.len().saturating_sub(1).max(1) as f64;

            let mut chart = ChartBuilder::on(&root)
                .margin(10)
                .x_label_area_size(30)
                .y_label_area_size(40)
                .build_cartesian_2d(0f64..x_max, y_axis.min..y_axis.max)
                .map_err(drawing_error)?;

            // x positions are sample indices; only whole indices get a timestamp
            let labels = &config.labels;
            let label_at = |x: &f64| -> String {
                let index = x.round();
                if index < 0.0 || (x - index).abs() > 1e-6 {
                    return String::new();
                }
                labels.get(index as usize).cloned().unwrap_or_default()
            };

            chart
                .configure_mesh()
                .x_labels(labels.len().clamp(1, MAX_X_LABELS))
                .x_label_formatter(&label_at)
                .y_labels(Y_LABELS)
                .draw()
                .map_err(drawing_error)?;

            for dataset in &config.datasets {
                let points = smooth(&positions(dataset), dataset.tension, CURVE_STEPS);
                if points.is_empty() {
                    continue;
                }

                let color = plotters_color(dataset.border_color);
                let series = match (config.kind, dataset.fill) {
                    (ChartKind::Line, true) => chart.draw_series(
                        AreaSeries::new(points, y_axis.min, color.mix(FILL_OPACITY))
                            .border_style(color.stroke_width(LINE_WIDTH)),
                    ),
                    (ChartKind::Line, false) => {
                        chart.draw_series(LineSeries::new(points, color.stroke_width(LINE_WIDTH)))
                    }
                }
                .map_err(drawing_error)?;

                series
                    .label(dataset.label.clone())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
            }

            if config.options.legend_display {
                chart
                    .configure_series_labels()
                    .background_style(WHITE.mix(0.8))
                    .border_style(BLACK)
                    .draw()
                    .map_err(drawing_error)?;
            }

            root.present().map_err(drawing_error)?;
        }

        Ok(svg)
    }
}

impl ChartingLibrary for PlottersChartLibrary {
    fn create_chart(&self, surface: &dyn Surface, config: &ChartConfig) -> anyhow::Result<ChartInstance> {
        let dimensions = surface.dimensions();
        let mut svg = Self::draw_svg(config, dimensions)?;
        if config.options.responsive {
            svg = make_responsive(&svg, dimensions);
        }

        let generation = surface.present(Frame::svg(svg))?;

        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        Ok(ChartInstance {
            id,
            surface_id: surface.id().to_string(),
            kind: config.kind,
            generation,
        })
    }
}

fn positions(dataset: &Dataset) -> Vec<(f64, f64)> {
    dataset
        .data
        .iter()
        .enumerate()
        .map(|(i, &value)| (i as f64, value))
        .collect()
}

fn plotters_color(color: Rgba) -> RGBAColor {
    RGBAColor(color.r, color.g, color.b, color.a)
}

/// Let the document scale with its container instead of a fixed pixel size
fn make_responsive(svg: &str, (width, height): (u32, u32)) -> String {
    let fixed = format!("width=\"{}\" height=\"{}\"", width, height);
    let scaled = if svg.contains("viewBox") {
        "width=\"100%\" height=\"100%\"".to_string()
    } else {
        format!("width=\"100%\" height=\"100%\" viewBox=\"0 0 {} {}\"", width, height)
    };
    svg.replacen(&fixed, &scaled, 1)
}

fn drawing_error<E: std::fmt::Display>(err: E) -> anyhow::Error {
    anyhow::anyhow!("chart drawing failed: {}", err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::charting_library::SurfaceProvider;
    use crate::application::chart_renderer::chart_configs;
    use crate::domain::chart::{ChartOptions, CPU_SURFACE_ID, MEMORY_SURFACE_ID};
    use crate::infrastructure::surfaces::MemorySurfaceProvider;

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("t{}", i)).collect()
    }

    fn cpu_config(values: &[f64]) -> ChartConfig {
        let [cpu, _] = chart_configs(values, values, &labels(values.len())).unwrap();
        cpu
    }

    #[test]
    fn test_create_chart_presents_svg() {
        let surfaces = MemorySurfaceProvider::new([CPU_SURFACE_ID], (320, 160));
        let surface = surfaces.surface(CPU_SURFACE_ID).unwrap();
        let library = PlottersChartLibrary::new();

        let instance = library
            .create_chart(surface.as_ref(), &cpu_config(&[10.0, 20.0, 30.0]))
            .unwrap();
        assert_eq!(instance.surface_id, "cpuChart");
        assert_eq!(instance.kind, ChartKind::Line);

        let snapshot = surface.snapshot();
        assert_eq!(snapshot.generation, 1);
        let frame = snapshot.frame.unwrap();
        assert_eq!(frame.content_type, "image/svg+xml");
        assert!(frame.body.contains("<svg"));
        assert!(frame.body.contains("width=\"100%\""));
    }

    #[test]
    fn test_each_call_is_a_new_instance() {
        let surfaces = MemorySurfaceProvider::new([MEMORY_SURFACE_ID], (320, 160));
        let surface = surfaces.surface(MEMORY_SURFACE_ID).unwrap();
        let library = PlottersChartLibrary::new();
        let config = cpu_config(&[1.0, 2.0]);

        let first = library.create_chart(surface.as_ref(), &config).unwrap();
        let second = library.create_chart(surface.as_ref(), &config).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!((first.generation, second.generation), (1, 2));
        assert_eq!(surface.snapshot().generation, 2);
    }

    #[test]
    fn test_empty_chart_draws() {
        let svg = PlottersChartLibrary::draw_svg(&cpu_config(&[]), (200, 100)).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_out_of_range_values_draw() {
        let svg = PlottersChartLibrary::draw_svg(&cpu_config(&[150.0, -10.0, 50.0]), (200, 100)).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_legend_follows_option() {
        let hidden = cpu_config(&[10.0, 20.0]);
        let svg = PlottersChartLibrary::draw_svg(&hidden, (320, 160)).unwrap();
        assert!(!svg.contains("CPU Usage"));

        let shown = hidden.with_options(ChartOptions {
            legend_display: true,
            ..ChartOptions::default()
        });
        let svg = PlottersChartLibrary::draw_svg(&shown, (320, 160)).unwrap();
        assert!(svg.contains("CPU Usage"));
    }

    #[test]
    fn test_fixed_size_when_not_responsive() {
        let config = cpu_config(&[10.0]).with_options(ChartOptions {
            responsive: false,
            ..ChartOptions::default()
        });
        let surfaces = MemorySurfaceProvider::new([CPU_SURFACE_ID], (320, 160));
        let surface = surfaces.surface(CPU_SURFACE_ID).unwrap();

        PlottersChartLibrary::new().create_chart(surface.as_ref(), &config).unwrap();

        let body = surface.snapshot().frame.unwrap().body;
        assert!(body.contains("width=\"320\""));
        assert!(!body.contains("width=\"100%\""));
    }

    #[test]
    fn test_make_responsive_adds_view_box() {
        let svg = "<svg width=\"10\" height=\"5\" xmlns=\"http://www.w3.org/2000/svg\"></svg>";
        let scaled = make_responsive(svg, (10, 5));
        assert!(scaled.starts_with("<svg width=\"100%\" height=\"100%\" viewBox=\"0 0 10 5\""));
    }
}
