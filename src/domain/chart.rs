// Chart configuration domain models
use serde::Serialize;

/// Surface the CPU chart is drawn on
pub const CPU_SURFACE_ID: &str = "cpuChart";
/// Surface the memory chart is drawn on
pub const MEMORY_SURFACE_ID: &str = "memoryChart";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// CSS form, e.g. `rgba(255, 99, 132, 1)`
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl Serialize for Rgba {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: Rgba,
    pub tension: f64,
    pub fill: bool,
}

impl Dataset {
    pub fn new(label: impl Into<String>, data: Vec<f64>, border_color: Rgba) -> Self {
        Self {
            label: label.into(),
            data,
            border_color,
            tension: 0.0,
            fill: false,
        }
    }

    pub fn tension(mut self, tension: f64) -> Self {
        self.tension = tension;
        self
    }

    pub fn fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisBounds {
    pub begin_at_zero: bool,
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    /// Axis that starts at zero and is capped at `max`
    pub fn from_zero(max: f64) -> Self {
        Self {
            begin_at_zero: true,
            min: 0.0,
            max,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub responsive: bool,
    pub legend_display: bool,
    pub y_axis: AxisBounds,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            legend_display: true,
            y_axis: AxisBounds::from_zero(100.0),
        }
    }
}

// Chart.js shaped output: options.plugins.legend.display, options.scales.y
impl Serialize for ChartOptions {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde_json::json!({
            "responsive": self.responsive,
            "plugins": { "legend": { "display": self.legend_display } },
            "scales": { "y": self.y_axis },
        })
        .serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub surface_id: String,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub options: ChartOptions,
}

impl ChartConfig {
    pub fn line(surface_id: impl Into<String>, labels: Vec<String>, datasets: Vec<Dataset>) -> Self {
        Self {
            surface_id: surface_id.into(),
            kind: ChartKind::Line,
            labels,
            datasets,
            options: ChartOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    /// Number of samples in the longest dataset
    pub fn point_count(&self) -> usize {
        self.datasets.iter().map(|d| d.data.len()).max().unwrap_or(0)
    }
}

impl Serialize for ChartConfig {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde_json::json!({
            "surfaceId": self.surface_id,
            "type": self.kind,
            "data": {
                "labels": self.labels,
                "datasets": self.datasets,
            },
            "options": self.options,
        })
        .serialize(serializer)
    }
}
