// Charting collaborator traits - display surfaces and chart construction
use crate::domain::chart::{ChartConfig, ChartKind};
use std::sync::Arc;

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// A rendered document shown on a surface
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub content_type: &'static str,
    pub body: String,
}

impl Frame {
    pub fn svg(body: String) -> Self {
        Self {
            content_type: SVG_CONTENT_TYPE,
            body,
        }
    }
}

/// Point-in-time view of a surface
#[derive(Debug, Clone)]
pub struct SurfaceSnapshot {
    pub surface_id: String,
    /// Number of chart instances drawn onto the surface so far
    pub generation: u64,
    pub frame: Option<Frame>,
}

/// A named drawable region
pub trait Surface: Send + Sync {
    fn id(&self) -> &str;

    /// Width and height in pixels
    fn dimensions(&self) -> (u32, u32);

    /// Replace whatever the surface shows with `frame`, returning the
    /// generation the frame was drawn as
    fn present(&self, frame: Frame) -> anyhow::Result<u64>;

    fn snapshot(&self) -> SurfaceSnapshot;
}

/// Resolves surface identifiers within the current rendering context
pub trait SurfaceProvider: Send + Sync {
    fn surface(&self, id: &str) -> Option<Arc<dyn Surface>>;
}

/// Handle to a chart created by a charting library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartInstance {
    pub id: u64,
    pub surface_id: String,
    pub kind: ChartKind,
    /// Surface generation this chart was presented as
    pub generation: u64,
}

pub trait ChartingLibrary: Send + Sync {
    /// Construct a new chart described by `config` on `surface`
    fn create_chart(&self, surface: &dyn Surface, config: &ChartConfig) -> anyhow::Result<ChartInstance>;
}
