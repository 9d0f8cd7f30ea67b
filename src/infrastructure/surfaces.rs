// Display surfaces - In-memory and file-backed implementations
use crate::application::charting_library::{Frame, Surface, SurfaceProvider, SurfaceSnapshot};
use anyhow::Context;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

#[derive(Debug, Default)]
struct SurfaceState {
    generation: u64,
    frame: Option<Frame>,
}

/// Surface that keeps only the most recent frame
#[derive(Debug)]
pub struct MemorySurface {
    id: String,
    dimensions: (u32, u32),
    state: RwLock<SurfaceState>,
}

impl MemorySurface {
    pub fn new(id: impl Into<String>, dimensions: (u32, u32)) -> Self {
        Self {
            id: id.into(),
            dimensions,
            state: RwLock::new(SurfaceState::default()),
        }
    }
}

impl Surface for MemorySurface {
    fn id(&self) -> &str {
        &self.id
    }

    fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    fn present(&self, frame: Frame) -> anyhow::Result<u64> {
        let mut state = self
            .state
            .write()
            .map_err(|_| anyhow::anyhow!("surface {} is poisoned", self.id))?;

        // Last writer wins; the previous instance is dropped, never cleaned up
        if state.frame.is_some() {
            tracing::debug!(
                "Replacing chart instance #{} on surface {}",
                state.generation,
                self.id
            );
        }

        state.generation += 1;
        state.frame = Some(frame);
        Ok(state.generation)
    }

    fn snapshot(&self) -> SurfaceSnapshot {
        let state = self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        SurfaceSnapshot {
            surface_id: self.id.clone(),
            generation: state.generation,
            frame: state.frame.clone(),
        }
    }
}

/// Surface that also writes each frame to `<dir>/<id>.svg`
#[derive(Debug)]
pub struct FileSurface {
    inner: MemorySurface,
    path: PathBuf,
}

impl FileSurface {
    pub fn new(dir: &Path, id: impl Into<String>, dimensions: (u32, u32)) -> Self {
        let inner = MemorySurface::new(id, dimensions);
        let path = dir.join(format!("{}.svg", inner.id));
        Self { inner, path }
    }
}

impl Surface for FileSurface {
    fn id(&self) -> &str {
        self.inner.id()
    }

    fn dimensions(&self) -> (u32, u32) {
        self.inner.dimensions()
    }

    fn present(&self, frame: Frame) -> anyhow::Result<u64> {
        std::fs::write(&self.path, frame.body.as_bytes())
            .with_context(|| format!("Failed to write surface {}", self.path.display()))?;
        self.inner.present(frame)
    }

    fn snapshot(&self) -> SurfaceSnapshot {
        self.inner.snapshot()
    }
}

/// Fixed set of in-memory surfaces
#[derive(Debug, Clone)]
pub struct MemorySurfaceProvider {
    surfaces: HashMap<String, Arc<MemorySurface>>,
}

impl MemorySurfaceProvider {
    pub fn new<I, S>(ids: I, dimensions: (u32, u32)) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let surfaces = ids
            .into_iter()
            .map(|id| {
                let surface = MemorySurface::new(id, dimensions);
                (surface.id.clone(), Arc::new(surface))
            })
            .collect();
        Self { surfaces }
    }
}

impl SurfaceProvider for MemorySurfaceProvider {
    fn surface(&self, id: &str) -> Option<Arc<dyn Surface>> {
        self.surfaces
            .get(id)
            .map(|surface| surface.clone() as Arc<dyn Surface>)
    }
}

/// Fixed set of surfaces backed by SVG files in one directory
#[derive(Debug, Clone)]
pub struct DirectorySurfaceProvider {
    dir: PathBuf,
    surfaces: HashMap<String, Arc<FileSurface>>,
}

impl DirectorySurfaceProvider {
    pub fn new<I, S>(dir: impl Into<PathBuf>, ids: I, dimensions: (u32, u32)) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create surface directory {}", dir.display()))?;

        let surfaces = ids
            .into_iter()
            .map(|id| {
                let surface = FileSurface::new(&dir, id, dimensions);
                (surface.id().to_string(), Arc::new(surface))
            })
            .collect();

        Ok(Self { dir, surfaces })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SurfaceProvider for DirectorySurfaceProvider {
    fn surface(&self, id: &str) -> Option<Arc<dyn Surface>> {
        self.surfaces
            .get(id)
            .map(|surface| surface.clone() as Arc<dyn Surface>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_unknown_surface_is_none() {
        let provider = MemorySurfaceProvider::new(["cpuChart"], (100, 50));
        assert!(provider.surface("cpuChart").is_some());
        assert!(provider.surface("memoryChart").is_none());
    }

    #[test]
    fn test_present_replaces_frame_and_counts_instances() {
        let provider = MemorySurfaceProvider::new(["cpuChart"], (100, 50));
        let surface = provider.surface("cpuChart").unwrap();
        assert_eq!(surface.dimensions(), (100, 50));

        let empty = surface.snapshot();
        assert_eq!(empty.generation, 0);
        assert!(empty.frame.is_none());

        assert_eq!(surface.present(Frame::svg("<svg>first</svg>".to_string())).unwrap(), 1);
        assert_eq!(surface.present(Frame::svg("<svg>second</svg>".to_string())).unwrap(), 2);

        let snapshot = surface.snapshot();
        assert_eq!(snapshot.surface_id, "cpuChart");
        assert_eq!(snapshot.generation, 2);
        assert_eq!(snapshot.frame.unwrap().body, "<svg>second</svg>");
    }

    #[test]
    fn test_provider_clones_share_surfaces() {
        let provider = MemorySurfaceProvider::new(["cpuChart"], (100, 50));
        let clone = provider.clone();

        provider
            .surface("cpuChart")
            .unwrap()
            .present(Frame::svg("<svg/>".to_string()))
            .unwrap();

        assert_eq!(clone.surface("cpuChart").unwrap().snapshot().generation, 1);
    }

    #[test]
    fn test_directory_surface_writes_file() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("charts");
        let provider = DirectorySurfaceProvider::new(&dir, ["memoryChart"], (100, 50)).unwrap();
        assert_eq!(provider.dir(), dir.as_path());

        let surface = provider.surface("memoryChart").unwrap();
        surface.present(Frame::svg("<svg>memory</svg>".to_string())).unwrap();

        let written = std::fs::read_to_string(dir.join("memoryChart.svg")).unwrap();
        assert_eq!(written, "<svg>memory</svg>");
        assert_eq!(surface.snapshot().generation, 1);
    }
}
