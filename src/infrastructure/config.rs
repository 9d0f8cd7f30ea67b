use crate::domain::chart::{CPU_SURFACE_ID, MEMORY_SURFACE_ID};
use serde::Deserialize;

const ENV_PREFIX: &str = "USAGE_CHARTS";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub render: RenderSettings,
    pub surfaces: SurfaceSettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 320,
        }
    }
}

impl RenderSettings {
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceBackend {
    #[default]
    Memory,
    Directory,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SurfaceSettings {
    pub backend: SurfaceBackend,
    pub directory: String,
    /// Surfaces that exist in the rendering context
    pub ids: Vec<String>,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            backend: SurfaceBackend::Memory,
            directory: "charts".to_string(),
            ids: vec![CPU_SURFACE_ID.to_string(), MEMORY_SURFACE_ID.to_string()],
        }
    }
}

/// Defaults, then `config/app.*` if present, then `USAGE_CHARTS__*` environment variables
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_from("config/app")
}

fn load_from(file: &str) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(file).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("surfaces.ids")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
