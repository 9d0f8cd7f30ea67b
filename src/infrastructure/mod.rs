// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod http_response;
pub mod plotters_library;
pub mod spline;
pub mod surfaces;
