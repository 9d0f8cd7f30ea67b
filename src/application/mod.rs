// Application layer - Use cases and collaborator traits
pub mod chart_renderer;
pub mod charting_library;
pub mod dashboard_service;
