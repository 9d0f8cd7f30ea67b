// Domain layer - Chart and usage models
pub mod chart;
pub mod error;
pub mod usage;
