// Rendering error taxonomy
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("input length mismatch: cpu={cpu}, memory={memory}, timestamps={timestamps}")]
    Validation {
        cpu: usize,
        memory: usize,
        timestamps: usize,
    },

    #[error("display surface not found: {0}")]
    SurfaceNotFound(String),

    /// Failure reported by the charting library, passed through as-is
    #[error(transparent)]
    RenderingLibrary(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_error_is_transparent() {
        let err = RenderError::from(anyhow::anyhow!("canvas context lost"));
        assert_eq!(err.to_string(), "canvas context lost");
    }

    #[test]
    fn test_validation_message() {
        let err = RenderError::Validation {
            cpu: 3,
            memory: 3,
            timestamps: 2,
        };
        assert_eq!(
            err.to_string(),
            "input length mismatch: cpu=3, memory=3, timestamps=2"
        );
    }
}
