// Usage sample domain model
use super::error::RenderError;
use serde::Deserialize;

/// CPU and memory percentages paired by position with timestamp labels
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsageSamples {
    #[serde(default)]
    pub cpu: Vec<f64>,
    #[serde(default)]
    pub memory: Vec<f64>,
    #[serde(default)]
    pub timestamps: Vec<String>,
}

impl UsageSamples {
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

/// All three sequences must have the same length. Sample values are not range-checked.
pub fn validate_lengths(cpu: &[f64], memory: &[f64], timestamps: &[String]) -> Result<(), RenderError> {
    if cpu.len() == timestamps.len() && memory.len() == timestamps.len() {
        Ok(())
    } else {
        Err(RenderError::Validation {
            cpu: cpu.len(),
            memory: memory.len(),
            timestamps: timestamps.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("t{}", i)).collect()
    }

    #[test]
    fn test_equal_lengths_pass() {
        assert!(validate_lengths(&[10.0, 20.0], &[40.0, 50.0], &labels(2)).is_ok());
    }

    #[test]
    fn test_empty_is_valid() {
        let samples = UsageSamples::default();
        assert!(samples.is_empty());
        assert!(validate_lengths(&samples.cpu, &samples.memory, &samples.timestamps).is_ok());
    }

    #[test]
    fn test_out_of_range_values_are_not_rejected() {
        assert!(validate_lengths(&[150.0], &[-5.0], &labels(1)).is_ok());
    }

    #[test]
    fn test_mismatch_reports_all_lengths() {
        let err = validate_lengths(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], &labels(2)).unwrap_err();
        match err {
            RenderError::Validation {
                cpu,
                memory,
                timestamps,
            } => {
                assert_eq!((cpu, memory, timestamps), (3, 3, 2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_deserialize_missing_fields_default_to_empty() {
        let samples: UsageSamples = serde_json::from_str(r#"{"cpu": [1.5], "timestamps": ["t0"]}"#).unwrap();
        assert_eq!(samples.cpu, vec![1.5]);
        assert!(samples.memory.is_empty());
        assert_eq!(samples.len(), 1);
        assert!(validate_lengths(&samples.cpu, &samples.memory, &samples.timestamps).is_err());
    }
}
