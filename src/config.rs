use serde::{Deserialize, Serialize};

/// Number of samples produced when nothing else is requested.
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// How a query x is mapped to the spline segment containing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentLookup {
    /// Binary search over the knots. Queries may come in any order.
    Bisect,
    /// Advancing cursor. Queries must be non-decreasing within one pass.
    #[default]
    Sequential,
}

/// Settings of an evaluation pass over a fitted spline.
///
/// # Example
/// ```
/// use curve_kit::{SamplingConfig, SegmentLookup};
///
/// let config: SamplingConfig = serde_json::from_str(r#"{"sample_count": 20}"#).unwrap();
/// assert_eq!(20, config.sample_count);
/// assert_eq!(SegmentLookup::Sequential, config.lookup);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub sample_count: usize,
    pub lookup: SegmentLookup,
}

impl SamplingConfig {
    pub fn new(sample_count: usize) -> Self {
        SamplingConfig { sample_count, ..Default::default() }
    }

    pub fn with_lookup(mut self, lookup: SegmentLookup) -> Self {
        self.lookup = lookup;
        self
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        SamplingConfig {
            sample_count: DEFAULT_SAMPLE_COUNT,
            lookup: SegmentLookup::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SamplingConfig::default();

        assert_eq!(DEFAULT_SAMPLE_COUNT, config.sample_count);
        assert_eq!(SegmentLookup::Sequential, config.lookup);
    }

    #[test]
    fn builder() {
        let config = SamplingConfig::new(7).with_lookup(SegmentLookup::Bisect);

        assert_eq!(7, config.sample_count);
        assert_eq!(SegmentLookup::Bisect, config.lookup);
    }

    #[test]
    fn deserialize_partial() {
        let config: SamplingConfig = serde_json::from_str(r#"{"lookup": "bisect"}"#).unwrap();

        assert_eq!(DEFAULT_SAMPLE_COUNT, config.sample_count);
        assert_eq!(SegmentLookup::Bisect, config.lookup);
    }

    #[test]
    fn serialize() {
        let json = serde_json::to_string(&SamplingConfig::new(3)).unwrap();

        assert_eq!(r#"{"sample_count":3,"lookup":"sequential"}"#, json);
    }
}
