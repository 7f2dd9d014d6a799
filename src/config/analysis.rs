//! Analysis endpoint configuration

use serde::{Deserialize, Serialize};

/// Configuration for the mocked analysis endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Latency figure reported in `meta.latency_ms`; omit to drop the meta
    /// block from responses
    #[serde(default = "default_simulated_latency")]
    pub simulated_latency_ms: Option<u64>,
    /// Reject uploads whose part content type is present and not `image/*`
    ///
    /// Off by default: the stock endpoint accepts anything, including an
    /// empty body.
    #[serde(default)]
    pub require_image_content_type: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: default_simulated_latency(),
            require_image_content_type: false,
        }
    }
}

impl AnalysisConfig {
    /// Merge analysis configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        if other.simulated_latency_ms != default_simulated_latency() {
            self.simulated_latency_ms = other.simulated_latency_ms;
        }
        if other.require_image_content_type {
            self.require_image_content_type = other.require_image_content_type;
        }
        self
    }
}

fn default_simulated_latency() -> Option<u64> {
    Some(120)
}
