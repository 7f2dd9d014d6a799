//! The Analysis Result model and the mocked analysis service
//!
//! The service performs no real image analysis. It returns one fixed result
//! for every request; the uploaded bytes only influence what gets logged.
//! A real analyzer would slot in behind [`AnalysisService::analyze`] without
//! changing the endpoint.

use crate::config::AnalysisConfig;
use crate::core::palette::PaletteColor;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Interior style suggestion derived from the image mood
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interior {
    /// Style label, e.g. "Coastal Minimal"
    pub style: String,
    /// Ordered style keywords
    pub keywords: Vec<String>,
}

/// Informational metadata attached to a result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultMeta {
    /// Simulated analysis latency in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// The structured payload describing a palette, vibe words, caption, and
/// interior style for an image.
///
/// Immutable once produced: built fresh per request, serialized, dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Ordered color palette
    pub palette: Vec<PaletteColor>,
    /// Ordered descriptive words
    pub vibe_words: Vec<String>,
    /// Free-text caption
    pub caption: String,
    /// Interior style suggestion
    pub interior: Interior,
    /// Optional metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResultMeta>,
}

impl AnalysisResult {
    /// Check the palette invariant: every entry's hex and RGB agree
    pub fn palette_is_consistent(&self) -> bool {
        self.palette.iter().all(PaletteColor::is_consistent)
    }
}

/// Mocked analysis service
///
/// Holds the analysis section of the configuration; the simulated latency
/// reported in `meta` comes from there.
#[derive(Debug, Clone)]
pub struct AnalysisService {
    config: AnalysisConfig,
}

impl AnalysisService {
    /// Create a new analysis service
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Produce an analysis result for an uploaded image
    ///
    /// The upload is ignored beyond logging its size; the canned result is
    /// returned unconditionally.
    pub fn analyze(&self, filename: Option<&str>, size: usize) -> AnalysisResult {
        debug!(
            filename = filename.unwrap_or("<none>"),
            size, "Producing mock analysis result"
        );

        let mut result = mock_result();
        result.meta = self
            .config
            .simulated_latency_ms
            .map(|latency_ms| ResultMeta {
                latency_ms: Some(latency_ms),
            });
        result
    }

    /// Analysis configuration in effect
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }
}

/// The fixed result returned for every request
pub fn mock_result() -> AnalysisResult {
    AnalysisResult {
        palette: vec![
            PaletteColor::new([11, 15, 20]),
            PaletteColor::new([29, 43, 58]),
            PaletteColor::new([59, 108, 122]),
            PaletteColor::new([224, 107, 90]),
            PaletteColor::new([242, 180, 109]),
            PaletteColor::new([247, 230, 201]),
        ],
        vibe_words: ["golden hour", "salt air", "soft glow", "calm", "wanderlust"]
            .map(String::from)
            .to_vec(),
        caption: "A quiet sky spilling warmth into the sea.".to_string(),
        interior: Interior {
            style: "Coastal Minimal".to_string(),
            keywords: ["linen textures", "warm neutrals", "brushed brass"]
                .map(String::from)
                .to_vec(),
        },
        meta: Some(ResultMeta {
            latency_ms: Some(120),
        }),
    }
}
