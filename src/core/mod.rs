//! Core functionality for VibeLens
//!
//! This module contains the analysis domain model and the mocked analysis
//! service.

pub mod analysis;
pub mod palette;

// Re-export commonly used types
pub use analysis::{mock_result, AnalysisResult, AnalysisService, Interior, ResultMeta};
pub use palette::PaletteColor;
