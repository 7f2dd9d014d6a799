//! Utility modules for VibeLens

pub mod error;

// Re-export commonly used types
pub use error::{Result, VibeLensError};
