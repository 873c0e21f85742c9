//! Core data models for cvterm
//!
//! Transcript lines and interpreter session state.

pub mod output_line;
pub mod session;

// Re-exports for convenience
pub use output_line::{LineStyle, OutputLine};
pub use session::SessionState;
