//! Multimodal chat Lambda: handler, pipeline steps and reply generation

pub mod handler;
pub mod pipeline;
pub mod reply;

// Re-export the main handler for convenience
pub use handler::{ChatServices, handler};
