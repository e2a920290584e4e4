//! Insert-record Lambda handler

pub mod handler;

// Re-export the main handler for convenience
pub use handler::{InsertServices, handler};
