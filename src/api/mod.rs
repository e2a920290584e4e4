//! Lambda event parsing and response envelopes

pub mod helpers;
pub mod parsing;
