//! CLI library components for datasweep.

pub mod logging;
pub mod pipeline;
pub mod types;
