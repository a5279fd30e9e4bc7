//! CLI library components for the line-item report renderer.

pub mod input;
pub mod logging;
