//! Scoring module - tier classification and quality-label bucketing
//!
//! The classifier maps one value onto the four ordered tiers of a catalog
//! entry; the bucketer maps a continuous metric onto an unordered quality
//! label. The engine bundles both with validation and annotation.

mod bucketer;
mod classifier;
mod engine;

pub use bucketer::*;
pub use classifier::*;
pub use engine::*;
