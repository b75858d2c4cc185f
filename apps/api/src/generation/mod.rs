// Content Generation Engine
// Implements: tone calibration, length presets, article composition, SEO suggestions, export.
// Deterministic templating only — nothing here performs I/O.

pub mod export;
pub mod generator;
pub mod handlers;
pub mod length;
pub mod seo;
pub mod tone;
