//! Core building blocks: padding parameters and the square layout/paste
//! primitives. These are consumed by the high-level `api` module.
pub mod params;
pub mod processing;
