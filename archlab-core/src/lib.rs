//! ArchLab Core — the scenario model: input domain, derivation formulas,
//! presets, and fingerprints.
//!
//! This crate contains everything the dashboards compute from:
//! - Domain types (scenario inputs, operating modes, regions)
//! - The derived-metrics model (one pure function per output field)
//! - Named presets applied as atomic input-vector replacements
//! - Content-addressed scenario fingerprints

pub mod domain;
pub mod fingerprint;
pub mod model;
pub mod presets;
