//! Seeded chunk generation: layered terrain, surface water, and caves.
#![forbid(unsafe_code)]

pub mod config;
pub mod coords;
pub mod error;
pub mod generation;
pub mod generator;
pub mod noise;

pub use burrow_blocks::{Diagnostics, LogDiagnostics, NoopDiagnostics};
pub use config::{GeneratorConfig, load_config_from_path};
pub use coords::{ChunkBounds, ChunkCoords, Coords};
pub use error::GenError;
pub use generation::CaveParams;
pub use generator::{Generator, ReservedMaterials};
pub use noise::NoiseField;
