//! Materials, tile definitions, and per-voxel tile state.
#![forbid(unsafe_code)]

pub mod color;
pub mod diagnostics;
pub mod material;
pub mod tile;

// Re-exports for convenience
pub use color::Color;
pub use diagnostics::{Diagnostics, LogDiagnostics, NoopDiagnostics};
pub use material::{
    MAX_MATERIALS, Material, MaterialCatalog, MaterialId, MaterialType, Phase, default_materials,
};
pub use tile::{
    Definition, Part, StateFlags, TemplateCache, TileId, TileState, default_definitions,
};
