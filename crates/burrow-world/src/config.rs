use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

use burrow_blocks::tile::MAX_LIQUID_DEPTH;
use burrow_chunk::HEIGHT;

use crate::error::GenError;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub layers: Layers,
    #[serde(default)]
    pub surface: Surface,
    #[serde(default)]
    pub caves: Caves,
}

/// Thickness of the base strata. Bedrock and grass are always one layer.
#[derive(Clone, Debug, Deserialize)]
pub struct Layers {
    #[serde(default = "default_stone_layers")]
    pub stone: usize,
    #[serde(default = "default_soil_layers")]
    pub soil: usize,
}
fn default_stone_layers() -> usize {
    30
}
fn default_soil_layers() -> usize {
    2
}
impl Default for Layers {
    fn default() -> Self {
        Self {
            stone: default_stone_layers(),
            soil: default_soil_layers(),
        }
    }
}

impl Layers {
    /// z of the grass layer; the water pocket sits one below it.
    #[inline]
    pub fn grass_z(&self) -> usize {
        1 + self.stone + self.soil
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Surface {
    #[serde(default = "default_surface_persistence")]
    pub persistence: f64,
    #[serde(default = "default_frequency")]
    pub frequency: f64,
    #[serde(default = "default_surface_octaves")]
    pub octaves: u32,
    #[serde(default = "default_water_threshold")]
    pub water_threshold: f64,
    #[serde(default = "default_bare_threshold")]
    pub bare_threshold: f64,
    #[serde(default = "default_water_depth")]
    pub water_depth: u8,
}
fn default_surface_persistence() -> f64 {
    2.0
}
fn default_frequency() -> f64 {
    2.0
}
fn default_surface_octaves() -> u32 {
    3
}
fn default_water_threshold() -> f64 {
    0.35
}
fn default_bare_threshold() -> f64 {
    0.37
}
fn default_water_depth() -> u8 {
    7
}
impl Default for Surface {
    fn default() -> Self {
        Self {
            persistence: default_surface_persistence(),
            frequency: default_frequency(),
            octaves: default_surface_octaves(),
            water_threshold: default_water_threshold(),
            bare_threshold: default_bare_threshold(),
            water_depth: default_water_depth(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Caves {
    #[serde(default = "default_caves_enable")]
    pub enable: bool,
    #[serde(default = "default_cave_layers")]
    pub layers: usize,
    #[serde(default = "default_cave_offset")]
    pub offset: usize,
    #[serde(default = "default_cave_persistence")]
    pub persistence: f64,
    #[serde(default = "default_frequency")]
    pub frequency: f64,
    #[serde(default = "default_cave_octaves")]
    pub octaves: u32,
    #[serde(default = "default_threshold_min")]
    pub threshold_min: f64,
    #[serde(default = "default_threshold_span")]
    pub threshold_span: f64,
    #[serde(default = "default_scale_min")]
    pub scale_min: f64,
    #[serde(default = "default_scale_span")]
    pub scale_span: f64,
    #[serde(default = "default_translate_span")]
    pub translate_span: f64,
}
fn default_caves_enable() -> bool {
    true
}
fn default_cave_layers() -> usize {
    20
}
fn default_cave_offset() -> usize {
    5
}
fn default_cave_persistence() -> f64 {
    1.9
}
fn default_cave_octaves() -> u32 {
    8
}
fn default_threshold_min() -> f64 {
    0.1
}
fn default_threshold_span() -> f64 {
    0.3
}
fn default_scale_min() -> f64 {
    0.5
}
fn default_scale_span() -> f64 {
    1.0
}
fn default_translate_span() -> f64 {
    100.0
}
impl Default for Caves {
    fn default() -> Self {
        Self {
            enable: default_caves_enable(),
            layers: default_cave_layers(),
            offset: default_cave_offset(),
            persistence: default_cave_persistence(),
            frequency: default_frequency(),
            octaves: default_cave_octaves(),
            threshold_min: default_threshold_min(),
            threshold_span: default_threshold_span(),
            scale_min: default_scale_min(),
            scale_span: default_scale_span(),
            translate_span: default_translate_span(),
        }
    }
}

impl Caves {
    /// Number of carved layers actually drawn; zero when disabled.
    #[inline]
    pub fn active_layers(&self) -> usize {
        if self.enable { self.layers } else { 0 }
    }
}

impl GeneratorConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: GeneratorConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Checks that every layer the generator writes lands inside a chunk.
    pub fn validate(&self) -> Result<(), GenError> {
        let grass_z = self.layers.grass_z();
        if grass_z >= HEIGHT {
            return Err(GenError::InvalidConfig(format!(
                "grass layer z={grass_z} does not fit a chunk of height {HEIGHT}"
            )));
        }
        if self.surface.octaves == 0 || self.caves.octaves == 0 {
            return Err(GenError::InvalidConfig("noise needs at least one octave".into()));
        }
        if self.surface.persistence == 0.0 || self.caves.persistence == 0.0 {
            return Err(GenError::InvalidConfig("noise persistence must be non-zero".into()));
        }
        if self.surface.bare_threshold < self.surface.water_threshold {
            return Err(GenError::InvalidConfig(
                "surface.bare_threshold must not be below surface.water_threshold".into(),
            ));
        }
        if !(1..=MAX_LIQUID_DEPTH).contains(&self.surface.water_depth) {
            return Err(GenError::InvalidConfig(format!(
                "surface.water_depth must be in 1..={MAX_LIQUID_DEPTH}"
            )));
        }
        let top = self.caves.offset + self.caves.active_layers();
        if top > HEIGHT {
            return Err(GenError::InvalidConfig(format!(
                "cave layers {}..{top} exceed chunk height {HEIGHT}",
                self.caves.offset
            )));
        }
        let c = &self.caves;
        if c.threshold_span < 0.0 || c.scale_span < 0.0 || c.translate_span < 0.0 {
            return Err(GenError::InvalidConfig("cave spans must be non-negative".into()));
        }
        Ok(())
    }
}

pub fn load_config_from_path(path: &Path) -> Result<GeneratorConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    GeneratorConfig::from_toml_str(&s)
}
