use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::color::Color;

/// Index into a material table.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(pub u16);

/// Largest table `MaterialId` can address: ids 0..=u16::MAX.
pub const MAX_MATERIALS: usize = u16::MAX as usize + 1;

impl MaterialId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Material category; decides how world generation may use a material.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialType {
    Stone,
    Metal,
    Soil,
    Sand,
    Glass,
    Gem,
    Wood,
    Bone,
    Flesh,
    Misc,
}

impl MaterialType {
    pub fn name(self) -> &'static str {
        match self {
            MaterialType::Stone => "stone",
            MaterialType::Metal => "metal",
            MaterialType::Soil => "soil",
            MaterialType::Sand => "sand",
            MaterialType::Glass => "glass",
            MaterialType::Gem => "gem",
            MaterialType::Wood => "wood",
            MaterialType::Bone => "bone",
            MaterialType::Flesh => "flesh",
            MaterialType::Misc => "misc",
        }
    }
}

/// Display properties of a material in one physical state.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Phase {
    pub name: String,
    pub adjective: String,
    pub color: Color,
}

impl Phase {
    pub fn new(name: &str, adjective: &str, color: Color) -> Self {
        Self {
            name: name.to_string(),
            adjective: adjective.to_string(),
            color,
        }
    }

    /// Phase whose adjective is the same word as its name.
    pub fn plain(name: &str, color: Color) -> Self {
        Self::new(name, name, color)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Material {
    #[serde(rename = "type")]
    pub kind: MaterialType,
    pub solid: Phase,
    pub liquid: Phase,
    pub gas: Phase,
}

/// The built-in material table.
///
/// Positions 0, 1 and 2 are air, water and bedrock; world generation resolves
/// those ids positionally and categorizes everything after them.
pub fn default_materials() -> Vec<Material> {
    vec![
        Material {
            kind: MaterialType::Misc,
            solid: Phase::plain("solid air", Color::BrightWhite),
            liquid: Phase::plain("liquid air", Color::BrightWhite),
            gas: Phase::plain("air", Color::BrightWhite),
        },
        Material {
            kind: MaterialType::Stone,
            solid: Phase::plain("ice", Color::BrightCyan),
            liquid: Phase::plain("water", Color::Blue),
            gas: Phase::plain("steam", Color::White),
        },
        Material {
            kind: MaterialType::Stone,
            solid: Phase::plain("bedrock", Color::Black),
            liquid: Phase::plain("magma", Color::BrightOrange),
            gas: Phase::plain("vaporized bedrock", Color::BrightOrange),
        },
        Material {
            kind: MaterialType::Stone,
            solid: Phase::plain("stone", Color::Gray),
            liquid: Phase::plain("lava", Color::Orange),
            gas: Phase::plain("vaporized stone", Color::BrightOrange),
        },
        Material {
            kind: MaterialType::Soil,
            solid: Phase::plain("dirt", Color::Brown),
            liquid: Phase::plain("dirt", Color::Brown),
            gas: Phase::plain("dirt", Color::Brown),
        },
    ]
}

/// Ordered material table loaded from data files.
#[derive(Default, Clone, Debug)]
pub struct MaterialCatalog {
    pub materials: Vec<Material>,
}

impl MaterialCatalog {
    pub fn new() -> Self {
        Self {
            materials: Vec::new(),
        }
    }

    pub fn builtin() -> Self {
        Self {
            materials: default_materials(),
        }
    }

    #[inline]
    pub fn get(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.index())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn into_vec(self) -> Vec<Material> {
        self.materials
    }

    /// Parses `[[materials]]` entries; ids follow file order.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: MaterialsConfig = toml::from_str(toml_str)?;
        Self::from_vec(cfg.materials)
    }

    /// Wraps an ordered table, rejecting one with more than [`MAX_MATERIALS`] entries.
    pub fn from_vec(materials: Vec<Material>) -> Result<Self, Box<dyn Error>> {
        if materials.len() > MAX_MATERIALS {
            return Err(format!("too many materials: {}", materials.len()).into());
        }
        Ok(Self { materials })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

// --- Config ---

#[derive(Deserialize)]
pub struct MaterialsConfig {
    #[serde(default)]
    pub materials: Vec<Material>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_reserves_first_three() {
        let mats = default_materials();
        assert!(mats.len() >= 5);
        assert_eq!(mats[0].gas.name, "air");
        assert_eq!(mats[1].liquid.name, "water");
        assert_eq!(mats[2].solid.name, "bedrock");
        assert_eq!(mats[3].kind, MaterialType::Stone);
        assert_eq!(mats[4].kind, MaterialType::Soil);
    }

    #[test]
    fn catalog_keeps_file_order() {
        let cat = MaterialCatalog::from_toml_str(
            r#"
            [[materials]]
            type = "misc"
            solid = { name = "solid air", adjective = "solid air", color = "bright_white" }
            liquid = { name = "liquid air", adjective = "liquid air", color = "bright_white" }
            gas = { name = "air", adjective = "air", color = "bright_white" }

            [[materials]]
            type = "sand"
            solid = { name = "sand", adjective = "sandy", color = "yellow" }
            liquid = { name = "glass", adjective = "molten glass", color = "bright_orange" }
            gas = { name = "vaporized sand", adjective = "vaporized sand", color = "bright_orange" }
        "#,
        )
        .unwrap();
        assert_eq!(cat.len(), 2);
        assert_eq!(cat.get(MaterialId(0)).unwrap().gas.name, "air");
        let sand = cat.get(MaterialId(1)).unwrap();
        assert_eq!(sand.kind, MaterialType::Sand);
        assert_eq!(sand.solid.adjective, "sandy");
        assert_eq!(sand.solid.color, Color::Yellow);
        assert!(cat.get(MaterialId(2)).is_none());
    }

    #[test]
    fn catalog_holds_every_u16_id() {
        let stone = default_materials()[3].clone();
        let full = MaterialCatalog::from_vec(vec![stone.clone(); MAX_MATERIALS]).unwrap();
        assert!(full.get(MaterialId(u16::MAX)).is_some());
        assert!(MaterialCatalog::from_vec(vec![stone; MAX_MATERIALS + 1]).is_err());
    }

    #[test]
    fn catalog_rejects_unknown_type() {
        let err = MaterialCatalog::from_toml_str(
            r#"
            [[materials]]
            type = "plasma"
            solid = { name = "a", adjective = "a", color = "red" }
            liquid = { name = "a", adjective = "a", color = "red" }
            gas = { name = "a", adjective = "a", color = "red" }
        "#,
        );
        assert!(err.is_err());
    }
}
