use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use super::definition::{Definition, TileId};
use super::template::TemplateCache;
use crate::material::{Material, MaterialId};

pub const MAX_LIQUID_DEPTH: u8 = 7;

/// One material-bearing part of a tile: which definition, made of what.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Part {
    pub definition: TileId,
    pub material: MaterialId,
}

impl Part {
    #[inline]
    pub const fn new(definition: TileId, material: MaterialId) -> Self {
        Self {
            definition,
            material,
        }
    }

    /// Definition id 0 is the empty block/floor in both lists.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.definition == TileId(0)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StateFlags(pub u16);

impl StateFlags {
    pub const NONE: StateFlags = StateFlags(0);
    pub const HAS_GRASS: StateFlags = StateFlags(1 << 0);

    #[inline]
    pub const fn contains(self, other: StateFlags) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn insert(&mut self, other: StateFlags) {
        self.0 |= other.0;
    }

    #[inline]
    pub fn remove(&mut self, other: StateFlags) {
        self.0 &= !other.0;
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for StateFlags {
    type Output = StateFlags;
    fn bitor(self, rhs: StateFlags) -> StateFlags {
        StateFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for StateFlags {
    fn bitor_assign(&mut self, rhs: StateFlags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for StateFlags {
    type Output = StateFlags;
    fn bitand(self, rhs: StateFlags) -> StateFlags {
        StateFlags(self.0 & rhs.0)
    }
}

impl Not for StateFlags {
    type Output = StateFlags;
    fn not(self) -> StateFlags {
        StateFlags(!self.0)
    }
}

/// Mutable state of a single voxel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TileState {
    pub block: Part,
    pub floor: Part,
    pub flags: StateFlags,
    /// Packed hint for the renderer; opaque to the world layer.
    pub value: u16,
    /// Liquid depth, 0..=MAX_LIQUID_DEPTH.
    pub liquid: u8,
    pub liquid_material: MaterialId,
    pub random: u32,
}

impl TileState {
    #[inline]
    pub const fn new(block: Part, floor: Part) -> Self {
        Self {
            block,
            floor,
            flags: StateFlags::NONE,
            value: 0,
            liquid: 0,
            liquid_material: MaterialId(0),
            random: 0,
        }
    }

    #[inline]
    pub const fn with_flags(mut self, flags: StateFlags) -> Self {
        self.flags = flags;
        self
    }

    #[inline]
    pub fn has_grass(&self) -> bool {
        self.flags.contains(StateFlags::HAS_GRASS)
    }

    #[inline]
    pub fn has_liquid(&self) -> bool {
        self.liquid > 0
    }

    /// Depth is capped at [`MAX_LIQUID_DEPTH`].
    #[inline]
    pub fn set_liquid(&mut self, depth: u8, material: MaterialId) {
        self.liquid = depth.min(MAX_LIQUID_DEPTH);
        self.liquid_material = material;
    }

    /// Human-readable name for a status line.
    ///
    /// Liquid hides grass, and grass hides whatever block or floor is still
    /// recorded underneath it.
    pub fn describe(
        &self,
        blocks: &[Definition],
        floors: &[Definition],
        materials: &[Material],
        names: &TemplateCache,
    ) -> String {
        if self.has_liquid() {
            return match materials.get(self.liquid_material.index()) {
                Some(m) => m.liquid.name.clone(),
                None => "unknown".to_string(),
            };
        }
        if self.has_grass() {
            return "grass".to_string();
        }
        if !self.block.is_empty() {
            return part_name(self.block, blocks, materials, names);
        }
        if !self.floor.is_empty() {
            return part_name(self.floor, floors, materials, names);
        }
        "empty".to_string()
    }
}

fn part_name(
    part: Part,
    defs: &[Definition],
    materials: &[Material],
    names: &TemplateCache,
) -> String {
    match (
        defs.get(part.definition.index()),
        materials.get(part.material.index()),
    ) {
        (Some(def), Some(mat)) => names.name(def, mat),
        _ => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::default_materials;
    use crate::tile::definition::{block, default_definitions, floor};

    const AIR: MaterialId = MaterialId(0);
    const WATER: MaterialId = MaterialId(1);
    const STONE: MaterialId = MaterialId(3);
    const DIRT: MaterialId = MaterialId(4);

    fn describe(t: &TileState) -> String {
        let (blocks, floors) = default_definitions();
        let mats = default_materials();
        t.describe(&blocks, &floors, &mats, &TemplateCache::new())
    }

    #[test]
    fn liquid_beats_grass() {
        let mut t = TileState::new(Part::new(block::EMPTY, AIR), Part::new(floor::SOIL, DIRT))
            .with_flags(StateFlags::HAS_GRASS);
        t.set_liquid(3, WATER);
        assert_eq!(describe(&t), "water");
    }

    #[test]
    fn grass_hides_block_and_floor() {
        let t = TileState::new(Part::new(block::STONE, STONE), Part::new(floor::SOIL, DIRT))
            .with_flags(StateFlags::HAS_GRASS);
        assert_eq!(describe(&t), "grass");
    }

    #[test]
    fn block_then_floor_then_empty() {
        let walled = TileState::new(
            Part::new(block::ROUGH_WALL, STONE),
            Part::new(floor::SMOOTH, DIRT),
        );
        assert_eq!(describe(&walled), "rough stone wall");

        let floored = TileState::new(Part::new(block::EMPTY, AIR), Part::new(floor::SMOOTH, DIRT));
        assert_eq!(describe(&floored), "smooth dirt floor");

        let empty = TileState::new(Part::new(block::EMPTY, AIR), Part::new(floor::EMPTY, AIR));
        assert_eq!(describe(&empty), "empty");
    }

    #[test]
    fn dangling_ids_describe_as_unknown() {
        let t = TileState::new(Part::new(TileId(99), STONE), Part::default());
        assert_eq!(describe(&t), "unknown");
        let mut wet = TileState::default();
        wet.set_liquid(1, MaterialId(500));
        assert_eq!(describe(&wet), "unknown");
    }

    #[test]
    fn liquid_depth_is_capped() {
        let mut t = TileState::default();
        t.set_liquid(200, WATER);
        assert_eq!(t.liquid, MAX_LIQUID_DEPTH);
    }

    #[test]
    fn flag_ops() {
        let mut f = StateFlags::NONE;
        assert!(f.is_empty());
        f.insert(StateFlags::HAS_GRASS);
        assert!(f.contains(StateFlags::HAS_GRASS));
        f.remove(StateFlags::HAS_GRASS);
        assert!(!f.contains(StateFlags::HAS_GRASS));
        assert_eq!(StateFlags(0b10) | StateFlags::HAS_GRASS, StateFlags(0b11));
        assert_eq!(StateFlags(0b11) & !StateFlags::HAS_GRASS, StateFlags(0b10));
    }
}
