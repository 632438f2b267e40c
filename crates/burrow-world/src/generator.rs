use std::sync::Arc;

use rand::Rng;
use rand::SeedableRng;
use rand::distributions::Standard;
use rand_chacha::ChaCha8Rng;

use burrow_blocks::{
    Diagnostics, MAX_MATERIALS, Material, MaterialId, MaterialType, NoopDiagnostics,
};

use crate::config::{GeneratorConfig, Layers, Surface};
use crate::error::GenError;
use crate::generation::CaveParams;
use crate::noise::NoiseField;

/// Material ids the generator places by role rather than by category.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ReservedMaterials {
    pub air: MaterialId,
    pub water: MaterialId,
    pub bedrock: MaterialId,
}

impl ReservedMaterials {
    /// Air, water and bedrock are ids 0, 1 and 2 of every material table.
    pub fn resolve(materials: &[Material]) -> Result<Self, GenError> {
        if materials.len() < 3 {
            return Err(GenError::MissingReserved {
                found: materials.len(),
            });
        }
        Ok(Self {
            air: MaterialId(0),
            water: MaterialId(1),
            bedrock: MaterialId(2),
        })
    }
}

/// Builds chunks from a seed.
///
/// All randomness is drawn while constructing: after `new` returns the
/// generator is immutable and can be shared across threads.
pub struct Generator {
    seed: i64,
    materials: Vec<Material>,
    reserved: ReservedMaterials,
    stone: Vec<MaterialId>,
    soil: Vec<MaterialId>,
    layers: Layers,
    surface_cfg: Surface,
    surface: NoiseField,
    caves: NoiseField,
    cave_offset: usize,
    cave_params: Vec<CaveParams>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl Generator {
    pub fn new(seed: i64, materials: Vec<Material>) -> Result<Self, GenError> {
        Self::with_config(
            seed,
            materials,
            &GeneratorConfig::default(),
            Arc::new(NoopDiagnostics),
        )
    }

    pub fn with_config(
        seed: i64,
        materials: Vec<Material>,
        cfg: &GeneratorConfig,
        diagnostics: Arc<dyn Diagnostics>,
    ) -> Result<Self, GenError> {
        cfg.validate()?;
        diagnostics.debug(
            "worldgen",
            &format_args!("generator given {} materials", materials.len()),
        );
        if materials.len() > MAX_MATERIALS {
            return Err(GenError::TooManyMaterials(materials.len()));
        }
        let reserved = ReservedMaterials::resolve(&materials)?;

        let mut stone = Vec::new();
        let mut soil = Vec::new();
        for (i, m) in materials.iter().enumerate().skip(3) {
            let id = MaterialId(i as u16);
            match m.kind {
                MaterialType::Stone => {
                    diagnostics.debug("worldgen", &format_args!("using {:?} as a stone", id));
                    stone.push(id);
                }
                MaterialType::Soil => {
                    diagnostics.debug("worldgen", &format_args!("using {:?} as a soil", id));
                    soil.push(id);
                }
                _ => {}
            }
        }
        if stone.is_empty() {
            return Err(GenError::NoStone);
        }
        if soil.is_empty() {
            return Err(GenError::NoSoil);
        }

        // Draw order is fixed: surface seed, cave seed, then each cave layer.
        let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
        let surface = NoiseField::new(
            rng.sample(Standard),
            cfg.surface.persistence,
            cfg.surface.frequency,
            cfg.surface.octaves,
        );
        let caves = NoiseField::new(
            rng.sample(Standard),
            cfg.caves.persistence,
            cfg.caves.frequency,
            cfg.caves.octaves,
        );
        let cave_params: Vec<CaveParams> = (0..cfg.caves.active_layers())
            .map(|_| CaveParams::draw(&mut rng, &cfg.caves))
            .collect();
        for (i, p) in cave_params.iter().enumerate() {
            diagnostics.debug(
                "worldgen",
                &format_args!(
                    "cave params z={} threshold={:.5} scale={:.5} cos={:.5} sin={:.5} translate=({:.3}, {:.3})",
                    i + cfg.caves.offset,
                    p.threshold,
                    p.scale,
                    p.cos_theta,
                    p.sin_theta,
                    p.translate_x,
                    p.translate_y
                ),
            );
        }

        Ok(Self {
            seed,
            materials,
            reserved,
            stone,
            soil,
            layers: cfg.layers.clone(),
            surface_cfg: cfg.surface.clone(),
            surface,
            caves,
            cave_offset: cfg.caves.offset,
            cave_params,
            diagnostics,
        })
    }

    #[inline]
    pub fn seed(&self) -> i64 {
        self.seed
    }

    #[inline]
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    #[inline]
    pub fn air(&self) -> MaterialId {
        self.reserved.air
    }

    #[inline]
    pub fn water(&self) -> MaterialId {
        self.reserved.water
    }

    #[inline]
    pub fn bedrock(&self) -> MaterialId {
        self.reserved.bedrock
    }

    /// Stone-category ids past the reserved entries, in table order.
    #[inline]
    pub fn stone(&self) -> &[MaterialId] {
        &self.stone
    }

    /// Soil-category ids past the reserved entries, in table order.
    #[inline]
    pub fn soil(&self) -> &[MaterialId] {
        &self.soil
    }

    #[inline]
    pub fn primary_stone(&self) -> MaterialId {
        self.stone[0]
    }

    #[inline]
    pub fn primary_soil(&self) -> MaterialId {
        self.soil[0]
    }

    #[inline]
    pub fn layers(&self) -> &Layers {
        &self.layers
    }

    #[inline]
    pub fn grass_z(&self) -> usize {
        self.layers.grass_z()
    }

    #[inline]
    pub fn surface_config(&self) -> &Surface {
        &self.surface_cfg
    }

    #[inline]
    pub fn surface_noise(&self) -> &NoiseField {
        &self.surface
    }

    #[inline]
    pub fn cave_noise(&self) -> &NoiseField {
        &self.caves
    }

    #[inline]
    pub fn cave_offset(&self) -> usize {
        self.cave_offset
    }

    /// One entry per carved layer, starting at z = `cave_offset()`.
    #[inline]
    pub fn cave_params(&self) -> &[CaveParams] {
        &self.cave_params
    }

    #[inline]
    pub(crate) fn diagnostics(&self) -> &dyn Diagnostics {
        self.diagnostics.as_ref()
    }
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("seed", &self.seed)
            .field("materials", &self.materials.len())
            .field("reserved", &self.reserved)
            .field("stone", &self.stone)
            .field("soil", &self.soil)
            .field("cave_layers", &self.cave_params.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burrow_blocks::default_materials;

    #[test]
    fn categorizes_past_reserved() {
        let g = Generator::new(1, default_materials()).unwrap();
        assert_eq!(g.stone(), &[MaterialId(3)]);
        assert_eq!(g.soil(), &[MaterialId(4)]);
        assert_eq!(g.air(), MaterialId(0));
        assert_eq!(g.water(), MaterialId(1));
        assert_eq!(g.bedrock(), MaterialId(2));
        assert_eq!(g.cave_params().len(), 20);
        assert_eq!(g.cave_offset(), 5);
    }

    #[test]
    fn reserved_ids_are_not_categorized() {
        // Water and bedrock are stone-category but must not become primary stone.
        let g = Generator::new(1, default_materials()).unwrap();
        assert!(!g.stone().contains(&MaterialId(1)));
        assert!(!g.stone().contains(&MaterialId(2)));
    }

    #[test]
    fn short_table_is_rejected() {
        let mut mats = default_materials();
        mats.truncate(2);
        assert_eq!(
            Generator::new(1, mats).unwrap_err(),
            GenError::MissingReserved { found: 2 }
        );
    }

    #[test]
    fn missing_categories_are_rejected() {
        let mut mats = default_materials();
        mats.truncate(4);
        assert_eq!(Generator::new(1, mats).unwrap_err(), GenError::NoSoil);

        let mut mats = default_materials();
        mats.remove(3);
        assert_eq!(Generator::new(1, mats).unwrap_err(), GenError::NoStone);
    }

    #[test]
    fn table_limit_matches_id_range() {
        let mut mats = default_materials();
        let stone = mats[3].clone();
        mats.resize(MAX_MATERIALS, stone.clone());
        let g = Generator::new(1, mats.clone()).unwrap();
        assert_eq!(g.materials().len(), MAX_MATERIALS);

        mats.push(stone);
        assert_eq!(
            Generator::new(1, mats).unwrap_err(),
            GenError::TooManyMaterials(MAX_MATERIALS + 1)
        );
    }

    #[test]
    fn same_seed_same_cave_params() {
        let a = Generator::new(42, default_materials()).unwrap();
        let b = Generator::new(42, default_materials()).unwrap();
        let c = Generator::new(43, default_materials()).unwrap();
        assert_eq!(a.cave_params(), b.cave_params());
        assert_ne!(a.cave_params(), c.cave_params());
    }

    #[test]
    fn disabled_caves_draw_no_params() {
        let mut cfg = GeneratorConfig::default();
        cfg.caves.enable = false;
        let g = Generator::with_config(3, default_materials(), &cfg, Arc::new(NoopDiagnostics))
            .unwrap();
        assert!(g.cave_params().is_empty());
    }

    #[test]
    fn generator_is_shareable() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<Generator>();
    }
}
