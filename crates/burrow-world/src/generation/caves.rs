use std::f64::consts::TAU;

use rand::Rng;
use rand::distributions::Standard;

use burrow_blocks::Part;
use burrow_blocks::tile::block;
use burrow_chunk::{Chunk, LENGTH, WIDTH};

use crate::config::Caves;
use crate::noise::NoiseField;

use crate::generator::Generator;

/// Per-layer sampling transform for the shared cave noise field.
///
/// Every carved z layer reads the same noise through its own translation,
/// rotation and scale, so neighbouring layers get unrelated cave shapes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaveParams {
    pub threshold: f64,
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub cos_theta: f64,
    pub sin_theta: f64,
}

impl CaveParams {
    /// Draws threshold, scale, angle, then translation x and y, in that order.
    pub fn draw<R: Rng>(rng: &mut R, cfg: &Caves) -> Self {
        let threshold = cfg.threshold_min + rng.sample::<f64, _>(Standard) * cfg.threshold_span;
        let scale = cfg.scale_min + rng.sample::<f64, _>(Standard) * cfg.scale_span;
        let angle = rng.sample::<f64, _>(Standard) * TAU;
        let translate_x = rng.sample::<f64, _>(Standard) * cfg.translate_span;
        let translate_y = rng.sample::<f64, _>(Standard) * cfg.translate_span;
        Self {
            threshold,
            scale,
            translate_x,
            translate_y,
            cos_theta: angle.cos(),
            sin_theta: angle.sin(),
        }
    }

    /// Maps a tile column to cave-noise space: translate, rotate, scale.
    pub fn transform(&self, cx: i64, cy: i64, x: usize, y: usize) -> (f64, f64) {
        let fx = cx as f64 + x as f64 / WIDTH as f64 + self.translate_x;
        let fy = cy as f64 + y as f64 / LENGTH as f64 + self.translate_y;
        let rx = (fx * self.cos_theta - fy * self.sin_theta) * self.scale;
        let ry = (fx * self.sin_theta - fy * self.cos_theta) * self.scale;
        (rx, ry)
    }

    #[inline]
    pub fn is_cave(&self, noise: &NoiseField, cx: i64, cy: i64, x: usize, y: usize) -> bool {
        let (fx, fy) = self.transform(cx, cy, x, y);
        noise.sample01(fx, fy) < self.threshold
    }
}

/// Clears blocks wherever a layer's cave noise dips under its threshold.
/// Floors stay, so carved tiles over solid ground are walkable.
pub(super) fn carve_caves(generator: &Generator, chunk: &mut Chunk, cx: i64, cy: i64) {
    let air = Part::new(block::EMPTY, generator.air());
    let offset = generator.cave_offset();
    for (layer, params) in generator.cave_params().iter().enumerate() {
        let z = offset + layer;
        for y in 0..LENGTH {
            for x in 0..WIDTH {
                if params.is_cave(generator.cave_noise(), cx, cy, x, y) {
                    chunk.get_mut(x, y, z).block = air;
                }
            }
        }
    }
}
