use burrow_blocks::tile::{block, floor};
use burrow_blocks::{Part, StateFlags};
use burrow_chunk::{Chunk, LENGTH, WIDTH};

use crate::generator::Generator;

/// Water pockets and bare-dirt edges on the grass layer.
///
/// Below the water threshold the grass tile loses its floor and flags and
/// the soil block under it becomes a full-depth pool. Just above the
/// threshold only the grass is stripped.
pub(super) fn apply_surface(generator: &Generator, chunk: &mut Chunk, cx: i64, cy: i64) {
    let cfg = generator.surface_config();
    let grass_z = generator.grass_z();
    let water_z = grass_z - 1;
    let air = generator.air();
    let water = generator.water();

    for y in 0..LENGTH {
        for x in 0..WIDTH {
            let fx = cx as f64 + x as f64 / WIDTH as f64;
            let fy = cy as f64 + y as f64 / LENGTH as f64;
            let n = generator.surface_noise().sample01(fx, fy);

            if n < cfg.water_threshold {
                let top = chunk.get_mut(x, y, grass_z);
                top.floor = Part::new(floor::EMPTY, air);
                top.flags = StateFlags::NONE;

                let pool = chunk.get_mut(x, y, water_z);
                pool.block = Part::new(block::EMPTY, air);
                pool.set_liquid(cfg.water_depth, water);
            } else if n < cfg.bare_threshold {
                chunk
                    .get_mut(x, y, grass_z)
                    .flags
                    .remove(StateFlags::HAS_GRASS);
            }
        }
    }
}
