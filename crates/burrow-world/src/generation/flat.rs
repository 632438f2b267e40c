use burrow_blocks::tile::{block, floor};
use burrow_blocks::{Part, StateFlags, TileState};
use burrow_chunk::{Chunk, LAYER_SIZE};
use burrow_hash::Hash32;

use crate::generator::Generator;

/// Stacks bedrock, stone, soil, and a grass layer, leaving the rest empty.
///
/// Every tile's `random` is the coordinate hash extended by that tile's own
/// flat index, never by the previous tile's hash.
pub(super) fn fill_layers(generator: &Generator, chunk: &mut Chunk, cx: i64, cy: i64) {
    let layers = generator.layers();
    let bedrock = generator.bedrock();
    let stone = generator.primary_stone();
    let soil = generator.primary_soil();
    let air = generator.air();

    let bedrock_tile = TileState::new(
        Part::new(block::STONE, bedrock),
        Part::new(floor::STONE, bedrock),
    );
    let stone_tile = TileState::new(
        Part::new(block::STONE, stone),
        Part::new(floor::STONE, stone),
    );
    let dirt_tile = TileState::new(Part::new(block::SOIL, soil), Part::new(floor::SOIL, soil));
    let grass_tile = TileState::new(Part::new(block::EMPTY, air), Part::new(floor::SOIL, soil))
        .with_flags(StateFlags::HAS_GRASS);
    let empty_tile = TileState::new(Part::new(block::EMPTY, air), Part::new(floor::EMPTY, air));

    let stone_top = layers.stone;
    let soil_top = stone_top + layers.soil;
    let grass_z = layers.grass_z();

    let hash = Hash32::INITIAL.add_i64(cx).add_i64(cy);
    for (idx, tile) in chunk.tiles_mut().iter_mut().enumerate() {
        let z = idx / LAYER_SIZE;
        let mut t = if z == 0 {
            bedrock_tile
        } else if z <= stone_top {
            stone_tile
        } else if z <= soil_top {
            dirt_tile
        } else if z == grass_z {
            grass_tile
        } else {
            empty_tile
        };
        t.random = hash.add_u16(idx as u16).value();
        *tile = t;
    }
}
