//! Fixed-size voxel chunk storage.
#![forbid(unsafe_code)]

use burrow_blocks::TileState;

/// Chunk extent along x.
pub const WIDTH: usize = 32;
/// Chunk extent along y.
pub const LENGTH: usize = 32;
/// Chunk extent along z.
pub const HEIGHT: usize = 62;
/// Tiles in one z layer.
pub const LAYER_SIZE: usize = WIDTH * LENGTH;
/// Total tiles per chunk. Stays below `u16::MAX` so flat indices fit a `u16`.
pub const TILE_COUNT: usize = LAYER_SIZE * HEIGHT;

const _: () = assert!(TILE_COUNT <= u16::MAX as usize);

/// A WIDTH × LENGTH × HEIGHT block of tiles stored z-major.
///
/// Tiles are addressed by `z * LAYER_SIZE + y * WIDTH + x`. Coordinates
/// outside the chunk are a caller bug and panic.
#[derive(Clone, PartialEq, Eq)]
pub struct Chunk {
    tiles: Box<[TileState]>,
}

impl Chunk {
    /// A chunk with every tile at `TileState::default()`.
    pub fn new() -> Self {
        Self {
            tiles: vec![TileState::default(); TILE_COUNT].into_boxed_slice(),
        }
    }

    #[inline]
    pub fn index(x: usize, y: usize, z: usize) -> usize {
        assert!(
            x < WIDTH && y < LENGTH && z < HEIGHT,
            "tile ({x}, {y}, {z}) outside chunk"
        );
        z * LAYER_SIZE + y * WIDTH + x
    }

    /// Inverse of [`Chunk::index`].
    #[inline]
    pub fn coords(idx: usize) -> (usize, usize, usize) {
        assert!(idx < TILE_COUNT, "tile index {idx} outside chunk");
        let z = idx / LAYER_SIZE;
        let rem = idx % LAYER_SIZE;
        (rem % WIDTH, rem / WIDTH, z)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> &TileState {
        &self.tiles[Self::index(x, y, z)]
    }

    /// In-place access; there is no separate setter.
    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize, z: usize) -> &mut TileState {
        &mut self.tiles[Self::index(x, y, z)]
    }

    #[inline]
    pub fn at(&self, idx: usize) -> &TileState {
        &self.tiles[idx]
    }

    #[inline]
    pub fn at_mut(&mut self, idx: usize) -> &mut TileState {
        &mut self.tiles[idx]
    }

    #[inline]
    pub fn tiles(&self) -> &[TileState] {
        &self.tiles
    }

    #[inline]
    pub fn tiles_mut(&mut self) -> &mut [TileState] {
        &mut self.tiles
    }

    /// All tiles at height `z`, row-major in y then x.
    #[inline]
    pub fn layer(&self, z: usize) -> &[TileState] {
        assert!(z < HEIGHT, "layer {z} outside chunk");
        &self.tiles[z * LAYER_SIZE..(z + 1) * LAYER_SIZE]
    }

    /// True when no tile has a block, floor, or liquid.
    pub fn is_all_empty(&self) -> bool {
        self.tiles
            .iter()
            .all(|t| t.block.is_empty() && t.floor.is_empty() && !t.has_liquid())
    }
}

impl Default for Chunk {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chunk")
            .field("width", &WIDTH)
            .field("length", &LENGTH)
            .field("height", &HEIGHT)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burrow_blocks::tile::block;
    use burrow_blocks::{MaterialId, Part};

    #[test]
    fn corners_map_to_ends() {
        assert_eq!(Chunk::index(0, 0, 0), 0);
        assert_eq!(Chunk::index(WIDTH - 1, LENGTH - 1, HEIGHT - 1), TILE_COUNT - 1);
        assert_eq!(Chunk::index(0, 0, 1), LAYER_SIZE);
        assert_eq!(Chunk::index(0, 1, 0), WIDTH);
    }

    #[test]
    fn mutation_through_reference_sticks() {
        let mut c = Chunk::new();
        c.get_mut(3, 4, 5).block = Part::new(block::STONE, MaterialId(3));
        assert_eq!(c.get(3, 4, 5).block.definition, block::STONE);
        assert_eq!(c.at(Chunk::index(3, 4, 5)).block.material, MaterialId(3));
        assert!(!c.is_all_empty());
    }

    #[test]
    fn layer_slices_cover_one_z() {
        let mut c = Chunk::new();
        c.get_mut(WIDTH - 1, LENGTH - 1, 7).value = 9;
        assert_eq!(c.layer(7).len(), LAYER_SIZE);
        assert_eq!(c.layer(7)[LAYER_SIZE - 1].value, 9);
        assert_eq!(c.layer(8)[0].value, 0);
    }

    #[test]
    fn fresh_chunk_is_empty() {
        let c = Chunk::new();
        assert!(c.is_all_empty());
        assert_eq!(c.tiles().len(), TILE_COUNT);
        assert!(c.tiles().iter().all(|t| *t == TileState::default()));
    }

    #[test]
    #[should_panic]
    fn x_past_width_panics() {
        let _ = Chunk::index(WIDTH, 0, 0);
    }

    #[test]
    #[should_panic]
    fn z_past_height_panics() {
        let c = Chunk::new();
        let _ = c.get(0, 0, HEIGHT);
    }
}
