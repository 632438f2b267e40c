mod caves;
mod flat;
mod surface;

use rayon::prelude::*;

use burrow_chunk::Chunk;

use crate::coords::ChunkCoords;
use crate::generator::Generator;

pub use self::caves::CaveParams;
use self::caves::carve_caves;
use self::flat::fill_layers;
use self::surface::apply_surface;

impl Generator {
    /// The layered base terrain with no noise applied.
    pub fn flat(&self, cx: i64, cy: i64) -> Chunk {
        let mut chunk = Chunk::new();
        fill_layers(self, &mut chunk, cx, cy);
        chunk
    }

    /// Full chunk: base layers, then the surface pass, then cave carving.
    ///
    /// The result depends only on the generator's seed and config and on
    /// `(cx, cy)`. Every `i64` coordinate is valid; noise positions beyond
    /// [`crate::noise::PERIOD`] / 2 fold back, so far terrain repeats rather
    /// than degrading.
    pub fn generate(&self, cx: i64, cy: i64) -> Chunk {
        let mut chunk = self.flat(cx, cy);
        apply_surface(self, &mut chunk, cx, cy);
        carve_caves(self, &mut chunk, cx, cy);
        self.diagnostics()
            .debug("worldgen", &format_args!("generated chunk ({cx}, {cy})"));
        chunk
    }

    /// Generates each chunk on the rayon pool; output order matches `coords`.
    pub fn generate_many(&self, coords: &[ChunkCoords]) -> Vec<Chunk> {
        coords
            .par_iter()
            .map(|c| self.generate(c.x, c.y))
            .collect()
    }
}
