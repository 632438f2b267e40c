use fastnoise_lite::{FastNoiseLite, NoiseType};

/// Multi-octave Perlin field.
///
/// Each octave divides the amplitude by `persistence` and multiplies the
/// sample position by `frequency`.
pub struct NoiseField {
    source: FastNoiseLite,
    persistence: f64,
    frequency: f64,
    octaves: u32,
}

impl NoiseField {
    pub fn new(seed: i32, persistence: f64, frequency: f64, octaves: u32) -> Self {
        let mut source = FastNoiseLite::with_seed(seed);
        source.set_noise_type(Some(NoiseType::Perlin));
        source.set_frequency(Some(1.0));
        Self {
            source,
            persistence,
            frequency,
            octaves,
        }
    }

    pub fn sample(&self, x: f64, y: f64) -> f64 {
        // PERF: one lattice lookup per octave; the cave field runs 8 per tile.
        let mut sum = 0.0_f64;
        let mut amp = 1.0_f64;
        let (mut px, mut py) = (x, y);
        for _ in 0..self.octaves {
            let n = self.source.get_noise_2d(wrap(px), wrap(py));
            sum += f64::from(n) / amp;
            amp *= self.persistence;
            px *= self.frequency;
            py *= self.frequency;
        }
        sum
    }

    /// `sample` mapped from [-1, 1] into [0, 1].
    #[inline]
    pub fn sample01(&self, x: f64, y: f64) -> f64 {
        ((self.sample(x, y) + 1.0) / 2.0).clamp(0.0, 1.0)
    }
}

/// Lattice period applied to every sample position.
///
/// fastnoise floors positions to `i32`, so positions are folded into
/// `[-PERIOD / 2, PERIOD / 2]` first. Folding shifts by whole lattice cells,
/// and positions already inside the range are passed through unchanged.
pub const PERIOD: f64 = 16_777_216.0;

#[inline]
fn wrap(v: f64) -> f64 {
    if v.abs() <= PERIOD / 2.0 {
        return v;
    }
    let folded = v - PERIOD * (v / PERIOD).round();
    // Non-finite input folds to NaN; sample the origin instead.
    if folded.is_finite() { folded } else { 0.0 }
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField")
            .field("persistence", &self.persistence)
            .field("frequency", &self.frequency)
            .field("octaves", &self.octaves)
            .finish_non_exhaustive()
    }
}
