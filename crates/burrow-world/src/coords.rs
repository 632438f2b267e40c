use burrow_chunk::{HEIGHT, LENGTH, WIDTH};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChunkCoords {
    pub x: i64,
    pub y: i64,
}

impl ChunkCoords {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for ChunkCoords {
    fn from(value: (i64, i64)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// Inclusive range of chunks the player may walk into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkBounds {
    pub min: ChunkCoords,
    pub max: ChunkCoords,
}

impl ChunkBounds {
    pub const fn new(min: ChunkCoords, max: ChunkCoords) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, c: ChunkCoords) -> bool {
        c.x >= self.min.x && c.x <= self.max.x && c.y >= self.min.y && c.y <= self.max.y
    }
}

impl Default for ChunkBounds {
    /// The 3×3 chunks around the origin.
    fn default() -> Self {
        Self::new(ChunkCoords::new(-1, -1), ChunkCoords::new(1, 1))
    }
}

/// A tile position: in-chunk (x, y, z) plus the chunk it sits in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coords {
    pub x: usize,
    pub y: usize,
    pub z: usize,
    pub chunk: ChunkCoords,
}

impl Coords {
    pub const fn new(x: usize, y: usize, z: usize, chunk: ChunkCoords) -> Self {
        Self { x, y, z, chunk }
    }

    /// Moves one tile along each axis with a non-zero delta.
    ///
    /// Crossing a chunk edge wraps into the neighbour when it is inside
    /// `bounds`; z stops at the chunk floor and ceiling. Deltas are clamped
    /// to -1..=1. Returns whether anything moved.
    pub fn step(&mut self, dx: i32, dy: i32, dz: i32, bounds: &ChunkBounds) -> bool {
        let mut moved = false;

        let (x, cx) = step_axis(self.x, self.chunk.x, dx.signum(), WIDTH);
        let next = ChunkCoords::new(cx, self.chunk.y);
        if (x, cx) != (self.x, self.chunk.x) && bounds.contains(next) {
            self.x = x;
            self.chunk.x = cx;
            moved = true;
        }

        let (y, cy) = step_axis(self.y, self.chunk.y, dy.signum(), LENGTH);
        let next = ChunkCoords::new(self.chunk.x, cy);
        if (y, cy) != (self.y, self.chunk.y) && bounds.contains(next) {
            self.y = y;
            self.chunk.y = cy;
            moved = true;
        }

        match dz.signum() {
            -1 if self.z > 0 => {
                self.z -= 1;
                moved = true;
            }
            1 if self.z + 1 < HEIGHT => {
                self.z += 1;
                moved = true;
            }
            _ => {}
        }

        moved
    }
}

fn step_axis(pos: usize, chunk: i64, d: i32, extent: usize) -> (usize, i64) {
    match d {
        -1 if pos == 0 => (extent - 1, chunk - 1),
        -1 => (pos - 1, chunk),
        1 if pos + 1 == extent => (0, chunk + 1),
        1 => (pos + 1, chunk),
        _ => (pos, chunk),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_inside_a_chunk() {
        let mut c = Coords::new(5, 5, 33, ChunkCoords::default());
        assert!(c.step(1, -1, 0, &ChunkBounds::default()));
        assert_eq!((c.x, c.y, c.z), (6, 4, 33));
    }

    #[test]
    fn wraps_into_neighbour_chunk() {
        let mut c = Coords::new(WIDTH - 1, 0, 0, ChunkCoords::default());
        assert!(c.step(1, -1, 0, &ChunkBounds::default()));
        assert_eq!((c.x, c.y), (0, LENGTH - 1));
        assert_eq!(c.chunk, ChunkCoords::new(1, -1));
    }

    #[test]
    fn stops_at_bounds() {
        let mut c = Coords::new(0, 0, 0, ChunkCoords::new(-1, -1));
        assert!(!c.step(-1, -1, -1, &ChunkBounds::default()));
        assert_eq!(c, Coords::new(0, 0, 0, ChunkCoords::new(-1, -1)));
    }

    #[test]
    fn z_is_clamped_to_chunk() {
        let mut c = Coords::new(0, 0, HEIGHT - 1, ChunkCoords::default());
        assert!(!c.step(0, 0, 1, &ChunkBounds::default()));
        assert!(c.step(0, 0, -1, &ChunkBounds::default()));
        assert_eq!(c.z, HEIGHT - 2);
    }

    #[test]
    fn zero_delta_never_moves() {
        let mut c = Coords::default();
        assert!(!c.step(0, 0, 0, &ChunkBounds::default()));
    }
}
