//! Incremental FNV-1a hashing for stable per-tile randomness.
#![forbid(unsafe_code)]

const PRIME32: u32 = 0x0100_0193;

/// An immutable 32-bit FNV-1a hash value.
///
/// Every chain must start from [`Hash32::INITIAL`]. Each `add_*` call returns a
/// new value, so intermediate hashes can be kept and extended independently:
///
/// ```
/// use burrow_hash::Hash32;
///
/// let base = Hash32::INITIAL.add_i64(3).add_i64(-7);
/// assert_eq!(base.add_u16(10), base.add_u16(10));
/// assert_ne!(base.add_u16(10), base.add_u16(11));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Hash32(u32);

impl Hash32 {
    pub const INITIAL: Hash32 = Hash32(0x811c_9dc5);

    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn add_u8(self, v: u8) -> Hash32 {
        Hash32((self.0 ^ v as u32).wrapping_mul(PRIME32))
    }

    #[inline]
    pub const fn add_i8(self, v: i8) -> Hash32 {
        self.add_u8(v as u8)
    }

    /// Low byte first, then high byte.
    #[inline]
    pub const fn add_u16(self, v: u16) -> Hash32 {
        self.add_u8((v & 0x00FF) as u8).add_u8((v >> 8) as u8)
    }

    #[inline]
    pub const fn add_i16(self, v: i16) -> Hash32 {
        self.add_u16(v as u16)
    }

    /// Four bytes, least significant first.
    #[inline]
    pub const fn add_u32(self, v: u32) -> Hash32 {
        self.add_u8(v as u8)
            .add_u8((v >> 8) as u8)
            .add_u8((v >> 16) as u8)
            .add_u8((v >> 24) as u8)
    }

    #[inline]
    pub const fn add_i32(self, v: i32) -> Hash32 {
        self.add_u32(v as u32)
    }

    /// Low 32 bits, then high 32 bits.
    #[inline]
    pub const fn add_u64(self, v: u64) -> Hash32 {
        self.add_u32(v as u32).add_u32((v >> 32) as u32)
    }

    #[inline]
    pub const fn add_i64(self, v: i64) -> Hash32 {
        self.add_u64(v as u64)
    }
}

impl Default for Hash32 {
    fn default() -> Self {
        Hash32::INITIAL
    }
}

impl From<Hash32> for u32 {
    fn from(h: Hash32) -> Self {
        h.0
    }
}
