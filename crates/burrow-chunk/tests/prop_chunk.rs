use burrow_chunk::{Chunk, HEIGHT, LENGTH, TILE_COUNT, WIDTH};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = (usize, usize, usize)> {
    (0..WIDTH, 0..LENGTH, 0..HEIGHT)
}

#[test]
fn index_is_unique_and_in_range() {
    let mut seen = vec![false; TILE_COUNT];
    for z in 0..HEIGHT { for y in 0..LENGTH { for x in 0..WIDTH {
        let i = Chunk::index(x, y, z);
        assert!(i < TILE_COUNT);
        assert!(!seen[i]);
        seen[i] = true;
    }}}
    // All indices hit exactly once
    assert!(seen.into_iter().all(|b| b));
}

proptest! {
    // coords inverts index
    #[test]
    fn coords_inverts_index((x, y, z) in coord()) {
        prop_assert_eq!(Chunk::coords(Chunk::index(x, y, z)), (x, y, z));
    }

    // get reads the flat slot that index names
    #[test]
    fn get_matches_flat((x, y, z) in coord(), v in any::<u32>()) {
        let mut c = Chunk::new();
        c.at_mut(Chunk::index(x, y, z)).random = v;
        prop_assert_eq!(c.get(x, y, z).random, v);
        prop_assert_eq!(c.tiles()[Chunk::index(x, y, z)].random, v);
    }

    // writing one tile leaves every other tile untouched
    #[test]
    fn writes_do_not_alias(a in coord(), b in coord()) {
        prop_assume!(a != b);
        let mut c = Chunk::new();
        c.get_mut(a.0, a.1, a.2).value = 0xABCD;
        prop_assert_eq!(c.get(b.0, b.1, b.2).value, 0);
    }
}
