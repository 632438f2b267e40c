/// Index into a block or floor definition list.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u16);

impl TileId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Block definition ids, matching the order of [`default_definitions`].
pub mod block {
    use super::TileId;

    pub const EMPTY: TileId = TileId(0);
    pub const STONE: TileId = TileId(1);
    pub const SOIL: TileId = TileId(2);
    pub const ROUGH_WALL: TileId = TileId(3);
    pub const SMOOTH_WALL: TileId = TileId(4);
}

/// Floor definition ids, matching the order of [`default_definitions`].
pub mod floor {
    use super::TileId;

    pub const EMPTY: TileId = TileId(0);
    pub const STONE: TileId = TileId(1);
    pub const SOIL: TileId = TileId(2);
    pub const ROUGH: TileId = TileId(3);
    pub const SMOOTH: TileId = TileId(4);
}

/// Static description of a block or floor type.
///
/// `name` is a template; see [`crate::tile::Template`] for the placeholder
/// syntax. Compiled forms live in a [`crate::tile::TemplateCache`] keyed by
/// `id`, so ids must be unique across every list sharing a cache.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Definition {
    pub id: String,
    pub name: String,
}

impl Definition {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// Default block and floor definitions, in that order.
pub fn default_definitions() -> (Vec<Definition>, Vec<Definition>) {
    let blocks = vec![
        Definition::new("block-empty", "empty"),
        Definition::new("block-stone", "{{.Solid.Name}}"),
        Definition::new("block-soil", "{{.Solid.Name}}"),
        Definition::new("block-wall-rough", "rough {{.Solid.Adjective}} wall"),
        Definition::new("block-wall-smooth", "smooth {{.Solid.Adjective}} wall"),
    ];
    let floors = vec![
        Definition::new("floor-empty", "empty"),
        Definition::new("floor-stone", "{{.Solid.Name}}"),
        Definition::new("floor-soil", "{{.Solid.Name}}"),
        Definition::new("floor-rough", "rough {{.Solid.Adjective}} floor"),
        Definition::new("floor-smooth", "smooth {{.Solid.Adjective}} floor"),
    ];
    (blocks, floors)
}
