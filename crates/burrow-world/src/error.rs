use thiserror::Error;

/// Ways a generator can fail to come up. Generation itself cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    /// Air, water and bedrock must occupy material ids 0, 1 and 2.
    #[error("material table has {found} entries; air, water and bedrock need ids 0..3")]
    MissingReserved { found: usize },

    #[error("material table has {0} entries; ids are limited to u16")]
    TooManyMaterials(usize),

    #[error("no stone-category material after the reserved entries")]
    NoStone,

    #[error("no soil-category material after the reserved entries")]
    NoSoil,

    #[error("invalid generator config: {0}")]
    InvalidConfig(String),
}
