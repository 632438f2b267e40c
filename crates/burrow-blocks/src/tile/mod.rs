mod definition;
mod state;
mod template;

pub use definition::{Definition, TileId, block, default_definitions, floor};
pub use state::{MAX_LIQUID_DEPTH, Part, StateFlags, TileState};
pub use template::{Template, TemplateCache, TemplateError};
