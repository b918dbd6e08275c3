pub mod color;
pub mod defaults;
pub mod settings;

pub use color::{parse_hex_color, CardColor};
pub use settings::{parse_spacing, resolve_color, resolve_spacing, RenderConfig};
