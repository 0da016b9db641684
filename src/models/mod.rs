pub mod modes;
pub mod profile;

pub use modes::{EightDot, OutputFormat, Oversize, Undersize};
pub use profile::{parse_color, parse_palette_arg, ConvertProfile};
