mod code;
mod codec;
mod style;

pub use code::{CodeBuilder, StoredCode, StoredCodeRecord};
pub use codec::*;
pub use style::{color_from_hex, color_to_hex, EyeShape, ModuleShape, Style, StyleRecord};
