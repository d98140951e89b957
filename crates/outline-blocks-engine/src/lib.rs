pub mod io;
pub mod models;
pub mod parsing;
pub mod serializing;

// Re-export key types for easier usage
pub use io::*;
pub use models::*;
pub use parsing::{
    LineRecord, OutlineBuilder, classify_line, normalize, normalize_with, parse_lines,
    parse_lines_with, parse_str,
};
pub use serializing::{Serializer, serialize, to_text};
