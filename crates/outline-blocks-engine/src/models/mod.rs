pub mod block;
pub mod options;

pub use block::*;
pub use options::*;
