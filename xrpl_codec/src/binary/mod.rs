mod reader;
mod writer;

pub use reader::*;
pub use writer::*;
