mod blob;
mod path_set;

pub use blob::*;
pub use path_set::*;
