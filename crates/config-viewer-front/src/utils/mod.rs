pub mod format;
pub mod liveness;

pub use format::*;
pub use liveness::*;
