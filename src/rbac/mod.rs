mod guard;
mod registry;

pub use guard::*;
pub use registry::*;
