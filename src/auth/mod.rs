mod credentials;
mod resolver;

pub use credentials::*;
pub use resolver::*;
