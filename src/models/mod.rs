mod identity;
mod requirement;
mod role;
mod user;

pub use identity::*;
pub use requirement::*;
pub use role::*;
pub use user::*;
