mod rbac_auth;

pub use rbac_auth::*;
