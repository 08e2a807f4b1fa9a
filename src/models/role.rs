use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Named category of user. Closed set; every variant needs a registry entry.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    User,
    Guest,
    Developer,
}

/// Fine-grained capability an operation may require.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Permission {
    ReadUsers,
    WriteUsers,
    DeleteUsers,
    ReadProducts,
    WriteProducts,
    AccessDevTools,
    ViewLogs,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn wire_names_match_serde_and_strum() {
        assert_eq!(Role::Developer.as_ref(), "developer");
        assert_eq!(Permission::AccessDevTools.as_ref(), "access_dev_tools");
        assert_eq!(Permission::from_str("view_logs").unwrap(), Permission::ViewLogs);
        assert_eq!(
            serde_json::to_string(&Permission::WriteProducts).unwrap(),
            "\"write_products\""
        );
        assert_eq!(serde_json::from_str::<Role>("\"admin\"").unwrap(), Role::Admin);
        assert!(Role::from_str("superuser").is_err());
    }
}
