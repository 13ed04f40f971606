use serde::{Deserialize, Serialize};

/// Merged record rendered on the home page. Built fresh on every
/// authenticated request, never cached.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub display_name: String,
    pub id: String,
    pub email_address: String,
    pub organizations: Vec<String>,
}

// Wire types for the vssps REST endpoints. Unknown fields are ignored.

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRes {
    pub display_name: String,
    pub id: String,
    pub email_address: String,
}

#[derive(Serialize, Deserialize)]
pub struct AccountsRes {
    pub count: i64,
    pub value: Vec<AccountRes>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRes {
    pub account_name: String,
}
