//! API models for request and response payloads

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod article;
pub mod comment;
pub mod search;

/// Claims decoded from the provider's ID token (or userinfo endpoint)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Subject identifier
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// Every other claim the provider returned
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Identity forwarded to the forum service on every mutation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdentityClaims {
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(rename = "userEmail")]
    pub user_email: Option<String>,
    #[serde(rename = "userNickname")]
    pub user_nickname: Option<String>,
}

impl From<&UserInfo> for IdentityClaims {
    fn from(userinfo: &UserInfo) -> Self {
        Self {
            user_id: userinfo.sub.clone(),
            user_email: userinfo.email.clone(),
            user_nickname: userinfo.nickname.clone(),
        }
    }
}

/// `{message}` result returned by removal mutations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

/// Date range filter, both ends in `dd-mm-yyyy`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodQuery {
    #[serde(rename = "initialDate")]
    pub initial_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
}

impl PeriodQuery {
    pub const DATE_FORMAT: &'static str = "%d-%m-%Y";

    /// Validate both dates; the original strings are what gets forwarded
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [("initialDate", &self.initial_date), ("endDate", &self.end_date)] {
            chrono::NaiveDate::parse_from_str(value, Self::DATE_FORMAT).map_err(|_| {
                format!("{} must be a date in dd-mm-yyyy format, got '{}'", name, value)
            })?;
        }
        Ok(())
    }
}
