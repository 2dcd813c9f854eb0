use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A service account as returned by the SSO backend.
///
/// `id` and `client_id` are both accepted as lookup keys by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAccount {
    pub id: String,
    pub client_id: String,
    /// Creation time in epoch seconds.
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub created_by: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl ServiceAccount {
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created_at, 0)
    }
}

/// Response of create and reset-secret: the account plus its freshly issued
/// secret. The secret is never returned again by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewServiceAccount {
    #[serde(flatten)]
    pub account: ServiceAccount,
    #[serde(default)]
    pub secret: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateServiceAccount {
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_camel_case_payload() {
        let sa: ServiceAccount = serde_json::from_value(json!({
            "id": "1",
            "clientId": "client-1",
            "createdAt": 1_700_000_000,
            "createdBy": "john.doe",
            "name": "ci-runner",
            "description": "CI pipeline"
        }))
        .unwrap();

        assert_eq!(sa.client_id, "client-1");
        assert_eq!(sa.created_by, "john.doe");
        assert_eq!(
            sa.created_at_utc().unwrap().format("%Y-%m-%d").to_string(),
            "2023-11-14"
        );
    }

    #[test]
    fn missing_description_defaults_to_empty() {
        let sa: ServiceAccount = serde_json::from_value(json!({
            "id": "1",
            "clientId": "client-1",
            "name": "ci-runner"
        }))
        .unwrap();
        assert_eq!(sa.description, "");
    }

    #[test]
    fn new_service_account_flattens_account_fields() {
        let created: NewServiceAccount = serde_json::from_value(json!({
            "id": "1",
            "clientId": "new-client-id",
            "name": "New SA",
            "secret": "generated-secret"
        }))
        .unwrap();

        assert_eq!(created.account.client_id, "new-client-id");
        assert_eq!(created.secret, "generated-secret");
        assert!(created.error.is_none());
    }
}
