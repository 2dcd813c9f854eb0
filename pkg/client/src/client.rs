use pkg_constants::api::{RESET_SECRET_SUFFIX, SERVICE_ACCOUNTS_PATH};
use pkg_types::page::ServiceAccountPage;
use pkg_types::query::ListQuery;
use pkg_types::service_account::{CreateServiceAccount, NewServiceAccount, ServiceAccount};
use pkg_types::validate::{validate_description, validate_name};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{ClientError, Result};
use crate::query::{QueryOptions, build_query_params};

/// Service-accounts API client bound to one SSO instance and bearer token.
///
/// The token and SSO URL are explicit inputs; nothing is read from ambient
/// state. Every method issues exactly one request.
#[derive(Debug, Clone)]
pub struct ServiceAccountsClient {
    http: Client,
    base_url: String,
    token: String,
}

impl ServiceAccountsClient {
    pub fn new(sso: &str, token: impl Into<String>) -> Result<Self> {
        let http = Client::builder().build()?;
        Ok(Self::with_http_client(http, sso, token))
    }

    /// Use a preconfigured `reqwest::Client` (timeouts, proxies, TLS).
    pub fn with_http_client(http: Client, sso: &str, token: impl Into<String>) -> Self {
        Self {
            http,
            base_url: service_accounts_url(sso),
            token: token.into(),
        }
    }

    /// `{sso}realms/redhat-external/apis/service_accounts/v1`
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one page and work out whether another follows.
    ///
    /// Requests `per_page + 1` items starting at `(page - 1) * per_page`. If
    /// the surplus item comes back, `has_more` is set and it is dropped.
    pub async fn fetch_service_accounts(&self, query: &ListQuery) -> Result<ServiceAccountPage> {
        let window = query.window;
        let params = build_query_params(&QueryOptions {
            first: window.first(),
            max: window.probe_max(),
            order_by: query.order_by,
            sort_order: query.sort_order,
            filters: Some(&query.filters),
        });
        let url = format!("{}?{}", self.base_url, params);

        debug!(
            "Listing service accounts: page={} per_page={}",
            window.page(),
            window.per_page()
        );
        let resp = self.authorized(self.http.get(&url)).send().await?;
        let resp = ensure_success(resp)?;

        let body: Value = serde_json::from_slice(&resp.bytes().await?)?;
        if !body.is_array() {
            warn!("Service accounts list returned a non-array body");
            return Err(ClientError::UnexpectedShape);
        }
        let items: Vec<ServiceAccount> = serde_json::from_value(body)?;
        let fetched = items.len();

        let page = ServiceAccountPage::from_probe(items, window.per_page());
        debug!(
            "Fetched {} service accounts (showing {}, has_more={})",
            fetched,
            page.len(),
            page.has_more
        );
        Ok(page)
    }

    /// Look up a single account by `id` or `clientId`.
    pub async fn fetch_service_account(&self, id: &str) -> Result<ServiceAccount> {
        let url = self.account_url(id);
        let resp = self.authorized(self.http.get(&url)).send().await?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound { id: id.to_string() });
        }
        let resp = ensure_success(resp)?;
        Ok(serde_json::from_slice(&resp.bytes().await?)?)
    }

    /// Create an account. The returned secret is shown once and never again.
    pub async fn create_service_account(
        &self,
        name: &str,
        description: &str,
    ) -> Result<NewServiceAccount> {
        validate_name(name)?;
        validate_description(description)?;

        let body = CreateServiceAccount {
            name: name.trim().to_string(),
            description: description.trim().to_string(),
        };
        let resp = self
            .authorized(self.http.post(&self.base_url))
            .json(&body)
            .send()
            .await?;
        let resp = ensure_success(resp)?;

        let created = parse_new_service_account(resp).await?;
        info!(
            "Created service account {} ({})",
            created.account.name, created.account.client_id
        );
        Ok(created)
    }

    pub async fn delete_service_account(&self, id: &str) -> Result<()> {
        let url = self.account_url(id);
        let resp = self
            .authorized(self.http.delete(&url))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;
        ensure_success(resp)?;
        info!("Deleted service account {}", id);
        Ok(())
    }

    /// Issue a new secret for `id`; the previous one stops working.
    pub async fn reset_service_account_secret(&self, id: &str) -> Result<NewServiceAccount> {
        let url = format!("{}/{}", self.account_url(id), RESET_SECRET_SUFFIX);
        let resp = self
            .authorized(self.http.post(&url))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;
        let resp = ensure_success(resp)?;

        let reset = parse_new_service_account(resp).await?;
        info!("Reset secret of service account {}", id);
        Ok(reset)
    }

    fn account_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(id))
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.bearer_auth(&self.token)
    }
}

/// Join the SSO base URL and the API path, tolerating a missing trailing slash.
fn service_accounts_url(sso: &str) -> String {
    if sso.ends_with('/') {
        format!("{}{}", sso, SERVICE_ACCOUNTS_PATH)
    } else {
        format!("{}/{}", sso, SERVICE_ACCOUNTS_PATH)
    }
}

fn ensure_success(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        warn!("Service accounts API {} returned {}", resp.url().path(), status);
        Err(ClientError::Status { status })
    }
}

/// Error payloads may lack the account fields, so `error` is checked before
/// the body is decoded.
async fn parse_new_service_account(resp: Response) -> Result<NewServiceAccount> {
    let body: Value = serde_json::from_slice(&resp.bytes().await?)?;
    if let Some(error) = body.get("error").and_then(Value::as_str) {
        return Err(ClientError::Rejected {
            error: error.to_string(),
            description: body
                .get("error_description")
                .and_then(Value::as_str)
                .map(str::to_string),
        });
    }
    Ok(serde_json::from_value(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_appends_api_path() {
        assert_eq!(
            service_accounts_url("https://sso.example.com/auth/"),
            "https://sso.example.com/auth/realms/redhat-external/apis/service_accounts/v1"
        );
        assert_eq!(
            service_accounts_url("https://sso.example.com/auth"),
            "https://sso.example.com/auth/realms/redhat-external/apis/service_accounts/v1"
        );
    }

    #[test]
    fn account_ids_are_path_encoded() {
        let client = ServiceAccountsClient::with_http_client(
            Client::new(),
            "https://sso.example.com/auth/",
            "t",
        );
        assert_eq!(
            client.account_url("a b/c"),
            "https://sso.example.com/auth/realms/redhat-external/apis/service_accounts/v1/a%20b%2Fc"
        );
    }
}
