//! SSO service-accounts API constants.

/// Path appended to the SSO base URL to reach the service-accounts API.
/// The SSO URL is expected to end with a slash, e.g. `https://sso.example.com/auth/`.
pub const SERVICE_ACCOUNTS_PATH: &str = "realms/redhat-external/apis/service_accounts/v1";

/// Sub-path (under a single account) that regenerates its client secret.
pub const RESET_SECRET_SUFFIX: &str = "resetSecret";

/// Default SSO base URL used when neither flag, environment nor config file set one.
pub const DEFAULT_SSO_URL: &str = "https://sso.redhat.com/auth/";

/// Environment variable overriding the SSO base URL.
pub const SSO_ENV: &str = "SACTL_SSO";

/// Environment variable carrying the bearer token.
pub const TOKEN_ENV: &str = "SACTL_TOKEN";
