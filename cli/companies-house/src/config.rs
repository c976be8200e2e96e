//! Configuration for registry client construction.

use std::time::Duration;

use url::Url;

/// The official Companies House API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.companieshouse.gov.uk";

/// How long a single query may block, connection setup included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Configuration for registry client construction.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Companies House API key; becomes the Basic-Auth username.
    pub api_key: String,
    /// Base URL for the registry API.
    pub base_url: Url,
    /// Per-query timeout.
    pub timeout: Duration,
    /// Skip the advisory notice when a name search matches nothing.
    pub suppress_zero_result_notice: bool,
    /// Optional user agent for outgoing requests.
    pub user_agent: Option<String>,
}

impl RegistryConfig {
    /// Configuration against the official registry endpoint, with the
    /// default timeout and the zero-result notice enabled.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default registry url is valid"),
            timeout: DEFAULT_TIMEOUT,
            suppress_zero_result_notice: false,
            user_agent: None,
        }
    }
}
