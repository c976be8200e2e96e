//! Query clients for the Companies House registry.

use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::Client as HttpClient;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::RegistryConfig;
use crate::endpoints;
use crate::error::RegistryError;
use crate::interpret;
use crate::notice::{LogNoticeSink, NoticeSink, ZeroResultNotice};
use crate::request::{self, RequestOptions};
use crate::types::{EntityKind, QueryMode, QueryResult};

const NO_EXTRAS: RequestOptions = RequestOptions::new();

/// A client for the registry API.
///
/// Holds the blocking HTTP client and the authorization options derived
/// from the API key. Each query runs the full pipeline and returns a
/// fully-populated, immutable query value; on failure no partial state
/// escapes.
pub struct RegistryClient {
    http: HttpClient,
    auth: RequestOptions,
    config: RegistryConfig,
    notices: Arc<dyn NoticeSink>,
}

impl Debug for RegistryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryClient")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

impl RegistryClient {
    /// Create a new registry client from configuration.
    pub fn new(config: RegistryConfig) -> Result<Self, RegistryError> {
        let mut builder = HttpClient::builder();
        if let Some(ref user_agent) = config.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let http = builder.build().map_err(RegistryError::Client)?;
        let auth = request::auth_options(&config.api_key);

        debug!(base_url = %config.base_url, "constructed registry client");
        Ok(Self {
            http,
            auth,
            config,
            notices: Arc::new(LogNoticeSink),
        })
    }

    /// Replace the sink receiving advisory notices.
    pub fn with_notice_sink(mut self, notices: Arc<dyn NoticeSink>) -> Self {
        self.notices = notices;
        self
    }

    /// Look up one company by its number, or search for candidates by name.
    ///
    /// A name search that matches nothing is a valid empty result; unless
    /// suppressed by configuration it also emits an advisory notice
    /// through the notice sink. An identifier lookup for a missing company
    /// fails at the transport layer instead (the registry answers 404).
    pub fn company(&self, term: &str, mode: QueryMode) -> Result<CompanyQuery, RegistryError> {
        let (raw, result) = self.run(QuerySpec {
            kind: EntityKind::Company,
            mode,
            term,
            extras: &NO_EXTRAS,
            timeout: self.config.timeout,
        })?;

        if let QueryResult::Candidates(ref candidates) = result {
            if candidates.is_empty() && !self.config.suppress_zero_result_notice {
                self.notices.zero_results(&ZeroResultNotice {
                    term: term.to_owned(),
                });
            }
        }

        Ok(CompanyQuery { raw, result })
    }

    /// List the officers of one company.
    pub fn officers(
        &self,
        company_number: &str,
        options: OfficerOptions,
    ) -> Result<OfficerQuery, RegistryError> {
        let (raw, result) = self.run(QuerySpec {
            kind: EntityKind::Officer,
            mode: QueryMode::ById,
            term: company_number,
            extras: &options.extra_headers,
            timeout: options.timeout.unwrap_or(self.config.timeout),
        })?;
        Ok(OfficerQuery { raw, result })
    }

    /// The pipeline stages in fixed order: option assembly, query URL,
    /// validated round-trip, envelope interpretation.
    #[instrument(skip_all, fields(kind = ?spec.kind, mode = %spec.mode, term = %spec.term))]
    fn run(&self, spec: QuerySpec<'_>) -> Result<(Value, QueryResult), RegistryError> {
        let options = request::merge_options(&self.auth, spec.extras)?;
        let url = endpoints::query_url(&self.config.base_url, spec.kind, spec.mode, spec.term)?;
        let raw = request::execute(&self.http, &url, &options, spec.timeout)?;
        let result = interpret::interpret(&raw, spec.mode)?;
        Ok((raw, result))
    }
}

/// Inputs for one pipeline run.
struct QuerySpec<'a> {
    kind: EntityKind,
    mode: QueryMode,
    term: &'a str,
    extras: &'a RequestOptions,
    timeout: Duration,
}

/// Caller-tunable options for an officer query.
#[derive(Debug, Clone, Default)]
pub struct OfficerOptions {
    /// Override the configured per-query timeout.
    pub timeout: Option<Duration>,
    /// Extra request headers, merged with the authorization options.
    /// Naming the authorization header here is a contract violation.
    pub extra_headers: RequestOptions,
}

/// A completed company query: the normalized result plus the raw envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyQuery {
    raw: Value,
    result: QueryResult,
}

impl CompanyQuery {
    /// Normalized result: one record or a candidate set, by query mode.
    pub fn result(&self) -> &QueryResult {
        &self.result
    }

    /// The raw response envelope, for fields outside the normalized shape.
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

/// A completed officer query for one company.
#[derive(Debug, Clone, PartialEq)]
pub struct OfficerQuery {
    raw: Value,
    result: QueryResult,
}

impl OfficerQuery {
    /// Normalized result: the officer envelope as a single record.
    pub fn result(&self) -> &QueryResult {
        &self.result
    }

    /// The raw response envelope.
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}
