//! Request option assembly and dispatch.

use std::collections::BTreeMap;
use std::str::FromStr;
use std::time::Duration;

use registry_http::{auth, transport};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use url::Url;

use crate::error::{ContractViolation, RegistryError};

/// Reserved option key carrying the Basic-Auth credential.
pub const AUTHORIZATION_KEY: &str = "authorization";

/// Header set for one request, keyed by header name.
pub type RequestOptions = BTreeMap<String, String>;

/// The authorization options derived from an API key: exactly one entry,
/// under the reserved key.
pub fn auth_options(api_key: &str) -> RequestOptions {
    let mut options = RequestOptions::new();
    options.insert(AUTHORIZATION_KEY.to_owned(), auth::encode(api_key));
    options
}

/// Merge caller-supplied extras over the authorization options.
///
/// The authorization header derives exclusively from the API key; extras
/// naming it, in any letter case, are rejected before anything is sent.
pub fn merge_options(
    auth: &RequestOptions,
    extras: &RequestOptions,
) -> Result<RequestOptions, ContractViolation> {
    let mut merged = auth.clone();
    for (name, value) in extras {
        if name.eq_ignore_ascii_case(AUTHORIZATION_KEY) {
            return Err(ContractViolation::ReservedHeader);
        }
        merged.insert(name.clone(), value.clone());
    }
    Ok(merged)
}

/// Dispatch one request and hand back the validated JSON body.
pub fn execute(
    http: &Client,
    url: &Url,
    options: &RequestOptions,
    timeout: Duration,
) -> Result<Value, RegistryError> {
    let headers = to_header_map(options)?;
    let raw = transport::send(http, url, headers, timeout)?;
    Ok(raw)
}

fn to_header_map(options: &RequestOptions) -> Result<HeaderMap, ContractViolation> {
    let mut headers = HeaderMap::new();
    for (name, value) in options {
        let header_name = HeaderName::from_str(name)
            .map_err(|_| ContractViolation::InvalidHeader(name.clone()))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|_| ContractViolation::InvalidHeader(name.clone()))?;
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}
