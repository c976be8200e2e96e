//! Error handling for registry query operations.

use registry_http::{TransportError, TraverseError};
use thiserror::Error;

/// The caller violated the query contract.
///
/// Raised before any network activity; nothing is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("unknown query mode {0:?}; accepted modes are \"id\" and \"friendly_string\"")]
    UnknownMode(String),
    #[error("officer queries accept a company number only; there is no by-name mode")]
    OfficerByName,
    #[error("the authorization header is derived from the API key and cannot be supplied as an extra option")]
    ReservedHeader,
    #[error("extra request header {0:?} is not a valid HTTP header")]
    InvalidHeader(String),
    #[error("base url {0:?} cannot carry path segments")]
    BaseUrl(String),
}

/// A successful response whose envelope does not match the API contract.
///
/// Distinct from a zero-result search, which is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpretError {
    #[error("search envelope has no \"items\" list")]
    MissingItems(#[source] TraverseError),
    #[error("search envelope field \"items\" is not a list")]
    ItemsNotAList,
    #[error("search candidate at index {0} is not a JSON object")]
    MalformedCandidate(usize),
    #[error("search envelope has no numeric \"total_results\" count")]
    TotalResults,
    #[error("entity record is not a JSON object")]
    RecordNotAnObject,
}

/// Common error type for registry query operations.
///
/// Every pipeline stage fails fast; none of these are retried or
/// downgraded to an empty result.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Contract(#[from] ContractViolation),
    #[error("registry request failed")]
    Transport(#[from] TransportError),
    #[error("registry response could not be interpreted")]
    Interpretation(#[from] InterpretError),
    #[error("could not construct the HTTP client")]
    Client(#[source] reqwest::Error),
}
