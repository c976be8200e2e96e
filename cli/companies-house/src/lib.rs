//! Blocking client for the Companies House REST API.
//!
//! This crate provides:
//! - HTTP request authorization derived from a Companies House API key
//! - Mode-dependent query URLs for company and officer lookups
//! - Validated round-trips with a per-query timeout
//! - Interpretation of the registry's JSON envelope into normalized results
//! - A suppressible advisory notice for name searches that match nothing
//!
//! ## Usage
//!
//! ```ignore
//! use companies_house::{QueryMode, RegistryClient, RegistryConfig};
//!
//! let client = RegistryClient::new(RegistryConfig::new(api_key))?;
//!
//! // One company, by its registry number.
//! let company = client.company("04256101", QueryMode::ById)?;
//!
//! // Candidate companies, by name.
//! let matches = client.company("Example Ltd", QueryMode::ByName)?;
//! ```

mod client;
mod config;
mod endpoints;
mod error;
mod interpret;
mod notice;
mod request;
mod types;

pub use client::{CompanyQuery, OfficerOptions, OfficerQuery, RegistryClient};
pub use config::{RegistryConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{ContractViolation, InterpretError, RegistryError};
pub use notice::{LogNoticeSink, NoticeSink, ZeroResultNotice};
// Re-export the transport-level types surfaced through [`RegistryError`],
// so consumers depend only on this crate.
pub use registry_http::{TransportError, TraverseError};
pub use request::{RequestOptions, AUTHORIZATION_KEY};
pub use types::{CandidateSet, EntityKind, JsonMap, QueryMode, QueryResult};
