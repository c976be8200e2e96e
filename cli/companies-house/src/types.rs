//! Query and result types for registry lookups.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ContractViolation;

/// A JSON object, as found inside the registry envelope.
pub type JsonMap = Map<String, Value>;

/// The two entity kinds served by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Company,
    Officer,
}

/// Selects whether a query targets an exact identifier or a free-text
/// search string. Governs both the URL shape and the result shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    /// Exact registry identifier, e.g. a company number.
    ById,
    /// Free-text search over entity names.
    ByName,
}

impl QueryMode {
    /// Wire spelling accepted on the query boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryMode::ById => "id",
            QueryMode::ByName => "friendly_string",
        }
    }
}

impl Display for QueryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryMode {
    type Err = ContractViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(QueryMode::ById),
            "friendly_string" => Ok(QueryMode::ByName),
            other => Err(ContractViolation::UnknownMode(other.to_owned())),
        }
    }
}

/// Candidate matches extracted from a name-search envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSet {
    /// Candidate entity records, in the order the registry returned them.
    pub items: Vec<JsonMap>,
    /// Total match count reported by the registry.
    pub total_results: i64,
}

impl CandidateSet {
    /// True when the search legitimately matched nothing.
    pub fn is_empty(&self) -> bool {
        self.total_results <= 0
    }
}

/// Normalized output of a registry query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QueryResult {
    /// One entity's full field set (identifier lookups).
    Record(JsonMap),
    /// Candidate matches (name searches).
    Candidates(CandidateSet),
}

impl QueryResult {
    /// The single record, when this is an identifier-lookup result.
    pub fn record(&self) -> Option<&JsonMap> {
        match self {
            QueryResult::Record(record) => Some(record),
            QueryResult::Candidates(_) => None,
        }
    }

    /// The candidate set, when this is a name-search result.
    pub fn candidates(&self) -> Option<&CandidateSet> {
        match self {
            QueryResult::Record(_) => None,
            QueryResult::Candidates(candidates) => Some(candidates),
        }
    }
}
