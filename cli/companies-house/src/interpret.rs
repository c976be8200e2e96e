//! Interpretation of the registry's JSON envelope.

use registry_http::json;
use serde_json::Value;

use crate::error::InterpretError;
use crate::types::{CandidateSet, JsonMap, QueryMode, QueryResult};

const ITEMS_PATH: [&str; 1] = ["items"];
const TOTAL_RESULTS_FIELD: &str = "total_results";

/// Normalize a raw response envelope according to the query mode.
///
/// Identifier lookups yield an independent copy of the top-level record.
/// Name searches yield the candidate list found under `items` together
/// with the registry's `total_results` count; a zero count is a valid
/// empty result, while a missing list or count is a malformed envelope
/// and an error.
pub fn interpret(raw: &Value, mode: QueryMode) -> Result<QueryResult, InterpretError> {
    match mode {
        QueryMode::ById => {
            let record = raw.as_object().ok_or(InterpretError::RecordNotAnObject)?;
            Ok(QueryResult::Record(record.clone()))
        }
        QueryMode::ByName => {
            let items = json::traverse(raw, &ITEMS_PATH).map_err(InterpretError::MissingItems)?;
            let items = items.as_array().ok_or(InterpretError::ItemsNotAList)?;
            let items = items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    item.as_object()
                        .cloned()
                        .ok_or(InterpretError::MalformedCandidate(index))
                })
                .collect::<Result<Vec<JsonMap>, _>>()?;
            let total_results = raw
                .get(TOTAL_RESULTS_FIELD)
                .and_then(Value::as_i64)
                .ok_or(InterpretError::TotalResults)?;
            Ok(QueryResult::Candidates(CandidateSet {
                items,
                total_results,
            }))
        }
    }
}
