//! Mode-dependent query URL construction.

use url::Url;

use crate::error::ContractViolation;
use crate::types::{EntityKind, QueryMode};

const SEARCH_SEGMENTS: [&str; 2] = ["search", "companies"];
const COMPANY_SEGMENT: &str = "company";
const OFFICERS_SEGMENT: &str = "officers";
const SEARCH_TERM_PARAM: &str = "q";

/// Build the target URL for one query.
///
/// Company searches go to the search endpoint with the term as an encoded
/// query parameter; identifier lookups append the identifier to the
/// company-detail path; officer lookups append a fixed `officers` segment
/// to the company-detail path. Officer queries have no by-name mode.
pub fn query_url(
    base: &Url,
    kind: EntityKind,
    mode: QueryMode,
    term: &str,
) -> Result<Url, ContractViolation> {
    let mut url = base.clone();
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|()| ContractViolation::BaseUrl(base.to_string()))?;
        segments.pop_if_empty();
        match (kind, mode) {
            (EntityKind::Company, QueryMode::ByName) => {
                segments.extend(SEARCH_SEGMENTS);
            }
            (EntityKind::Company, QueryMode::ById) => {
                segments.extend([COMPANY_SEGMENT, term]);
            }
            (EntityKind::Officer, QueryMode::ById) => {
                segments.extend([COMPANY_SEGMENT, term, OFFICERS_SEGMENT]);
            }
            (EntityKind::Officer, QueryMode::ByName) => {
                return Err(ContractViolation::OfficerByName);
            }
        }
    }
    if mode == QueryMode::ByName {
        url.query_pairs_mut().append_pair(SEARCH_TERM_PARAM, term);
    }
    Ok(url)
}
