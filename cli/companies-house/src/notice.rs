//! Advisory signalling for searches that match nothing.

use std::fmt::Debug;

use tracing::info;

/// Advisory record for a name search that legitimately matched nothing.
///
/// This is not an error: the query succeeded and the result set is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZeroResultNotice {
    /// The search term that produced no matches.
    pub term: String,
}

impl ZeroResultNotice {
    /// Operator-facing explanation of the empty result.
    pub fn message(&self) -> String {
        format!(
            "the search for {:?} completed but matched no companies; the \
             registry found nothing resembling that name, so check the \
             spelling or try a shorter form of it",
            self.term
        )
    }
}

/// Receiver for advisory notices emitted by the query pipeline.
pub trait NoticeSink: Debug + Send + Sync {
    /// A name search matched nothing.
    fn zero_results(&self, notice: &ZeroResultNotice);
}

/// Default sink: one structured log record per notice.
#[derive(Debug, Default)]
pub struct LogNoticeSink;

impl NoticeSink for LogNoticeSink {
    fn zero_results(&self, notice: &ZeroResultNotice) {
        info!(term = %notice.term, "{}", notice.message());
    }
}
