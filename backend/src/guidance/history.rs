//! History Recorder
//!
//! Every completed submission appends exactly one row to the history log.
//! Rows are never updated or removed.

use super::error::GuidanceResult;
use super::store::CareerStore;
use super::types::{CareerMatch, HistoryEntry, NewHistoryEntry, Submission};

/// Default number of rows returned by [`recent_history`]
pub const DEFAULT_HISTORY_LIMIT: usize = 20;
/// Upper bound on rows returned by [`recent_history`]
pub const MAX_HISTORY_LIMIT: usize = 500;

/// Append a submission and its match to the history log
pub fn record_submission(
    store: &dyn CareerStore,
    submission: &Submission,
    matched: &CareerMatch<'_>,
) -> GuidanceResult<HistoryEntry> {
    let entry = NewHistoryEntry {
        name: submission.name.clone(),
        interest: submission.interest,
        skill: submission.skill,
        score: submission.score,
        recommended_career: matched.record.career.clone(),
        match_score: matched.match_score,
    };

    let stored = store.append_history(&entry)?;
    log::debug!("Recorded history entry {} for {}", stored.id, stored.name);
    Ok(stored)
}

/// Most recent submissions first, capped at [`MAX_HISTORY_LIMIT`]
pub fn recent_history(store: &dyn CareerStore, limit: usize) -> GuidanceResult<Vec<HistoryEntry>> {
    store.history(limit.min(MAX_HISTORY_LIMIT))
}
