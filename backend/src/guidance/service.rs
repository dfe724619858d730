//! Submission pipeline: validate → match → persist → render

use super::error::{GuidanceError, GuidanceResult};
use super::history;
use super::matcher;
use super::render;
use super::store::CareerStore;
use super::types::{Recommendation, Submission};

/// Process one submission end to end.
///
/// Nothing is persisted when the name is blank or no career matches.
pub fn submit(store: &dyn CareerStore, submission: &Submission) -> GuidanceResult<Recommendation> {
    if submission.name.trim().is_empty() {
        log::warn!("Rejected submission without a student name");
        return Err(GuidanceError::EmptyName);
    }

    let catalog = store.all_careers()?;
    let matched = matcher::best_match(&catalog, submission.interest, submission.skill, submission.score)
        .ok_or_else(|| {
            log::warn!(
                "No career matched {} / {} / {}",
                submission.interest,
                submission.skill,
                submission.score
            );
            GuidanceError::NoMatch
        })?;

    let stored = history::record_submission(store, submission, &matched)?;

    log::info!(
        "Recommended {} ({}%) for {}",
        stored.recommended_career,
        stored.match_score,
        stored.name
    );

    Ok(Recommendation {
        history_id: stored.id,
        student: stored.name,
        interest: stored.interest,
        skill: stored.skill,
        score: stored.score,
        explanation: render::explanation(
            stored.interest,
            stored.skill,
            stored.score,
            &matched.record.career,
            stored.match_score,
        ),
        career: matched.record.clone(),
        match_score: stored.match_score,
        timestamp: stored.timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidance::catalog::seed_catalog;
    use crate::guidance::store::SqliteStore;
    use crate::guidance::types::{AcademicScore, CareerRecord, Interest, Skill};

    fn seeded() -> SqliteStore {
        let store = SqliteStore::in_memory().unwrap();
        seed_catalog(&store).unwrap();
        store
    }

    fn submission(name: &str, interest: Interest, skill: Skill, score: i64) -> Submission {
        Submission {
            name: name.to_string(),
            interest,
            skill,
            score: AcademicScore::new(score).unwrap(),
        }
    }

    #[test]
    fn test_submit_records_shown_score() {
        let store = seeded();
        let rec = submit(&store, &submission("Asha", Interest::Arts, Skill::Design, 50)).unwrap();

        assert_eq!(rec.career.career, "Designer / Animator");
        assert_eq!(rec.match_score, 96);
        assert!(rec.explanation.contains("96% compatibility"));

        let history = store.history(10).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, rec.history_id);
        assert_eq!(history[0].match_score, rec.match_score);
        assert_eq!(history[0].recommended_career, "Designer / Animator");
    }

    #[test]
    fn test_blank_name_is_rejected_without_history() {
        let store = seeded();
        for name in ["", "   "] {
            let result = submit(&store, &submission(name, Interest::Technology, Skill::Programming, 70));
            assert!(matches!(result, Err(GuidanceError::EmptyName)));
        }
        assert!(store.history(10).unwrap().is_empty());
    }

    #[test]
    fn test_no_match_is_rejected_without_history() {
        let store = SqliteStore::in_memory().unwrap();
        store
            .insert_career(&CareerRecord::new("Doctor", Interest::Healthcare, Skill::Analysis, 85))
            .unwrap();

        let result = submit(&store, &submission("Ravi", Interest::Arts, Skill::Design, 0));
        assert!(matches!(result, Err(GuidanceError::NoMatch)));
        assert!(store.history(10).unwrap().is_empty());
    }

    #[test]
    fn test_each_submission_adds_one_row() {
        let store = seeded();
        submit(&store, &submission("A", Interest::Technology, Skill::Programming, 70)).unwrap();
        submit(&store, &submission("B", Interest::Business, Skill::Management, 30)).unwrap();

        let history = store.history(10).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].name, "B");
        assert_eq!(history[1].match_score, 100);
    }
}
