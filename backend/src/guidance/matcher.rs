//! Match Engine
//!
//! Scores every catalog record against a student's interest, skill and
//! academic score and picks the best one. Pure: no storage access.
//!
//! Per record:
//! - +40 when the interest matches
//! - +40 when the skill matches
//! - +20 when the score reaches the record's minimum, otherwise
//!   `score * 20 / min_score` truncated

use serde::Serialize;

use super::types::{AcademicScore, CareerMatch, CareerRecord, Interest, Skill};

pub const INTEREST_WEIGHT: u32 = 40;
pub const SKILL_WEIGHT: u32 = 40;
pub const SCORE_WEIGHT: u32 = 20;
pub const MAX_MATCH_SCORE: u32 = INTEREST_WEIGHT + SKILL_WEIGHT + SCORE_WEIGHT;

/// Score a single record, always within 0..=100
pub fn score_record(
    record: &CareerRecord,
    interest: Interest,
    skill: Skill,
    score: AcademicScore,
) -> u32 {
    let mut total = 0;

    if interest == record.interest {
        total += INTEREST_WEIGHT;
    }
    if skill == record.skill {
        total += SKILL_WEIGHT;
    }
    total += score_credit(score.value(), record.min_score);

    total.min(MAX_MATCH_SCORE)
}

/// Credit for the academic score against a record's minimum.
///
/// A zero minimum is met by every score, so it earns full credit.
fn score_credit(score: u32, min_score: u32) -> u32 {
    if score >= min_score {
        return SCORE_WEIGHT;
    }
    (score * SCORE_WEIGHT)
        .checked_div(min_score)
        .unwrap_or(SCORE_WEIGHT)
        .min(SCORE_WEIGHT)
}

/// Pick the best record for the inputs.
///
/// Catalog order decides ties: a later record only wins with a strictly
/// higher score. Returns `None` for an empty catalog or when every record
/// scores 0.
pub fn best_match<'a>(
    catalog: &'a [CareerRecord],
    interest: Interest,
    skill: Skill,
    score: AcademicScore,
) -> Option<CareerMatch<'a>> {
    let mut best: Option<CareerMatch<'a>> = None;
    let mut best_score = 0;

    for record in catalog {
        let match_score = score_record(record, interest, skill, score);
        if match_score > best_score {
            best_score = match_score;
            best = Some(CareerMatch { record, match_score });
        }
    }

    best
}

/// A record's score, for previewing the whole catalog
#[derive(Debug, Clone, Serialize)]
pub struct RankedCareer {
    pub career: String,
    pub match_score: u32,
}

/// Score every record, keeping catalog order
pub fn rank_catalog(
    catalog: &[CareerRecord],
    interest: Interest,
    skill: Skill,
    score: AcademicScore,
) -> Vec<RankedCareer> {
    catalog
        .iter()
        .map(|record| RankedCareer {
            career: record.career.clone(),
            match_score: score_record(record, interest, skill, score),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidance::catalog::reference_catalog;

    fn score(value: i64) -> AcademicScore {
        AcademicScore::new(value).unwrap()
    }

    #[test]
    fn test_exact_match_scores_100() {
        let catalog = reference_catalog();
        let found = best_match(&catalog, Interest::Technology, Skill::Programming, score(70)).unwrap();
        assert_eq!(found.record.career, "Software Engineer");
        assert_eq!(found.match_score, 100);
    }

    #[test]
    fn test_partial_credit_truncates() {
        let catalog = reference_catalog();
        let found = best_match(&catalog, Interest::Arts, Skill::Design, score(50)).unwrap();
        assert_eq!(found.record.career, "Designer / Animator");
        // 40 + 40 + floor(50 / 60 * 20)
        assert_eq!(found.match_score, 96);
    }

    #[test]
    fn test_no_match_when_everything_scores_zero() {
        let catalog = vec![
            CareerRecord::new("Doctor", Interest::Healthcare, Skill::Analysis, 85),
            CareerRecord::new("Designer", Interest::Arts, Skill::Design, 60),
        ];
        let ranked = rank_catalog(&catalog, Interest::Technology, Skill::Programming, score(0));
        assert!(ranked.iter().all(|r| r.match_score == 0));
        assert!(best_match(&catalog, Interest::Technology, Skill::Programming, score(0)).is_none());
    }

    #[test]
    fn test_empty_catalog_has_no_match() {
        assert!(best_match(&[], Interest::Arts, Skill::Design, score(100)).is_none());
    }

    #[test]
    fn test_tie_keeps_first_record() {
        let catalog = vec![
            CareerRecord::new("First", Interest::Business, Skill::Design, 50),
            CareerRecord::new("Second", Interest::Business, Skill::Analysis, 50),
        ];
        let found = best_match(&catalog, Interest::Business, Skill::Programming, score(60)).unwrap();
        assert_eq!(found.match_score, 60);
        assert_eq!(found.record.career, "First");
    }

    #[test]
    fn test_later_record_wins_only_when_strictly_higher() {
        let catalog = vec![
            CareerRecord::new("First", Interest::Business, Skill::Design, 50),
            CareerRecord::new("Second", Interest::Business, Skill::Programming, 50),
        ];
        let found = best_match(&catalog, Interest::Business, Skill::Programming, score(60)).unwrap();
        assert_eq!(found.record.career, "Second");
        assert_eq!(found.match_score, 100);
    }

    #[test]
    fn test_zero_minimum_is_full_credit() {
        let record = CareerRecord::new("Open", Interest::Arts, Skill::Design, 0);
        assert_eq!(score_record(&record, Interest::Technology, Skill::Analysis, score(0)), 20);
        assert_eq!(score_credit(0, 0), SCORE_WEIGHT);
    }

    #[test]
    fn test_minimum_above_100_gives_partial_credit() {
        let record = CareerRecord::new("Unreachable", Interest::Arts, Skill::Design, 200);
        assert_eq!(score_record(&record, Interest::Arts, Skill::Design, score(100)), 90);
    }

    #[test]
    fn test_scores_always_within_bounds() {
        let mut catalog = reference_catalog();
        catalog.push(CareerRecord::new("Open", Interest::Arts, Skill::Design, 0));
        catalog.push(CareerRecord::new("Strict", Interest::Business, Skill::Analysis, 100));

        for interest in Interest::ALL {
            for skill in Skill::ALL {
                for value in 0..=100 {
                    for ranked in rank_catalog(&catalog, interest, skill, score(value)) {
                        assert!(ranked.match_score <= MAX_MATCH_SCORE);
                    }
                }
            }
        }
    }
}
