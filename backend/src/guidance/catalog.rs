//! Catalog Seeder
//!
//! The reference careers are inserted once, into an empty catalog only.
//! Their order here is the tie-break order used by the match engine.

use super::error::GuidanceResult;
use super::store::CareerStore;
use super::types::{CareerRecord, Interest, Skill};

/// The fixed reference catalog, in seeding order
pub fn reference_catalog() -> Vec<CareerRecord> {
    vec![
        CareerRecord::new("Software Engineer", Interest::Technology, Skill::Programming, 70)
            .with_details(
                "IITs, NITs, IIITs, Top Private Universities",
                "PCM background, JEE / State Entrance Exams",
                "Software Developer, AI Engineer, Cloud Engineer",
            ),
        CareerRecord::new("Doctor", Interest::Healthcare, Skill::Analysis, 85).with_details(
            "AIIMS, Government Medical Colleges",
            "PCB background, NEET Exam",
            "Hospitals, Research, Private Practice",
        ),
        CareerRecord::new("MBA / Entrepreneur", Interest::Business, Skill::Management, 65)
            .with_details(
                "IIMs, XLRI, Top Business Schools",
                "Any degree, CAT / XAT / MAT",
                "Manager, Startup Founder, Consultant",
            ),
        CareerRecord::new("Designer / Animator", Interest::Arts, Skill::Design, 60).with_details(
            "NIFT, NID, Fine Arts Colleges",
            "Portfolio + Entrance Test",
            "UI/UX Designer, Animator, Creative Director",
        ),
    ]
}

/// Seed the reference catalog if the store has no careers yet.
///
/// Returns the number of records inserted (0 when already seeded).
pub fn seed_catalog(store: &dyn CareerStore) -> GuidanceResult<usize> {
    seed_with(store, &reference_catalog())
}

fn seed_with(store: &dyn CareerStore, records: &[CareerRecord]) -> GuidanceResult<usize> {
    let existing = store.career_count()?;
    if existing > 0 {
        log::debug!("Catalog already holds {} careers, skipping seed", existing);
        return Ok(0);
    }

    for record in records {
        store.insert_career(record)?;
    }
    log::info!("Seeded career catalog with {} records", records.len());

    Ok(records.len())
}
