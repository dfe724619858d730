//! Career Guidance Types
//!
//! Core data structures shared by the catalog, the match engine and the
//! history log.

use chrono::{DateTime, Utc};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::GuidanceError;

// ============================================================
// INTEREST / SKILL
// ============================================================

/// Area of interest offered by the form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Interest {
    Technology,
    Healthcare,
    Business,
    Arts,
}

impl Interest {
    pub const ALL: [Interest; 4] = [
        Interest::Technology,
        Interest::Healthcare,
        Interest::Business,
        Interest::Arts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interest::Technology => "Technology",
            Interest::Healthcare => "Healthcare",
            Interest::Business => "Business",
            Interest::Arts => "Arts",
        }
    }

    pub fn parse(s: &str) -> Result<Self, GuidanceError> {
        Self::ALL
            .into_iter()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| GuidanceError::UnknownInterest(s.to_string()))
    }
}

/// Primary skill offered by the form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Skill {
    Programming,
    Analysis,
    Management,
    Design,
}

impl Skill {
    pub const ALL: [Skill; 4] = [
        Skill::Programming,
        Skill::Analysis,
        Skill::Management,
        Skill::Design,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Skill::Programming => "Programming",
            Skill::Analysis => "Analysis",
            Skill::Management => "Management",
            Skill::Design => "Design",
        }
    }

    pub fn parse(s: &str) -> Result<Self, GuidanceError> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| GuidanceError::UnknownSkill(s.to_string()))
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Stored as plain text so the tables stay readable from the sqlite shell.

impl ToSql for Interest {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Interest {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        Interest::parse(text).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

impl ToSql for Skill {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Skill {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        Skill::parse(text).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

// ============================================================
// ACADEMIC SCORE
// ============================================================

/// Academic score percentage, always within 0..=100
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "i64", into = "u32")]
pub struct AcademicScore(u32);

impl AcademicScore {
    pub const MAX: u32 = 100;

    pub fn new(value: i64) -> Result<Self, GuidanceError> {
        if (0..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u32))
        } else {
            Err(GuidanceError::ScoreOutOfRange(value))
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for AcademicScore {
    type Error = GuidanceError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AcademicScore> for u32 {
    fn from(score: AcademicScore) -> u32 {
        score.0
    }
}

impl fmt::Display for AcademicScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================
// CAREER RECORD
// ============================================================

/// A career in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CareerRecord {
    pub career: String,
    pub interest: Interest,
    pub skill: Skill,
    /// Minimum qualifying academic score for full credit
    pub min_score: u32,
    pub colleges: String,
    pub admission: String,
    pub jobs: String,
}

impl CareerRecord {
    pub fn new(career: &str, interest: Interest, skill: Skill, min_score: u32) -> Self {
        Self {
            career: career.to_string(),
            interest,
            skill,
            min_score,
            colleges: String::new(),
            admission: String::new(),
            jobs: String::new(),
        }
    }

    pub fn with_details(mut self, colleges: &str, admission: &str, jobs: &str) -> Self {
        self.colleges = colleges.to_string();
        self.admission = admission.to_string();
        self.jobs = jobs.to_string();
        self
    }
}

// ============================================================
// SUBMISSION
// ============================================================

/// The inputs collected from a student
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub interest: Interest,
    pub skill: Skill,
    pub score: AcademicScore,
}

/// A match engine result: the winning record and its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareerMatch<'a> {
    pub record: &'a CareerRecord,
    pub match_score: u32,
}

// ============================================================
// HISTORY
// ============================================================

/// A history row before storage assigns its id and timestamp
#[derive(Debug, Clone)]
pub struct NewHistoryEntry {
    pub name: String,
    pub interest: Interest,
    pub skill: Skill,
    pub score: AcademicScore,
    pub recommended_career: String,
    pub match_score: u32,
}

/// One persisted submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: i64,
    pub name: String,
    pub interest: Interest,
    pub skill: Skill,
    pub score: AcademicScore,
    pub recommended_career: String,
    pub match_score: u32,
    pub timestamp: DateTime<Utc>,
}

// ============================================================
// RECOMMENDATION
// ============================================================

/// The outcome shown to the student
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub history_id: i64,
    pub student: String,
    pub interest: Interest,
    pub skill: Skill,
    pub score: AcademicScore,
    pub career: CareerRecord,
    pub match_score: u32,
    pub explanation: String,
    pub timestamp: DateTime<Utc>,
}
