//! Public protocol structs for HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::Difficulty;
use crate::profile::LearningProfile;
use crate::scoring::ScoredCourse;

/// Combined response of the questionnaire analysis.
#[derive(Debug, PartialEq, Serialize)]
pub struct DnaReport {
    pub profile: LearningProfile,
    pub recommendations: Vec<ScoredCourse>,
}

//
// HTTP request/response DTOs
//

#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    /// Signed so that negative values can be accepted and treated as zero.
    pub limit: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CourseFilter {
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub q: Option<String>,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub error: String,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
    pub courses: usize,
}
