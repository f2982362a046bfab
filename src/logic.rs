//! Core behaviors shared by the HTTP handlers.
//!
//! Handlers stay thin: they parse, call into here, and wrap the result in JSON.

use tracing::{info, instrument};

use crate::domain::{Course, QuestionnaireAnswer};
use crate::profile::derive_profile;
use crate::protocol::{CourseFilter, DnaReport};
use crate::state::AppState;

/// Profile plus ranked recommendations for one questionnaire submission.
#[instrument(level = "info", skip(state, answers))]
pub fn analyze_dna(state: &AppState, answers: &QuestionnaireAnswer, limit: usize) -> DnaReport {
  let profile = derive_profile(answers);
  let recommendations = state.recommender.recommend(answers, limit);
  info!(
    target: "recommender",
    primary = ?profile.primary_style,
    returned = recommendations.len(),
    top_score = recommendations.first().map(|r| r.match_score).unwrap_or(0),
    "DNA analysis complete"
  );
  DnaReport { profile, recommendations }
}

/// Resolve a course listing query. Precedence: search text, then category, then difficulty.
/// Category and difficulty combine when both are given.
#[instrument(level = "debug", skip(state))]
pub fn list_courses(state: &AppState, filter: &CourseFilter) -> Vec<Course> {
  let catalog = &state.catalog;
  let picked: Vec<&Course> = match (&filter.q, &filter.category, filter.difficulty) {
    (Some(q), _, _) => catalog.search_courses(q),
    (None, Some(cat), Some(d)) => catalog
      .get_courses_by_category(cat)
      .into_iter()
      .filter(|c| c.difficulty == d)
      .collect(),
    (None, Some(cat), None) => catalog.get_courses_by_category(cat),
    (None, None, Some(d)) => catalog.get_courses_by_difficulty(d),
    (None, None, None) => catalog.all().iter().collect(),
  };
  picked.into_iter().cloned().collect()
}

pub fn popular_courses(state: &AppState, limit: usize) -> Vec<Course> {
  state.catalog.get_popular_courses(limit).into_iter().cloned().collect()
}

pub fn course_by_id(state: &AppState, id: &str) -> Option<Course> {
  state.catalog.get_course_by_id(id).cloned()
}


#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{Difficulty, DeviceUsage, LearningStyle, OfflineNeeds};

  #[test]
  fn analyze_combines_profile_and_ranking() {
    let state = AppState::from_config(None);
    let answers = QuestionnaireAnswer {
      learning_style: Some(LearningStyle::Visual),
      offline_needs: Some(OfflineNeeds::Critical),
      device_usage: Some(DeviceUsage::Smartphone),
      ..Default::default()
    };
    let report = analyze_dna(&state, &answers, 3);
    assert_eq!(report.recommendations.len(), 3);
    assert_eq!(report.profile.strengths, vec!["strong visual processing"]);
    assert!(report.recommendations.windows(2).all(|w| w[0].match_score >= w[1].match_score));
    assert_eq!(analyze_dna(&state, &answers, 3), report);
  }

  #[test]
  fn listing_applies_filters() {
    let state = AppState::from_config(None);
    let all = list_courses(&state, &CourseFilter::default());
    assert_eq!(all.len(), state.catalog.len());

    let filter = CourseFilter { category: Some("finance".into()), difficulty: Some(Difficulty::Beginner), q: None };
    let ids: Vec<String> = list_courses(&state, &filter).into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["financial-literacy"]);

    let filter = CourseFilter { q: Some("solar".into()), ..Default::default() };
    assert_eq!(list_courses(&state, &filter)[0].id, "solar-energy-technician");
  }

  #[test]
  fn popular_and_lookup() {
    let state = AppState::from_config(None);
    assert_eq!(popular_courses(&state, 1)[0].id, "digital-literacy-basics");
    assert!(course_by_id(&state, "missing").is_none());
  }
}
