//! Weighted multi-criteria course scoring and ranking.
//!
//! Each criterion contributes its full weight or nothing. The raw sum can reach 120
//! and is saturated at `MAX_SCORE`.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::catalog::Catalog;
use crate::domain::{Course, CourseFormat, DeviceUsage, InternetStability, OfflineNeeds, QuestionnaireAnswer};

const LEARNING_STYLE_WEIGHT: u32 = 25;
const MOTIVATION_WEIGHT: u32 = 20;
const ENVIRONMENT_WEIGHT: u32 = 15;
const TECHNICAL_WEIGHT: u32 = 15;
const FOCUS_WEIGHT: u32 = 10;
const CONFIDENCE_WEIGHT: u32 = 10;
const OFFLINE_BONUS: u32 = 15;
const DEVICE_BONUS: u32 = 5;
const LANGUAGE_BONUS: u32 = 5;

pub const MAX_SCORE: u32 = 100;
pub const DEFAULT_LIMIT: usize = 8;

/// One satisfied criterion, in table order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchSignal {
  LearningStyle(String),
  Motivation(String),
  Environment(String),
  Technical(String),
  Focus(String),
  Confidence(String),
  Offline,
  MobileFriendly,
  Language(Vec<String>),
}

impl MatchSignal {
  fn weight(&self) -> u32 {
    match self {
      MatchSignal::LearningStyle(_) => LEARNING_STYLE_WEIGHT,
      MatchSignal::Motivation(_) => MOTIVATION_WEIGHT,
      MatchSignal::Environment(_) => ENVIRONMENT_WEIGHT,
      MatchSignal::Technical(_) => TECHNICAL_WEIGHT,
      MatchSignal::Focus(_) => FOCUS_WEIGHT,
      MatchSignal::Confidence(_) => CONFIDENCE_WEIGHT,
      MatchSignal::Offline => OFFLINE_BONUS,
      MatchSignal::MobileFriendly => DEVICE_BONUS,
      MatchSignal::Language(_) => LANGUAGE_BONUS,
    }
  }

  fn clause(&self) -> String {
    match self {
      MatchSignal::LearningStyle(s) => format!("Matches your {s} learning style"),
      MatchSignal::Motivation(m) => format!("Fits your {m} motivation"),
      MatchSignal::Environment(e) => format!("Suits a {e} study environment"),
      MatchSignal::Technical(t) => format!("Appropriate for {t} tech comfort"),
      MatchSignal::Focus(f) => format!("Lesson length fits {f} focus sessions"),
      MatchSignal::Confidence(c) => format!("Paced for {c} confidence"),
      MatchSignal::Offline => "Available offline".to_string(),
      MatchSignal::MobileFriendly => "Works well on your smartphone".to_string(),
      MatchSignal::Language(langs) => format!("Offered in {}", langs.join(", ")),
    }
  }
}

/// Per-request output: the course plus its saturated score and explanation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCourse {
  #[serde(flatten)]
  pub course: Course,
  pub match_score: u32,
  pub reason: String,
}

/// Serde tag for an option value, e.g. `PreferGroup` -> "prefer_group".
fn tag<T: Serialize>(v: &T) -> String {
  serde_json::to_value(v)
    .ok()
    .and_then(|j| j.as_str().map(str::to_string))
    .unwrap_or_default()
}

/// Collect every criterion the course satisfies for these answers.
pub fn match_signals(
  answers: &QuestionnaireAnswer,
  course: &Course,
  preferred_languages: &[String],
) -> Vec<MatchSignal> {
  let dna = &course.dna_match;
  let mut signals = Vec::new();

  if let Some(v) = answers.learning_style.filter(|v| dna.learning_style.contains(v)) {
    signals.push(MatchSignal::LearningStyle(tag(&v)));
  }
  if let Some(v) = answers.motivation_type.filter(|v| dna.motivation_type.contains(v)) {
    signals.push(MatchSignal::Motivation(tag(&v)));
  }
  if let Some(v) = answers.study_environment.filter(|v| dna.environment.contains(v)) {
    signals.push(MatchSignal::Environment(tag(&v)));
  }
  // At most one tier below the most demanding tier the course accepts.
  if let (Some(user), Some(top)) = (answers.tech_comfort, dna.technical.iter().max()) {
    if user.rank() + 1 >= top.rank() {
      signals.push(MatchSignal::Technical(tag(&user)));
    }
  }
  if let Some(v) = answers.focus_duration.filter(|v| dna.focus_duration.contains(v)) {
    signals.push(MatchSignal::Focus(tag(&v)));
  }
  if let Some(v) = answers.confidence_level.filter(|v| dna.confidence_level.contains(v)) {
    signals.push(MatchSignal::Confidence(tag(&v)));
  }

  let needs_offline = answers.internet_stability == Some(InternetStability::Unstable)
    || answers.offline_needs == Some(OfflineNeeds::Critical);
  if needs_offline && course.offline_available {
    signals.push(MatchSignal::Offline);
  }
  if answers.device_usage == Some(DeviceUsage::Smartphone)
    && course.format.contains(&CourseFormat::MobileFriendly)
  {
    signals.push(MatchSignal::MobileFriendly);
  }
  // An empty questionnaire earns nothing, not even the regional-language bonus.
  if !answers.is_empty() {
    let langs: Vec<String> = course
      .language
      .iter()
      .filter(|l| preferred_languages.iter().any(|p| p.eq_ignore_ascii_case(l)))
      .cloned()
      .collect();
    if !langs.is_empty() {
      signals.push(MatchSignal::Language(langs));
    }
  }

  signals
}

pub fn score_course(answers: &QuestionnaireAnswer, course: &Course, preferred_languages: &[String]) -> ScoredCourse {
  let signals = match_signals(answers, course, preferred_languages);
  let raw: u32 = signals.iter().map(MatchSignal::weight).sum();
  ScoredCourse {
    course: course.clone(),
    match_score: raw.min(MAX_SCORE),
    reason: explain(&signals),
  }
}

fn explain(signals: &[MatchSignal]) -> String {
  if signals.is_empty() {
    return "No specific profile match.".to_string();
  }
  let parts: Vec<String> = signals.iter().map(MatchSignal::clause).collect();
  format!("{}.", parts.join(". "))
}

/// Score every course, sort by score descending (stable, so ties keep catalog order)
/// and keep at most `limit`.
pub fn recommend(
  answers: &QuestionnaireAnswer,
  courses: &[Course],
  limit: usize,
  preferred_languages: &[String],
) -> Vec<ScoredCourse> {
  if limit == 0 {
    return Vec::new();
  }
  let mut scored: Vec<ScoredCourse> = courses
    .iter()
    .map(|c| score_course(answers, c, preferred_languages))
    .collect();
  scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
  scored.truncate(limit);
  scored
}

/// Recommender bound to an injected read-only catalog.
#[derive(Clone, Debug)]
pub struct Recommender {
  catalog: Arc<Catalog>,
  preferred_languages: Vec<String>,
}

impl Recommender {
  pub fn new(catalog: Arc<Catalog>, preferred_languages: Vec<String>) -> Self {
    Self { catalog, preferred_languages }
  }

  #[instrument(level = "info", skip(self, answers))]
  pub fn recommend(&self, answers: &QuestionnaireAnswer, limit: usize) -> Vec<ScoredCourse> {
    let out = recommend(answers, self.catalog.all(), limit, &self.preferred_languages);
    if let Some(top) = out.first() {
      debug!(target: "recommender", top = %top.course.id, score = top.match_score, returned = out.len(), "Ranked catalog");
    }
    out
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::*;

  fn langs() -> Vec<String> {
    vec!["hi".to_string(), "pa".to_string()]
  }

  fn bare(id: &str) -> Course {
    Course {
      id: id.into(),
      title: id.into(),
      description: String::new(),
      instructor: String::new(),
      category: Vec::new(),
      tags: Vec::new(),
      difficulty: Difficulty::Beginner,
      duration_weeks: 1,
      lessons: 1,
      popularity: 0,
      rating: 0.0,
      format: Vec::new(),
      offline_available: false,
      language: Vec::new(),
      dna_match: DnaMatch::default(),
    }
  }

  fn full_match_course() -> Course {
    Course {
      format: vec![CourseFormat::Video, CourseFormat::MobileFriendly],
      offline_available: true,
      dna_match: DnaMatch {
        learning_style: vec![LearningStyle::Visual],
        motivation_type: vec![MotivationType::Practical],
        environment: vec![StudyEnvironment::Quiet],
        technical: vec![TechComfort::Basic],
        focus_duration: vec![FocusDuration::Short],
        confidence_level: vec![ConfidenceLevel::Cautious],
      },
      ..bare("full")
    }
  }

  fn full_answers() -> QuestionnaireAnswer {
    QuestionnaireAnswer {
      learning_style: Some(LearningStyle::Visual),
      motivation_type: Some(MotivationType::Practical),
      study_environment: Some(StudyEnvironment::Quiet),
      tech_comfort: Some(TechComfort::Basic),
      focus_duration: Some(FocusDuration::Short),
      confidence_level: Some(ConfidenceLevel::Cautious),
      internet_stability: Some(InternetStability::Unstable),
      offline_needs: Some(OfflineNeeds::Critical),
      device_usage: Some(DeviceUsage::Smartphone),
      ..Default::default()
    }
  }

  #[test]
  fn every_criterion_saturates_at_one_hundred() {
    let answers = full_answers();
    let course = full_match_course();
    let raw: u32 = match_signals(&answers, &course, &langs()).iter().map(MatchSignal::weight).sum();
    assert_eq!(raw, 115);
    assert_eq!(score_course(&answers, &course, &langs()).match_score, 100);

    let mut with_lang = course.clone();
    with_lang.language = vec!["hi".into()];
    let raw: u32 = match_signals(&answers, &with_lang, &langs()).iter().map(MatchSignal::weight).sum();
    assert_eq!(raw, 120);
    assert_eq!(score_course(&answers, &with_lang, &langs()).match_score, 100);
  }

  #[test]
  fn empty_dna_match_never_matches() {
    let s = score_course(&full_answers(), &bare("empty"), &langs());
    assert_eq!(s.match_score, 0);
    assert_eq!(s.reason, "No specific profile match.");
  }

  #[test]
  fn technical_uses_most_demanding_tier() {
    let mut course = bare("tech");
    course.dna_match.technical = vec![TechComfort::Learning, TechComfort::Expert];
    let at = |t| {
      let a = QuestionnaireAnswer { tech_comfort: Some(t), ..Default::default() };
      score_course(&a, &course, &[]).match_score
    };
    assert_eq!(at(TechComfort::Learning), 0);
    assert_eq!(at(TechComfort::Basic), 0);
    assert_eq!(at(TechComfort::Comfortable), 15);
    assert_eq!(at(TechComfort::Expert), 15);
  }

  #[test]
  fn offline_bonus_needs_both_sides() {
    let mut course = bare("off");
    let a = QuestionnaireAnswer { offline_needs: Some(OfflineNeeds::Critical), ..Default::default() };
    assert_eq!(score_course(&a, &course, &[]).match_score, 0);
    course.offline_available = true;
    assert_eq!(score_course(&a, &course, &[]).match_score, 15);
    let stable = QuestionnaireAnswer { internet_stability: Some(InternetStability::Stable), ..Default::default() };
    assert_eq!(score_course(&stable, &course, &[]).match_score, 0);
  }

  #[test]
  fn empty_answers_score_zero_everywhere() {
    let mut course = full_match_course();
    course.language = vec!["hi".into()];
    let out = recommend(&QuestionnaireAnswer::default(), &[course, bare("b")], 8, &langs());
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|s| s.match_score == 0));
    assert_eq!(out[0].course.id, "full");
  }

  #[test]
  fn language_bonus_is_case_insensitive() {
    let mut course = bare("lang");
    course.language = vec!["en".into(), "HI".into()];
    let a = QuestionnaireAnswer { energy_patterns: Some(EnergyPattern::Morning), ..Default::default() };
    let s = score_course(&a, &course, &langs());
    assert_eq!(s.match_score, 5);
    assert_eq!(s.reason, "Offered in HI.");
  }

  #[test]
  fn ranking_is_sorted_bounded_and_stable() {
    let answers = QuestionnaireAnswer {
      learning_style: Some(LearningStyle::Auditory),
      motivation_type: Some(MotivationType::Curiosity),
      ..Default::default()
    };
    let mut a = bare("a");
    a.dna_match.motivation_type = vec![MotivationType::Curiosity];
    let mut b = bare("b");
    b.dna_match.learning_style = vec![LearningStyle::Auditory];
    let mut c = bare("c");
    c.dna_match.motivation_type = vec![MotivationType::Curiosity];
    let catalog = vec![a, b, c, bare("d")];

    let out = recommend(&answers, &catalog, 3, &[]);
    let ids: Vec<&str> = out.iter().map(|s| s.course.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
    assert!(out.windows(2).all(|w| w[0].match_score >= w[1].match_score));

    assert!(recommend(&answers, &catalog, 0, &[]).is_empty());
    assert_eq!(recommend(&answers, &catalog, 3, &[]), out);
  }

  #[test]
  fn reason_lists_clauses_in_table_order() {
    let s = score_course(&full_answers(), &full_match_course(), &langs());
    assert!(s.reason.starts_with("Matches your visual learning style. Fits your practical motivation."));
    assert!(s.reason.ends_with("Available offline. Works well on your smartphone."));
  }

  #[test]
  fn recommender_uses_injected_catalog() {
    let catalog = Arc::new(Catalog::from_courses([bare("x"), full_match_course()]));
    let r = Recommender::new(catalog, langs());
    let out = r.recommend(&full_answers(), 1);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].course.id, "full");
    assert_eq!(r.recommend(&full_answers(), 5).len(), 2);
  }

  #[test]
  fn scored_course_flattens_course_fields() {
    let s = score_course(&full_answers(), &full_match_course(), &langs());
    let json = serde_json::to_value(&s).expect("json");
    assert_eq!(json["id"], "full");
    assert_eq!(json["matchScore"], 100);
    assert!(json["reason"].as_str().is_some());
  }
}
