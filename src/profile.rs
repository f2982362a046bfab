//! Learning profile derivation from questionnaire answers.
//!
//! Each attribute is looked up independently and has an explicit fallback, so an
//! incomplete (or empty) questionnaire still produces a full profile.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::domain::{
  ConfidenceLevel, FocusDuration, InformationProcessing, InternetStability, LearningStyle,
  MemoryRetention, MotivationType, OfflineNeeds, ProblemSolving, QuestionnaireAnswer,
  SocialLearning, StudyEnvironment, TechComfort,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryStyle {
  Visual,
  Auditory,
  Kinesthetic,
  Reading,
  Social,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pace {
  Slow,
  Moderate,
  Fast,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentPreference {
  Quiet,
  Active,
  Flexible,
}

/// Read-only view derived from a questionnaire. Recomputed on demand, never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningProfile {
  pub primary_style: PrimaryStyle,
  pub secondary_style: InformationProcessing,
  pub pace: Pace,
  pub environment: EnvironmentPreference,
  pub motivation: MotivationType,
  pub tech_level: TechComfort,
  pub offline_priority: OfflineNeeds,
  pub strengths: Vec<String>,
  pub challenges: Vec<String>,
}

// Named fallbacks for unanswered questions.
pub const DEFAULT_PRIMARY_STYLE: PrimaryStyle = PrimaryStyle::Visual;
pub const DEFAULT_SECONDARY_STYLE: InformationProcessing = InformationProcessing::Sequential;
pub const DEFAULT_PACE: Pace = Pace::Moderate;
pub const DEFAULT_MOTIVATION: MotivationType = MotivationType::Achievement;
pub const DEFAULT_TECH_LEVEL: TechComfort = TechComfort::Basic;
pub const DEFAULT_OFFLINE_PRIORITY: OfflineNeeds = OfflineNeeds::Sometimes;

#[instrument(level = "debug", skip_all)]
pub fn derive_profile(answers: &QuestionnaireAnswer) -> LearningProfile {
  let profile = LearningProfile {
    primary_style: primary_style(answers),
    secondary_style: answers.information_processing.unwrap_or(DEFAULT_SECONDARY_STYLE),
    pace: pace(answers.focus_duration),
    environment: environment(answers.study_environment),
    motivation: answers.motivation_type.unwrap_or(DEFAULT_MOTIVATION),
    tech_level: answers.tech_comfort.unwrap_or(DEFAULT_TECH_LEVEL),
    offline_priority: answers.offline_needs.unwrap_or(DEFAULT_OFFLINE_PRIORITY),
    strengths: strengths(answers),
    challenges: challenges(answers),
  };
  debug!(
    target: "recommender",
    primary = ?profile.primary_style,
    pace = ?profile.pace,
    strengths = profile.strengths.len(),
    challenges = profile.challenges.len(),
    "Derived learning profile"
  );
  profile
}

fn primary_style(answers: &QuestionnaireAnswer) -> PrimaryStyle {
  match (answers.learning_style, answers.social_learning) {
    (Some(LearningStyle::Visual), _) => PrimaryStyle::Visual,
    (Some(LearningStyle::Auditory), _) => PrimaryStyle::Auditory,
    (Some(LearningStyle::Kinesthetic), _) => PrimaryStyle::Kinesthetic,
    (Some(LearningStyle::Reading), _) => PrimaryStyle::Reading,
    // Group preference only speaks when no style was picked.
    (None, Some(SocialLearning::PreferGroup)) => PrimaryStyle::Social,
    (None, _) => DEFAULT_PRIMARY_STYLE,
  }
}

fn pace(focus: Option<FocusDuration>) -> Pace {
  match focus {
    Some(FocusDuration::Short) => Pace::Slow,
    Some(FocusDuration::Medium) => Pace::Moderate,
    Some(FocusDuration::Long | FocusDuration::Extended) => Pace::Fast,
    None => DEFAULT_PACE,
  }
}

fn environment(env: Option<StudyEnvironment>) -> EnvironmentPreference {
  match env {
    Some(StudyEnvironment::Quiet) => EnvironmentPreference::Quiet,
    Some(StudyEnvironment::Active) => EnvironmentPreference::Active,
    Some(StudyEnvironment::Background | StudyEnvironment::Outdoor) | None => {
      EnvironmentPreference::Flexible
    }
  }
}

fn strengths(a: &QuestionnaireAnswer) -> Vec<String> {
  let checks = [
    (a.learning_style == Some(LearningStyle::Visual), "strong visual processing"),
    (a.information_processing == Some(InformationProcessing::Global), "big-picture thinking"),
    (a.problem_solving == Some(ProblemSolving::Creative), "creative problem-solving"),
    (a.memory_retention == Some(MemoryRetention::Association), "pattern recognition"),
    (a.confidence_level == Some(ConfidenceLevel::Very), "high tech confidence"),
    (a.social_learning == Some(SocialLearning::PreferGroup), "collaborative learning"),
  ];
  collect(&checks)
}

fn challenges(a: &QuestionnaireAnswer) -> Vec<String> {
  let checks = [
    (a.tech_comfort == Some(TechComfort::Learning), "needs initial tech support"),
    (a.focus_duration == Some(FocusDuration::Short), "benefits from micro-learning"),
    (a.confidence_level == Some(ConfidenceLevel::Nervous), "needs encouragement / gradual progression"),
    (a.internet_stability == Some(InternetStability::Unstable), "needs reliable offline options"),
  ];
  collect(&checks)
}

fn collect(checks: &[(bool, &str)]) -> Vec<String> {
  checks.iter().filter(|(hit, _)| *hit).map(|(_, s)| s.to_string()).collect()
}
