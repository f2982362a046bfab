//! Domain models: questionnaire option sets, the answer record, and catalog courses.
//!
//! Every categorical value is a closed enum so that scoring matches are exhaustive.

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

macro_rules! options {
  ($(#[$meta:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
    $(#[$meta])*
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum $name { $($variant),+ }
  };
}

options!(LearningStyle { Visual, Auditory, Kinesthetic, Reading });
options!(InformationProcessing { Sequential, Global, Analytical, Intuitive });
options!(MemoryRetention { Repetition, Association, Visualization, Practice });
options!(ProblemSolving { Logical, Creative, Collaborative, Experimental });
options!(MotivationType { Achievement, Curiosity, Social, Practical });
options!(StressResponse { Thrive, Manage, Struggle, Avoid });
options!(ConfidenceLevel { Very, Confident, Cautious, Nervous });
options!(SocialLearning { PreferAlone, PreferGroup, Flexible, OneOnOne });
options!(StudyEnvironment { Quiet, Background, Active, Outdoor });
options!(EnergyPattern { Morning, Afternoon, Evening, Night });
options!(FocusDuration { Short, Medium, Long, Extended });
options!(
  /// Declared in ascending order: the derived `Ord` is the technical ladder.
  TechComfort { Learning, Basic, Comfortable, Expert }
);
options!(DeviceUsage { Smartphone, Computer, Tablet, Shared });
options!(InternetStability { Stable, Intermittent, Unstable, Offline });
options!(OfflineNeeds { Critical, Important, Sometimes, Rarely });

impl TechComfort {
  /// Position on the ladder `learning < basic < comfortable < expert`.
  pub fn rank(self) -> usize {
    match self {
      TechComfort::Learning => 0,
      TechComfort::Basic => 1,
      TechComfort::Comfortable => 2,
      TechComfort::Expert => 3,
    }
  }
}

/// Accepts any value for a known key; anything outside the option set reads as unanswered.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
  D: Deserializer<'de>,
  T: DeserializeOwned,
{
  let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
  Ok(raw.and_then(|v| serde_json::from_value(v).ok()))
}

/// One learner's questionnaire submission ("DNA answers").
/// Every key is optional; `None` means "no opinion".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireAnswer {
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub learning_style: Option<LearningStyle>,
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub information_processing: Option<InformationProcessing>,
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub memory_retention: Option<MemoryRetention>,
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub problem_solving: Option<ProblemSolving>,
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub motivation_type: Option<MotivationType>,
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub stress_response: Option<StressResponse>,
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub confidence_level: Option<ConfidenceLevel>,
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub social_learning: Option<SocialLearning>,
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub study_environment: Option<StudyEnvironment>,
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub energy_patterns: Option<EnergyPattern>,
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub focus_duration: Option<FocusDuration>,
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub tech_comfort: Option<TechComfort>,
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub device_usage: Option<DeviceUsage>,
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub internet_stability: Option<InternetStability>,
  #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
  pub offline_needs: Option<OfflineNeeds>,
}

impl QuestionnaireAnswer {
  /// True when not a single question was answered.
  pub fn is_empty(&self) -> bool {
    *self == QuestionnaireAnswer::default()
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
  Beginner,
  Intermediate,
  Advanced,
}

/// Delivery formats a course is offered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseFormat {
  Video,
  Audio,
  Text,
  Interactive,
  MobileFriendly,
  OfflineDownload,
  Live,
}

/// Per-course scoring criteria. An empty list never matches.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnaMatch {
  #[serde(default)] pub learning_style: Vec<LearningStyle>,
  #[serde(default)] pub motivation_type: Vec<MotivationType>,
  #[serde(default)] pub environment: Vec<StudyEnvironment>,
  #[serde(default)] pub technical: Vec<TechComfort>,
  #[serde(default)] pub focus_duration: Vec<FocusDuration>,
  #[serde(default)] pub confidence_level: Vec<ConfidenceLevel>,
}

/// Immutable catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
  pub id: String,
  pub title: String,
  #[serde(default)] pub description: String,
  #[serde(default)] pub instructor: String,
  #[serde(default)] pub category: Vec<String>,
  #[serde(default)] pub tags: Vec<String>,
  pub difficulty: Difficulty,
  #[serde(default)] pub duration_weeks: u32,
  #[serde(default)] pub lessons: u32,
  #[serde(default)] pub popularity: u32,
  #[serde(default)] pub rating: f32,
  #[serde(default)] pub format: Vec<CourseFormat>,
  #[serde(default)] pub offline_available: bool,
  #[serde(default)] pub language: Vec<String>,
  #[serde(default)] pub dna_match: DnaMatch,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn answers_read_camel_case_keys_and_snake_case_values() {
    let a: QuestionnaireAnswer = serde_json::from_str(
      r#"{"learningStyle":"visual","socialLearning":"prefer_group","techComfort":"expert"}"#,
    )
    .expect("parse");
    assert_eq!(a.learning_style, Some(LearningStyle::Visual));
    assert_eq!(a.social_learning, Some(SocialLearning::PreferGroup));
    assert_eq!(a.tech_comfort, Some(TechComfort::Expert));
    assert_eq!(a.motivation_type, None);
  }

  #[test]
  fn unknown_keys_and_values_are_ignored() {
    let a: QuestionnaireAnswer = serde_json::from_str(
      r#"{"favouriteColour":"blue","learningStyle":"telepathic","focusDuration":42,"deviceUsage":"tablet"}"#,
    )
    .expect("parse");
    assert_eq!(a.learning_style, None);
    assert_eq!(a.focus_duration, None);
    assert_eq!(a.device_usage, Some(DeviceUsage::Tablet));
  }

  #[test]
  fn empty_object_is_an_empty_questionnaire() {
    let a: QuestionnaireAnswer = serde_json::from_str("{}").expect("parse");
    assert!(a.is_empty());
    let b = QuestionnaireAnswer { offline_needs: Some(OfflineNeeds::Rarely), ..Default::default() };
    assert!(!b.is_empty());
  }

  #[test]
  fn tech_ladder_is_ordered() {
    assert!(TechComfort::Learning < TechComfort::Expert);
    assert_eq!(TechComfort::Comfortable.rank(), 2);
  }

  #[test]
  fn course_defaults_missing_lists() {
    let c: Course = serde_json::from_str(
      r#"{"id":"x","title":"X","difficulty":"beginner","format":["mobile-friendly"]}"#,
    )
    .expect("parse");
    assert_eq!(c.format, vec![CourseFormat::MobileFriendly]);
    assert!(c.dna_match.learning_style.is_empty());
    assert!(!c.offline_available);
  }
}
