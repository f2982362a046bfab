//! Built-in course catalog. Guarantees the service is useful without external config.

use crate::domain::{
  ConfidenceLevel as Cf, Course, CourseFormat as Fmt, Difficulty, DnaMatch, FocusDuration as Fo,
  LearningStyle as Ls, MotivationType as Mo, StudyEnvironment as Env, TechComfort as Tc,
};

fn strings(v: &[&str]) -> Vec<String> {
  v.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn course(
  id: &str,
  title: &str,
  description: &str,
  instructor: &str,
  category: &[&str],
  tags: &[&str],
  difficulty: Difficulty,
  (duration_weeks, lessons, popularity, rating): (u32, u32, u32, f32),
  format: &[Fmt],
  offline_available: bool,
  language: &[&str],
  dna_match: DnaMatch,
) -> Course {
  Course {
    id: id.into(),
    title: title.into(),
    description: description.into(),
    instructor: instructor.into(),
    category: strings(category),
    tags: strings(tags),
    difficulty,
    duration_weeks,
    lessons,
    popularity,
    rating,
    format: format.to_vec(),
    offline_available,
    language: strings(language),
    dna_match,
  }
}

pub fn seed_courses() -> Vec<Course> {
  vec![
    course(
      "digital-literacy-basics",
      "Digital Literacy Basics",
      "Use a smartphone confidently: calls, messages, photos and staying safe online.",
      "Anita Sharma",
      &["technology", "life-skills"],
      &["smartphone", "internet safety", "beginner"],
      Difficulty::Beginner,
      (4, 16, 95, 4.8),
      &[Fmt::Video, Fmt::MobileFriendly, Fmt::OfflineDownload],
      true,
      &["hi", "en", "pa"],
      DnaMatch {
        learning_style: vec![Ls::Visual, Ls::Kinesthetic],
        motivation_type: vec![Mo::Practical, Mo::Achievement],
        environment: vec![Env::Quiet, Env::Background],
        technical: vec![Tc::Learning, Tc::Basic],
        focus_duration: vec![Fo::Short, Fo::Medium],
        confidence_level: vec![Cf::Nervous, Cf::Cautious],
      },
    ),
    course(
      "modern-farming-techniques",
      "Modern Farming Techniques",
      "Soil health, drip irrigation and crop rotation for higher, steadier yields.",
      "Rajesh Patel",
      &["agriculture"],
      &["crops", "irrigation", "soil"],
      Difficulty::Intermediate,
      (6, 24, 88, 4.6),
      &[Fmt::Video, Fmt::Audio, Fmt::MobileFriendly],
      true,
      &["hi", "gu", "mr"],
      DnaMatch {
        learning_style: vec![Ls::Kinesthetic, Ls::Visual],
        motivation_type: vec![Mo::Practical],
        environment: vec![Env::Outdoor, Env::Active],
        technical: vec![Tc::Basic, Tc::Comfortable],
        focus_duration: vec![Fo::Medium, Fo::Long],
        confidence_level: vec![Cf::Confident, Cf::Cautious],
      },
    ),
    course(
      "financial-literacy",
      "Money Management for Families",
      "Budgeting, savings groups, bank accounts and avoiding high-interest debt.",
      "Meera Iyer",
      &["finance", "life-skills"],
      &["budget", "savings", "banking"],
      Difficulty::Beginner,
      (3, 12, 82, 4.7),
      &[Fmt::Audio, Fmt::Text, Fmt::MobileFriendly],
      true,
      &["hi", "ta", "te"],
      DnaMatch {
        learning_style: vec![Ls::Auditory, Ls::Reading],
        motivation_type: vec![Mo::Practical, Mo::Achievement],
        environment: vec![Env::Quiet],
        technical: vec![Tc::Learning, Tc::Basic],
        focus_duration: vec![Fo::Short],
        confidence_level: vec![Cf::Cautious, Cf::Nervous],
      },
    ),
    course(
      "community-health-worker",
      "Community Health Essentials",
      "First aid, hygiene, maternal care and when to refer patients to a clinic.",
      "Dr. Sunita Rao",
      &["health"],
      &["first aid", "hygiene", "nutrition"],
      Difficulty::Intermediate,
      (8, 32, 76, 4.5),
      &[Fmt::Video, Fmt::Interactive, Fmt::OfflineDownload],
      true,
      &["hi", "bn", "en"],
      DnaMatch {
        learning_style: vec![Ls::Visual, Ls::Auditory],
        motivation_type: vec![Mo::Social, Mo::Practical],
        environment: vec![Env::Active, Env::Quiet],
        technical: vec![Tc::Basic],
        focus_duration: vec![Fo::Medium],
        confidence_level: vec![Cf::Confident, Cf::Very],
      },
    ),
    course(
      "spoken-english",
      "Everyday Spoken English",
      "Conversation practice for markets, offices and travel with audio drills.",
      "Thomas George",
      &["language"],
      &["english", "conversation", "speaking"],
      Difficulty::Beginner,
      (10, 40, 90, 4.4),
      &[Fmt::Audio, Fmt::Interactive, Fmt::MobileFriendly],
      false,
      &["en", "hi"],
      DnaMatch {
        learning_style: vec![Ls::Auditory],
        motivation_type: vec![Mo::Achievement, Mo::Social],
        environment: vec![Env::Background, Env::Active],
        technical: vec![Tc::Basic, Tc::Comfortable],
        focus_duration: vec![Fo::Short, Fo::Medium],
        confidence_level: vec![Cf::Nervous, Cf::Cautious, Cf::Confident],
      },
    ),
    course(
      "small-business-startup",
      "Starting a Village Enterprise",
      "From idea to first sale: pricing, record keeping and government schemes.",
      "Vikram Singh",
      &["business", "finance"],
      &["entrepreneurship", "marketing", "schemes"],
      Difficulty::Intermediate,
      (6, 20, 70, 4.3),
      &[Fmt::Video, Fmt::Text, Fmt::Live],
      false,
      &["hi", "pa", "en"],
      DnaMatch {
        learning_style: vec![Ls::Reading, Ls::Visual],
        motivation_type: vec![Mo::Achievement, Mo::Practical],
        environment: vec![Env::Quiet],
        technical: vec![Tc::Basic, Tc::Comfortable],
        focus_duration: vec![Fo::Medium, Fo::Long],
        confidence_level: vec![Cf::Confident, Cf::Very],
      },
    ),
    course(
      "solar-energy-technician",
      "Solar Energy Technician",
      "Install and maintain solar panels, batteries and pumps for homes and farms.",
      "Arjun Mehta",
      &["technology", "vocational"],
      &["solar", "electrical", "maintenance"],
      Difficulty::Advanced,
      (12, 48, 64, 4.6),
      &[Fmt::Video, Fmt::Interactive],
      false,
      &["en", "hi"],
      DnaMatch {
        learning_style: vec![Ls::Kinesthetic],
        motivation_type: vec![Mo::Practical, Mo::Curiosity],
        environment: vec![Env::Outdoor, Env::Active],
        technical: vec![Tc::Comfortable, Tc::Expert],
        focus_duration: vec![Fo::Long, Fo::Extended],
        confidence_level: vec![Cf::Confident, Cf::Very],
      },
    ),
    course(
      "basic-mathematics",
      "Practical Mathematics",
      "Numbers, measurement and percentages through farm and shop examples.",
      "Lakshmi Nair",
      &["academics"],
      &["math", "numeracy"],
      Difficulty::Beginner,
      (5, 25, 80, 4.5),
      &[Fmt::Video, Fmt::Text, Fmt::MobileFriendly, Fmt::OfflineDownload],
      true,
      &["hi", "mr", "te"],
      DnaMatch {
        learning_style: vec![Ls::Visual, Ls::Reading],
        motivation_type: vec![Mo::Achievement, Mo::Curiosity],
        environment: vec![Env::Quiet],
        technical: vec![Tc::Learning, Tc::Basic],
        focus_duration: vec![Fo::Short, Fo::Medium],
        confidence_level: vec![Cf::Nervous, Cf::Cautious],
      },
    ),
    course(
      "coding-for-beginners",
      "Coding for Beginners",
      "Write your first programs and build a simple web page on a shared computer.",
      "Priya Desai",
      &["technology"],
      &["programming", "web", "computers"],
      Difficulty::Intermediate,
      (8, 30, 72, 4.4),
      &[Fmt::Video, Fmt::Interactive],
      false,
      &["en"],
      DnaMatch {
        learning_style: vec![Ls::Visual, Ls::Kinesthetic],
        motivation_type: vec![Mo::Curiosity, Mo::Achievement],
        environment: vec![Env::Quiet],
        technical: vec![Tc::Comfortable, Tc::Expert],
        focus_duration: vec![Fo::Long, Fo::Extended],
        confidence_level: vec![Cf::Confident, Cf::Very],
      },
    ),
    course(
      "women-leadership",
      "Leadership for Self-Help Groups",
      "Run meetings, resolve conflicts and lead collective savings and enterprise.",
      "Kavita Joshi",
      &["life-skills", "business"],
      &["leadership", "community", "self-help group"],
      Difficulty::Advanced,
      (6, 18, 60, 4.7),
      &[Fmt::Audio, Fmt::Live, Fmt::MobileFriendly],
      true,
      &["hi", "bn", "ta"],
      DnaMatch {
        learning_style: vec![Ls::Auditory, Ls::Kinesthetic],
        motivation_type: vec![Mo::Social, Mo::Achievement],
        environment: vec![Env::Active, Env::Background],
        technical: vec![Tc::Basic],
        focus_duration: vec![Fo::Medium, Fo::Long],
        confidence_level: vec![Cf::Cautious, Cf::Confident],
      },
    ),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn seed_ids_are_unique_and_criteria_filled() {
    let courses = seed_courses();
    let ids: HashSet<_> = courses.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids.len(), courses.len());
    assert!(courses.iter().all(|c| !c.dna_match.learning_style.is_empty() && !c.dna_match.technical.is_empty()));
  }
}
