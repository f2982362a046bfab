//! Read-only course catalog and its query surface.
//!
//! Built once at startup and shared behind an `Arc`; every query preserves catalog order.

use std::collections::HashSet;

use tracing::{instrument, warn};

use crate::domain::{Course, Difficulty};
use crate::util::normalize_query;

#[derive(Clone, Debug, Default)]
pub struct Catalog {
  courses: Vec<Course>,
}

impl Catalog {
  /// Build a catalog, keeping the first course seen for any duplicated id.
  pub fn from_courses<I: IntoIterator<Item = Course>>(courses: I) -> Self {
    let mut seen = HashSet::new();
    let mut kept = Vec::new();
    for c in courses {
      if seen.insert(c.id.clone()) {
        kept.push(c);
      } else {
        warn!(target: "recommender", id = %c.id, "Skipping course with duplicate id");
      }
    }
    Self { courses: kept }
  }

  pub fn all(&self) -> &[Course] {
    &self.courses
  }

  pub fn len(&self) -> usize {
    self.courses.len()
  }

  pub fn is_empty(&self) -> bool {
    self.courses.is_empty()
  }

  #[instrument(level = "debug", skip(self))]
  pub fn get_course_by_id(&self, id: &str) -> Option<&Course> {
    self.courses.iter().find(|c| c.id == id)
  }

  #[instrument(level = "debug", skip(self))]
  pub fn get_courses_by_category(&self, category: &str) -> Vec<&Course> {
    self.courses.iter().filter(|c| c.category.iter().any(|t| t == category)).collect()
  }

  #[instrument(level = "debug", skip(self))]
  pub fn get_courses_by_difficulty(&self, difficulty: Difficulty) -> Vec<&Course> {
    self.courses.iter().filter(|c| c.difficulty == difficulty).collect()
  }

  /// Most popular first; `sort_by` is stable so equal popularity keeps catalog order.
  #[instrument(level = "debug", skip(self))]
  pub fn get_popular_courses(&self, limit: usize) -> Vec<&Course> {
    let mut out: Vec<&Course> = self.courses.iter().collect();
    out.sort_by(|a, b| b.popularity.cmp(&a.popularity));
    out.truncate(limit);
    out
  }

  /// Case-insensitive substring search over title, description, tags and category.
  #[instrument(level = "debug", skip(self))]
  pub fn search_courses(&self, query: &str) -> Vec<&Course> {
    let needle = normalize_query(query);
    if needle.is_empty() {
      return Vec::new();
    }
    self
      .courses
      .iter()
      .filter(|c| {
        c.title.to_lowercase().contains(&needle)
          || c.description.to_lowercase().contains(&needle)
          || c.tags.iter().chain(c.category.iter()).any(|t| t.to_lowercase().contains(&needle))
      })
      .collect()
  }
}
