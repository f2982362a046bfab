//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs parameters and basic result info.

use std::sync::Arc;
use axum::{
  extract::{Path, Query, State},
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use tracing::{info, instrument, warn};

use crate::domain::QuestionnaireAnswer;
use crate::logic::*;
use crate::profile::derive_profile;
use crate::protocol::*;
use crate::state::AppState;
use crate::util::clamp_limit;

#[instrument(level = "info", skip(state))]
pub async fn http_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  Json(HealthOut { ok: true, courses: state.catalog.len() })
}

#[instrument(level = "info", skip(answers))]
pub async fn http_post_profile(Json(answers): Json<QuestionnaireAnswer>) -> impl IntoResponse {
  Json(derive_profile(&answers))
}

#[instrument(level = "info", skip(state, answers), fields(limit = ?q.limit))]
pub async fn http_post_recommendations(
  State(state): State<Arc<AppState>>,
  Query(q): Query<LimitQuery>,
  Json(answers): Json<QuestionnaireAnswer>,
) -> impl IntoResponse {
  let limit = clamp_limit(q.limit, state.settings.default_limit);
  let out = state.recommender.recommend(&answers, limit);
  info!(target: "recommender", limit, returned = out.len(), "HTTP recommendations served");
  Json(out)
}

#[instrument(level = "info", skip(state, answers), fields(limit = ?q.limit))]
pub async fn http_post_analyze(
  State(state): State<Arc<AppState>>,
  Query(q): Query<LimitQuery>,
  Json(answers): Json<QuestionnaireAnswer>,
) -> impl IntoResponse {
  let limit = clamp_limit(q.limit, state.settings.default_limit);
  Json(analyze_dna(&state, &answers, limit))
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_courses(
  State(state): State<Arc<AppState>>,
  Query(filter): Query<CourseFilter>,
) -> impl IntoResponse {
  let out = list_courses(&state, &filter);
  info!(target: "dna_backend", returned = out.len(), "HTTP course listing served");
  Json(out)
}

#[instrument(level = "info", skip(state), fields(limit = ?q.limit))]
pub async fn http_get_popular(
  State(state): State<Arc<AppState>>,
  Query(q): Query<LimitQuery>,
) -> impl IntoResponse {
  let limit = clamp_limit(q.limit, state.settings.default_limit);
  Json(popular_courses(&state, limit))
}

#[instrument(level = "info", skip(state), fields(%id))]
pub async fn http_get_course(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
  match course_by_id(&state, &id) {
    Some(course) => Json(course).into_response(),
    None => {
      warn!(target: "dna_backend", %id, "Unknown course id");
      (StatusCode::NOT_FOUND, Json(ErrorOut { error: format!("Unknown course id: {id}") })).into_response()
    }
  }
}
