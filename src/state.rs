//! Application state: the read-only course catalog and the recommender bound to it.
//!
//! Built once at startup:
//!   - courses from CATALOG_CONFIG_PATH (if any) come first
//!   - built-in seed courses are appended unless disabled, never overwriting an id
//!
//! Nothing here is mutated after construction, so handlers share it without locks.

use std::{collections::BTreeMap, sync::Arc};
use tracing::{info, instrument, warn};

use crate::catalog::Catalog;
use crate::config::{load_catalog_config_from_env, CatalogConfig, RecommenderSettings};
use crate::scoring::Recommender;
use crate::seeds::seed_courses;

#[derive(Clone, Debug)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub recommender: Recommender,
    pub settings: RecommenderSettings,
}

impl AppState {
    /// Build state from env: load config, merge the built-in catalog, bind the recommender.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        Self::from_config(load_catalog_config_from_env())
    }

    pub fn from_config(cfg: Option<CatalogConfig>) -> Self {
        let CatalogConfig { recommender: settings, courses } = cfg.unwrap_or_default();

        let mut all = courses;
        if settings.include_builtin {
            all.extend(seed_courses());
        }
        let catalog = Arc::new(Catalog::from_courses(all));

        if catalog.is_empty() {
            warn!(target: "dna_backend", "Course catalog is empty; recommendations will be empty");
        }

        // Inventory summary by difficulty.
        let mut by_difficulty: BTreeMap<String, usize> = BTreeMap::new();
        for c in catalog.all() {
            *by_difficulty.entry(format!("{:?}", c.difficulty)).or_default() += 1;
        }
        for (difficulty, count) in by_difficulty {
            info!(target: "dna_backend", %difficulty, count, "Startup catalog inventory");
        }
        info!(
            target: "dna_backend",
            total = catalog.len(),
            default_limit = settings.default_limit,
            languages = ?settings.preferred_languages,
            "Catalog ready"
        );

        let recommender = Recommender::new(catalog.clone(), settings.preferred_languages.clone());
        Self { catalog, recommender, settings }
    }
}
