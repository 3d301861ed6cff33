// 🎬 Movie Entity - Stable identity + reclassifiable pricing
//
// "Movie title and price category are VALUES (can change), Movie UUID is
// IDENTITY (never changes)"
//
// Problem solved:
// - A title can be repriced (New Release → Regular) after release week
// - Rentals reference movies by id, so a reclassification is visible to
//   every rental that points at the movie, past and future
// - UUID provides a stable foreign key for rentals

use anyhow::{Context as AnyhowContext, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock};

use crate::pricing::PriceCategory;

// ============================================================================
// MOVIE ENTITY
// ============================================================================

/// Movie Entity - identity/value separation
///
/// Identity: UUID (never changes)
/// Values: title, category (can change over time)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    /// Stable identity (UUID) - NEVER changes
    pub id: String,

    /// Movie title (no validation, empty string permitted)
    pub title: String,

    /// Price category in force for this version
    pub category: PriceCategory,

    // ========================================================================
    // VERSIONING (temporal tracking)
    // ========================================================================
    pub version: i64,
    pub system_time: DateTime<Utc>,
    pub valid_from: DateTime<Utc>,
    pub valid_until: Option<DateTime<Utc>>,

    // ========================================================================
    // METADATA (extensible)
    // ========================================================================
    pub metadata: serde_json::Value,
}

impl Movie {
    /// Create new movie entity with UUID
    pub fn new(title: impl Into<String>, category: PriceCategory) -> Self {
        let now = Utc::now();

        Movie {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            category,
            version: 1,
            system_time: now,
            valid_from: now,
            valid_until: None,
            metadata: serde_json::json!({}),
        }
    }

    /// Charge for renting this movie for `days_rented` days
    /// (delegates to the category in force on this version)
    pub fn charge(&self, days_rented: i64) -> f64 {
        self.category.charge(days_rented)
    }

    /// Frequent-renter points for renting this movie for `days_rented` days
    pub fn loyalty_points(&self, days_rented: i64) -> i64 {
        self.category.loyalty_points(days_rented)
    }

    /// Check if this version is current
    pub fn is_current(&self) -> bool {
        self.valid_until.is_none()
    }

    /// Create next version (for updating values)
    pub fn next_version(&self) -> Movie {
        let now = Utc::now();
        let mut next = self.clone();
        next.version += 1;
        next.valid_from = now;
        next.valid_until = None;
        next
    }
}

// ============================================================================
// CATALOG FILE FORMAT
// ============================================================================

/// One entry in a JSON catalog file: `{"title": "...", "category": "Regular"}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub title: String,
    pub category: PriceCategory,
}

// ============================================================================
// MOVIE REGISTRY
// ============================================================================

/// Registry of all known movies
///
/// Multi-version storage: stores ALL versions, never deletes.
///
/// Holds all Movie entities in memory and is the single owner of movie
/// state. Rentals hold movie ids, not movies, so every charge computation
/// reads the current version at call time.
pub struct MovieRegistry {
    /// ALL versions of all movies (append-only, never delete)
    versions: Arc<RwLock<Vec<Movie>>>,
}

impl MovieRegistry {
    /// Create new empty registry
    pub fn new() -> Self {
        MovieRegistry {
            versions: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Load a registry from a JSON catalog string
    pub fn from_json(content: &str) -> Result<Self> {
        let entries: Vec<CatalogEntry> =
            serde_json::from_str(content).context("Failed to parse catalog JSON")?;

        let mut registry = MovieRegistry::new();
        for entry in entries {
            registry.register(Movie::new(entry.title, entry.category));
        }
        Ok(registry)
    }

    /// Load a registry from a JSON catalog file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read catalog file: {:?}", path.as_ref()))?;

        Self::from_json(&content)
    }

    /// Register a new movie version (append-only, never overwrites)
    pub fn register(&mut self, movie: Movie) {
        let mut versions = self.versions.write().unwrap();
        versions.push(movie);
    }

    /// Register a new movie and return its id
    pub fn add(&mut self, title: impl Into<String>, category: PriceCategory) -> String {
        let movie = Movie::new(title, category);
        let id = movie.id.clone();
        self.register(movie);
        id
    }

    /// Get ALL versions of a movie by ID
    pub fn get_all_versions(&self, id: &str) -> Vec<Movie> {
        let versions = self.versions.read().unwrap();
        versions.iter().filter(|m| m.id == id).cloned().collect()
    }

    /// Get current version of a movie by ID
    pub fn get_current_version(&self, id: &str) -> Option<Movie> {
        let versions = self.versions.read().unwrap();
        versions
            .iter()
            .filter(|m| m.id == id && m.is_current())
            .cloned()
            .next()
    }

    /// Get movie as of a specific time (temporal query)
    pub fn get_movie_at_time(&self, id: &str, as_of: DateTime<Utc>) -> Option<Movie> {
        let versions = self.versions.read().unwrap();
        versions
            .iter()
            .filter(|m| m.id == id)
            .find(|m| {
                m.valid_from <= as_of
                    && (m.valid_until.is_none() || m.valid_until.unwrap() > as_of)
            })
            .cloned()
    }

    /// Update movie (creates new version, expires old version)
    pub fn update_movie<F>(&mut self, id: &str, mut update_fn: F) -> Result<(), String>
    where
        F: FnMut(&mut Movie),
    {
        let now = Utc::now();

        let current = self
            .get_current_version(id)
            .ok_or_else(|| format!("Movie not found: {}", id))?;

        let mut expired = current.clone();
        expired.valid_until = Some(now);

        let mut next = current.next_version();
        update_fn(&mut next);

        {
            let mut versions = self.versions.write().unwrap();
            versions.retain(|m| !(m.id == id && m.is_current()));
            versions.push(expired);
            versions.push(next);
        }

        Ok(())
    }

    /// Change a movie's price category (creates new version)
    ///
    /// The classification change applies to every rental referencing this
    /// movie from now on; charges are never cached.
    pub fn reclassify(&mut self, id: &str, category: PriceCategory) -> Result<(), String> {
        self.update_movie(id, |movie| movie.category = category)
    }

    /// Find movie by title (case-insensitive) - returns current version
    pub fn find_by_title(&self, title: &str) -> Option<Movie> {
        let versions = self.versions.read().unwrap();
        versions
            .iter()
            .filter(|m| m.is_current())
            .find(|m| m.title.eq_ignore_ascii_case(title))
            .cloned()
    }

    /// Find movie by UUID - returns current version
    pub fn find_by_id(&self, id: &str) -> Option<Movie> {
        self.get_current_version(id)
    }

    /// Get all movies (current versions only)
    pub fn all_movies(&self) -> Vec<Movie> {
        let versions = self.versions.read().unwrap();
        let mut current: Vec<Movie> =
            versions.iter().filter(|m| m.is_current()).cloned().collect();

        current.sort_by(|a, b| a.id.cmp(&b.id).then(b.version.cmp(&a.version)));
        current.dedup_by(|a, b| a.id == b.id);

        current
    }

    /// Count total movies (current versions only)
    pub fn count(&self) -> usize {
        self.all_movies().len()
    }

    /// Get movies by category (current versions only)
    pub fn by_category(&self, category: PriceCategory) -> Vec<Movie> {
        self.all_movies()
            .into_iter()
            .filter(|m| m.category == category)
            .collect()
    }
}

impl Default for MovieRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
