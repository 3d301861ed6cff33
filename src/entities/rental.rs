// 🎞️ Rental - One movie rented for a number of days
// A rental is a value: movie id + duration, immutable after construction.
// Charges and points are derived at call time from the registry, never stored.

use serde::{Deserialize, Serialize};

use crate::entities::movie::MovieRegistry;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rental {
    /// Foreign key into the movie registry (non-owning)
    movie_id: String,

    /// Rental duration in days (not validated; negative values flow through
    /// the pricing formulas unchanged)
    days_rented: i64,
}

impl Rental {
    pub fn new(movie_id: impl Into<String>, days_rented: i64) -> Self {
        Rental {
            movie_id: movie_id.into(),
            days_rented,
        }
    }

    pub fn movie_id(&self) -> &str {
        &self.movie_id
    }

    pub fn days_rented(&self) -> i64 {
        self.days_rented
    }

    /// Charge for this rental against the movie's current classification.
    ///
    /// A rental whose movie is no longer in the registry charges 0.
    pub fn charge(&self, registry: &MovieRegistry) -> f64 {
        match registry.get_current_version(&self.movie_id) {
            Some(movie) => movie.charge(self.days_rented),
            None => 0.0,
        }
    }

    /// Frequent-renter points for this rental.
    ///
    /// A rental whose movie is no longer in the registry earns 0 points.
    pub fn loyalty_points(&self, registry: &MovieRegistry) -> i64 {
        match registry.get_current_version(&self.movie_id) {
            Some(movie) => movie.loyalty_points(self.days_rented),
            None => 0,
        }
    }
}
