// 👤 Customer - Ordered rental list + aggregation
// A customer owns its rentals; movies stay in the registry. Totals and
// statements are recomputed from scratch on every call.

use serde::{Deserialize, Serialize};

use crate::entities::movie::MovieRegistry;
use crate::entities::rental::Rental;
use crate::statement::Statement;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Customer name (no validation)
    name: String,

    /// Rentals in insertion order; order drives statement line order.
    /// Append-only, no duplicate detection, no capacity limit.
    rentals: Vec<Rental>,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Customer {
            name: name.into(),
            rentals: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rentals(&self) -> &[Rental] {
        &self.rentals
    }

    /// Record a rental at the end of the list
    pub fn add_rental(&mut self, rental: Rental) {
        self.rentals.push(rental);
    }

    /// Total charge across all rentals (floating-point sum in list order)
    pub fn total_charge(&self, registry: &MovieRegistry) -> f64 {
        self.rentals.iter().map(|r| r.charge(registry)).sum()
    }

    /// Total frequent-renter points across all rentals (exact integer sum)
    pub fn total_loyalty_points(&self, registry: &MovieRegistry) -> i64 {
        self.rentals
            .iter()
            .map(|r| r.loyalty_points(registry))
            .sum()
    }

    /// Plain-text rental record (exact report format)
    pub fn statement(&self, registry: &MovieRegistry) -> String {
        Statement::collect(self, registry).render_text()
    }

    /// HTML rental record (exact report format)
    pub fn html_statement(&self, registry: &MovieRegistry) -> String {
        Statement::collect(self, registry).render_html()
    }
}

// ============================================================================
// TESTS
// ============================================================================
