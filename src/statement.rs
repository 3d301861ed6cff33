// 🧾 Statement - Rental record rendering (text + HTML)
//
// A statement is assembled as data first (one line per rental, plus totals),
// then rendered. Both renderers read the movie registry at call time, so a
// statement always reflects the current classification of every movie.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::customer::Customer;
use crate::entities::movie::MovieRegistry;

/// Title shown for a rental whose movie is no longer registered
const UNKNOWN_TITLE: &str = "(unknown)";

// ============================================================================
// STATEMENT DATA
// ============================================================================

/// One statement line: a rented title and what it cost
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementLine {
    pub title: String,
    pub charge: f64,
    pub loyalty_points: i64,
}

/// A customer's rental record, ready to render
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statement {
    pub customer_name: String,
    pub lines: Vec<StatementLine>,
    pub total_charge: f64,
    pub total_points: i64,
    pub generated_at: DateTime<Utc>,
}

impl Statement {
    /// Assemble a statement from a customer's rentals and the registry.
    ///
    /// Lines keep the rental insertion order. Each movie is resolved once;
    /// a rental whose movie id no longer resolves contributes a zero-charge
    /// line (silent, no error).
    pub fn collect(customer: &Customer, registry: &MovieRegistry) -> Statement {
        let mut lines = Vec::with_capacity(customer.rentals().len());
        let mut total_charge = 0.0;
        let mut total_points = 0;

        for rental in customer.rentals() {
            let (title, charge, points) = match registry.get_current_version(rental.movie_id()) {
                Some(movie) => (
                    movie.title.clone(),
                    movie.charge(rental.days_rented()),
                    movie.loyalty_points(rental.days_rented()),
                ),
                None => (UNKNOWN_TITLE.to_string(), 0.0, 0),
            };

            total_charge += charge;
            total_points += points;
            lines.push(StatementLine {
                title,
                charge,
                loyalty_points: points,
            });
        }

        Statement {
            customer_name: customer.name().to_string(),
            lines,
            total_charge,
            total_points,
            generated_at: Utc::now(),
        }
    }

    /// Render the plain-text rental record.
    ///
    /// Format (no trailing newline):
    /// ```text
    /// Rental Record for <name>
    /// \t<title>\t<charge>
    /// Amount owed is <total>
    /// You earned <points> frequent renter points
    /// ```
    pub fn render_text(&self) -> String {
        let mut result = format!("Rental Record for {}\n", self.customer_name);

        for line in &self.lines {
            // show figures for this rental
            result.push_str(&format!("\t{}\t{}\n", line.title, line.charge));
        }

        // add footer lines
        result.push_str(&format!(
            "Amount owed is {}\nYou earned {} frequent renter points",
            self.total_charge, self.total_points
        ));

        result
    }

    /// Render the HTML rental record.
    pub fn render_html(&self) -> String {
        let mut result = format!(
            "<h1>Rental Record for <strong>{}</strong></h1>\n",
            self.customer_name
        );

        result.push_str("<ul>");

        for line in &self.lines {
            result.push_str(&format!("<li>{}: {}</li>", line.title, line.charge));
        }

        result.push_str("</ul>");

        // add footer lines
        result.push_str(&format!(
            "<p>Amount owed is <strong>{}</strong>.<br/>You earned {} frequent renter points</p>",
            self.total_charge, self.total_points
        ));

        result
    }

    /// One-line description for logs and CLI output
    pub fn summary(&self) -> String {
        format!(
            "Statement for {}: {} rentals, {} owed, {} points",
            self.customer_name,
            self.lines.len(),
            self.total_charge,
            self.total_points
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::rental::Rental;
    use crate::pricing::PriceCategory;

    /// Canonical fixture: Alice rents three movies across all categories
    fn alice_fixture() -> (Customer, MovieRegistry) {
        let mut registry = MovieRegistry::new();
        let interstellar = registry.add("Interstellar", PriceCategory::Children);
        let space_odyssey = registry.add("2001", PriceCategory::Regular);
        let ad_astra = registry.add("Ad Astra", PriceCategory::NewRelease);

        let mut customer = Customer::new("Alice");
        customer.add_rental(Rental::new(interstellar, 3));
        customer.add_rental(Rental::new(space_odyssey, 1));
        customer.add_rental(Rental::new(ad_astra, 10));

        (customer, registry)
    }

    #[test]
    fn test_text_statement_canonical() {
        let (customer, registry) = alice_fixture();

        let expected = "Rental Record for Alice\n\
                        \tInterstellar\t1.5\n\
                        \t2001\t2\n\
                        \tAd Astra\t30\n\
                        Amount owed is 33.5\n\
                        You earned 4 frequent renter points";

        assert_eq!(customer.statement(&registry), expected);
    }

    #[test]
    fn test_html_statement_canonical() {
        let (customer, registry) = alice_fixture();

        let expected = "<h1>Rental Record for <strong>Alice</strong></h1>\n\
                        <ul><li>Interstellar: 1.5</li><li>2001: 2</li><li>Ad Astra: 30</li></ul>\
                        <p>Amount owed is <strong>33.5</strong>.<br/>\
                        You earned 4 frequent renter points</p>";

        assert_eq!(customer.html_statement(&registry), expected);
    }

    #[test]
    fn test_statement_no_rentals() {
        let registry = MovieRegistry::new();
        let customer = Customer::new("Bob");

        assert_eq!(
            customer.statement(&registry),
            "Rental Record for Bob\nAmount owed is 0\nYou earned 0 frequent renter points"
        );
        assert_eq!(
            customer.html_statement(&registry),
            "<h1>Rental Record for <strong>Bob</strong></h1>\n\
             <ul></ul><p>Amount owed is <strong>0</strong>.<br/>\
             You earned 0 frequent renter points</p>"
        );
    }

    #[test]
    fn test_statement_idempotent() {
        let (customer, registry) = alice_fixture();

        assert_eq!(customer.statement(&registry), customer.statement(&registry));
        assert_eq!(
            customer.html_statement(&registry),
            customer.html_statement(&registry)
        );
    }

    #[test]
    fn test_statement_reflects_new_rentals() {
        let (mut customer, mut registry) = alice_fixture();
        let first = customer.statement(&registry);

        // No caching: a rental added after rendering shows up next time
        let solaris = registry.add("Solaris", PriceCategory::Regular);
        customer.add_rental(Rental::new(solaris, 2));
        let second = customer.statement(&registry);

        assert_ne!(first, second);
        assert!(second.contains("\tSolaris\t2\n"));
        assert!(second.contains("Amount owed is 35.5"));
    }

    #[test]
    fn test_statement_reflects_reclassification() {
        let (customer, mut registry) = alice_fixture();

        let ad_astra = registry.find_by_title("Ad Astra").unwrap().id;
        registry
            .reclassify(&ad_astra, PriceCategory::Regular)
            .unwrap();

        // 10 days as Regular: 2.0 + 8 * 1.5 = 14, one point instead of two
        let statement = customer.statement(&registry);
        assert!(statement.contains("\tAd Astra\t14\n"));
        assert!(statement.contains("Amount owed is 17.5"));
        assert!(statement.contains("You earned 3 frequent renter points"));
    }

    #[test]
    fn test_statement_dangling_rental() {
        let registry = MovieRegistry::new();
        let mut customer = Customer::new("Carol");
        customer.add_rental(Rental::new("gone-from-catalog", 5));

        assert_eq!(
            customer.statement(&registry),
            "Rental Record for Carol\n\
             \t(unknown)\t0\n\
             Amount owed is 0\n\
             You earned 0 frequent renter points"
        );
    }

    #[test]
    fn test_collect_exposes_totals() {
        let (customer, registry) = alice_fixture();
        let statement = Statement::collect(&customer, &registry);

        assert_eq!(statement.lines.len(), 3);
        assert_eq!(statement.total_charge, 33.5);
        assert_eq!(statement.total_points, 4);
        assert_eq!(
            statement.summary(),
            "Statement for Alice: 3 rentals, 33.5 owed, 4 points"
        );
    }
}
