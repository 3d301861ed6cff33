// 💰 Pricing Policy - Per-category charge and loyalty-point formulas
// Each movie carries a price category; the category alone determines
// the charge for a rental duration and the frequent-renter points earned.

use serde::{Deserialize, Serialize};

// ============================================================================
// PRICE CATEGORY
// ============================================================================

/// Price category governing charge and loyalty-point formulas.
///
/// A closed set: there is no "uncategorized" case, so a movie can never
/// reach the charge computation without a concrete pricing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceCategory {
    /// Standard back-catalog title
    Regular,

    /// Recently released title (premium per-day rate)
    NewRelease,

    /// Children's title (low base, long grace period)
    Children,
}

impl PriceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceCategory::Regular => "Regular",
            PriceCategory::NewRelease => "New Release",
            PriceCategory::Children => "Children",
        }
    }

    /// Charge for renting a title of this category for `days_rented` days.
    ///
    /// Formulas (floating-point, matching the billing contract):
    /// - Regular: 2.0 base, plus 1.5 per day after the second
    /// - New Release: 3.0 per day, no base
    /// - Children: 1.5 base, plus 1.5 per day after the third
    ///
    /// `days_rented` is not validated; negative values flow through the
    /// formulas unchanged.
    pub fn charge(&self, days_rented: i64) -> f64 {
        match self {
            PriceCategory::Regular => {
                let mut result = 2.0;
                if days_rented > 2 {
                    result += (days_rented - 2) as f64 * 1.5;
                }
                result
            }
            PriceCategory::NewRelease => days_rented as f64 * 3.0,
            PriceCategory::Children => {
                let mut result = 1.5;
                if days_rented > 3 {
                    result += (days_rented - 3) as f64 * 1.5;
                }
                result
            }
        }
    }

    /// Frequent-renter points earned for a rental of `days_rented` days.
    ///
    /// Every rental earns 1 point; a New Release kept for more than one
    /// day earns a bonus point.
    pub fn loyalty_points(&self, days_rented: i64) -> i64 {
        match self {
            PriceCategory::NewRelease if days_rented > 1 => 2,
            _ => 1,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
