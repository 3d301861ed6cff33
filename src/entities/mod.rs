// Entity Models
// "Identity persists, values change"
//
// - Movie: stable UUID identity, reclassifiable price category, versioned
// - Rental: immutable value pairing a movie id with a duration
// - Customer: owns an ordered rental list, aggregates charges and points

pub mod customer;
pub mod movie;
pub mod rental;

pub use customer::Customer;
pub use movie::{CatalogEntry, Movie, MovieRegistry};
pub use rental::Rental;
