use anyhow::Result;
use std::env;

// Use library instead of local modules
use rental_billing::{Customer, MovieRegistry, PriceCategory, Rental, Statement};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut registry = if args.len() > 1 {
        // Load a movie catalog from a JSON file
        println!("📂 Loading catalog from {}...", args[1]);
        let registry = MovieRegistry::from_file(&args[1])?;
        println!("✓ Loaded {} movies", registry.count());
        registry
    } else {
        demo_registry()
    };

    let mut customer = Customer::new("Alice");
    for (title, days) in [("Interstellar", 3), ("2001", 1), ("Ad Astra", 10)] {
        if let Some(movie) = registry.find_by_title(title) {
            customer.add_rental(Rental::new(movie.id, days));
        }
    }

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{}\n", customer.statement(&registry));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{}\n", customer.html_statement(&registry));

    // Reprice Ad Astra now that its release week is over
    if let Some(movie) = registry.find_by_title("Ad Astra") {
        registry
            .reclassify(&movie.id, PriceCategory::Regular)
            .map_err(anyhow::Error::msg)?;
        println!("✓ Reclassified Ad Astra as Regular");

        let statement = Statement::collect(&customer, &registry);
        println!("✓ {}", statement.summary());
    }

    Ok(())
}

fn demo_registry() -> MovieRegistry {
    let mut registry = MovieRegistry::new();
    registry.add("Interstellar", PriceCategory::Children);
    registry.add("2001", PriceCategory::Regular);
    registry.add("Ad Astra", PriceCategory::NewRelease);
    registry
}
