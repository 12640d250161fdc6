#![forbid(unsafe_code)]

use std::error::Error;

use tracing_subscriber::EnvFilter;

use carbonledger::{
    format_kg, format_tonnes, Category, DeliverySpeed, PurchaseInput, PurchaseSession,
};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Example purchases a form session might submit.
    let purchases = vec![
        PurchaseInput {
            name: "AirPods Pro".into(),
            category: Category::Electronics,
            price_usd: 249.0,
            quantity: 1,
            weight_kg: 0.3,
            distance_km: 9000.0,
            speed: DeliverySpeed::Express,
            donate_offset: false,
        },
        PurchaseInput {
            name: "Red T-shirt".into(),
            category: Category::FastFashion,
            price_usd: 19.99,
            quantity: 3,
            weight_kg: 0.6,
            distance_km: 400.0,
            speed: DeliverySpeed::Standard,
            donate_offset: true,
        },
        PurchaseInput {
            name: "Oak bookshelf".into(),
            category: Category::Furniture,
            price_usd: 740.0,
            quantity: 1,
            weight_kg: 42.0,
            distance_km: 120.0,
            speed: DeliverySpeed::SameDay,
            donate_offset: false,
        },
    ];

    let mut session = PurchaseSession::new();
    println!("session {}", session.session_id());
    println!("---");

    for purchase in purchases {
        let outcome = session.submit(purchase)?;

        println!(
            "{}: {} ({})",
            outcome.record.input.name,
            format_kg(outcome.estimate.kg_co2e),
            format_tonnes(outcome.estimate.kg_co2e)
        );
        println!(
            "  ~{:.0} km by car, ~{:.1} tree-years, ~{:.0} phone charges",
            outcome.equivalents.car_km,
            outcome.equivalents.tree_years,
            outcome.equivalents.phone_charges
        );
        println!("  {}", outcome.commentary.sarcasm);
        println!("  tip: {}", outcome.commentary.tip);
        println!("---");
    }

    println!("recent calculations (this session):");
    for record in session.history().all() {
        println!(
            "{},{},{},{},{:.3}",
            record.seq,
            record.recorded_at.to_rfc3339(),
            record.input.name,
            record.input.category.label(),
            record.estimate.kg_co2e
        );
    }

    Ok(())
}
