//! # Seed Data Generator
//!
//! Populates the database with development data: lookup options, sellers,
//! customers, and a pod catalog.
//!
//! ## Usage
//! ```bash
//! # Seed the default dev database
//! cargo run -p shopfront-db --bin seed
//!
//! # Specify database path and product count
//! cargo run -p shopfront-db --bin seed -- --db ./shop_dev.db --count 200
//! ```

use std::env;

use shopfront_core::{Category, CategoryRef, Customer, LookupEntry, LookupKind, Money, PodDetails, Product, Seller};
use shopfront_db::{Database, DbConfig};

const FLAVORS: &[&str] = &[
    "Mint", "Grape", "Watermelon", "Blueberry", "Peach Ice", "Strawberry Kiwi", "Banana Ice",
    "Mango", "Cola Ice", "Tobacco",
];

const MANUFACTURERS: &[(&str, &[&str])] = &[
    ("Elf Bar", &["BC5000", "TE6000", "Pi9000"]),
    ("Lost Mary", &["OS5000", "MO5000"]),
    ("Ignite", &["V15", "V25", "V35"]),
    ("Juul", &["Classic"]),
];

const SELLERS: &[(&str, &str, &str)] = &[
    ("Bruno", "bruno@pix.example", "Banco Azul"),
    ("Carla", "11 98888-0000", "Banco Verde"),
];

const CUSTOMERS: &[(&str, &str, &str, &str)] = &[
    ("Ana Paula", "19 99999-0000", "SP", "Campinas"),
    ("Diego Souza", "19 97777-1111", "SP", "Valinhos"),
    ("Marina Lima", "11 96666-2222", "SP", "Jundiaí"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    let mut count: usize = 50;
    let mut db_path = String::from("./shopfront_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(50);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Shopfront Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 50)");
                println!("  -d, --db <PATH>    Database file path (default: ./shopfront_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Shopfront Seed Data Generator");
    println!("================================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.documents().count("products").await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    // Lookup options first so the product form has choices.
    println!();
    println!("Seeding lookups...");
    for flavor in FLAVORS {
        db.lookups()
            .create(LookupKind::Flavor, &lookup(flavor, None))
            .await?;
    }
    for (manufacturer, models) in MANUFACTURERS {
        db.lookups()
            .create(LookupKind::Manufacturer, &lookup(manufacturer, None))
            .await?;
        for model in *models {
            db.lookups()
                .create(LookupKind::Model, &lookup(model, Some(manufacturer)))
                .await?;
        }
    }

    println!("Seeding sellers and customers...");
    for (name, pix, bank) in SELLERS {
        db.sellers()
            .create(&Seller {
                id: String::new(),
                name: name.to_string(),
                pix: pix.to_string(),
                bank: bank.to_string(),
            })
            .await?;
    }
    for (name, phone, federal_unit, city) in CUSTOMERS {
        db.customers()
            .create(&Customer {
                id: String::new(),
                name: name.to_string(),
                phone: phone.to_string(),
                federal_unit: federal_unit.to_string(),
                city: city.to_string(),
                neighborhood: None,
                street: None,
                address_number: None,
                address_reference: None,
                car_model: None,
                car_identifier: None,
                document: None,
            })
            .await?;
    }

    println!("Generating products...");
    let start = std::time::Instant::now();
    let mut generated = 0;

    'outer: for (m_idx, (manufacturer, models)) in MANUFACTURERS.iter().enumerate() {
        for (mod_idx, model) in models.iter().enumerate() {
            for (f_idx, flavor) in FLAVORS.iter().enumerate() {
                if generated >= count {
                    break 'outer;
                }

                let seed = m_idx * 100 + mod_idx * 10 + f_idx;
                let product = generate_product(manufacturer, model, flavor, seed);
                db.products().create(&product).await?;
                generated += 1;

                if generated % 25 == 0 {
                    println!("  Generated {} products...", generated);
                }
            }
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} products in {:?}", generated, elapsed);

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

fn lookup(name: &str, manufacturer: Option<&str>) -> LookupEntry {
    LookupEntry {
        id: String::new(),
        name: name.to_string(),
        manufacturer: manufacturer.map(str::to_string),
    }
}

/// Generates a single pod product with plausible prices and stock.
fn generate_product(manufacturer: &str, model: &str, flavor: &str, seed: usize) -> Product {
    // Cost R$25.00-R$44.00, sale price at roughly 70% markup.
    let cost_cents = 2500 + ((seed * 37) % 1900) as i64;
    let final_cents = cost_cents * 17 / 10;

    Product {
        id: String::new(),
        name: format!("{} {} {}", manufacturer, model, flavor),
        amount: (seed % 31) as i64,
        cost_price: Money::from_cents(cost_cents),
        final_price: Money::from_cents(final_cents),
        images: vec![format!(
            "product/{}-{}.png",
            model.to_lowercase(),
            flavor.to_lowercase().replace(' ', "-")
        )],
        category: CategoryRef {
            id: "pod".to_string(),
            name: Category::Pod.to_string(),
        },
        pod: Some(PodDetails {
            flavor: flavor.to_string(),
            manufacturer: manufacturer.to_string(),
            model: model.to_string(),
            puffs: "5000".to_string(),
        }),
    }
}
