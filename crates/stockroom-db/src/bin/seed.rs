//! # Seed Data Generator
//!
//! Populates the database with warehouses and products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 200 products (default)
//! cargo run -p stockroom-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p stockroom-db --bin seed -- --count 1000
//!
//! # Specify database path
//! cargo run -p stockroom-db --bin seed -- --db ./data/stockroom.db
//! ```
//!
//! ## Generated Data
//! - Three warehouses, fixed addresses
//! - Products cycled across categories (produce, fruit, sweets, drinks,
//!   bakery), every product assigned to a warehouse round-robin
//! - Deterministic pseudo-random counts and prices (same seed, same data)

use std::env;

use stockroom_core::NewProduct;
use stockroom_db::{Database, DbConfig, ProductRepository};

/// Warehouses created before any product.
const WAREHOUSES: &[(&str, &str)] = &[
    ("central", "rua principal 100"),
    ("norte", "avenida das industrias 45"),
    ("sul", "estrada do porto 802"),
];

/// Product names per category for realistic test data.
const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "vegetais",
        &[
            "batata",
            "batata doce",
            "cenoura",
            "alface",
            "tomate",
            "cebola",
            "abobrinha",
            "brocolis",
            "couve-flor",
            "pepino",
        ],
    ),
    (
        "frutas",
        &[
            "banana", "laranja", "mamao", "manga", "uva", "abacaxi", "melancia", "limao",
            "goiaba", "morango",
        ],
    ),
    (
        "doces",
        &[
            "bolo de cenoura",
            "brigadeiro",
            "pudim",
            "quindim",
            "beijinho",
            "pacoca",
            "goiabada",
            "cocada",
        ],
    ),
    (
        "bebidas",
        &[
            "agua mineral",
            "suco de laranja",
            "suco de uva",
            "refrigerante",
            "cha gelado",
            "agua de coco",
        ],
    ),
    (
        "padaria",
        &[
            "pao frances",
            "pao de queijo",
            "bolo simples",
            "rosca",
            "torrada",
            "broa de milho",
        ],
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug surfaces the repository's statement tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 200;
    let mut db_path = String::from("./stockroom_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(200);
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
                println!("Stockroom Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 200)");
                println!("  -d, --db <PATH>    Database file path (default: ./stockroom_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Stockroom Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    // Connect to database (runs migrations)
    let db = Database::new(DbConfig::new(&db_path)).await?;
    let repo = db.products();

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Check existing products
    let existing = repo.count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    // Create warehouses first; products reference them
    let mut warehouse_ids = Vec::new();
    for (name, address) in WAREHOUSES {
        let result = sqlx::query("INSERT INTO warehouses (name, address) VALUES (?1, ?2)")
            .bind(name)
            .bind(address)
            .execute(db.pool())
            .await?;
        warehouse_ids.push(result.last_insert_rowid());
    }
    println!("✓ Created {} warehouses", warehouse_ids.len());

    // Generate products
    println!();
    println!("Generating products...");

    let mut generated = 0usize;
    let start = std::time::Instant::now();

    'outer: loop {
        for (category, names) in CATEGORIES {
            for name in *names {
                if generated >= count {
                    break 'outer;
                }

                let product = generate_product(category, name, generated);
                let stored = repo.store(product).await?;

                // Round-robin warehouse assignment
                let warehouse_id = warehouse_ids[generated % warehouse_ids.len()];
                sqlx::query("UPDATE products SET id_warehouse = ?1 WHERE id = ?2")
                    .bind(warehouse_id)
                    .bind(stored.id)
                    .execute(db.pool())
                    .await?;

                generated += 1;

                if generated % 100 == 0 {
                    println!("  Generated {} products...", generated);
                }
            }
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} products in {:?}", generated, elapsed);

    // Verify the enriched read path
    println!();
    println!("Verifying enriched read...");
    match repo.get_full_data(1).await? {
        Some(full) => println!(
            "  Product 1: {} ({}) @ {} - {}",
            full.name, full.category, full.warehouse, full.warehouse_address
        ),
        None => println!("  Product 1 has no warehouse assigned"),
    }

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates a single product with deterministic pseudo-random data.
fn generate_product(category: &str, name: &str, seed: usize) -> NewProduct {
    // Batch suffix keeps names unique across cycles
    let cycle = seed / 40;
    let full_name = if cycle == 0 {
        name.to_string()
    } else {
        format!("{} lote {}", name, cycle + 1)
    };

    // Count 0-99, price R$0.99 - R$20.99
    let count = (seed * 13 % 100) as i64;
    let price = 0.99 + (seed * 17 % 2000) as f64 / 100.0;

    NewProduct {
        name: full_name,
        category: category.to_string(),
        count,
        price,
    }
}
