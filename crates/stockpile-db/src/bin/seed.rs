//! # Seed Data Generator
//!
//! Populates the database with demo suppliers, inventory items, a day
//! of sales, and an admin login for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database
//! cargo run -p stockpile-db --bin seed
//!
//! # Specify database path
//! cargo run -p stockpile-db --bin seed -- --db ./data/stockpile.db
//!
//! # Custom admin password
//! cargo run -p stockpile-db --bin seed -- --admin-password s3cret
//! ```

use chrono::Utc;
use std::env;
use stockpile_core::{InventoryItem, ItemCategory, Supplier, SupplierStatus};
use stockpile_db::repository::user::hash_password;
use stockpile_db::{Database, DbConfig, UserRecord};
use uuid::Uuid;

/// Demo suppliers: (name, contact, email, phone, category, rating, location)
const SUPPLIERS: &[(&str, &str, &str, &str, &str, f64, &str)] = &[
    (
        "Golden Grain Wholesale",
        "Amina Khan",
        "orders@goldengrain.example",
        "+1-555-0101",
        "food",
        4.6,
        "Portland",
    ),
    (
        "Cascade Beverages",
        "Luis Ortega",
        "sales@cascadebev.example",
        "+1-555-0102",
        "beverage",
        4.2,
        "Seattle",
    ),
    (
        "Summit Supplies",
        "Dana Wei",
        "hello@summitsupplies.example",
        "+1-555-0103",
        "general",
        3.9,
        "Denver",
    ),
];

/// Demo items: (name, sku, category, quantity, unit, min_stock, price_cents, supplier_idx)
const ITEMS: &[(&str, &str, ItemCategory, i64, &str, i64, i64, usize)] = &[
    ("Basmati Rice 5kg", "RICE-5", ItemCategory::Food, 40, "bag", 10, 1299, 0),
    ("Whole Wheat Flour 2kg", "FLOUR-2", ItemCategory::Food, 25, "bag", 8, 549, 0),
    ("Olive Oil 1L", "OIL-1L", ItemCategory::Food, 12, "bottle", 6, 1150, 0),
    ("Canned Tomatoes 400g", "TOM-400", ItemCategory::Food, 4, "can", 12, 179, 0),
    ("Cola 330ml", "COLA-330", ItemCategory::Beverage, 120, "can", 24, 150, 1),
    ("Sparkling Water 500ml", "SPARK-500", ItemCategory::Beverage, 80, "bottle", 24, 120, 1),
    ("Orange Juice 1L", "OJ-1L", ItemCategory::Beverage, 18, "carton", 10, 399, 1),
    ("Cold Brew Coffee 250ml", "BREW-250", ItemCategory::Beverage, 6, "bottle", 12, 349, 1),
    ("Paper Napkins 100ct", "NAP-100", ItemCategory::General, 30, "pack", 10, 229, 2),
    ("Dish Soap 500ml", "SOAP-500", ItemCategory::General, 15, "bottle", 5, 289, 2),
    ("Trash Bags 30ct", "BAG-30", ItemCategory::General, 3, "roll", 6, 499, 2),
];

/// Demo sales: (sku, quantity) recorded against today's prices.
const SALES: &[(&str, i64)] = &[
    ("COLA-330", 6),
    ("RICE-5", 2),
    ("OJ-1L", 3),
    ("NAP-100", 1),
    ("COLA-330", 12),
    ("SPARK-500", 4),
    ("FLOUR-2", 1),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./stockpile_dev.db");
    let mut admin_password = String::from("admin123");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--admin-password" | "-p" => {
                if i + 1 < args.len() {
                    admin_password = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stockpile Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>              Database file path (default: ./stockpile_dev.db)");
                println!("  -p, --admin-password <PW>    Admin password (default: admin123)");
                println!("  -h, --help                   Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Stockpile Seed Data Generator");
    println!("================================");
    println!("Database: {}", db_path);
    println!();

    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.items().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} items", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let now = Utc::now();

    println!();
    println!("Seeding suppliers...");
    let mut supplier_ids = Vec::with_capacity(SUPPLIERS.len());
    for (name, contact, email, phone, category, rating, location) in SUPPLIERS {
        let supplier = Supplier {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            contact_person: contact.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            category: category.to_string(),
            rating: *rating,
            status: SupplierStatus::Active,
            location: location.to_string(),
            created_at: now,
            updated_at: now,
        };
        db.suppliers().insert(&supplier).await?;
        supplier_ids.push(supplier.id);
    }
    println!("  {} suppliers", supplier_ids.len());

    println!("Seeding inventory items...");
    let mut item_ids = Vec::with_capacity(ITEMS.len());
    for (name, sku, category, quantity, unit, min, price_cents, supplier_idx) in ITEMS {
        let item = InventoryItem {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            sku: sku.to_string(),
            category: *category,
            quantity: *quantity,
            unit: unit.to_string(),
            min_stock_level: *min,
            supplier_id: Some(supplier_ids[*supplier_idx].clone()),
            price_cents: *price_cents,
            created_at: now,
            updated_at: now,
        };
        db.items().insert(&item).await?;
        item_ids.push((item.sku.clone(), item.id, item.price_cents));
    }
    println!("  {} items", item_ids.len());

    println!("Recording sales...");
    for (sku, quantity) in SALES {
        let (_, id, price_cents) = item_ids
            .iter()
            .find(|(s, _, _)| s == sku)
            .expect("sale references a seeded sku");
        db.sales().record(id, *quantity, price_cents * quantity).await?;
    }
    println!("  {} sales", SALES.len());

    println!("Creating admin user...");
    let admin = UserRecord {
        id: Uuid::new_v4().to_string(),
        username: "admin".to_string(),
        password_hash: hash_password(&admin_password)?,
        is_active: true,
        created_at: now,
        updated_at: now,
    };
    db.users().insert(&admin).await?;
    println!("  username: admin");

    let stats = db.reports().dashboard_stats().await?;
    println!();
    println!("Dashboard after seed:");
    println!("  items:       {}", stats.total_items);
    println!("  low stock:   {}", stats.low_stock_items);
    println!("  suppliers:   {}", stats.total_suppliers);
    println!(
        "  stock value: ${:.2}",
        stats.inventory_value_cents as f64 / 100.0
    );

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
