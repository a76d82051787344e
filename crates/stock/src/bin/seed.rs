use anyhow::{Context, Result};
use chrono::{Duration, Local, NaiveDate};
use dotenv::dotenv;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use shared::{
    config::{Config, ConnectionManager, ConnectionPool},
    utils::init_logger,
};
use std::collections::HashMap;
use stock::model::movement::MovementType;
use tracing::{info, warn};

struct SeedProduct {
    name: &'static str,
    category: &'static str,
    quantity: Decimal,
    unit: &'static str,
    min_threshold: Decimal,
    price_per_unit: Decimal,
}

struct SeedMovement {
    product: &'static str,
    movement_type: MovementType,
    quantity: Decimal,
    days_ago: i64,
    comment: &'static str,
}

fn demo_products() -> Vec<SeedProduct> {
    vec![
        SeedProduct {
            name: "Wheat flour T55",
            category: "Groceries",
            quantity: dec!(120),
            unit: "kg",
            min_threshold: dec!(50),
            price_per_unit: dec!(0.85),
        },
        SeedProduct {
            name: "Caster sugar",
            category: "Groceries",
            quantity: dec!(80),
            unit: "kg",
            min_threshold: dec!(30),
            price_per_unit: dec!(0.95),
        },
        SeedProduct {
            name: "Fine salt",
            category: "Groceries",
            quantity: dec!(40),
            unit: "kg",
            min_threshold: dec!(20),
            price_per_unit: dec!(0.40),
        },
        SeedProduct {
            name: "Virgin olive oil",
            category: "Groceries",
            quantity: dec!(18),
            unit: "L",
            min_threshold: dec!(20),
            price_per_unit: dec!(4.50),
        },
        SeedProduct {
            name: "Fusilli pasta",
            category: "Groceries",
            quantity: dec!(200),
            unit: "kg",
            min_threshold: dec!(60),
            price_per_unit: dec!(1.20),
        },
        SeedProduct {
            name: "Long grain rice",
            category: "Groceries",
            quantity: dec!(150),
            unit: "kg",
            min_threshold: dec!(50),
            price_per_unit: dec!(1.10),
        },
        SeedProduct {
            name: "Canned peeled tomatoes",
            category: "Groceries",
            quantity: dec!(48),
            unit: "cans",
            min_threshold: dec!(30),
            price_per_unit: dec!(1.30),
        },
        SeedProduct {
            name: "Green lentils",
            category: "Groceries",
            quantity: dec!(60),
            unit: "kg",
            min_threshold: dec!(25),
            price_per_unit: dec!(1.60),
        },
        SeedProduct {
            name: "White beans",
            category: "Groceries",
            quantity: dec!(45),
            unit: "kg",
            min_threshold: dec!(20),
            price_per_unit: dec!(1.50),
        },
        SeedProduct {
            name: "Fine semolina",
            category: "Groceries",
            quantity: dec!(12),
            unit: "kg",
            min_threshold: dec!(30),
            price_per_unit: dec!(0.90),
        },
        SeedProduct {
            name: "Semi-skimmed milk",
            category: "Dairy",
            quantity: dec!(90),
            unit: "L",
            min_threshold: dec!(40),
            price_per_unit: dec!(1.05),
        },
        SeedProduct {
            name: "Unsalted butter",
            category: "Dairy",
            quantity: dec!(15),
            unit: "kg",
            min_threshold: dec!(10),
            price_per_unit: dec!(7.20),
        },
        SeedProduct {
            name: "Fresh cream",
            category: "Dairy",
            quantity: dec!(8),
            unit: "L",
            min_threshold: dec!(10),
            price_per_unit: dec!(3.50),
        },
        SeedProduct {
            name: "Grated cheese",
            category: "Dairy",
            quantity: dec!(22),
            unit: "kg",
            min_threshold: dec!(15),
            price_per_unit: dec!(8.90),
        },
        SeedProduct {
            name: "Plain yogurts",
            category: "Dairy",
            quantity: dec!(60),
            unit: "pots",
            min_threshold: dec!(24),
            price_per_unit: dec!(0.45),
        },
        SeedProduct {
            name: "Chicken escalopes",
            category: "Meat & Fish",
            quantity: dec!(30),
            unit: "kg",
            min_threshold: dec!(20),
            price_per_unit: dec!(9.50),
        },
        SeedProduct {
            name: "Minced beef 5% fat",
            category: "Meat & Fish",
            quantity: dec!(25),
            unit: "kg",
            min_threshold: dec!(15),
            price_per_unit: dec!(12.00),
        },
        SeedProduct {
            name: "Salmon fillets",
            category: "Meat & Fish",
            quantity: dec!(10),
            unit: "kg",
            min_threshold: dec!(8),
            price_per_unit: dec!(18.00),
        },
        SeedProduct {
            name: "Canned tuna",
            category: "Meat & Fish",
            quantity: dec!(36),
            unit: "cans",
            min_threshold: dec!(24),
            price_per_unit: dec!(2.40),
        },
        SeedProduct {
            name: "Carrots",
            category: "Fruits & Vegetables",
            quantity: dec!(50),
            unit: "kg",
            min_threshold: dec!(20),
            price_per_unit: dec!(0.80),
        },
        SeedProduct {
            name: "Potatoes",
            category: "Fruits & Vegetables",
            quantity: dec!(100),
            unit: "kg",
            min_threshold: dec!(40),
            price_per_unit: dec!(0.70),
        },
        SeedProduct {
            name: "Courgettes",
            category: "Fruits & Vegetables",
            quantity: dec!(6),
            unit: "kg",
            min_threshold: dec!(15),
            price_per_unit: dec!(1.20),
        },
        SeedProduct {
            name: "Gala apples",
            category: "Fruits & Vegetables",
            quantity: dec!(40),
            unit: "kg",
            min_threshold: dec!(20),
            price_per_unit: dec!(1.80),
        },
        SeedProduct {
            name: "Liquid hand soap",
            category: "Hygiene",
            quantity: dec!(20),
            unit: "L",
            min_threshold: dec!(10),
            price_per_unit: dec!(3.20),
        },
        SeedProduct {
            name: "Paper towels",
            category: "Hygiene",
            quantity: dec!(5),
            unit: "rolls",
            min_threshold: dec!(12),
            price_per_unit: dec!(4.50),
        },
        SeedProduct {
            name: "Hand sanitizer gel",
            category: "Hygiene",
            quantity: dec!(8),
            unit: "L",
            min_threshold: dec!(5),
            price_per_unit: dec!(6.00),
        },
        SeedProduct {
            name: "Disposable gloves (box)",
            category: "Supplies",
            quantity: dec!(10),
            unit: "boxes",
            min_threshold: dec!(5),
            price_per_unit: dec!(8.00),
        },
        SeedProduct {
            name: "Cling film",
            category: "Supplies",
            quantity: dec!(3),
            unit: "rolls",
            min_threshold: dec!(4),
            price_per_unit: dec!(5.50),
        },
        SeedProduct {
            name: "Bin bags 100L",
            category: "Supplies",
            quantity: dec!(60),
            unit: "bags",
            min_threshold: dec!(20),
            price_per_unit: dec!(0.25),
        },
        SeedProduct {
            name: "Aluminium trays",
            category: "Supplies",
            quantity: dec!(200),
            unit: "units",
            min_threshold: dec!(50),
            price_per_unit: dec!(0.15),
        },
    ]
}

fn demo_movements() -> Vec<SeedMovement> {
    vec![
        SeedMovement {
            product: "Wheat flour T55",
            movement_type: MovementType::Inbound,
            quantity: dec!(50),
            days_ago: 13,
            comment: "Supplier delivery",
        },
        SeedMovement {
            product: "Fusilli pasta",
            movement_type: MovementType::Outbound,
            quantity: dec!(20),
            days_ago: 13,
            comment: "Monday meal, 180 covers",
        },
        SeedMovement {
            product: "Semi-skimmed milk",
            movement_type: MovementType::Inbound,
            quantity: dec!(40),
            days_ago: 12,
            comment: "Weekly delivery",
        },
        SeedMovement {
            product: "Chicken escalopes",
            movement_type: MovementType::Inbound,
            quantity: dec!(15),
            days_ago: 12,
            comment: "Urgent order",
        },
        SeedMovement {
            product: "Long grain rice",
            movement_type: MovementType::Outbound,
            quantity: dec!(25),
            days_ago: 11,
            comment: "Fried rice prep",
        },
        SeedMovement {
            product: "Potatoes",
            movement_type: MovementType::Outbound,
            quantity: dec!(30),
            days_ago: 11,
            comment: "Mash for Wednesday meal",
        },
        SeedMovement {
            product: "Caster sugar",
            movement_type: MovementType::Outbound,
            quantity: dec!(10),
            days_ago: 10,
            comment: "Desserts week 48",
        },
        SeedMovement {
            product: "Canned peeled tomatoes",
            movement_type: MovementType::Outbound,
            quantity: dec!(12),
            days_ago: 10,
            comment: "Bolognese sauce",
        },
        SeedMovement {
            product: "Minced beef 5% fat",
            movement_type: MovementType::Inbound,
            quantity: dec!(20),
            days_ago: 9,
            comment: "Butcher delivery",
        },
        SeedMovement {
            product: "Virgin olive oil",
            movement_type: MovementType::Outbound,
            quantity: dec!(4),
            days_ago: 9,
            comment: "Weekly cooking",
        },
        SeedMovement {
            product: "Carrots",
            movement_type: MovementType::Inbound,
            quantity: dec!(30),
            days_ago: 8,
            comment: "Local market",
        },
        SeedMovement {
            product: "Gala apples",
            movement_type: MovementType::Inbound,
            quantity: dec!(25),
            days_ago: 8,
            comment: "Seasonal fruit",
        },
        SeedMovement {
            product: "Plain yogurts",
            movement_type: MovementType::Outbound,
            quantity: dec!(30),
            days_ago: 7,
            comment: "Monday and Tuesday desserts",
        },
        SeedMovement {
            product: "Liquid hand soap",
            movement_type: MovementType::Inbound,
            quantity: dec!(10),
            days_ago: 7,
            comment: "Monthly hygiene restock",
        },
        SeedMovement {
            product: "Green lentils",
            movement_type: MovementType::Outbound,
            quantity: dec!(15),
            days_ago: 6,
            comment: "Thursday vegetarian dish",
        },
        SeedMovement {
            product: "Fusilli pasta",
            movement_type: MovementType::Outbound,
            quantity: dec!(25),
            days_ago: 6,
            comment: "Friday pasta bolognese",
        },
        SeedMovement {
            product: "Grated cheese",
            movement_type: MovementType::Outbound,
            quantity: dec!(5),
            days_ago: 5,
            comment: "Weekly gratins",
        },
        SeedMovement {
            product: "Bin bags 100L",
            movement_type: MovementType::Inbound,
            quantity: dec!(40),
            days_ago: 5,
            comment: "Supplies restock",
        },
        SeedMovement {
            product: "Fine salt",
            movement_type: MovementType::Outbound,
            quantity: dec!(5),
            days_ago: 4,
            comment: "Daily kitchen use",
        },
        SeedMovement {
            product: "Canned tuna",
            movement_type: MovementType::Outbound,
            quantity: dec!(12),
            days_ago: 4,
            comment: "Mixed salads",
        },
        SeedMovement {
            product: "Wheat flour T55",
            movement_type: MovementType::Outbound,
            quantity: dec!(15),
            days_ago: 3,
            comment: "Wednesday pastry",
        },
        SeedMovement {
            product: "Unsalted butter",
            movement_type: MovementType::Outbound,
            quantity: dec!(3),
            days_ago: 3,
            comment: "Pastry and sauces",
        },
        SeedMovement {
            product: "Courgettes",
            movement_type: MovementType::Inbound,
            quantity: dec!(8),
            days_ago: 2,
            comment: "Fresh vegetable delivery",
        },
        SeedMovement {
            product: "Chicken escalopes",
            movement_type: MovementType::Outbound,
            quantity: dec!(12),
            days_ago: 2,
            comment: "Tuesday roast chicken",
        },
        SeedMovement {
            product: "Long grain rice",
            movement_type: MovementType::Outbound,
            quantity: dec!(20),
            days_ago: 1,
            comment: "Daily side dish",
        },
        SeedMovement {
            product: "Semi-skimmed milk",
            movement_type: MovementType::Outbound,
            quantity: dec!(15),
            days_ago: 1,
            comment: "Milk desserts",
        },
        SeedMovement {
            product: "Disposable gloves (box)",
            movement_type: MovementType::Outbound,
            quantity: dec!(2),
            days_ago: 1,
            comment: "Daily kitchen",
        },
        SeedMovement {
            product: "Potatoes",
            movement_type: MovementType::Inbound,
            quantity: dec!(50),
            days_ago: 0,
            comment: "Weekly delivery",
        },
        SeedMovement {
            product: "Salmon fillets",
            movement_type: MovementType::Outbound,
            quantity: dec!(4),
            days_ago: 0,
            comment: "Friday fish",
        },
        SeedMovement {
            product: "Fresh cream",
            movement_type: MovementType::Outbound,
            quantity: dec!(3),
            days_ago: 0,
            comment: "Cream sauce of the day",
        },
    ]
}

fn days_ago(days: i64) -> NaiveDate {
    Local::now().date_naive() - Duration::days(days)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);

    init_logger("seed", is_dev, false);

    let config = Config::init().context("Failed to load configuration")?;
    let reset = std::env::args().any(|arg| arg == "--reset");

    let pool = ConnectionManager::new_pool(
        &config.database_url,
        config.db_min_conn,
        config.db_max_conn,
    )
    .await
    .context("Failed to initialize database pool")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(&pool)
        .await
        .context("Failed to count existing products")?;

    if existing > 0 {
        if !reset {
            warn!("⚠️ Database already holds {existing} products; pass --reset to reseed");
            return Ok(());
        }

        info!("🗑️ Clearing existing data");
        sqlx::query("DELETE FROM movements").execute(&pool).await?;
        sqlx::query("DELETE FROM products").execute(&pool).await?;
    }

    let product_ids = seed_products(&pool).await?;
    let movement_count = seed_movements(&pool, &product_ids).await?;

    info!(
        "✅ Seeded {} products and {} movements",
        product_ids.len(),
        movement_count
    );

    Ok(())
}

async fn seed_products(pool: &ConnectionPool) -> Result<HashMap<&'static str, i32>> {
    let mut ids = HashMap::new();

    for product in demo_products() {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO products (name, category, quantity, unit, min_threshold, price_per_unit)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(product.name)
        .bind(product.category)
        .bind(product.quantity)
        .bind(product.unit)
        .bind(product.min_threshold)
        .bind(product.price_per_unit)
        .fetch_one(pool)
        .await
        .with_context(|| format!("Failed to insert product '{}'", product.name))?;

        ids.insert(product.name, id);
    }

    Ok(ids)
}

async fn seed_movements(
    pool: &ConnectionPool,
    ids: &HashMap<&'static str, i32>,
) -> Result<usize> {
    let movements = demo_movements();

    for movement in &movements {
        let product_id = ids
            .get(movement.product)
            .copied()
            .with_context(|| format!("Unknown product '{}' in demo data", movement.product))?;

        // History only; the seeded quantities already account for these.
        sqlx::query(
            "INSERT INTO movements (product_id, type, quantity, date, comment) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(product_id)
        .bind(movement.movement_type)
        .bind(movement.quantity)
        .bind(days_ago(movement.days_ago))
        .bind(movement.comment)
        .execute(pool)
        .await
        .with_context(|| format!("Failed to insert movement for '{}'", movement.product))?;
    }

    Ok(movements.len())
}
