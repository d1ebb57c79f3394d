use crate::db::connection::{init_db, Database};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

const SCHEMA_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/sql/schema.sql");

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

/// Initialize a fresh test DB using the production schema
pub fn init_test_db() -> Database {
    let path = std::env::temp_dir().join(format!(
        "property_explorer_test_{}_{}_{}.sqlite",
        std::process::id(),
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        NEXT_DB.fetch_add(1, Ordering::SeqCst)
    ));
    let db = Database::new(path.to_string_lossy().into_owned());

    init_db(&db, SCHEMA_PATH).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    db
}

/// Two suburbs, two layouts, one agency, one school of each kind and four sales; one sale has no coordinates.
pub fn seed_sales(db: &Database) {
    db.with_conn(|conn| {
        conn.execute_batch(
            r#"
            INSERT INTO dim_suburbs (suburb_id, suburb_name, postcode) VALUES
                (1, 'Subiaco', '6008'),
                (2, 'Fremantle', '6160');

            INSERT INTO dim_layouts (layout_id, layout_name) VALUES
                (1, '3x2'),
                (2, '4x2');

            INSERT INTO dim_agencies (agency_id, agency_name) VALUES (1, 'Acton Subiaco');
            INSERT INTO dim_primary_schools (primary_school_id, primary_school_name)
                VALUES (1, 'Subiaco Primary School');
            INSERT INTO dim_secondary_schools (secondary_school_id, secondary_school_name)
                VALUES (1, 'Shenton College');

            INSERT INTO fact_properties
                (listing_id, price, address, property_type, date_sold, land_size,
                 suburb_id, layout_id, latitude, longitude)
            VALUES
                (1, 1250000, '1 Rokeby Rd', 'semi-detached', '2024-03-14', 512, 1, 1, -31.948, 115.826),
                (2, 890000, '9 Hay St', 'house', '2024-05-01', NULL, 1, 2, -31.945, 115.830),
                (3, 640000, '4 High St', 'apartment', '2023-11-02', NULL, 2, 1, NULL, NULL),
                (4, 720000, '22 South Tce', NULL, '2024-01-20', 300, 2, NULL, -32.060, 115.750);
            "#,
        )
        .map_err(|e| crate::errors::ServerError::DbError(e.to_string()))
    })
    .unwrap_or_else(|e| panic!("Seeding failed: {e}"));
}
