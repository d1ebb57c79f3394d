// src/db/sales.rs

use crate::db::connection::Database;
use crate::domain::filters::SaleFilters;
use crate::domain::record::PropertyRecord;
use crate::domain::sale_form::NewSale;
use crate::errors::ServerError;
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection};
use tracing::{debug, info};

/// Most rows the explore page will show at once.
pub const SALES_LIMIT: usize = 100;

const SQL_SALES_BASE: &str = r#"
    SELECT
        p.address, s.suburb_name, p.date_sold, p.price, p.property_type,
        l.layout_name, p.land_size, s.postcode, p.latitude, p.longitude
    FROM fact_properties p
    JOIN dim_suburbs s ON p.suburb_id = s.suburb_id
    LEFT JOIN dim_layouts l ON p.layout_id = l.layout_id
"#;

#[derive(Debug, Clone, PartialEq)]
pub struct Suburb {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub id: i64,
    pub name: String,
}

/// An agency or a school: any dimension that is only an id and a name.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedDimension {
    pub id: i64,
    pub name: String,
}

/// Everything the filter and entry forms offer as options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DimensionData {
    pub suburbs: Vec<Suburb>,
    pub layouts: Vec<Layout>,
    pub agencies: Vec<NamedDimension>,
    pub primary_schools: Vec<NamedDimension>,
    pub secondary_schools: Vec<NamedDimension>,
    pub years: Vec<i32>,
}

pub fn get_dimension_data(db: &Database) -> Result<DimensionData, ServerError> {
    db.with_conn(|conn| {
        let suburbs = query_pairs(
            conn,
            "SELECT suburb_id, suburb_name FROM dim_suburbs ORDER BY suburb_name",
        )?
        .into_iter()
        .map(|(id, name)| Suburb { id, name })
        .collect();

        let layouts = query_pairs(
            conn,
            "SELECT layout_id, layout_name FROM dim_layouts ORDER BY layout_name",
        )?
        .into_iter()
        .map(|(id, name)| Layout { id, name })
        .collect();

        let named = |sql: &str| -> Result<Vec<NamedDimension>, ServerError> {
            Ok(query_pairs(conn, sql)?
                .into_iter()
                .map(|(id, name)| NamedDimension { id, name })
                .collect())
        };
        let agencies = named("SELECT agency_id, agency_name FROM dim_agencies ORDER BY agency_name")?;
        let primary_schools = named(
            "SELECT primary_school_id, primary_school_name FROM dim_primary_schools ORDER BY primary_school_name",
        )?;
        let secondary_schools = named(
            "SELECT secondary_school_id, secondary_school_name FROM dim_secondary_schools ORDER BY secondary_school_name",
        )?;

        let mut stmt = conn
            .prepare(
                "SELECT DISTINCT CAST(strftime('%Y', date_sold) AS INTEGER) FROM fact_properties",
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;
        let rows = stmt
            .query_map([], |row| row.get::<_, Option<i32>>(0))
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut years = Vec::new();
        for r in rows {
            if let Some(year) = r.map_err(|e| ServerError::DbError(e.to_string()))? {
                years.push(year);
            }
        }
        years.sort_unstable_by(|a, b| b.cmp(a));

        Ok(DimensionData {
            suburbs,
            layouts,
            agencies,
            primary_schools,
            secondary_schools,
            years,
        })
    })
}

fn query_pairs(conn: &Connection, sql: &str) -> Result<Vec<(i64, String)>, ServerError> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}

/// Sales matching every non-empty filter, most expensive first.
pub fn query_sales(db: &Database, filters: &SaleFilters) -> Result<Vec<PropertyRecord>, ServerError> {
    let (sql, values) = build_sales_query(filters);
    debug!(%sql, params = values.len(), "querying sales");

    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| ServerError::DbError(format!("Prepare failed: {e}")))?;

        let rows = stmt
            .query_map(params_from_iter(values.iter()), |row| {
                let date_sold: String = row.get(2)?;
                Ok(PropertyRecord {
                    address: row.get(0)?,
                    suburb_name: row.get(1)?,
                    date_sold: display_date(&date_sold),
                    price: row.get(3)?,
                    property_type: row.get(4)?,
                    layout_name: row.get(5)?,
                    land_size: row.get(6)?,
                    postcode: row.get(7)?,
                    latitude: row.get(8)?,
                    longitude: row.get(9)?,
                })
            })
            .map_err(|e| ServerError::DbError(format!("Query failed: {e}")))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
        }
        Ok(out)
    })
}

/// Inserts one sale. Duplicate listing ids and unknown dimension ids are
/// rejected by the database and come back as `DbError`.
pub fn insert_sale(db: &Database, sale: &NewSale) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        conn.execute(
            r#"
            INSERT INTO fact_properties
                (listing_id, price, address, property_type, date_sold, land_size, parking_spaces,
                 suburb_id, layout_id, agency_id, primary_school_id, secondary_school_id,
                 latitude, longitude)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
            "#,
            params![
                sale.listing_id,
                sale.price,
                sale.address,
                sale.property_type,
                sale.date_sold.format("%Y-%m-%d").to_string(),
                sale.land_size,
                sale.parking_spaces,
                sale.suburb_id,
                sale.layout_id,
                sale.agency_id,
                sale.primary_school_id,
                sale.secondary_school_id,
                sale.latitude,
                sale.longitude,
            ],
        )
        .map_err(|e| ServerError::DbError(format!("Insert failed: {e}")))?;

        info!(listing_id = sale.listing_id, "sale record added");
        Ok(())
    })
}

fn build_sales_query(filters: &SaleFilters) -> (String, Vec<Value>) {
    let mut conditions = Vec::new();
    let mut values = Vec::new();

    let mut add_in = |column: &str, ids: Vec<Value>| {
        if ids.is_empty() {
            return;
        }
        let placeholders = vec!["?"; ids.len()].join(", ");
        conditions.push(format!("{column} IN ({placeholders})"));
        values.extend(ids);
    };

    add_in(
        "CAST(strftime('%Y', p.date_sold) AS INTEGER)",
        filters.years.iter().map(|y| Value::Integer(i64::from(*y))).collect(),
    );
    add_in(
        "p.suburb_id",
        filters.suburb_ids.iter().map(|id| Value::Integer(*id)).collect(),
    );
    add_in(
        "p.layout_id",
        filters.layout_ids.iter().map(|id| Value::Integer(*id)).collect(),
    );

    let mut sql = SQL_SALES_BASE.to_string();
    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }
    sql.push_str(&format!(" ORDER BY p.price DESC LIMIT {SALES_LIMIT}"));

    (sql, values)
}

/// `2024-03-14` -> `14/03/2024`. Anything unparseable is shown as stored.
pub fn display_date(raw: &str) -> String {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
