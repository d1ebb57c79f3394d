use crate::db::connection::Database;
use crate::db::sales::query_sales;
use crate::domain::filters::SaleFilters;
use crate::tests::router_tests::{get, post_form, read_body};
use crate::tests::utils::{init_test_db, seed_sales};

const NEW_SALE: &str = "listing_id=10&price=975000&address=5+Bagot+Rd&property_type=house\
&date_sold=2024-06-30&land_size=450&parking_spaces=2&suburb_id=1&layout_id=2\
&agency_id=1&primary_school_id=1&secondary_school_id=1&latitude=-31.951&longitude=115.822";

fn sale_count(db: &Database) -> usize {
    query_sales(db, &SaleFilters::default())
        .expect("Query failed")
        .len()
}

#[test]
fn add_form_lists_every_dimension() {
    let db = init_test_db();
    seed_sales(&db);

    let resp = get(&db, "/add").expect("Handler failed");
    assert_eq!(resp.status(), 200);
    let body = read_body(resp);

    assert!(body.contains("<form method=\"post\" action=\"/add\""));
    assert!(body.contains("<option value=\"2\">Fremantle</option>"));
    assert!(body.contains("<option value=\"2\">4x2</option>"));
    assert!(body.contains("<option value=\"1\">Acton Subiaco</option>"));
    assert!(body.contains("<option value=\"1\">Subiaco Primary School</option>"));
    assert!(body.contains("<option value=\"1\">Shenton College</option>"));
    assert!(!body.contains("role=\"alert\""));
}

#[test]
fn submitted_record_is_inserted_and_confirmed() {
    let db = init_test_db();
    seed_sales(&db);

    let body = read_body(post_form(&db, "/add", NEW_SALE));

    assert!(body.contains("flash-success"));
    assert!(body.contains("Success! New record added."));
    assert_eq!(sale_count(&db), 5);

    let found = read_body(post_form(&db, "/explore", "layout_select=2&year_select=2024"));
    assert!(found.contains("5 Bagot Rd"));
    assert!(found.contains("$975,000"));
}

#[test]
fn duplicate_listing_is_flashed_and_not_inserted() {
    let db = init_test_db();
    seed_sales(&db);

    post_form(&db, "/add", NEW_SALE);
    let body = read_body(post_form(&db, "/add", NEW_SALE));

    assert!(body.contains("flash-danger"));
    assert!(body.contains("Error adding record"));
    assert!(body.contains("UNIQUE constraint failed"));
    assert_eq!(sale_count(&db), 5);
}

#[test]
fn incomplete_form_is_flashed_and_not_inserted() {
    let db = init_test_db();
    seed_sales(&db);

    let body = read_body(post_form(
        &db,
        "/add",
        "listing_id=11&price=&address=7+Nicholson+Rd&date_sold=2024-02-02&suburb_id=1",
    ));

    assert!(body.contains("Error adding record"));
    assert!(body.contains("Missing required field: price"));
    assert_eq!(sale_count(&db), 4);
}
