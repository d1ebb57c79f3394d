use crate::db::connection::Database;
use crate::errors::ServerError;
use crate::tests::router_tests::{get, post_form, read_body};
use crate::tests::utils::{init_test_db, seed_sales};
use astra::Response;

fn post_filters(db: &Database, form: &str) -> Response {
    post_form(db, "/explore", form)
}

#[test]
fn root_redirects_to_explore() {
    let db = init_test_db();
    let resp = get(&db, "/").expect("Handler failed");

    assert_eq!(resp.status(), 302);
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/explore"
    );
}

#[test]
fn explore_get_renders_filters_without_querying() {
    let db = init_test_db();
    seed_sales(&db);

    let resp = get(&db, "/explore").expect("Handler failed");
    assert_eq!(resp.status(), 200);
    let body = read_body(resp);

    assert!(body.contains("<option value=\"1\">Subiaco</option>"));
    assert_eq!(body.matches("new Choices(").count(), 3);
    assert!(body.contains("Found <strong>0</strong> records."));
    assert!(!body.contains("1 Rokeby Rd"));
    assert!(body.contains("L.map(\"map\").setView([-31.9523, 115.8605], 11);"));
    assert!(!body.contains("L.markerClusterGroup()"));
    // Only CDN assets are linked; nothing points at unserved local files.
    assert!(!body.contains("/static/"));
}

#[test]
fn empty_submission_upgrades_filters_and_draws_map() {
    let db = init_test_db();
    seed_sales(&db);

    let resp = post_form(&db, "/explore", "");
    assert_eq!(resp.status(), 200);
    let body = read_body(resp);

    // Filter controls and their bootstrap.
    assert_eq!(body.matches("class=\"multi-searchable-select\"").count(), 3);
    assert!(body.contains("id=\"reset-filters-btn\""));
    assert_eq!(body.matches("new Choices(").count(), 3);
    assert_eq!(body.matches(".removeActiveItems();").count(), 3);
    assert!(body.contains("Select suburb(s)..."));

    // Results and map: four sales, one without coordinates.
    assert!(body.contains("Found <strong>4</strong> records."));
    assert!(body.contains("id=\"map\""));
    assert!(body.contains("L.markerClusterGroup()"));
    assert_eq!(body.matches("markers.addLayer(L.marker(").count(), 3);
    assert!(body.contains("map.fitBounds("));
    assert!(body.contains("$1,250,000"));
    assert!(body.contains("Semi detached"));
}

#[test]
fn submitted_filters_narrow_results_and_stay_selected() {
    let db = init_test_db();
    seed_sales(&db);

    let body = read_body(post_filters(&db, "suburb_select=2&year_select=2024"));

    assert!(body.contains("Found <strong>1</strong> records."));
    assert!(body.contains("22 South Tce"));
    assert!(!body.contains("1 Rokeby Rd"));
    assert!(body.contains("<option value=\"2\" selected>Fremantle</option>"));
    assert!(body.contains("<option value=\"2024\" selected>2024</option>"));
    assert_eq!(body.matches("markers.addLayer(L.marker(").count(), 1);
}

#[test]
fn no_matches_keeps_default_map_view() {
    let db = init_test_db();
    seed_sales(&db);

    let body = read_body(post_filters(&db, "year_select=1999"));

    assert!(body.contains("Found <strong>0</strong> records."));
    assert!(body.contains("L.map(\"map\").setView([-31.9523, 115.8605], 11);"));
    assert!(body.contains("L.tileLayer("));
    assert!(!body.contains("L.markerClusterGroup()"));
    assert!(!body.contains("map.fitBounds("));
}

#[test]
fn failed_query_is_flashed_and_map_is_skipped() {
    // No schema applied, so every query fails.
    let path = std::env::temp_dir().join(format!(
        "property_explorer_noschema_{}.sqlite",
        std::process::id()
    ));
    let db = Database::new(path.to_string_lossy().into_owned());

    let resp = post_filters(&db, "");
    assert_eq!(resp.status(), 200);
    let body = read_body(resp);

    assert!(body.contains("Error running query"));
    assert!(!body.contains("L.map("));
    // Filters still work without data.
    assert_eq!(body.matches("new Choices(").count(), 3);
}

#[test]
fn unknown_route_is_not_found() {
    let db = init_test_db();
    let result = get(&db, "/nope");

    assert!(matches!(result, Err(ServerError::NotFound)));
}
