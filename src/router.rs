use crate::db::sales::{get_dimension_data, insert_sale, query_sales, DimensionData};
use crate::db::Database;
use crate::domain::filters::{SaleFilters, LAYOUT_FIELD, SUBURB_FIELD, YEAR_FIELD};
use crate::domain::record::PropertyDataset;
use crate::domain::sale_form::NewSale;
use crate::errors::ServerError;
use crate::map::MapRenderer;
use crate::page;
use crate::responses::{html_response, redirect, ResultResp};
use crate::templates::pages::{add_record_page, explore_page, ExploreVm};
use crate::templates::Flash;
use astra::Request;
use std::io::Read;
use tracing::{error, info, warn};

/// Ids of the filter controls the explore page renders, in page order.
const FILTER_FIELDS: [&str; 3] = [YEAR_FIELD, SUBURB_FIELD, LAYOUT_FIELD];

pub fn handle(mut req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => redirect("/explore"),
        // Nothing is queried until the filter form is submitted.
        ("GET", "/explore") => explore(db, SaleFilters::default(), false),
        ("POST", "/explore") => {
            let body = read_form(&mut req)?;
            explore(db, SaleFilters::from_form(&body), true)
        }
        ("GET", "/add") => add_record(db, None),
        ("POST", "/add") => {
            let body = read_form(&mut req)?;
            let flash = match NewSale::from_form(&body).and_then(|sale| insert_sale(db, &sale)) {
                Ok(()) => Flash::Success("Success! New record added.".to_string()),
                Err(e) => {
                    warn!("Rejected new sale record: {e}");
                    Flash::Danger(format!("Error adding record: {e}"))
                }
            };
            add_record(db, Some(flash))
        }
        _ => Err(ServerError::NotFound),
    }
}

fn read_form(req: &mut Request) -> Result<Vec<u8>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable form body: {e}")))?;
    Ok(body)
}

fn dimensions(db: &Database) -> DimensionData {
    get_dimension_data(db).unwrap_or_else(|e| {
        error!("Failed to fetch dimension data: {e}");
        DimensionData::default()
    })
}

fn explore(db: &Database, filters: SaleFilters, run_query: bool) -> ResultResp {
    let dims = dimensions(db);

    // A failed query is shown to the user and leaves the map without data.
    let (dataset, flash) = if !run_query {
        (Some(PropertyDataset::default()), None)
    } else {
        match query_sales(db, &filters) {
            Ok(records) => (Some(PropertyDataset::new(records)), None),
            Err(e) => {
                error!("Error running sales query: {e}");
                (None, Some(Flash::Danger(format!("Error running query: {e}"))))
            }
        }
    };

    let renderer = MapRenderer::default();
    let (map_script, outcome) = page::map_script(&renderer, dataset.as_ref())?;
    info!(
        markers = outcome.markers,
        skipped = outcome.skipped,
        stage = ?outcome.stage,
        "explore page rendered"
    );

    let results = dataset.as_ref().map(|d| d.records()).unwrap_or_default();
    let vm = ExploreVm {
        dims: &dims,
        selected: &filters,
        results,
        map_container: &renderer.options().container,
        flash,
        filter_script: page::filter_script(&FILTER_FIELDS, true),
        map_script,
    };

    html_response(explore_page(&vm))
}

fn add_record(db: &Database, flash: Option<Flash>) -> ResultResp {
    let dims = dimensions(db);
    html_response(add_record_page(&dims, flash.as_ref()))
}
