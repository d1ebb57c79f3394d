use crate::db::sales::{DimensionData, NamedDimension};
use crate::templates::{card, desktop_layout, flash_message, Flash};
use maud::{html, Markup};

pub fn add_record_page(dims: &DimensionData, flash: Option<&Flash>) -> Markup {
    let suburbs: Vec<(i64, &str)> = dims.suburbs.iter().map(|s| (s.id, s.name.as_str())).collect();
    let layouts: Vec<(i64, &str)> = dims.layouts.iter().map(|l| (l.id, l.name.as_str())).collect();

    desktop_layout(
        "Add Record",
        html! {
            main class="container" {
                h1 { "Add Sale Record" }

                @if let Some(flash) = flash {
                    (flash_message(flash))
                }

                (card("New sale", html! {
                    form method="post" action="/add" class="record-form" {
                        (text_input("listing_id", "Listing ID", "number", true))
                        (text_input("price", "Price", "number", true))
                        (text_input("address", "Address", "text", true))
                        (text_input("property_type", "Property type", "text", false))
                        (text_input("date_sold", "Date sold", "date", true))
                        (text_input("land_size", "Land size (sqm)", "number", false))
                        (text_input("parking_spaces", "Parking spaces", "number", false))
                        (text_input("latitude", "Latitude", "text", false))
                        (text_input("longitude", "Longitude", "text", false))

                        (dimension_select("suburb_id", "Suburb", &suburbs, true))
                        (dimension_select("layout_id", "Layout", &layouts, false))
                        (dimension_select("agency_id", "Agency", &pairs(&dims.agencies), false))
                        (dimension_select("primary_school_id", "Primary school", &pairs(&dims.primary_schools), false))
                        (dimension_select("secondary_school_id", "Secondary school", &pairs(&dims.secondary_schools), false))

                        button type="submit" class="primary" { "Add record" }
                    }
                }))
            }
        },
    )
}

fn pairs(items: &[NamedDimension]) -> Vec<(i64, &str)> {
    items.iter().map(|d| (d.id, d.name.as_str())).collect()
}

fn text_input(name: &str, label: &str, kind: &str, required: bool) -> Markup {
    html! {
        label for=(name) { (label) }
        input type=(kind) id=(name) name=(name) step=[(kind == "number").then_some("any")] required[required];
    }
}

fn dimension_select(name: &str, label: &str, options: &[(i64, &str)], required: bool) -> Markup {
    html! {
        label for=(name) { (label) }
        select id=(name) name=(name) required[required] {
            option value="" { "-- Select --" }
            @for (id, option_name) in options {
                option value=(id) { (option_name) }
            }
        }
    }
}
