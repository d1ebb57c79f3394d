use crate::db::sales::DimensionData;
use crate::domain::filters::{SaleFilters, LAYOUT_FIELD, SUBURB_FIELD, YEAR_FIELD};
use crate::domain::popup::{format_land_size, format_price, format_property_type, or_placeholder};
use crate::domain::record::PropertyRecord;
use crate::filters::{FILTER_ROLE, RESET_BUTTON_ID};
use crate::templates::{card, desktop_layout, flash_message, Flash};
use maud::{html, Markup, PreEscaped};

pub struct ExploreVm<'a> {
    pub dims: &'a DimensionData,
    pub selected: &'a SaleFilters,
    pub results: &'a [PropertyRecord],
    pub map_container: &'a str,
    pub flash: Option<Flash>,
    pub filter_script: String,
    pub map_script: String,
}

pub fn explore_page(vm: &ExploreVm) -> Markup {
    desktop_layout(
        "Explore",
        html! {
            main class="container" {
                h1 { "Explore Sales" }

                @if let Some(flash) = &vm.flash {
                    (flash_message(flash))
                }

                (card("Filters", filter_form(vm)))

                div id=(vm.map_container) style="height: 480px; margin: 1rem 0;" {}

                (results_table(vm.results))
            }

            @if !vm.filter_script.is_empty() {
                script { (PreEscaped(&vm.filter_script)) }
            }
            @if !vm.map_script.is_empty() {
                script { (PreEscaped(&vm.map_script)) }
            }
        },
    )
}

fn filter_form(vm: &ExploreVm) -> Markup {
    html! {
        form method="post" action="/explore" class="filters" {
            label for=(YEAR_FIELD) { "Year" }
            select multiple name=(YEAR_FIELD) id=(YEAR_FIELD) class=(FILTER_ROLE) {
                @for year in &vm.dims.years {
                    option value=(year) selected[vm.selected.years.contains(year)] { (year) }
                }
            }

            label for=(SUBURB_FIELD) { "Suburb" }
            select multiple name=(SUBURB_FIELD) id=(SUBURB_FIELD) class=(FILTER_ROLE) {
                @for suburb in &vm.dims.suburbs {
                    option value=(suburb.id) selected[vm.selected.suburb_ids.contains(&suburb.id)] {
                        (suburb.name)
                    }
                }
            }

            label for=(LAYOUT_FIELD) { "Layout" }
            select multiple name=(LAYOUT_FIELD) id=(LAYOUT_FIELD) class=(FILTER_ROLE) {
                @for layout in &vm.dims.layouts {
                    option value=(layout.id) selected[vm.selected.layout_ids.contains(&layout.id)] {
                        (layout.name)
                    }
                }
            }

            div class="filter-actions" {
                button type="submit" class="primary" { "Search" }
                button type="button" id=(RESET_BUTTON_ID) { "Reset filters" }
            }
        }
    }
}

fn results_table(results: &[PropertyRecord]) -> Markup {
    html! {
        section class="results" {
            p { "Found " strong { (results.len()) } " records." }

            @if !results.is_empty() {
                table {
                    thead {
                        tr {
                            th { "Address" }
                            th { "Suburb" }
                            th { "Sold" }
                            th { "Price" }
                            th { "Type" }
                            th { "Layout" }
                            th { "Land Size" }
                        }
                    }
                    tbody {
                        @for record in results {
                            tr {
                                td { (record.address) }
                                td { (record.suburb_name) }
                                td { (record.date_sold) }
                                td { (format_price(record.price)) }
                                td { (format_property_type(record.property_type.as_deref())) }
                                td { (or_placeholder(record.layout_name.as_deref())) }
                                td { (format_land_size(record.land_size)) }
                            }
                        }
                    }
                }
            }
        }
    }
}
