// src/domain/popup.rs

use crate::domain::record::PropertyRecord;
use maud::{html, Markup};

/// Shown in place of any optional field the record does not carry.
pub const PLACEHOLDER: &str = "N/A";

pub const CURRENCY_PREFIX: &str = "$";
pub const LAND_SIZE_UNIT: &str = "sqm";

/// Popup body for one sale marker. Every field goes through maud, so
/// addresses and names are HTML-escaped.
pub fn popup_markup(record: &PropertyRecord) -> Markup {
    html! {
        div style="font-family: sans-serif; line-height: 1.5;" {
            strong style="font-size: 1.1em;" { (record.address) }
            br;
            (record.suburb_name)
            br;
            hr style="margin: 4px 0;";
            strong { "Sold on:" } " " (record.date_sold)
            br;
            strong { "Price:" } " " (format_price(record.price))
            br;
            strong { "Type:" } " " (format_property_type(record.property_type.as_deref()))
            br;
            strong { "Layout:" } " " (or_placeholder(record.layout_name.as_deref()))
            br;
            strong { "Land Size:" } " " (format_land_size(record.land_size))
            br;
            strong { "Postcode:" } " " (or_placeholder(record.postcode.as_deref()))
            br;
        }
    }
}

/// `450000.0` -> `$450,000`. Up to three fraction digits are kept, trailing
/// zeros dropped.
pub fn format_price(price: f64) -> String {
    format!("{CURRENCY_PREFIX}{}", group_thousands(price))
}

/// `semi-detached` -> `Semi detached`.
pub fn format_property_type(property_type: Option<&str>) -> String {
    let Some(raw) = property_type.filter(|s| !s.is_empty()) else {
        return PLACEHOLDER.to_string();
    };

    let spaced = raw.replace('-', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => PLACEHOLDER.to_string(),
    }
}

/// A zero land size is treated the same as a missing one.
pub fn format_land_size(land_size: Option<f64>) -> String {
    match land_size {
        Some(size) if size != 0.0 && !size.is_nan() => format!("{size} {LAND_SIZE_UNIT}"),
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn or_placeholder(value: Option<&str>) -> &str {
    value.filter(|s| !s.is_empty()).unwrap_or(PLACEHOLDER)
}

fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(char::from(*digit));
    }

    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}
