// src/domain/sale_form.rs

use crate::errors::ServerError;
use chrono::NaiveDate;
use std::collections::HashMap;
use url::form_urlencoded;

/// A sale submitted through the add-record form, validated and ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSale {
    pub listing_id: i64,
    pub price: f64,
    pub address: String,
    pub property_type: Option<String>,
    pub date_sold: NaiveDate,
    pub land_size: Option<f64>,
    pub parking_spaces: Option<i64>,
    pub suburb_id: i64,
    pub layout_id: Option<i64>,
    pub agency_id: Option<i64>,
    pub primary_school_id: Option<i64>,
    pub secondary_school_id: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl NewSale {
    /// Parses an `application/x-www-form-urlencoded` body. Blank optional
    /// fields become `None`; a missing or malformed required field is a
    /// `BadRequest` naming the field.
    pub fn from_form(body: &[u8]) -> Result<Self, ServerError> {
        let fields: HashMap<String, String> = form_urlencoded::parse(body)
            .map(|(k, v)| (k.into_owned(), v.trim().to_string()))
            .filter(|(_, v)| !v.is_empty())
            .collect();

        let date_raw = required(&fields, "date_sold")?;
        let date_sold = NaiveDate::parse_from_str(date_raw, "%Y-%m-%d")
            .map_err(|_| ServerError::BadRequest(format!("Invalid date_sold: {date_raw}")))?;

        Ok(NewSale {
            listing_id: parse(&fields, "listing_id")?
                .ok_or_else(|| missing("listing_id"))?,
            price: parse(&fields, "price")?.ok_or_else(|| missing("price"))?,
            address: required(&fields, "address")?.to_string(),
            property_type: fields.get("property_type").cloned(),
            date_sold,
            land_size: parse(&fields, "land_size")?,
            parking_spaces: parse(&fields, "parking_spaces")?,
            suburb_id: parse(&fields, "suburb_id")?.ok_or_else(|| missing("suburb_id"))?,
            layout_id: parse(&fields, "layout_id")?,
            agency_id: parse(&fields, "agency_id")?,
            primary_school_id: parse(&fields, "primary_school_id")?,
            secondary_school_id: parse(&fields, "secondary_school_id")?,
            latitude: parse(&fields, "latitude")?,
            longitude: parse(&fields, "longitude")?,
        })
    }
}

fn missing(field: &str) -> ServerError {
    ServerError::BadRequest(format!("Missing required field: {field}"))
}

fn required<'a>(fields: &'a HashMap<String, String>, field: &str) -> Result<&'a str, ServerError> {
    fields
        .get(field)
        .map(String::as_str)
        .ok_or_else(|| missing(field))
}

fn parse<T: std::str::FromStr>(
    fields: &HashMap<String, String>,
    field: &str,
) -> Result<Option<T>, ServerError> {
    fields
        .get(field)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|_| ServerError::BadRequest(format!("Invalid {field}: {raw}")))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_form_parses() {
        let body = b"listing_id=501&price=655000&address=7+Nicholson+Rd&property_type=semi-detached\
&date_sold=2024-06-30&land_size=280&parking_spaces=2&suburb_id=1&layout_id=2&agency_id=&latitude=-31.94&longitude=115.82";

        let sale = NewSale::from_form(body).unwrap();

        assert_eq!(sale.listing_id, 501);
        assert_eq!(sale.price, 655000.0);
        assert_eq!(sale.address, "7 Nicholson Rd");
        assert_eq!(sale.property_type.as_deref(), Some("semi-detached"));
        assert_eq!(sale.date_sold, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
        assert_eq!(sale.parking_spaces, Some(2));
        assert_eq!(sale.layout_id, Some(2));
        assert_eq!(sale.agency_id, None);
        assert_eq!(sale.latitude, Some(-31.94));
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let err = NewSale::from_form(b"listing_id=1&address=x&date_sold=2024-01-01&suburb_id=1")
            .unwrap_err();
        assert!(matches!(err, ServerError::BadRequest(msg) if msg.contains("price")));
    }

    #[test]
    fn malformed_values_are_rejected() {
        let bad_date = NewSale::from_form(
            b"listing_id=1&price=1&address=x&date_sold=30/06/2024&suburb_id=1",
        );
        assert!(matches!(bad_date, Err(ServerError::BadRequest(msg)) if msg.contains("date_sold")));

        let bad_number = NewSale::from_form(
            b"listing_id=abc&price=1&address=x&date_sold=2024-06-30&suburb_id=1",
        );
        assert!(matches!(bad_number, Err(ServerError::BadRequest(msg)) if msg.contains("listing_id")));
    }
}
