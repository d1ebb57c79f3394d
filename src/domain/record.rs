// src/domain/record.rs

use crate::map::LatLng;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One property sale as handed to the map page.
///
/// Dates arrive already display-formatted; the optional fields fall back to a
/// placeholder when the popup is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub address: String,
    pub suburb_name: String,
    pub date_sold: String,
    pub price: f64,

    /// Hyphenated category, e.g. "semi-detached".
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub layout_name: Option<String>,
    #[serde(default)]
    pub land_size: Option<f64>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub postcode: Option<String>,

    // Anything that is not a JSON number is treated as absent.
    #[serde(default, deserialize_with = "numeric_only")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "numeric_only")]
    pub longitude: Option<f64>,
}

impl PropertyRecord {
    /// The marker position, if this record is eligible for the map.
    pub fn position(&self) -> Option<LatLng> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => {
                Some(LatLng::new(lat, lng))
            }
            _ => None,
        }
    }

    pub fn is_map_eligible(&self) -> bool {
        self.position().is_some()
    }
}

/// The ordered set of sales rendered on one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyDataset {
    records: Vec<PropertyRecord>,
}

impl PropertyDataset {
    pub fn new(records: Vec<PropertyRecord>) -> Self {
        Self { records }
    }

    /// Parses a dataset the way an embedding page supplies it: a JSON array of
    /// records, or `null` when the page has nothing to show.
    #[cfg(test)]
    pub fn from_json(raw: &str) -> Result<Option<Self>, serde_json::Error> {
        serde_json::from_str::<Option<Self>>(raw)
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn eligible(&self) -> impl Iterator<Item = &PropertyRecord> {
        self.records.iter().filter(|r| r.is_map_eligible())
    }
}

fn numeric_only<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()))
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
pub(crate) fn sample_record(address: &str, lat: Option<f64>, lng: Option<f64>) -> PropertyRecord {
    PropertyRecord {
        address: address.to_string(),
        suburb_name: "Subiaco".to_string(),
        date_sold: "14/03/2024".to_string(),
        price: 450000.0,
        property_type: Some("house".to_string()),
        layout_name: Some("3x2".to_string()),
        land_size: Some(512.0),
        postcode: Some("6008".to_string()),
        latitude: lat,
        longitude: lng,
    }
}
