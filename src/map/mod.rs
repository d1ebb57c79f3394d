//! Map-side types and the capability a rendering surface must provide.

mod renderer;

pub use renderer::{MapRenderer, RenderOutcome, RenderStage};

use crate::errors::MapError;
use serde::Serialize;

/// Perth CBD, the centre of the service region.
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: -31.9523,
    lng: 115.8605,
};
/// Shows the whole metro area on first paint.
pub const DEFAULT_ZOOM: u8 = 11;
pub const DEFAULT_CONTAINER: &str = "map";
/// Fraction of the marker bounds added on every side before fitting.
pub const FIT_PADDING: f64 = 0.1;

pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_MAX_ZOOM: u8 = 19;
pub const OSM_ATTRIBUTION: &str =
    "© <a href=\"http://www.openstreetmap.org/copyright\">OpenStreetMap</a>";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn from_point(point: LatLng) -> Self {
        Self {
            south_west: point,
            north_east: point,
        }
    }

    /// Smallest bounds covering every point, or `None` for no points.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self::from_point(first);
        for p in points {
            bounds.extend(p);
        }
        Some(bounds)
    }

    pub fn extend(&mut self, point: LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Grows the box by `ratio` of its height and width on each side.
    pub fn pad(&self, ratio: f64) -> Self {
        let height_buffer = (self.south_west.lat - self.north_east.lat).abs() * ratio;
        let width_buffer = (self.south_west.lng - self.north_east.lng).abs() * ratio;

        Self {
            south_west: LatLng::new(
                self.south_west.lat - height_buffer,
                self.south_west.lng - width_buffer,
            ),
            north_east: LatLng::new(
                self.north_east.lat + height_buffer,
                self.north_east.lng + width_buffer,
            ),
        }
    }

    pub fn contains(&self, point: LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayer {
    #[serde(skip)]
    pub url_template: String,
    pub max_zoom: u8,
    pub attribution: String,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url_template: OSM_TILE_URL.to_string(),
            max_zoom: OSM_MAX_ZOOM,
            attribution: OSM_ATTRIBUTION.to_string(),
        }
    }
}

/// A point marker with its popup HTML already rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: LatLng,
    pub popup_html: String,
}

/// Markers handed to the clustering layer as one group. Clustering itself is
/// the rendering surface's job; this only collects what it is fed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterGroup {
    markers: Vec<Marker>,
}

impl ClusterGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_layer(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    pub fn layers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn bounds(&self) -> Option<LatLngBounds> {
        LatLngBounds::from_points(self.markers.iter().map(|m| m.position))
    }
}

/// Where and how the map is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub container: String,
    pub center: LatLng,
    pub zoom: u8,
    pub tile_layer: TileLayer,
    pub fit_padding: f64,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            container: DEFAULT_CONTAINER.to_string(),
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            tile_layer: TileLayer::default(),
            fit_padding: FIT_PADDING,
        }
    }
}

/// The map-rendering capability: view creation, tile layers, clustered
/// markers with popups, and bounds fitting.
pub trait MapBackend {
    /// Binds a view to `container`. The container is expected to exist.
    fn create_view(&mut self, container: &str, center: LatLng, zoom: u8) -> Result<(), MapError>;

    fn add_tile_layer(&mut self, layer: &TileLayer);

    fn add_cluster_group(&mut self, group: &ClusterGroup);

    fn fit_bounds(&mut self, bounds: LatLngBounds);
}
