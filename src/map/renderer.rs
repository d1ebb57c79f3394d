use super::{ClusterGroup, LatLngBounds, MapBackend, MapOptions, Marker};
use crate::domain::popup::popup_markup;
use crate::domain::record::PropertyDataset;
use crate::errors::MapError;
use tracing::{debug, info, warn};

/// Steps of one render, in order. A render never moves backwards; it either
/// reaches `Ready` or stops at an earlier stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RenderStage {
    Uninitialized,
    DataChecked,
    MapCreated,
    BaseLayerAdded,
    MarkersBuilt,
    ViewFitted,
    Ready,
}

/// What a render did.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutcome {
    pub stage: RenderStage,
    /// Markers fed to the cluster layer.
    pub markers: usize,
    /// Records dropped for missing or non-numeric coordinates.
    pub skipped: usize,
    /// The padded bounds the view was fitted to.
    pub fitted_bounds: Option<LatLngBounds>,
}

impl RenderOutcome {
    fn halted(stage: RenderStage) -> Self {
        Self {
            stage,
            markers: 0,
            skipped: 0,
            fitted_bounds: None,
        }
    }
}

/// Turns a dataset into a clustered, fitted map on a [`MapBackend`].
#[derive(Debug, Clone, Default)]
pub struct MapRenderer {
    options: MapOptions,
}

impl MapRenderer {
    pub fn new(options: MapOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    /// Runs the whole render once.
    ///
    /// An absent dataset stops before the map is touched. An empty dataset, or
    /// one with no eligible records, leaves the map at its default view with
    /// only the base layer. The only error is a missing map container.
    pub fn render<B: MapBackend>(
        &self,
        backend: &mut B,
        dataset: Option<&PropertyDataset>,
    ) -> Result<RenderOutcome, MapError> {
        let mut stage = RenderStage::Uninitialized;

        let Some(dataset) = dataset else {
            warn!("No property data found to display on the map.");
            return Ok(RenderOutcome::halted(stage));
        };
        advance(&mut stage, RenderStage::DataChecked);

        backend.create_view(&self.options.container, self.options.center, self.options.zoom)?;
        advance(&mut stage, RenderStage::MapCreated);

        backend.add_tile_layer(&self.options.tile_layer);
        advance(&mut stage, RenderStage::BaseLayerAdded);

        let group = build_cluster_group(dataset);
        let skipped = dataset.len() - group.len();

        let Some(bounds) = group.bounds() else {
            info!(skipped, "no sale records with coordinates; keeping default view");
            return Ok(RenderOutcome {
                skipped,
                ..RenderOutcome::halted(stage)
            });
        };
        advance(&mut stage, RenderStage::MarkersBuilt);

        info!(markers = group.len(), skipped, "adding sale records to the map");
        backend.add_cluster_group(&group);

        let padded = bounds.pad(self.options.fit_padding);
        backend.fit_bounds(padded);
        advance(&mut stage, RenderStage::ViewFitted);

        advance(&mut stage, RenderStage::Ready);
        Ok(RenderOutcome {
            stage,
            markers: group.len(),
            skipped,
            fitted_bounds: Some(padded),
        })
    }
}

fn advance(stage: &mut RenderStage, next: RenderStage) {
    debug!(from = ?*stage, to = ?next, "map render");
    *stage = next;
}

/// One marker per eligible record, in dataset order.
pub fn build_cluster_group(dataset: &PropertyDataset) -> ClusterGroup {
    let mut group = ClusterGroup::new();
    for record in dataset.records() {
        let Some(position) = record.position() else {
            continue;
        };
        group.add_layer(Marker {
            position,
            popup_html: popup_markup(record).into_string(),
        });
    }
    group
}
