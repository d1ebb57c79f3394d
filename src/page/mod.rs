//! Browser bootstrap for the explore page.
//!
//! The filter registry and the map renderer run here against a
//! [`ScriptPage`], and the recorded calls are shipped to the browser as two
//! independent inline scripts.

mod script;

pub use script::ScriptPage;

use crate::domain::record::PropertyDataset;
use crate::errors::MapError;
use crate::filters::{FilterRegistry, RESET_BUTTON_ID};
use crate::map::{MapRenderer, RenderOutcome};
use std::rc::Rc;

/// Script upgrading `filter_ids` into searchable selects, plus the reset
/// listener when the page has a reset button.
pub fn filter_script(filter_ids: &[&str], has_reset_button: bool) -> String {
    let mut page = filter_ids
        .iter()
        .fold(ScriptPage::new(), |page, id| page.with_filter(id));
    if has_reset_button {
        page = page.with_element(RESET_BUTTON_ID);
    }

    let registry = Rc::new(FilterRegistry::initialize(&page, &page));
    FilterRegistry::bind_reset(registry, &page, RESET_BUTTON_ID);

    page.into_script()
}

/// Script drawing `dataset` into the page's map container.
pub fn map_script(
    renderer: &MapRenderer,
    dataset: Option<&PropertyDataset>,
) -> Result<(String, RenderOutcome), MapError> {
    let mut page = ScriptPage::new().with_element(&renderer.options().container);
    let outcome = renderer.render(&mut page, dataset)?;
    Ok((page.into_script(), outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::sample_record;
    use crate::map::RenderStage;

    #[test]
    fn filter_script_tracks_every_select() {
        let script = filter_script(&["year_select", "suburb_select", "layout_select"], true);

        assert_eq!(script.matches("new Choices(").count(), 3);
        assert_eq!(script.matches(".removeActiveItems();").count(), 3);
    }

    #[test]
    fn no_filters_and_no_button_means_no_script() {
        assert_eq!(filter_script(&[], false), "");
    }

    #[test]
    fn map_script_reports_outcome() {
        let dataset = PropertyDataset::new(vec![sample_record("1 Hay St", Some(-31.95), Some(115.86))]);
        let (script, outcome) = map_script(&MapRenderer::default(), Some(&dataset)).unwrap();

        assert_eq!(outcome.stage, RenderStage::Ready);
        assert_eq!(outcome.markers, 1);
        assert!(script.contains("map.fitBounds("));
    }
}
