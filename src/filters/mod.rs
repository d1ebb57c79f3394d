//! Searchable multi-select filters and the control that clears them.

mod registry;

pub use registry::{FilterRegistry, FilterWidgetInstance};

use serde::Serialize;

/// Class carried by every select that should be upgraded.
pub const FILTER_ROLE: &str = "multi-searchable-select";
pub const RESET_BUTTON_ID: &str = "reset-filters-btn";
pub const SEARCH_PLACEHOLDER: &str = "Type to search...";

/// Page lookups the filter layer depends on.
pub trait Document {
    type Element: PageElement;

    fn find_elements_by_role(&self, role: &str) -> Vec<Self::Element>;

    fn find_element_by_id(&self, id: &str) -> Option<Self::Element>;
}

pub trait PageElement {
    fn id(&self) -> &str;

    fn on_click(&self, handler: Box<dyn Fn()>);
}

/// One upgraded select. Handles are cheap references to a widget that the page
/// also holds, so clearing takes `&self`.
pub trait MultiSelect {
    fn clear_active_selections(&self);
}

/// Upgrades a plain element into a searchable multi-select.
pub trait MultiSelectFactory<E: PageElement> {
    type Widget: MultiSelect;

    fn upgrade(&self, element: &E, options: &MultiSelectOptions) -> Self::Widget;
}

/// Widget configuration, serialized with the widget library's option names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiSelectOptions {
    pub remove_item_button: bool,
    pub search_placeholder_value: String,
    pub placeholder: bool,
    pub placeholder_value: String,
    pub item_select_text: String,
}

impl MultiSelectOptions {
    pub fn for_element_id(id: &str) -> Self {
        Self {
            remove_item_button: true,
            search_placeholder_value: SEARCH_PLACEHOLDER.to_string(),
            placeholder: true,
            placeholder_value: placeholder_text(label_fragment(id)),
            item_select_text: String::new(),
        }
    }
}

/// `suburb_select` -> `suburb`. An id without underscores is used whole.
pub fn label_fragment(id: &str) -> &str {
    id.split('_').next().unwrap_or(id)
}

pub fn placeholder_text(fragment: &str) -> String {
    format!("Select {fragment}(s)...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_text_before_first_underscore() {
        assert_eq!(label_fragment("suburb_select"), "suburb");
        assert_eq!(label_fragment("primary_school_select"), "primary");
        assert_eq!(label_fragment("layouts"), "layouts");
        assert_eq!(label_fragment("_odd"), "");
    }

    #[test]
    fn options_match_widget_configuration() {
        let options = MultiSelectOptions::for_element_id("year_select");

        assert!(options.remove_item_button);
        assert_eq!(options.placeholder_value, "Select year(s)...");
        assert_eq!(options.search_placeholder_value, "Type to search...");
        assert_eq!(options.item_select_text, "");

        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["removeItemButton"], true);
        assert_eq!(json["placeholderValue"], "Select year(s)...");
        assert_eq!(json["itemSelectText"], "");
    }
}
