use super::{
    label_fragment, Document, MultiSelect, MultiSelectFactory, MultiSelectOptions, PageElement,
    FILTER_ROLE,
};
use std::rc::Rc;
use tracing::{debug, info, warn};

/// One upgraded filter control.
#[derive(Debug)]
pub struct FilterWidgetInstance<W> {
    pub element_id: String,
    /// Text before the first underscore of the element id, used in the placeholder.
    pub label: String,
    pub widget: W,
}

/// Every widget created on the page, in document order. Filled once by
/// [`FilterRegistry::initialize`] and only read afterwards.
#[derive(Debug)]
pub struct FilterRegistry<W> {
    instances: Vec<FilterWidgetInstance<W>>,
}

impl<W: MultiSelect> FilterRegistry<W> {
    /// Upgrades every filter-tagged element in `document`. Finding none is
    /// fine; the registry is just empty.
    pub fn initialize<D, F>(document: &D, factory: &F) -> Self
    where
        D: Document,
        F: MultiSelectFactory<D::Element, Widget = W>,
    {
        let elements = document.find_elements_by_role(FILTER_ROLE);
        info!("Found {} elements to upgrade to searchable selects.", elements.len());

        let mut registry = Self {
            instances: Vec::with_capacity(elements.len()),
        };
        for element in &elements {
            let options = MultiSelectOptions::for_element_id(element.id());
            let widget = factory.upgrade(element, &options);
            registry.push(element.id(), widget);
        }
        registry
    }

    fn push(&mut self, element_id: &str, widget: W) {
        self.instances.push(FilterWidgetInstance {
            element_id: element_id.to_string(),
            label: label_fragment(element_id).to_string(),
            widget,
        });
    }

    pub fn instances(&self) -> &[FilterWidgetInstance<W>] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Clears the active selections of every widget, in registry order.
    pub fn reset(&self) {
        for instance in &self.instances {
            instance.widget.clear_active_selections();
        }
    }
}

impl<W: MultiSelect + 'static> FilterRegistry<W> {
    /// Wires the control with id `button_id` to [`FilterRegistry::reset`].
    /// Returns whether the control was found; a missing control is not an error.
    pub fn bind_reset<D: Document>(registry: Rc<Self>, document: &D, button_id: &str) -> bool {
        let Some(button) = document.find_element_by_id(button_id) else {
            warn!(button_id, "reset control not found; filters will not be resettable");
            return false;
        };

        button.on_click(Box::new(move || {
            debug!(widgets = registry.len(), "reset clicked; clearing all selections");
            registry.reset();
        }));
        true
    }
}
