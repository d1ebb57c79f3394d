// src/page/script.rs

use crate::errors::MapError;
use crate::filters::{Document, MultiSelect, MultiSelectFactory, MultiSelectOptions, PageElement};
use crate::map::{ClusterGroup, LatLng, LatLngBounds, MapBackend, TileLayer};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::warn;

type ClickHandler = Box<dyn Fn()>;

#[derive(Default)]
struct ScriptState {
    filter_ids: Vec<String>,
    element_ids: Vec<String>,
    statements: Vec<String>,
    listeners: Vec<(String, ClickHandler)>,
    /// Set while a click handler is being replayed; widget calls land here.
    recording: Option<Vec<String>>,
    next_widget: usize,
}

/// A page rendering surface that writes browser calls instead of performing
/// them. The markup is produced separately; a `ScriptPage` only needs to know
/// which element ids that markup contains.
///
/// The emitted script runs everything inside one `DOMContentLoaded` listener.
#[derive(Clone, Default)]
pub struct ScriptPage {
    state: Rc<RefCell<ScriptState>>,
}

impl ScriptPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a filter-tagged select with this id.
    pub fn with_filter(self, id: &str) -> Self {
        {
            let mut state = self.state.borrow_mut();
            state.filter_ids.push(id.to_string());
            state.element_ids.push(id.to_string());
        }
        self
    }

    /// Declares any other element (a button, the map container).
    pub fn with_element(self, id: &str) -> Self {
        self.state.borrow_mut().element_ids.push(id.to_string());
        self
    }

    fn has_element(&self, id: &str) -> bool {
        self.state.borrow().element_ids.iter().any(|e| e == id)
    }

    fn push(&self, statement: String) {
        self.state.borrow_mut().statements.push(statement);
    }

    /// Replays registered click handlers into listeners and returns the
    /// script. Empty when nothing was emitted.
    pub fn into_script(self) -> String {
        let listeners = std::mem::take(&mut self.state.borrow_mut().listeners);

        for (id, handler) in listeners {
            self.state.borrow_mut().recording = Some(Vec::new());
            handler();
            let body = self.state.borrow_mut().recording.take().unwrap_or_default();

            let mut listener = format!(
                "document.getElementById({}).addEventListener(\"click\", function () {{\n",
                js_literal(&id)
            );
            for line in body {
                listener.push_str("  ");
                listener.push_str(&line);
                listener.push('\n');
            }
            listener.push_str("});");
            self.push(listener);
        }

        let state = self.state.borrow();
        if state.statements.is_empty() {
            return String::new();
        }

        let mut script = String::from("document.addEventListener(\"DOMContentLoaded\", function () {\n");
        for statement in &state.statements {
            for line in statement.lines() {
                script.push_str("  ");
                script.push_str(line);
                script.push('\n');
            }
        }
        script.push_str("});\n");
        script
    }
}

#[derive(Clone)]
pub struct ScriptElement {
    id: String,
    state: Rc<RefCell<ScriptState>>,
}

impl PageElement for ScriptElement {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_click(&self, handler: Box<dyn Fn()>) {
        self.state
            .borrow_mut()
            .listeners
            .push((self.id.clone(), handler));
    }
}

impl Document for ScriptPage {
    type Element = ScriptElement;

    fn find_elements_by_role(&self, role: &str) -> Vec<ScriptElement> {
        if role != crate::filters::FILTER_ROLE {
            return Vec::new();
        }
        self.state
            .borrow()
            .filter_ids
            .iter()
            .map(|id| ScriptElement {
                id: id.clone(),
                state: Rc::clone(&self.state),
            })
            .collect()
    }

    fn find_element_by_id(&self, id: &str) -> Option<ScriptElement> {
        self.has_element(id).then(|| ScriptElement {
            id: id.to_string(),
            state: Rc::clone(&self.state),
        })
    }
}

/// Handle to a `Choices` instance created by the emitted script.
pub struct ChoicesHandle {
    var: String,
    state: Rc<RefCell<ScriptState>>,
}

impl MultiSelect for ChoicesHandle {
    fn clear_active_selections(&self) {
        let mut state = self.state.borrow_mut();
        match state.recording.as_mut() {
            Some(body) => body.push(format!("{}.removeActiveItems();", self.var)),
            None => warn!(widget = %self.var, "selections can only be cleared from a click handler"),
        }
    }
}

impl MultiSelectFactory<ScriptElement> for ScriptPage {
    type Widget = ChoicesHandle;

    fn upgrade(&self, element: &ScriptElement, options: &MultiSelectOptions) -> ChoicesHandle {
        let var = {
            let mut state = self.state.borrow_mut();
            let var = format!("choices{}", state.next_widget);
            state.next_widget += 1;
            var
        };

        self.push(format!(
            "const {var} = new Choices(document.getElementById({}), {});",
            js_literal(element.id()),
            js_literal(options)
        ));

        ChoicesHandle {
            var,
            state: Rc::clone(&self.state),
        }
    }
}

impl MapBackend for ScriptPage {
    fn create_view(&mut self, container: &str, center: LatLng, zoom: u8) -> Result<(), MapError> {
        if !self.has_element(container) {
            return Err(MapError::ContainerMissing(container.to_string()));
        }
        self.push(format!(
            "const map = L.map({}).setView({}, {zoom});",
            js_literal(container),
            js_point(center)
        ));
        Ok(())
    }

    fn add_tile_layer(&mut self, layer: &TileLayer) {
        self.push(format!(
            "L.tileLayer({}, {}).addTo(map);",
            js_literal(&layer.url_template),
            js_literal(layer)
        ));
    }

    fn add_cluster_group(&mut self, group: &ClusterGroup) {
        let mut statement = String::from("const markers = L.markerClusterGroup();\n");
        for marker in group.layers() {
            statement.push_str(&format!(
                "markers.addLayer(L.marker({}).bindPopup({}));\n",
                js_point(marker.position),
                js_literal(&marker.popup_html)
            ));
        }
        statement.push_str("map.addLayer(markers);");
        self.push(statement);
    }

    fn fit_bounds(&mut self, bounds: LatLngBounds) {
        self.push(format!(
            "map.fitBounds([{}, {}]);",
            js_point(bounds.south_west),
            js_point(bounds.north_east)
        ));
    }
}

fn js_point(point: LatLng) -> String {
    format!("[{}, {}]", point.lat, point.lng)
}

/// A JSON literal that is also safe inside an inline `<script>`.
fn js_literal<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json.replace("</", "<\\/"),
        Err(e) => {
            warn!("could not serialize script value: {e}");
            "null".to_string()
        }
    }
}
