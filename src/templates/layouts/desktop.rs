use maud::{html, Markup, DOCTYPE};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const CLUSTER_CSS: &str = "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.css";
const CLUSTER_DEFAULT_CSS: &str =
    "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.Default.css";
const CLUSTER_JS: &str =
    "https://unpkg.com/leaflet.markercluster@1.5.3/dist/leaflet.markercluster.js";
const CHOICES_CSS: &str =
    "https://cdn.jsdelivr.net/npm/choices.js@10.2.0/public/assets/styles/choices.min.css";
const CHOICES_JS: &str =
    "https://cdn.jsdelivr.net/npm/choices.js@10.2.0/public/assets/scripts/choices.min.js";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Perth Property Explorer" }

                // Map and filter widget libraries; the page scripts expect `L` and `Choices`.
                link rel="stylesheet" href=(LEAFLET_CSS);
                link rel="stylesheet" href=(CLUSTER_CSS);
                link rel="stylesheet" href=(CLUSTER_DEFAULT_CSS);
                link rel="stylesheet" href=(CHOICES_CSS);
                script src=(LEAFLET_JS) {}
                script src=(CLUSTER_JS) {}
                script src=(CHOICES_JS) {}
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    h3 { "Perth Property Explorer" }
                    nav {
                        ul {
                            li { a href="/explore" { "Explore" } }
                            li { a href="/add" { "Add Record" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
