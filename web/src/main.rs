use dioxus::prelude::*;

use ui::core::config::{DashboardConfig, DatasetSource};
use ui::DashboardView;

/// Shared theme, inlined so the web and desktop builds style identically.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// `public/dataset` is served verbatim next to the bundle.
const DATASET_BASE_URL: &str = "/dataset";

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| DashboardConfig::with_source(DatasetSource::http(DATASET_BASE_URL)));

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }
        DashboardView {}
    }
}
