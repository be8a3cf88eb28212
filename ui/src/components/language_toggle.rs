use dioxus::prelude::*;

use crate::dashboard::Dashboard;
use crate::views::DashboardEvent;

/// Button flipping between English and Latvian. Its caption names the
/// language it switches to.
#[component]
pub fn LanguageToggle() -> Element {
    let dashboard = use_context::<Signal<Dashboard>>();
    let events = use_coroutine_handle::<DashboardEvent>();
    let page = dashboard.read().page_text();

    rsx! {
        button {
            class: "lang-toggle",
            r#type: "button",
            title: "{page.language_toggle_label}",
            "aria-label": "{page.language_toggle_label}",
            onclick: move |_| events.send(DashboardEvent::ToggleLanguage),
            "{page.language_toggle}"
        }
    }
}
