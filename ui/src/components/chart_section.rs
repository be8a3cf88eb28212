use dioxus::prelude::*;

use super::chart_views;
use crate::charts::{ChartKind, Overlay, SurfaceContent};
use crate::dashboard::Dashboard;
use crate::i18n;
use crate::t;

/// One chart card: heading, overlays acquired by the presenter, the chart body
/// and the hover tooltip.
#[component]
pub fn ChartSection(kind: ChartKind) -> Element {
    let dashboard = use_context::<Signal<Dashboard>>();
    let d = dashboard.read();
    let lang = d.language();
    let heading = i18n::text(lang, kind.section_key());

    let Some(slot) = d.slot(kind) else {
        return rsx! {};
    };
    let surface = slot.surface();

    let overlays: Vec<Overlay> = surface.overlays().cloned().collect();
    let tooltip = surface.tooltip().cloned();
    let body = match slot.content() {
        SurfaceContent::Loading => {
            let message = t!(lang, "loading");
            rsx! {
                div { class: "chart__status chart__status--loading", "{message}" }
            }
        }
        SurfaceContent::NoData { message } => rsx! {
            div { class: "chart__status chart__status--empty", "{message}" }
        },
        SurfaceContent::Failed { message } => rsx! {
            div { class: "chart__status chart__status--error", role: "alert", "{message}" }
        },
        SurfaceContent::Chart(handle) => chart_views::render(kind, handle, dashboard),
    };
    drop(d);

    rsx! {
        section { class: "chart chart--{kind.surface_id()}",
            h2 { class: "chart__heading", "{heading}" }
            for overlay in overlays.iter().filter(|o| !matches!(o, Overlay::Legend { .. })) {
                {render_overlay(overlay)}
            }
            div {
                class: "chart__surface",
                id: "{kind.surface_id()}",
                onmouseleave: move |_| {
                    let mut dashboard = dashboard;
                    dashboard.with_mut(|d| d.hide_tooltip(kind));
                },
                {body}
            }
            for overlay in overlays.iter().filter(|o| matches!(o, Overlay::Legend { .. })) {
                {render_overlay(overlay)}
            }
            if let Some(tip) = tooltip {
                div {
                    class: "chart__tooltip",
                    role: "tooltip",
                    style: "left: {tip.x + 12.0}px; top: {tip.y + 12.0}px;",
                    for line in tip.lines.iter() {
                        div { class: "chart__tooltip-line", "{line}" }
                    }
                }
            }
        }
    }
}

fn render_overlay(overlay: &Overlay) -> Element {
    match overlay {
        Overlay::Title(text) => rsx! {
            h3 { class: "chart__title", "{text}" }
        },
        Overlay::Subtitle(text) => rsx! {
            p { class: "chart__subtitle", "{text}" }
        },
        Overlay::AriaLabel(text) => rsx! {
            p { class: "sr-only", "{text}" }
        },
        Overlay::Legend { heading, items } => rsx! {
            div { class: "chart__legend",
                if let Some(heading) = heading {
                    h4 { class: "chart__legend-heading", "{heading}" }
                }
                ul { class: "chart__legend-items",
                    for item in items.iter() {
                        li { class: "chart__legend-item",
                            span { class: "chart__legend-swatch", style: "background: {item.color.css()};" }
                            span { "{item.label}" }
                        }
                    }
                }
            }
        },
    }
}
