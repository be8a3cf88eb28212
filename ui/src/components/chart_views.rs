//! Drawing of the five chart models. Geometry comes precomputed from the
//! presenters; this module only turns it into SVG and HTML and wires hover.

use dioxus::prelude::*;

use crate::charts::{
    BarModel, BubbleModel, ChartHandle, ChartKind, ChartModel, LineModel, PictogramModel, Tooltip,
    TreemapModel,
};
use crate::dashboard::Dashboard;

const LINE_WIDTH: f64 = 640.0;
const LINE_HEIGHT: f64 = 320.0;
const LINE_PAD: f64 = 48.0;

pub(super) fn render(kind: ChartKind, handle: &ChartHandle, dashboard: Signal<Dashboard>) -> Element {
    let transition = handle.transition.css();
    let revision = handle.revision();
    match &handle.model {
        ChartModel::Treemap(model) => treemap(kind, model, &transition, dashboard),
        ChartModel::Bar(model) => bar(kind, model, &transition, dashboard),
        ChartModel::Line(model) => line(kind, model, &transition, dashboard),
        ChartModel::Bubble(model) => bubble(model, &transition, revision),
        ChartModel::Pictogram(model) => pictogram(kind, model, dashboard),
    }
}

/// Mouse-enter handler showing `tooltip(arg)` at the pointer.
fn hover<A: Copy + 'static>(
    kind: ChartKind,
    tooltip: &Tooltip<A>,
    arg: A,
    mut dashboard: Signal<Dashboard>,
) -> impl FnMut(Event<MouseData>) + 'static {
    let tooltip = tooltip.clone();
    move |evt: Event<MouseData>| {
        let point = evt.client_coordinates();
        let lines = tooltip(arg);
        dashboard.with_mut(|d| d.show_tooltip(kind, lines, point.x, point.y));
    }
}

fn treemap(kind: ChartKind, model: &TreemapModel, transition: &str, dashboard: Signal<Dashboard>) -> Element {
    let tiles = model.tiles.iter().enumerate().map(|(idx, tile)| {
        let r = tile.rect;
        let show_caption = r.w > 70.0 && r.h > 36.0;
        let fill = tile.fill.css();
        let border = tile.border.css();
        let ink = tile.text.css();
        let on_enter = hover(kind, &model.tooltip, idx, dashboard);
        rsx! {
            g {
                key: "{tile.category.code()}",
                class: "treemap__tile",
                onmouseenter: on_enter,
                rect {
                    x: "{r.x}",
                    y: "{r.y}",
                    width: "{r.w}",
                    height: "{r.h}",
                    fill: "{fill}",
                    stroke: "{border}",
                    style: "transition: {transition};",
                }
                if show_caption {
                    for (line_idx, caption) in tile.caption.iter().enumerate() {
                        text {
                            x: "{r.x + 8.0}",
                            y: "{r.y + 20.0 + line_idx as f64 * 18.0}",
                            fill: "{ink}",
                            class: if line_idx == 0 { "treemap__label" } else { "treemap__value" },
                            "{caption}"
                        }
                    }
                }
            }
        }
    });

    rsx! {
        svg {
            class: "treemap",
            view_box: "0 0 {model.width} {model.height}",
            preserve_aspect_ratio: "none",
            {tiles}
        }
    }
}

fn bar(kind: ChartKind, model: &BarModel, transition: &str, dashboard: Signal<Dashboard>) -> Element {
    let rows = model.bars.iter().enumerate().map(|(idx, item)| {
        let width = (item.ratio * 100.0).clamp(0.0, 100.0);
        let fill = item.fill.css();
        let border = item.border.css();
        let on_enter = hover(kind, &model.tooltip, idx, dashboard);
        rsx! {
            div { key: "{item.category.code()}", class: "bar__row",
                span { class: "bar__label", title: "{item.full_label}", "{item.label}" }
                div { class: "bar__track",
                    div {
                        class: "bar__fill",
                        style: "width: {width}%; background: {fill}; border-color: {border}; transition: {transition};",
                        onmouseenter: on_enter,
                    }
                }
            }
        }
    });

    rsx! {
        div { class: "bar", "aria-label": "{model.dataset_label}",
            div { class: "bar__axis-title bar__axis-title--category", "{model.category_axis_title}" }
            div { class: "bar__rows", {rows} }
            div { class: "bar__ticks",
                for tick in model.ticks.iter() {
                    span { class: "bar__tick", style: "left: {tick.at * 100.0}%;", "{tick.label}" }
                }
            }
            div { class: "bar__axis-title bar__axis-title--value", "{model.value_axis_title}" }
        }
    }
}

fn line(kind: ChartKind, model: &LineModel, transition: &str, dashboard: Signal<Dashboard>) -> Element {
    let plot_w = LINE_WIDTH - LINE_PAD * 2.0;
    let plot_h = LINE_HEIGHT - LINE_PAD * 2.0;
    let year_count = model.years.len();

    let paths = model.lines.iter().enumerate().map(|(line_idx, series)| {
        let d = series.svg_path(plot_w, plot_h);
        let color = series.color.css();
        let dash = if series.dashed { "6 4" } else { "none" };
        let points = series.points.iter().enumerate().filter_map(|(year_idx, point)| {
            let (x, y) = (*point)?;
            let on_enter = hover(kind, &model.tooltip, (line_idx, year_idx), dashboard);
            Some(rsx! {
                circle {
                    key: "{year_idx}",
                    class: "line__point",
                    cx: "{x * plot_w}",
                    cy: "{(1.0 - y) * plot_h}",
                    r: "4",
                    fill: "{color}",
                    onmouseenter: on_enter,
                }
            })
        });
        rsx! {
            g { key: "{series.category.code()}", class: "line__series",
                path {
                    d: "{d}",
                    fill: "none",
                    stroke: "{color}",
                    stroke_width: "{series.stroke_width}",
                    stroke_dasharray: "{dash}",
                    style: "transition: {transition};",
                }
                {points}
            }
        }
    });

    rsx! {
        div { class: "line",
            svg {
                class: "line__plot",
                view_box: "0 0 {LINE_WIDTH} {LINE_HEIGHT}",
                g { transform: "translate({LINE_PAD}, {LINE_PAD})",
                    for tick in model.ticks.iter() {
                        g { class: "line__tick",
                            line {
                                x1: "0",
                                x2: "{plot_w}",
                                y1: "{(1.0 - tick.at) * plot_h}",
                                y2: "{(1.0 - tick.at) * plot_h}",
                            }
                            text { x: "-8", y: "{(1.0 - tick.at) * plot_h + 4.0}", text_anchor: "end", "{tick.label}" }
                        }
                    }
                    for (idx, year) in model.years.iter().enumerate() {
                        text {
                            class: "line__year",
                            x: "{year_position(idx, year_count) * plot_w}",
                            y: "{plot_h + 20.0}",
                            text_anchor: "middle",
                            "{year}"
                        }
                    }
                    {paths}
                }
                text { class: "line__axis-title", x: "{LINE_WIDTH / 2.0}", y: "{LINE_HEIGHT - 6.0}", text_anchor: "middle", "{model.x_title}" }
                text {
                    class: "line__axis-title",
                    transform: "translate(14, {LINE_HEIGHT / 2.0}) rotate(-90)",
                    text_anchor: "middle",
                    "{model.y_title}"
                }
            }
            ul { class: "line__legend",
                for series in model.lines.iter() {
                    li { class: if series.dashed { "line__legend-item line__legend-item--dashed" } else { "line__legend-item" },
                        span { class: "line__legend-swatch", style: "border-color: {series.color.css()};" }
                        "{series.label}"
                    }
                }
            }
        }
    }
}

fn year_position(idx: usize, count: usize) -> f64 {
    if count <= 1 {
        0.5
    } else {
        idx as f64 / (count - 1) as f64
    }
}

fn bubble(model: &BubbleModel, transition: &str, revision: u32) -> Element {
    let size = model.outer_radius * 2.0 + 8.0;
    let cx = size / 2.0;
    let cy = size / 2.0;
    let inner_cy = cy + model.inner_offset;

    rsx! {
        div { class: "bubble", "data-revision": "{revision}",
            svg { class: "bubble__plot", view_box: "0 0 {size} {size}",
                circle {
                    cx: "{cx}",
                    cy: "{cy}",
                    r: "{model.outer_radius}",
                    fill: "{model.outer_fill.css()}",
                    stroke: "{model.outer_border.css()}",
                    stroke_width: "2",
                }
                circle {
                    cx: "{cx}",
                    cy: "{inner_cy}",
                    r: "{model.inner_radius}",
                    fill: "{model.inner_fill.css()}",
                    stroke: "{model.inner_border.css()}",
                    stroke_width: "2",
                    style: "transition: {transition};",
                }
                text { class: "bubble__value", x: "{cx}", y: "{inner_cy + 6.0}", text_anchor: "middle", "{model.value_label}" }
            }
            p { class: "bubble__caption", "{model.caption}" }
        }
    }
}

fn pictogram(kind: ChartKind, model: &PictogramModel, dashboard: Signal<Dashboard>) -> Element {
    let icons = model.icons.iter().enumerate().map(|(pos, &entry)| {
        let color = model.colors.get(entry).map(|c| c.css()).unwrap_or_default();
        let on_enter = hover(kind, &model.tooltip, entry, dashboard);
        rsx! {
            span {
                key: "{pos}",
                class: "pictogram__icon",
                style: "background: {color};",
                onmouseenter: on_enter,
            }
        }
    });

    rsx! {
        div {
            class: "pictogram",
            style: "grid-template-columns: repeat({model.columns}, var(--icon-size, 12px));",
            {icons}
        }
    }
}
