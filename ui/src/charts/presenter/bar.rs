use std::rc::Rc;

use super::{axis_ceiling, update_or_create, Presentation};
use crate::charts::handle::{ticks, BarItem, BarModel, ChartHandle, ChartModel};
use crate::charts::palette::color_for;
use crate::charts::surface::{Disposer, LegendItem, Overlay, Surface};
use crate::core::format::{format_count, truncate_label};
use crate::data::Category;
use crate::i18n::Language;
use crate::t;
use crate::transform::BarSeries;

const LABEL_MAX_CHARS: usize = 20;
const TICK_STEPS: u64 = 5;

fn model(series: &BarSeries, lang: Language, axis_floor: u64) -> BarModel {
    let axis_max = axis_ceiling(series.max_value(), axis_floor, axis_floor / TICK_STEPS);
    let bars = series
        .entries
        .iter()
        .map(|e| BarItem {
            category: e.category,
            label: truncate_label(&e.label, LABEL_MAX_CHARS),
            full_label: e.label.clone(),
            value: e.value,
            ratio: e.value as f64 / axis_max as f64,
            fill: e.color.fill,
            border: e.color.border,
        })
        .collect::<Vec<_>>();

    let hover: Vec<(String, u64)> = bars.iter().map(|b| (b.full_label.clone(), b.value)).collect();
    let tooltip = Rc::new(move |idx: usize| match hover.get(idx) {
        Some((label, value)) => vec![label.clone(), t!(lang, "profit-value", value = value)],
        None => Vec::new(),
    });

    BarModel {
        dataset_label: series.dataset_label.clone(),
        value_axis_title: t!(lang, "profit-axis-label"),
        category_axis_title: t!(lang, "profit-axis-title"),
        ticks: ticks(axis_max, TICK_STEPS, |v| format!("{} €", format_count(v, lang))),
        axis_max,
        bars,
        tooltip,
    }
}

pub(super) fn render(
    surface: &mut Surface,
    series: &BarSeries,
    year: &str,
    lang: Language,
    axis_floor: u64,
    prev: Option<ChartHandle>,
) -> Presentation {
    let handle = update_or_create(surface, prev, ChartModel::Bar(model(series, lang, axis_floor)));

    let mut disposer = Disposer::empty();
    surface.acquire(&mut disposer, Overlay::Title(t!(lang, "profits-label", year = year)));
    surface.acquire(
        &mut disposer,
        Overlay::Legend {
            heading: Some(t!(lang, "ict-services-subcategories")),
            items: Category::SERVICES
                .iter()
                .map(|c| LegendItem {
                    label: c.label(lang),
                    color: color_for(*c).fill,
                })
                .collect(),
        },
    );
    Presentation::chart(handle, disposer)
}
