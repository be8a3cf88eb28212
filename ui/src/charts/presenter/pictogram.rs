use std::rc::Rc;

use super::{recreate, Presentation};
use crate::charts::handle::{ChartHandle, ChartModel, PictogramModel};
use crate::charts::surface::{Disposer, LegendItem, Overlay, ResizeListener, Surface};
use crate::core::format::{format_count, format_percent};
use crate::i18n::Language;
use crate::t;
use crate::transform::PictogramSeries;

fn model(series: &PictogramSeries, lang: Language) -> PictogramModel {
    let icons = series
        .entries
        .iter()
        .enumerate()
        .flat_map(|(idx, e)| std::iter::repeat(idx).take(e.icons as usize))
        .collect();

    let hover: Vec<(String, u64)> = series
        .entries
        .iter()
        .map(|e| (e.label.clone(), e.employees))
        .collect();
    let tooltip = Rc::new(move |idx: usize| match hover.get(idx) {
        Some((label, employees)) => vec![format!(
            "{label}: {} {}",
            format_count(*employees, lang),
            t!(lang, "employees")
        )],
        None => Vec::new(),
    });

    PictogramModel {
        columns: series.columns(),
        icons,
        colors: series.entries.iter().map(|e| e.color.fill).collect(),
        tooltip,
    }
}

/// Icons are rebuilt from scratch on every render.
pub(super) fn render(
    surface: &mut Surface,
    series: &PictogramSeries,
    year: &str,
    lang: Language,
    prev: Option<ChartHandle>,
) -> Presentation {
    let handle = recreate(surface, prev, ChartModel::Pictogram(model(series, lang)));

    let employees = t!(lang, "employees");
    let legend = series
        .entries
        .iter()
        .map(|e| LegendItem {
            label: format!(
                "{} ({}% - {} {employees})",
                e.label,
                format_percent(e.percentage),
                format_count(e.employees, lang)
            ),
            color: e.color.fill,
        })
        .collect();

    let mut disposer = Disposer::empty();
    surface.acquire(&mut disposer, Overlay::Title(t!(lang, "employment-label", year = year)));
    surface.acquire(&mut disposer, Overlay::Legend { heading: None, items: legend });
    let listener = ResizeListener::icon_size(surface.id(), series.columns());
    surface.listen_resize(&mut disposer, listener);
    Presentation::chart(handle, disposer)
}
