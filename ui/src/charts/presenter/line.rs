use std::rc::Rc;

use super::{axis_ceiling, recreate, update_or_create, Presentation};
use crate::charts::handle::{ticks, ChartHandle, ChartModel, LineModel, LinePath};
use crate::charts::surface::{Disposer, Overlay, Surface};
use crate::core::format::format_count;
use crate::i18n::Language;
use crate::t;
use crate::transform::LineSeries;

const TICK_STEPS: u64 = 4;
const AXIS_STEP: u64 = 1000;

fn model(series: &LineSeries, lang: Language, axis_floor: u64) -> LineModel {
    let axis_max = axis_ceiling(series.max_value(), axis_floor, AXIS_STEP);
    let last = series.years.len().saturating_sub(1).max(1) as f64;
    let single = series.years.len() == 1;

    let lines = series
        .datasets
        .iter()
        .map(|d| LinePath {
            category: d.category,
            label: d.label.clone(),
            color: d.color.border,
            fill: d.color.fill,
            dashed: d.dashed,
            stroke_width: d.stroke_width(),
            points: d
                .points
                .iter()
                .enumerate()
                .map(|(idx, p)| {
                    let x = if single { 0.5 } else { idx as f64 / last };
                    p.map(|v| (x, v as f64 / axis_max as f64))
                })
                .collect(),
        })
        .collect();

    let years = series.years.clone();
    let hover: Vec<(String, Vec<Option<u64>>)> = series
        .datasets
        .iter()
        .map(|d| (d.label.clone(), d.points.clone()))
        .collect();
    let tooltip = Rc::new(move |(line, year_idx): (usize, usize)| {
        let point = hover
            .get(line)
            .and_then(|(label, points)| Some((label, (*points.get(year_idx)?)?)));
        match (point, years.get(year_idx)) {
            (Some((label, value)), Some(year)) => vec![
                year.clone(),
                format!("{label}: {} {}", format_count(value, lang), t!(lang, "enterprises")),
            ],
            _ => Vec::new(),
        }
    });

    LineModel {
        years: series.years.clone(),
        x_title: t!(lang, "year"),
        y_title: t!(lang, "number-of-enterprises"),
        ticks: ticks(axis_max, TICK_STEPS, |v| format_count(v, lang)),
        axis_max,
        lines,
        tooltip,
    }
}

pub(super) fn render(
    surface: &mut Surface,
    series: &LineSeries,
    lang: Language,
    axis_floor: u64,
    prev: Option<ChartHandle>,
) -> Presentation {
    let next = ChartModel::Line(model(series, lang, axis_floor));
    let same_lines = match prev.as_ref().map(|h| &h.model) {
        Some(ChartModel::Line(live)) => live
            .lines
            .iter()
            .map(|l| l.category)
            .eq(series.signature()),
        _ => false,
    };
    let handle = if same_lines {
        update_or_create(surface, prev, next)
    } else {
        recreate(surface, prev, next)
    };

    let mut disposer = Disposer::empty();
    surface.acquire(
        &mut disposer,
        Overlay::Title(t!(lang, "enterprises-label", year = series.year_range())),
    );
    Presentation::chart(handle, disposer)
}
