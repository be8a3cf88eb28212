use std::rc::Rc;

use super::{update_or_create, Presentation};
use crate::charts::handle::{ChartHandle, ChartModel, TreemapModel, TreemapTile};
use crate::charts::layout::{squarify, Rect};
use crate::charts::surface::{Disposer, Overlay, Surface};
use crate::core::format::format_count;
use crate::i18n::Language;
use crate::t;
use crate::transform::TreemapSeries;

const WIDTH: f64 = 1000.0;
const HEIGHT: f64 = 600.0;
const SPACING: f64 = 1.5;

fn model(series: &TreemapSeries, lang: Language) -> TreemapModel {
    let values: Vec<f64> = series.entries.iter().map(|e| e.value as f64).collect();
    let rects = squarify(&values, Rect::new(0.0, 0.0, WIDTH, HEIGHT));

    let tiles = series
        .entries
        .iter()
        .zip(rects)
        .map(|(entry, rect)| TreemapTile {
            category: entry.category,
            rect: rect.inset(SPACING),
            caption: vec![entry.label.clone(), format_count(entry.value, lang)],
            value: entry.value,
            fill: entry.color.fill,
            border: entry.color.border,
            text: entry.color.fill.contrast_text(),
        })
        .collect();

    let hover: Vec<(String, u64, bool)> = series
        .entries
        .iter()
        .map(|e| (e.label.clone(), e.value, e.is_service()))
        .collect();
    let tooltip = Rc::new(move |idx: usize| {
        let Some((label, value, service)) = hover.get(idx) else {
            return Vec::new();
        };
        let value = format_count(*value, lang);
        if *service {
            vec![
                label.clone(),
                t!(lang, "subcategory-value", value = value),
                t!(lang, "part-of-ict-services"),
            ]
        } else {
            vec![label.clone(), t!(lang, "category-value", value = value)]
        }
    });

    TreemapModel {
        width: WIDTH,
        height: HEIGHT,
        tiles,
        tooltip,
    }
}

pub(super) fn render(
    surface: &mut Surface,
    series: &TreemapSeries,
    year: &str,
    lang: Language,
    prev: Option<ChartHandle>,
) -> Presentation {
    let handle = update_or_create(surface, prev, ChartModel::Treemap(model(series, lang)));
    let mut disposer = Disposer::empty();
    surface.acquire(&mut disposer, Overlay::Title(t!(lang, "value-added-label", year = year)));
    Presentation::chart(handle, disposer)
}

#[cfg(test)]
mod tests {
    use super::super::Presenter;
    use crate::charts::{ChartKind, ChartModel, Surface, SurfaceContent};
    use crate::data::{RawDataset, RawObservation};
    use crate::i18n::Language;
    use crate::transform::{value_added, ChartSeries};

    fn series(year: &str, lang: Language) -> ChartSeries {
        let raw = RawDataset {
            data: vec![
                RawObservation::new(["EMP_TOTAL", "ICT_S_M", "ICT_S_VA", "2022"], ["150"]),
                RawObservation::new(["EMP_TOTAL", "ICT_S_S_S3", "ICT_S_VA", "2022"], ["1450"]),
                RawObservation::new(["EMP_TOTAL", "ICT_S_M", "ICT_S_VA", "2023"], ["170"]),
            ],
        };
        ChartSeries::Treemap(value_added(&raw, year, lang).unwrap())
    }

    #[test]
    fn tiles_follow_entries_and_tooltips_mark_services() {
        let mut surface = Surface::new(ChartKind::Treemap);
        let out = Presenter::Treemap.render(&mut surface, &series("2022", Language::En), "2022", Language::En, None);
        let ChartModel::Treemap(model) = &out.content.handle().unwrap().model else {
            panic!("expected treemap");
        };
        assert_eq!(model.tiles.len(), 2);
        assert_eq!(model.tiles[0].caption, vec!["Computer Programming", "1,450"]);
        assert_eq!(
            (model.tooltip)(0),
            vec!["Computer Programming", "Subcategory Value: 1,450", "Part of ICT Services sector"]
        );
        assert_eq!((model.tooltip)(1), vec!["ICT Manufacturing", "Category Value: 150"]);
        assert!(model.tiles[0].rect.area() > model.tiles[1].rect.area());
        assert_eq!(surface.title(), Some("ICT Sector Value Added (2022), mln €"));
        surface.release(out.disposer);
    }

    #[test]
    fn year_change_is_an_in_place_update() {
        let mut surface = Surface::new(ChartKind::Treemap);
        let first = Presenter::Treemap.render(&mut surface, &series("2022", Language::En), "2022", Language::En, None);
        surface.release(first.disposer);
        let SurfaceContent::Chart(handle) = first.content else {
            panic!("expected chart");
        };
        let instance = handle.instance();
        let second = Presenter::Treemap.render(
            &mut surface,
            &series("2023", Language::En),
            "2023",
            Language::En,
            Some(handle),
        );
        assert_eq!(second.content.handle().map(|h| h.instance()), Some(instance));
        assert_eq!(surface.live_handles(), 1);
        assert_eq!(surface.auxiliary_count(), 1);
        surface.release(second.disposer);
    }
}
