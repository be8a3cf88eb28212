//! End-to-end run over the datasets bundled in `assets/dataset`.
#![cfg(not(target_arch = "wasm32"))]

use std::path::PathBuf;

use ui::charts::{ChartKind, ChartModel, SurfaceContent};
use ui::core::config::{DashboardConfig, DatasetSource};
use ui::dashboard::{Dashboard, TickOutcome};
use ui::data::{loader, Endpoint};
use ui::i18n::Language;
use ui::transform::{self, ChartSeries};

fn bundled_source() -> DatasetSource {
    DatasetSource::directory(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/dataset"))
}

async fn loaded(lang: Language) -> Dashboard {
    let source = bundled_source();
    let mut dashboard = Dashboard::new(DashboardConfig::with_source(source.clone()), lang);
    dashboard.load(loader::load_all(&source).await);
    dashboard
}

#[tokio::test]
async fn every_bundled_dataset_parses() {
    let source = bundled_source();
    for endpoint in Endpoint::ALL {
        let raw = loader::fetch(&source, endpoint).await.unwrap();
        assert!(!raw.is_empty(), "{endpoint:?} is empty");
    }
}

#[tokio::test]
async fn every_year_renders_every_chart_in_both_languages() {
    for lang in Language::ALL {
        let mut dashboard = loaded(lang).await;
        let years = dashboard.axis().years().to_vec();
        assert_eq!(years.first().map(String::as_str), Some("2018"));
        assert_eq!(dashboard.year(), Some("2023"));

        for year in &years {
            dashboard.select_year(year);
            for kind in ChartKind::ALL {
                let slot = dashboard.slot(kind).unwrap();
                assert!(
                    matches!(slot.content(), SurfaceContent::Chart(_)),
                    "{kind:?} in {year} ({lang:?}) shows {:?}",
                    slot.content()
                );
                assert_eq!(slot.surface().live_handles(), 1);
            }
        }
    }
}

#[tokio::test]
async fn pictogram_always_draws_the_full_budget() {
    let source = bundled_source();
    let raw = loader::fetch(&source, Endpoint::Employment).await.unwrap();
    let budget = DashboardConfig::default().icon_budget;
    for year in ["2018", "2019", "2020", "2021", "2022", "2023"] {
        let series = transform::series_for(ChartKind::Pictogram, &raw, year, Language::En, budget).unwrap();
        let ChartSeries::Pictogram(pictogram) = series else {
            panic!("wrong series kind");
        };
        assert_eq!(pictogram.icon_total(), budget, "{year}");
    }
}

#[tokio::test]
async fn line_chart_grows_with_the_selected_year() {
    let mut dashboard = loaded(Language::En).await;
    dashboard.select_year("2020");
    let handle = dashboard.slot(ChartKind::Line).unwrap().handle().unwrap();
    let ChartModel::Line(model) = &handle.model else {
        panic!("line slot holds {:?}", handle.kind());
    };
    assert_eq!(model.years.len(), 6);
    assert_eq!(model.lines.len(), 4);
    for line in &model.lines {
        let drawn = line.points.iter().filter(|p| p.is_some()).count();
        assert_eq!(drawn, 3, "{}", line.label);
    }
}

#[tokio::test]
async fn playback_walks_the_axis_and_stops_once() {
    let mut dashboard = loaded(Language::En).await;
    dashboard.select_year("2018");
    let mut request = dashboard.play().unwrap();
    let mut visited = vec![dashboard.year().unwrap().to_string()];
    loop {
        match dashboard.tick(request.generation) {
            TickOutcome::Advanced(next) => {
                visited.push(dashboard.year().unwrap().to_string());
                request = next;
            }
            TickOutcome::Stopped => break,
            other => panic!("unexpected {other:?}"),
        }
    }
    assert_eq!(visited, vec!["2018", "2019", "2020", "2021", "2022", "2023"]);
    assert!(!dashboard.playback().is_playing());
    assert_eq!(dashboard.tick(request.generation), TickOutcome::Ignored);
}
