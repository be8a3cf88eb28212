//! Per-kind presenters behind one `render` entry point.
//!
//! Whether a live chart is mutated in place or disposed and rebuilt is decided
//! inside each variant:
//!
//! | kind      | in place when                        |
//! |-----------|--------------------------------------|
//! | treemap   | always                               |
//! | bar       | always                               |
//! | line      | the set of drawn sectors is unchanged |
//! | bubble    | the language is unchanged            |
//! | pictogram | never                                |

mod bar;
mod bubble;
mod line;
mod pictogram;
mod treemap;

use super::handle::{ChartHandle, ChartModel};
use super::surface::{Disposer, Surface, SurfaceContent};
use super::ChartKind;
use crate::core::config::DashboardConfig;
use crate::i18n::Language;
use crate::t;
use crate::transform::ChartSeries;

/// Result of one presenter invocation: what the surface shows, plus the
/// auxiliary resources to release before the next invocation.
#[derive(Debug)]
pub struct Presentation {
    pub content: SurfaceContent,
    pub disposer: Disposer,
}

impl Presentation {
    fn chart(handle: ChartHandle, disposer: Disposer) -> Self {
        Self {
            content: SurfaceContent::Chart(handle),
            disposer,
        }
    }

    pub fn loading() -> Self {
        Self {
            content: SurfaceContent::Loading,
            disposer: Disposer::empty(),
        }
    }

    pub fn no_data(lang: Language) -> Self {
        Self {
            content: SurfaceContent::NoData {
                message: t!(lang, "no-data"),
            },
            disposer: Disposer::empty(),
        }
    }

    pub fn failed(lang: Language) -> Self {
        Self {
            content: SurfaceContent::Failed {
                message: t!(lang, "error"),
            },
            disposer: Disposer::empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Presenter {
    Treemap,
    Bar {
        /// Lower bound of the value axis maximum.
        axis_max: u64,
    },
    Line {
        axis_max: u64,
    },
    Bubble,
    Pictogram,
}

impl Presenter {
    pub fn for_kind(kind: ChartKind, config: &DashboardConfig) -> Self {
        match kind {
            ChartKind::Treemap => Presenter::Treemap,
            ChartKind::Bar => Presenter::Bar {
                axis_max: config.profit_axis_max,
            },
            ChartKind::Line => Presenter::Line {
                axis_max: config.enterprise_axis_max,
            },
            ChartKind::Bubble => Presenter::Bubble,
            ChartKind::Pictogram => Presenter::Pictogram,
        }
    }

    pub fn kind(&self) -> ChartKind {
        match self {
            Presenter::Treemap => ChartKind::Treemap,
            Presenter::Bar { .. } => ChartKind::Bar,
            Presenter::Line { .. } => ChartKind::Line,
            Presenter::Bubble => ChartKind::Bubble,
            Presenter::Pictogram => ChartKind::Pictogram,
        }
    }

    /// Draw `series` on `surface`, reusing `prev` where this kind allows it.
    ///
    /// The caller must have released the previous invocation's disposer.
    /// An empty series destroys any live chart and yields the no-data state.
    pub fn render(
        &self,
        surface: &mut Surface,
        series: &ChartSeries,
        year: &str,
        lang: Language,
        prev: Option<ChartHandle>,
    ) -> Presentation {
        if series.is_empty() {
            if let Some(handle) = prev {
                surface.destroy(handle);
            }
            return Presentation::no_data(lang);
        }

        match (self, series) {
            (Presenter::Treemap, ChartSeries::Treemap(s)) => treemap::render(surface, s, year, lang, prev),
            (Presenter::Bar { axis_max }, ChartSeries::Bar(s)) => {
                bar::render(surface, s, year, lang, *axis_max, prev)
            }
            (Presenter::Line { axis_max }, ChartSeries::Line(s)) => {
                line::render(surface, s, lang, *axis_max, prev)
            }
            (Presenter::Bubble, ChartSeries::Bubble(s)) => bubble::render(surface, s, lang, prev),
            (Presenter::Pictogram, ChartSeries::Pictogram(s)) => {
                pictogram::render(surface, s, year, lang, prev)
            }
            (presenter, series) => {
                tracing::error!(
                    surface = surface.id(),
                    presenter = ?presenter.kind(),
                    series = ?series.kind(),
                    "series does not match presenter"
                );
                if let Some(handle) = prev {
                    surface.destroy(handle);
                }
                Presentation::failed(lang)
            }
        }
    }
}

/// Mutate `prev` in place when it is the same kind of chart, else build anew.
fn update_or_create(surface: &mut Surface, prev: Option<ChartHandle>, model: ChartModel) -> ChartHandle {
    match prev {
        Some(mut handle) if handle.kind() == model.kind() => {
            handle.update(model);
            tracing::debug!(surface = surface.id(), instance = handle.instance(), "chart updated in place");
            handle
        }
        other => recreate(surface, other, model),
    }
}

fn recreate(surface: &mut Surface, prev: Option<ChartHandle>, model: ChartModel) -> ChartHandle {
    if let Some(handle) = prev {
        surface.destroy(handle);
    }
    surface.create(model)
}

/// Smallest multiple of `step` that is at least `value`, never below `floor`.
/// Upper axis bound: `floor`, raised to the next `step` above `value`. Never
/// zero, so ratios against it stay finite.
fn axis_ceiling(value: u64, floor: u64, step: u64) -> u64 {
    let step = step.max(1);
    floor.max(value.div_ceil(step).saturating_mul(step)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{BarSeries, BubbleSeries};

    #[test]
    fn empty_series_destroys_the_live_chart() {
        let mut surface = Surface::new(ChartKind::Bubble);
        let presenter = Presenter::Bubble;
        let full = ChartSeries::Bubble(BubbleSeries {
            year: "2022".into(),
            percentage: Some(5.3),
        });
        let first = presenter.render(&mut surface, &full, "2022", Language::En, None);
        surface.release(first.disposer);
        let SurfaceContent::Chart(handle) = first.content else {
            panic!("expected a chart");
        };
        assert_eq!(surface.live_handles(), 1);

        let empty = ChartSeries::Bubble(BubbleSeries {
            year: "2010".into(),
            percentage: None,
        });
        let second = presenter.render(&mut surface, &empty, "2010", Language::En, Some(handle));
        assert!(matches!(second.content, SurfaceContent::NoData { .. }));
        assert!(second.disposer.is_empty());
        assert_eq!(surface.live_handles(), 0);
        assert_eq!(surface.auxiliary_count(), 0);
    }

    #[test]
    fn mismatched_series_is_a_failure() {
        let mut surface = Surface::new(ChartKind::Line);
        let series = ChartSeries::Bar(BarSeries {
            dataset_label: "x".into(),
            entries: vec![crate::transform::BarEntry {
                category: crate::data::Category::Manufacturing,
                label: "m".into(),
                value: 1,
                color: crate::charts::palette::BLUE,
            }],
        });
        let out = Presenter::Line { axis_max: 8000 }.render(&mut surface, &series, "2022", Language::En, None);
        assert!(matches!(out.content, SurfaceContent::Failed { .. }));
    }

    #[test]
    fn axis_ceiling_respects_floor() {
        assert_eq!(axis_ceiling(120, 250, 50), 250);
        assert_eq!(axis_ceiling(251, 250, 50), 300);
        assert_eq!(axis_ceiling(9100, 8000, 1000), 10000);
    }

    #[test]
    fn axis_ceiling_is_never_zero() {
        assert_eq!(axis_ceiling(0, 0, 0), 1);
        assert_eq!(axis_ceiling(7, 0, 0), 7);
    }
}
