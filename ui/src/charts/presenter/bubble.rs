use super::{recreate, Presentation};
use crate::charts::handle::{BubbleModel, ChartHandle, ChartModel};
use crate::charts::palette::{color_for, TOTAL_GDP_BORDER, TOTAL_GDP_FILL};
use crate::charts::surface::{Disposer, Overlay, Surface};
use crate::core::format::format_percent;
use crate::data::Category;
use crate::i18n::Language;
use crate::t;
use crate::transform::BubbleSeries;

pub const OUTER_RADIUS: f64 = 150.0;
/// Share of the free space below the inner circle it is pushed down by.
const DROP: f64 = 0.7;

fn set_geometry(model: &mut BubbleModel, percentage: f64, year: &str) {
    let ratio = (percentage.clamp(0.0, 100.0) / 100.0).sqrt();
    model.percentage = percentage;
    model.year = year.to_string();
    model.inner_radius = model.outer_radius * ratio;
    model.inner_offset = (model.outer_radius - model.inner_radius) * DROP;
    model.value_label = format!("{}%", format_percent(percentage));
}

fn model(percentage: f64, year: &str, lang: Language) -> BubbleModel {
    let ict = color_for(Category::IctTotal);
    let mut model = BubbleModel {
        percentage,
        year: year.to_string(),
        language: lang,
        outer_radius: OUTER_RADIUS,
        inner_radius: 0.0,
        inner_offset: 0.0,
        value_label: String::new(),
        caption: t!(lang, "total-gdp"),
        outer_fill: TOTAL_GDP_FILL,
        outer_border: TOTAL_GDP_BORDER,
        inner_fill: ict.fill,
        inner_border: ict.border,
    };
    set_geometry(&mut model, percentage, year);
    model
}

pub(super) fn render(
    surface: &mut Surface,
    series: &BubbleSeries,
    lang: Language,
    prev: Option<ChartHandle>,
) -> Presentation {
    // Only called with a percentage; empty series are handled by the caller.
    let percentage = series.percentage.unwrap_or_default();
    let year = series.year.as_str();

    let handle = match prev {
        Some(mut handle)
            if matches!(&handle.model, ChartModel::Bubble(m) if m.language == lang) =>
        {
            if let ChartModel::Bubble(live) = &mut handle.model {
                set_geometry(live, percentage, year);
            }
            handle.revision += 1;
            tracing::debug!(surface = surface.id(), year, "bubble fields updated");
            handle
        }
        other => recreate(surface, other, ChartModel::Bubble(model(percentage, year, lang))),
    };

    let shown = format_percent(percentage);
    let mut disposer = Disposer::empty();
    surface.acquire(&mut disposer, Overlay::Title(t!(lang, "gdp-share-label", year = year)));
    surface.acquire(
        &mut disposer,
        Overlay::Subtitle(t!(lang, "gdp-share-subtitle", percentage = shown)),
    );
    surface.acquire(
        &mut disposer,
        Overlay::AriaLabel(t!(lang, "gdp-chart-aria-label", percentage = shown, year = year)),
    );
    Presentation::chart(handle, disposer)
}
