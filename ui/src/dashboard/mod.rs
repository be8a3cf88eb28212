//! Application state and the per-chart pipeline.
//!
//! [`Dashboard`] owns the selected year, the selected language, the playback
//! state and one [`ChartSlot`] per chart. Every year or language change re-runs
//! transform + present for all five charts synchronously. Failures stop at the
//! slot they happen in.

mod playback;
mod year_axis;

pub use playback::{Playback, PlaybackState, Speed, TickOutcome, TickRequest};
pub use year_axis::YearAxis;

use crate::charts::{ChartHandle, ChartKind, Disposer, Presentation, Presenter, Surface, SurfaceContent};
use crate::core::config::{DashboardConfig, DocumentAction};
use crate::data::{DatasetBundle, DatasetState, Endpoint};
use crate::i18n::Language;
use crate::t;
use crate::transform::series_for;

/// Dataset feeding each chart.
pub fn endpoint_for(kind: ChartKind) -> Endpoint {
    match kind {
        ChartKind::Treemap => Endpoint::ValueAdded,
        ChartKind::Bubble => Endpoint::GdpShare,
        ChartKind::Bar => Endpoint::Profits,
        ChartKind::Pictogram => Endpoint::Employment,
        ChartKind::Line => Endpoint::Enterprises,
    }
}

/// One chart: its presenter, its surface and whatever the surface shows now.
#[derive(Debug)]
pub struct ChartSlot {
    presenter: Presenter,
    surface: Surface,
    content: SurfaceContent,
    disposer: Disposer,
}

impl ChartSlot {
    fn new(kind: ChartKind, config: &DashboardConfig) -> Self {
        Self {
            presenter: Presenter::for_kind(kind, config),
            surface: Surface::with_transition(kind, config.transition),
            content: SurfaceContent::Loading,
            disposer: Disposer::empty(),
        }
    }

    pub fn kind(&self) -> ChartKind {
        self.surface.kind()
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn content(&self) -> &SurfaceContent {
        &self.content
    }

    pub fn handle(&self) -> Option<&ChartHandle> {
        self.content.handle()
    }

    /// Release the previous render's overlays and hand back its chart, if any.
    fn reclaim(&mut self) -> Option<ChartHandle> {
        let disposer = std::mem::take(&mut self.disposer);
        self.surface.release(disposer);
        match std::mem::take(&mut self.content) {
            SurfaceContent::Chart(handle) => Some(handle),
            _ => None,
        }
    }

    fn show(&mut self, presentation: Presentation) {
        self.content = presentation.content;
        self.disposer = presentation.disposer;
    }

    /// Replace the content with a status, destroying any live chart.
    fn show_status(&mut self, prev: Option<ChartHandle>, presentation: Presentation) {
        if let Some(handle) = prev {
            self.surface.destroy(handle);
        }
        self.show(presentation);
    }

    fn text_snapshot(&self, lang: Language) -> Vec<String> {
        let mut out = vec![crate::i18n::text(lang, self.kind().section_key())];
        for overlay in self.surface.overlays() {
            out.extend(overlay.text());
        }
        match &self.content {
            SurfaceContent::Loading => out.push(t!(lang, "loading")),
            SurfaceContent::Chart(handle) => out.extend(handle.text_snapshot()),
            SurfaceContent::NoData { message } | SurfaceContent::Failed { message } => {
                out.push(message.clone())
            }
        }
        out
    }
}

/// Localized static text of the page around the charts.
#[derive(Debug, Clone, PartialEq)]
pub struct PageText {
    pub title: String,
    pub intro: String,
    pub current_year: String,
    pub slider_label: String,
    pub play: String,
    pub pause: String,
    pub looping: String,
    pub speed: String,
    /// Whole attribution line, as read aloud.
    pub source: String,
    pub source_prefix: String,
    pub source_name: String,
    pub source_year: String,
    pub source_url: String,
    pub language_toggle: String,
    pub language_toggle_label: String,
    pub related_title: String,
    pub related: Vec<DocumentLink>,
}

/// Localized related-document link.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLink {
    pub title: String,
    pub href: String,
    pub action: String,
    pub download: bool,
}

#[derive(Debug)]
pub struct Dashboard {
    config: DashboardConfig,
    datasets: DatasetBundle,
    axis: YearAxis,
    year: Option<String>,
    language: Language,
    playback: Playback,
    slots: Vec<ChartSlot>,
}

impl Dashboard {
    pub fn new(config: DashboardConfig, language: Language) -> Self {
        let slots = ChartKind::ALL
            .iter()
            .map(|kind| ChartSlot::new(*kind, &config))
            .collect();
        Self {
            playback: Playback::new(config.base_interval_ms),
            datasets: DatasetBundle::default(),
            axis: YearAxis::default(),
            year: None,
            language,
            slots,
            config,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }

    pub fn axis(&self) -> &YearAxis {
        &self.axis
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn datasets(&self) -> &DatasetBundle {
        &self.datasets
    }

    pub fn slots(&self) -> &[ChartSlot] {
        &self.slots
    }

    pub fn slot(&self, kind: ChartKind) -> Option<&ChartSlot> {
        self.slots.iter().find(|s| s.kind() == kind)
    }

    /// Install the fetched datasets, pick the initial year and render everything.
    pub fn load(&mut self, datasets: DatasetBundle) {
        self.axis = YearAxis::from_bundle(&datasets);
        self.year = self.axis.initial(&self.config.default_year).map(str::to_string);
        self.datasets = datasets;
        tracing::info!(years = self.axis.years().len(), year = ?self.year, "datasets installed");
        self.render_all();
    }

    /// Switch language and re-render; same language is a no-op.
    pub fn set_language(&mut self, language: Language) -> bool {
        if language == self.language {
            return false;
        }
        self.language = language;
        self.render_all();
        true
    }

    pub fn toggle_language(&mut self) -> Language {
        self.set_language(self.language.toggled());
        self.language
    }

    /// Slider input. Landing on the last year while playing without looping
    /// ends playback, as if the animation had got there itself.
    pub fn select_year(&mut self, year: &str) -> bool {
        if !self.axis.contains(year) {
            tracing::warn!(year, "year outside the axis ignored");
            return false;
        }
        self.year = Some(year.to_string());
        self.render_all();
        if self.playback.is_playing() && !self.playback.looping() && self.axis.is_last(year) {
            self.playback.stop();
        }
        true
    }

    /// Start (or resume) playback. From the last year without looping it
    /// restarts at the first year.
    pub fn play(&mut self) -> Option<TickRequest> {
        if self.axis.is_empty() || self.playback.is_playing() {
            return None;
        }
        let at_end = self.year.as_deref().is_some_and(|y| self.axis.is_last(y));
        if at_end && !self.playback.looping() {
            if let Some(first) = self.axis.first().map(str::to_string) {
                self.year = Some(first);
                self.render_all();
            }
        }
        self.playback.start()
    }

    pub fn pause(&mut self) -> bool {
        self.playback.pause()
    }

    pub fn toggle_loop(&mut self) -> bool {
        self.playback.toggle_loop()
    }

    pub fn set_speed(&mut self, speed: Speed) -> Option<TickRequest> {
        self.playback.set_speed(speed)
    }

    pub fn cycle_speed(&mut self) -> Option<TickRequest> {
        self.set_speed(self.playback.speed().cycled())
    }

    /// Deliver a playback tick issued earlier.
    pub fn tick(&mut self, generation: u64) -> TickOutcome {
        if !self.playback.is_current(generation) {
            return TickOutcome::Ignored;
        }
        let Some(current) = self.year.clone() else {
            self.playback.stop();
            return TickOutcome::Stopped;
        };
        if let Some(next) = self.axis.next(&current).map(str::to_string) {
            self.year = Some(next);
            self.render_all();
            return TickOutcome::Advanced(self.playback.schedule());
        }
        if self.playback.looping() {
            self.year = self.axis.first().map(str::to_string);
            self.render_all();
            return TickOutcome::Looped(self.playback.schedule());
        }
        self.playback.stop();
        tracing::debug!(year = %current, "playback reached the last year");
        TickOutcome::Stopped
    }

    pub fn show_tooltip(&mut self, kind: ChartKind, lines: Vec<String>, x: f64, y: f64) {
        if let Some(slot) = self.slots.iter_mut().find(|s| s.kind() == kind) {
            slot.surface.show_tooltip(lines, x, y);
        }
    }

    pub fn hide_tooltip(&mut self, kind: ChartKind) {
        if let Some(slot) = self.slots.iter_mut().find(|s| s.kind() == kind) {
            slot.surface.hide_tooltip();
        }
    }

    /// Explicit teardown: destroy every chart and release every overlay.
    pub fn teardown(&mut self) {
        self.playback.stop();
        for slot in &mut self.slots {
            if let Some(handle) = slot.reclaim() {
                slot.surface.destroy(handle);
            }
            slot.surface.teardown();
        }
    }

    pub fn page_text(&self) -> PageText {
        let lang = self.language;
        PageText {
            title: t!(lang, "page-title"),
            intro: t!(lang, "intro-text"),
            current_year: t!(lang, "current-year"),
            slider_label: t!(lang, "year-slider-label"),
            play: t!(lang, "play-tooltip"),
            pause: t!(lang, "pause-tooltip"),
            looping: if self.playback.looping() {
                t!(lang, "loop-enabled-tooltip")
            } else {
                t!(lang, "loop-tooltip")
            },
            speed: t!(lang, "speed-tooltip", speed = self.playback.speed().label()),
            source: format!(
                "{} {}, {}",
                t!(lang, "source-prefix"),
                t!(lang, "source-suffix"),
                t!(lang, "source-year")
            ),
            source_prefix: t!(lang, "source-prefix"),
            source_name: t!(lang, "source-suffix"),
            source_year: t!(lang, "source-year"),
            source_url: self.config.source_url.clone(),
            language_toggle: t!(lang, "language-toggle"),
            language_toggle_label: t!(lang, "language-toggle-label"),
            related_title: t!(lang, "related-docs"),
            related: self
                .config
                .related_documents
                .iter()
                .map(|doc| DocumentLink {
                    title: match lang {
                        Language::En => doc.title_en.clone(),
                        Language::Lv => doc.title_lv.clone(),
                    },
                    href: doc.href.clone(),
                    action: match doc.action {
                        DocumentAction::View => t!(lang, "view-document"),
                        DocumentAction::Download => t!(lang, "download-document"),
                    },
                    download: doc.action == DocumentAction::Download,
                })
                .collect(),
        }
    }

    /// All visible text, page chrome first, then each chart in page order.
    pub fn text_snapshot(&self) -> Vec<String> {
        let page = self.page_text();
        let mut out = vec![
            page.title,
            page.intro,
            page.current_year,
            page.slider_label,
            page.play,
            page.pause,
            page.looping,
            page.speed,
            page.source,
            page.language_toggle,
            page.language_toggle_label,
        ];
        if !page.related.is_empty() {
            out.push(page.related_title);
            for doc in page.related {
                out.push(doc.title);
                out.push(doc.action);
            }
        }
        for slot in &self.slots {
            out.extend(slot.text_snapshot(self.language));
        }
        out
    }

    fn render_all(&mut self) {
        let Self {
            config,
            datasets,
            year,
            language,
            slots,
            ..
        } = self;
        for slot in slots.iter_mut() {
            render_slot(slot, datasets, year.as_deref(), *language, config.icon_budget);
        }
    }
}

fn render_slot(
    slot: &mut ChartSlot,
    datasets: &DatasetBundle,
    year: Option<&str>,
    lang: Language,
    icon_budget: u32,
) {
    let kind = slot.kind();
    let prev = slot.reclaim();
    let raw = match datasets.get(endpoint_for(kind)) {
        DatasetState::Loading => {
            slot.show_status(prev, Presentation::loading());
            return;
        }
        DatasetState::Failed(_) => {
            slot.show_status(prev, Presentation::failed(lang));
            return;
        }
        DatasetState::Loaded(raw) => raw,
    };
    let Some(year) = year else {
        slot.show_status(prev, Presentation::no_data(lang));
        return;
    };
    match series_for(kind, raw, year, lang, icon_budget) {
        Ok(series) => {
            let presentation = slot.presenter.render(&mut slot.surface, &series, year, lang, prev);
            slot.show(presentation);
        }
        Err(err) => {
            tracing::error!(surface = kind.surface_id(), %err, "data contract violation");
            slot.show_status(prev, Presentation::failed(lang));
        }
    }
}
