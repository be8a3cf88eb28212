//! Live chart instances and the drawable models they carry.

use std::fmt;
use std::rc::Rc;

use super::layout::Rect;
use super::palette::Rgba;
use super::ChartKind;
use crate::core::config::Transition;
use crate::data::Category;
use crate::i18n::Language;

/// Hover text for one item of a chart. Rebuilt on every render because the
/// wording depends on the language.
pub type Tooltip<A> = Rc<dyn Fn(A) -> Vec<String>>;

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Position along the axis in `[0, 1]`.
    pub at: f64,
    pub label: String,
}

/// Evenly spaced ticks from zero to `max`.
pub(crate) fn ticks(max: u64, steps: u64, label: impl Fn(u64) -> String) -> Vec<Tick> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| {
            let value = max * i / steps;
            Tick {
                at: i as f64 / steps as f64,
                label: label(value),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreemapTile {
    pub category: Category,
    pub rect: Rect,
    /// Caption lines drawn inside the tile.
    pub caption: Vec<String>,
    pub value: u64,
    pub fill: Rgba,
    pub border: Rgba,
    pub text: Rgba,
}

pub struct TreemapModel {
    pub width: f64,
    pub height: f64,
    pub tiles: Vec<TreemapTile>,
    pub tooltip: Tooltip<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarItem {
    pub category: Category,
    /// Axis label, shortened when long.
    pub label: String,
    pub full_label: String,
    pub value: u64,
    /// Bar length relative to the axis maximum.
    pub ratio: f64,
    pub fill: Rgba,
    pub border: Rgba,
}

pub struct BarModel {
    pub dataset_label: String,
    pub value_axis_title: String,
    pub category_axis_title: String,
    pub axis_max: u64,
    pub ticks: Vec<Tick>,
    pub bars: Vec<BarItem>,
    pub tooltip: Tooltip<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinePath {
    pub category: Category,
    pub label: String,
    pub color: Rgba,
    pub fill: Rgba,
    pub dashed: bool,
    pub stroke_width: f32,
    /// Normalised `(x, y)` per axis year, y growing upwards; gaps are `None`.
    pub points: Vec<Option<(f64, f64)>>,
}

impl LinePath {
    /// SVG path data scaled to `width` x `height`, bridging gaps.
    pub fn svg_path(&self, width: f64, height: f64) -> String {
        let mut d = String::new();
        for (x, y) in self.points.iter().flatten() {
            let cmd = if d.is_empty() { 'M' } else { 'L' };
            d.push_str(&format!("{cmd}{:.1},{:.1} ", x * width, (1.0 - y) * height));
        }
        d.trim_end().to_string()
    }
}

pub struct LineModel {
    pub years: Vec<String>,
    pub x_title: String,
    pub y_title: String,
    pub axis_max: u64,
    pub ticks: Vec<Tick>,
    pub lines: Vec<LinePath>,
    /// `(line, year index)`.
    pub tooltip: Tooltip<(usize, usize)>,
}

/// Nested-circle GDP share. The fields mirror what the drawing depends on, so
/// an update in the same language only rewrites them.
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleModel {
    pub percentage: f64,
    pub year: String,
    pub language: Language,
    pub outer_radius: f64,
    pub inner_radius: f64,
    /// Vertical offset of the inner circle's centre below the outer centre.
    pub inner_offset: f64,
    pub value_label: String,
    pub caption: String,
    pub outer_fill: Rgba,
    pub outer_border: Rgba,
    pub inner_fill: Rgba,
    pub inner_border: Rgba,
}

pub struct PictogramModel {
    pub columns: u32,
    /// Entry index per icon, grouped in entry order.
    pub icons: Vec<usize>,
    pub colors: Vec<Rgba>,
    pub tooltip: Tooltip<usize>,
}

pub enum ChartModel {
    Treemap(TreemapModel),
    Bar(BarModel),
    Line(LineModel),
    Bubble(BubbleModel),
    Pictogram(PictogramModel),
}

impl ChartModel {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartModel::Treemap(_) => ChartKind::Treemap,
            ChartModel::Bar(_) => ChartKind::Bar,
            ChartModel::Line(_) => ChartKind::Line,
            ChartModel::Bubble(_) => ChartKind::Bubble,
            ChartModel::Pictogram(_) => ChartKind::Pictogram,
        }
    }
}

/// A live chart bound to one surface. Created and destroyed only through
/// [`Surface`](super::Surface), which counts live instances.
pub struct ChartHandle {
    pub(super) instance: u64,
    pub(super) revision: u32,
    pub transition: Transition,
    pub model: ChartModel,
}

impl ChartHandle {
    pub fn instance(&self) -> u64 {
        self.instance
    }

    /// Number of in-place updates since creation.
    pub fn revision(&self) -> u32 {
        self.revision
    }

    pub fn kind(&self) -> ChartKind {
        self.model.kind()
    }

    /// Replace the model and schedule an animated redraw.
    pub(super) fn update(&mut self, model: ChartModel) {
        self.model = model;
        self.revision += 1;
    }

    /// Every string the chart would show, tooltips included, in drawing order.
    pub fn text_snapshot(&self) -> Vec<String> {
        let mut out = Vec::new();
        match &self.model {
            ChartModel::Treemap(m) => {
                for (idx, tile) in m.tiles.iter().enumerate() {
                    out.extend(tile.caption.iter().cloned());
                    out.extend((m.tooltip)(idx));
                }
            }
            ChartModel::Bar(m) => {
                out.push(m.dataset_label.clone());
                out.push(m.value_axis_title.clone());
                out.push(m.category_axis_title.clone());
                out.extend(m.ticks.iter().map(|t| t.label.clone()));
                for (idx, bar) in m.bars.iter().enumerate() {
                    out.push(bar.label.clone());
                    out.extend((m.tooltip)(idx));
                }
            }
            ChartModel::Line(m) => {
                out.push(m.x_title.clone());
                out.push(m.y_title.clone());
                out.extend(m.years.iter().cloned());
                out.extend(m.ticks.iter().map(|t| t.label.clone()));
                for (line_idx, line) in m.lines.iter().enumerate() {
                    out.push(line.label.clone());
                    for (year_idx, point) in line.points.iter().enumerate() {
                        if point.is_some() {
                            out.extend((m.tooltip)((line_idx, year_idx)));
                        }
                    }
                }
            }
            ChartModel::Bubble(m) => {
                out.push(m.value_label.clone());
                out.push(m.caption.clone());
            }
            ChartModel::Pictogram(m) => {
                for idx in 0..m.colors.len() {
                    out.extend((m.tooltip)(idx));
                }
            }
        }
        out
    }
}

impl fmt::Debug for ChartHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartHandle")
            .field("kind", &self.kind())
            .field("instance", &self.instance)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}
