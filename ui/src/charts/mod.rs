//! Chart presentation: live chart handles, per-surface auxiliary resources and
//! the presenters that decide between updating a chart in place and rebuilding it.

mod handle;
pub mod layout;
pub mod palette;
mod presenter;
mod surface;

pub use handle::{
    BarItem, BarModel, BubbleModel, ChartHandle, ChartModel, LineModel, LinePath, PictogramModel,
    Tick, Tooltip, TreemapModel, TreemapTile,
};
pub use presenter::{Presentation, Presenter};
pub use surface::{
    icon_size_for_width, Disposer, HoverTooltip, LegendItem, Overlay, OverlayId, ResizeListener,
    Surface, SurfaceContent,
};

/// The five charts of the dashboard, one surface each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChartKind {
    Treemap,
    Bubble,
    Bar,
    Pictogram,
    Line,
}

impl ChartKind {
    /// Page order.
    pub const ALL: [ChartKind; 5] = [
        ChartKind::Treemap,
        ChartKind::Bubble,
        ChartKind::Bar,
        ChartKind::Pictogram,
        ChartKind::Line,
    ];

    /// DOM id of the drawing surface.
    pub fn surface_id(self) -> &'static str {
        match self {
            ChartKind::Treemap => "value-added-chart",
            ChartKind::Bubble => "gdp-share-chart",
            ChartKind::Bar => "profits-chart",
            ChartKind::Pictogram => "employment-chart",
            ChartKind::Line => "enterprises-chart",
        }
    }

    /// Fluent id of the section heading above the surface.
    pub fn section_key(self) -> &'static str {
        match self {
            ChartKind::Treemap => "value-added-title",
            ChartKind::Bubble => "gdp-share-title",
            ChartKind::Bar => "profits-title",
            ChartKind::Pictogram => "employment-title",
            ChartKind::Line => "enterprises-title",
        }
    }
}
