//! One drawing surface per chart, and the auxiliary resources attached to it.
//!
//! Titles, legends, screen-reader summaries, hover tooltips and resize
//! listeners are acquired from the surface and identified by an
//! [`OverlayId`]. A presenter hands the ids it acquired back as a
//! [`Disposer`]; the caller releases it before the next render of the same
//! surface, or through [`Surface::teardown`].

use std::collections::BTreeMap;

use super::handle::{ChartHandle, ChartModel};
use super::palette::Rgba;
use super::ChartKind;
use crate::core::config::Transition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct LegendItem {
    pub label: String,
    pub color: Rgba,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Title(String),
    Subtitle(String),
    /// Visually hidden summary for assistive technology.
    AriaLabel(String),
    Legend {
        heading: Option<String>,
        items: Vec<LegendItem>,
    },
}

impl Overlay {
    pub fn text(&self) -> Vec<String> {
        match self {
            Overlay::Title(s) | Overlay::Subtitle(s) | Overlay::AriaLabel(s) => vec![s.clone()],
            Overlay::Legend { heading, items } => heading
                .iter()
                .cloned()
                .chain(items.iter().map(|i| i.label.clone()))
                .collect(),
        }
    }
}

/// Floating tooltip shown while the pointer is over a chart item.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverTooltip {
    pub lines: Vec<String>,
    pub x: f64,
    pub y: f64,
}

/// Icon edge length for a pictogram `width` pixels wide with `columns` icons
/// per row, clamped per breakpoint.
pub fn icon_size_for_width(width: f64, columns: u32) -> u32 {
    let ideal = (width / f64::from(columns.max(1))).floor().max(0.0) as u32;
    if width <= 400.0 {
        ideal.clamp(6, 10)
    } else if width <= 768.0 {
        ideal.clamp(10, 14)
    } else {
        ideal.clamp(14, 24)
    }
}

/// Window resize subscription that keeps `--icon-size` of an element in step
/// with its width. Unsubscribes on drop.
pub struct ResizeListener {
    element_id: String,
    columns: u32,
    #[cfg(target_arch = "wasm32")]
    callback: wasm_bindgen::closure::Closure<dyn FnMut()>,
}

#[cfg(target_arch = "wasm32")]
fn apply_icon_size(element_id: &str, columns: u32) {
    use wasm_bindgen::JsCast;

    let Some(element) = crate::core::platform::element_by_id(element_id) else {
        return;
    };
    let size = icon_size_for_width(f64::from(element.client_width()), columns);
    if let Ok(html) = element.dyn_into::<web_sys::HtmlElement>() {
        let _ = html.style().set_property("--icon-size", &format!("{size}px"));
    }
}

impl ResizeListener {
    pub fn icon_size(element_id: &str, columns: u32) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;

            let id = element_id.to_string();
            let callback = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
                apply_icon_size(&id, columns)
            });
            if let Some(window) = web_sys::window() {
                if window
                    .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    tracing::warn!(element_id, "could not subscribe to window resize");
                }
            }
            apply_icon_size(element_id, columns);
            Self {
                element_id: element_id.to_string(),
                columns,
                callback,
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                element_id: element_id.to_string(),
                columns,
            }
        }
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ResizeListener {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("resize", self.callback.as_ref().unchecked_ref());
        }
    }
}

impl std::fmt::Debug for ResizeListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeListener")
            .field("element_id", &self.element_id)
            .field("columns", &self.columns)
            .finish()
    }
}

/// Resources acquired by one presenter invocation. Must be handed back to
/// [`Surface::release`]; dropping it leaks the overlays until teardown.
#[must_use = "pass the disposer to Surface::release before re-rendering"]
#[derive(Debug, Default, PartialEq)]
pub struct Disposer {
    surface: Option<ChartKind>,
    ids: Vec<OverlayId>,
}

impl Disposer {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// What a surface currently displays.
#[derive(Debug, Default)]
pub enum SurfaceContent {
    #[default]
    Loading,
    Chart(ChartHandle),
    NoData { message: String },
    Failed { message: String },
}

impl SurfaceContent {
    pub fn handle(&self) -> Option<&ChartHandle> {
        match self {
            SurfaceContent::Chart(handle) => Some(handle),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct Surface {
    kind: ChartKind,
    transition: Transition,
    next_instance: u64,
    next_overlay: u64,
    live_handles: usize,
    overlays: BTreeMap<OverlayId, Overlay>,
    listeners: BTreeMap<OverlayId, ResizeListener>,
    tooltip: Option<HoverTooltip>,
}

impl Surface {
    pub fn new(kind: ChartKind) -> Self {
        Self::with_transition(kind, Transition::default())
    }

    /// Surface whose charts animate in-place updates with `transition`.
    pub fn with_transition(kind: ChartKind, transition: Transition) -> Self {
        Self {
            kind,
            transition,
            next_instance: 0,
            next_overlay: 0,
            live_handles: 0,
            overlays: BTreeMap::new(),
            listeners: BTreeMap::new(),
            tooltip: None,
        }
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn id(&self) -> &'static str {
        self.kind.surface_id()
    }

    fn next_id(&mut self) -> OverlayId {
        self.next_overlay += 1;
        OverlayId(self.next_overlay)
    }

    /// Bind a new chart instance to this surface. The previous one must
    /// already have been destroyed.
    pub fn create(&mut self, model: ChartModel) -> ChartHandle {
        if self.live_handles > 0 {
            tracing::error!(surface = self.id(), "creating a chart over a live one");
        }
        self.next_instance += 1;
        self.live_handles += 1;
        tracing::debug!(surface = self.id(), instance = self.next_instance, "chart created");
        ChartHandle {
            instance: self.next_instance,
            revision: 0,
            transition: self.transition,
            model,
        }
    }

    pub fn destroy(&mut self, handle: ChartHandle) {
        tracing::debug!(surface = self.id(), instance = handle.instance, "chart destroyed");
        self.live_handles = self.live_handles.saturating_sub(1);
    }

    pub fn live_handles(&self) -> usize {
        self.live_handles
    }

    /// Attach an overlay, recording it in `disposer`.
    pub fn acquire(&mut self, disposer: &mut Disposer, overlay: Overlay) -> OverlayId {
        let id = self.next_id();
        self.overlays.insert(id, overlay);
        disposer.surface = Some(self.kind);
        disposer.ids.push(id);
        id
    }

    pub fn listen_resize(&mut self, disposer: &mut Disposer, listener: ResizeListener) -> OverlayId {
        let id = self.next_id();
        self.listeners.insert(id, listener);
        disposer.surface = Some(self.kind);
        disposer.ids.push(id);
        id
    }

    /// Release everything a previous invocation acquired, hover tooltip included.
    pub fn release(&mut self, disposer: Disposer) {
        if let Some(owner) = disposer.surface {
            if owner != self.kind {
                tracing::error!(surface = self.id(), owner = owner.surface_id(), "disposer from another surface");
                return;
            }
        }
        self.tooltip = None;
        for id in disposer.ids {
            if self.overlays.remove(&id).is_none() && self.listeners.remove(&id).is_none() {
                tracing::warn!(surface = self.id(), ?id, "overlay released twice");
            }
        }
    }

    /// Drop every auxiliary resource regardless of who acquired it.
    pub fn teardown(&mut self) {
        self.overlays.clear();
        self.listeners.clear();
        self.tooltip = None;
    }

    pub fn overlays(&self) -> impl Iterator<Item = &Overlay> {
        self.overlays.values()
    }

    pub fn title(&self) -> Option<&str> {
        self.overlays().find_map(|o| match o {
            Overlay::Title(s) => Some(s.as_str()),
            _ => None,
        })
    }

    pub fn listeners(&self) -> impl Iterator<Item = &ResizeListener> {
        self.listeners.values()
    }

    /// Count of live auxiliary resources (overlays, listeners, tooltip).
    pub fn auxiliary_count(&self) -> usize {
        self.overlays.len() + self.listeners.len() + usize::from(self.tooltip.is_some())
    }

    pub fn show_tooltip(&mut self, lines: Vec<String>, x: f64, y: f64) {
        self.tooltip = Some(HoverTooltip { lines, x, y });
    }

    pub fn hide_tooltip(&mut self) {
        self.tooltip = None;
    }

    pub fn tooltip(&self) -> Option<&HoverTooltip> {
        self.tooltip.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_removes_exactly_what_was_acquired() {
        let mut surface = Surface::new(ChartKind::Bubble);
        let mut first = Disposer::empty();
        surface.acquire(&mut first, Overlay::Title("a".into()));
        surface.acquire(&mut first, Overlay::Subtitle("b".into()));
        let mut second = Disposer::empty();
        surface.acquire(&mut second, Overlay::AriaLabel("c".into()));
        surface.show_tooltip(vec!["hover".into()], 1.0, 2.0);
        assert_eq!(surface.auxiliary_count(), 4);

        surface.release(first);
        assert_eq!(surface.auxiliary_count(), 1);
        assert_eq!(surface.overlays().next(), Some(&Overlay::AriaLabel("c".into())));

        surface.release(second);
        assert_eq!(surface.auxiliary_count(), 0);
    }

    #[test]
    fn listeners_are_released_with_their_disposer() {
        let mut surface = Surface::new(ChartKind::Pictogram);
        let mut disposer = Disposer::empty();
        surface.listen_resize(&mut disposer, ResizeListener::icon_size("employment-chart", 15));
        assert_eq!(surface.listeners().count(), 1);
        assert_eq!(disposer.len(), 1);
        surface.release(disposer);
        assert_eq!(surface.listeners().count(), 0);
    }

    #[test]
    fn foreign_disposers_are_refused() {
        let mut bar = Surface::new(ChartKind::Bar);
        let mut line = Surface::new(ChartKind::Line);
        let mut disposer = Disposer::empty();
        bar.acquire(&mut disposer, Overlay::Title("profits".into()));
        line.release(disposer);
        assert_eq!(bar.auxiliary_count(), 1);
    }

    #[test]
    fn teardown_clears_everything() {
        let mut surface = Surface::new(ChartKind::Pictogram);
        let mut disposer = Disposer::empty();
        surface.acquire(&mut disposer, Overlay::Title("t".into()));
        surface.listen_resize(&mut disposer, ResizeListener::icon_size("x", 15));
        surface.teardown();
        assert_eq!(surface.auxiliary_count(), 0);
        drop(disposer);
    }

    #[test]
    fn icon_size_breakpoints() {
        assert_eq!(icon_size_for_width(150.0, 15), 10);
        assert_eq!(icon_size_for_width(60.0, 15), 6);
        assert_eq!(icon_size_for_width(600.0, 15), 14);
        assert_eq!(icon_size_for_width(500.0, 15), 14);
        assert_eq!(icon_size_for_width(450.0, 15), 14);
        assert_eq!(icon_size_for_width(300.0, 15), 10);
        assert_eq!(icon_size_for_width(1200.0, 15), 24);
        assert_eq!(icon_size_for_width(780.0, 15), 24);
    }
}
