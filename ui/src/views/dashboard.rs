use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::charts::ChartKind;
use crate::components::{ChartSection, LanguageToggle, YearControls};
use crate::core::config::DashboardConfig;
use crate::core::{platform, storage, timing};
use crate::dashboard::{Dashboard, TickOutcome, TickRequest};
use crate::data::loader;

/// Everything the page can ask the dashboard to do.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    SelectYear(String),
    Play,
    Pause,
    ToggleLoop,
    CycleSpeed,
    ToggleLanguage,
    Tick { generation: u64 },
}

#[component]
pub fn DashboardView() -> Element {
    let config = try_use_context::<DashboardConfig>().unwrap_or_default();
    let language_key = config.language_key.clone();
    let source = config.source.clone();

    let mut dashboard = use_signal(|| {
        let language = storage::load_language(&config.language_key);
        Dashboard::new(config.clone(), language)
    });
    use_context_provider(|| dashboard);

    use_future(move || {
        let source = source.clone();
        async move {
            let bundle = loader::load_all(&source).await;
            dashboard.with_mut(|d| d.load(bundle));
        }
    });

    let sender_slot: Rc<RefCell<Option<UnboundedSender<DashboardEvent>>>> = Rc::new(RefCell::new(None));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<DashboardEvent>| {
        let sender_slot = sender_slot_for_loop.clone();
        let language_key = language_key.clone();
        let mut dashboard = dashboard;

        async move {
            while let Some(event) = rx.next().await {
                match event {
                    DashboardEvent::SelectYear(year) => {
                        dashboard.with_mut(|d| d.select_year(&year));
                    }
                    DashboardEvent::Play => {
                        if let Some(request) = dashboard.with_mut(|d| d.play()) {
                            queue_tick(sender_slot.clone(), request);
                        }
                    }
                    DashboardEvent::Pause => {
                        dashboard.with_mut(|d| d.pause());
                    }
                    DashboardEvent::ToggleLoop => {
                        dashboard.with_mut(|d| d.toggle_loop());
                    }
                    DashboardEvent::CycleSpeed => {
                        if let Some(request) = dashboard.with_mut(|d| d.cycle_speed()) {
                            queue_tick(sender_slot.clone(), request);
                        }
                    }
                    DashboardEvent::ToggleLanguage => {
                        let language = dashboard.with_mut(|d| d.toggle_language());
                        storage::save_language(&language_key, language);
                        tracing::info!(lang = language.code(), "language switched");
                    }
                    DashboardEvent::Tick { generation } => {
                        match dashboard.with_mut(|d| d.tick(generation)) {
                            TickOutcome::Advanced(next) | TickOutcome::Looped(next) => {
                                queue_tick(sender_slot.clone(), next);
                            }
                            TickOutcome::Stopped | TickOutcome::Ignored => {}
                        }
                    }
                }
            }
        }
    });

    sender_slot.borrow_mut().replace(coroutine.tx());

    use_drop(move || {
        if let Ok(mut d) = dashboard.try_write() {
            d.teardown();
        }
    });

    let page = dashboard.read().page_text();
    let lang_code = dashboard.read().language().code();

    rsx! {
        document::Title { "{page.title}" }
        main { class: "page dashboard", lang: "{lang_code}",
            header { class: "dashboard__header",
                div { class: "dashboard__heading",
                    h1 { "{page.title}" }
                    LanguageToggle {}
                }
                p { class: "dashboard__intro", "{page.intro}" }
                YearControls {}
            }

            div { class: "dashboard__grid",
                for kind in ChartKind::ALL {
                    ChartSection { key: "{kind.surface_id()}", kind }
                }
            }

            if !page.related.is_empty() {
                section { class: "dashboard__related",
                    h2 { class: "dashboard__related-title", "{page.related_title}" }
                    ul { class: "related-docs",
                        for doc in page.related.iter() {
                            li { key: "{doc.href}", class: "related-docs__item",
                                span { class: "related-docs__title", "{doc.title}" }
                                a {
                                    class: "related-docs__link",
                                    href: "{doc.href}",
                                    target: "_blank",
                                    rel: "noopener",
                                    download: doc.download.then_some(""),
                                    "{doc.action}"
                                }
                            }
                        }
                    }
                }
            }

            footer { class: "dashboard__source",
                span { "{page.source_prefix} " }
                a { href: "{page.source_url}", target: "_blank", rel: "noopener", "{page.source_name}" }
                span { ", {page.source_year}" }
            }
        }
    }
}

fn queue_tick(sender_slot: Rc<RefCell<Option<UnboundedSender<DashboardEvent>>>>, request: TickRequest) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            timing::sleep_ms(request.delay_ms).await;
            let _ = sender.unbounded_send(DashboardEvent::Tick {
                generation: request.generation,
            });
        });
    }
}
