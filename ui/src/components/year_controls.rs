use dioxus::prelude::*;

use crate::dashboard::Dashboard;
use crate::views::DashboardEvent;

/// Year slider plus the play / loop / speed buttons.
#[component]
pub fn YearControls() -> Element {
    let dashboard = use_context::<Signal<Dashboard>>();
    let events = use_coroutine_handle::<DashboardEvent>();

    let d = dashboard.read();
    let page = d.page_text();
    let years = d.axis().years().to_vec();
    let year = d.year().map(str::to_string).unwrap_or_default();
    let position = d.year().and_then(|y| d.axis().position(y)).unwrap_or(0);
    let playback = d.playback();
    let playing = playback.is_playing();
    let looping = playback.looping();
    let speed = playback.speed();
    drop(d);

    let max_index = years.len().saturating_sub(1);
    let first = years.first().cloned().unwrap_or_default();
    let last = years.last().cloned().unwrap_or_default();
    let disabled = years.is_empty();
    let play_title = if playing { page.pause.clone() } else { page.play.clone() };
    let loop_class = if looping { "controls__btn controls__btn--loop is-active" } else { "controls__btn controls__btn--loop" };

    rsx! {
        section { class: "controls",
            div { class: "controls__year",
                span { class: "controls__year-label", "{page.current_year}" }
                strong { class: "controls__year-value", id: "current-year", "{year}" }
            }
            div { class: "controls__slider",
                span { class: "controls__bound", "{first}" }
                input {
                    r#type: "range",
                    class: "controls__range",
                    id: "year-slider",
                    "aria-label": "{page.slider_label}",
                    min: "0",
                    max: "{max_index}",
                    step: "1",
                    value: "{position}",
                    disabled,
                    oninput: move |evt| {
                        let Ok(index) = evt.value().parse::<usize>() else {
                            return;
                        };
                        if let Some(year) = years.get(index) {
                            events.send(DashboardEvent::SelectYear(year.clone()));
                        }
                    },
                }
                span { class: "controls__bound", "{last}" }
            }
            div { class: "controls__buttons",
                button {
                    class: if playing { "controls__btn controls__btn--play is-playing" } else { "controls__btn controls__btn--play" },
                    r#type: "button",
                    title: "{play_title}",
                    "aria-label": "{play_title}",
                    disabled,
                    onclick: move |_| {
                        events.send(if playing { DashboardEvent::Pause } else { DashboardEvent::Play });
                    },
                    if playing { "❚❚" } else { "▶" }
                }
                button {
                    class: "{loop_class}",
                    r#type: "button",
                    title: "{page.looping}",
                    "aria-label": "{page.looping}",
                    "aria-pressed": "{looping}",
                    onclick: move |_| events.send(DashboardEvent::ToggleLoop),
                    "⟲"
                }
                button {
                    class: "controls__btn controls__btn--speed {speed.class()}",
                    r#type: "button",
                    title: "{page.speed}",
                    "aria-label": "{page.speed}",
                    onclick: move |_| events.send(DashboardEvent::CycleSpeed),
                    "{speed.label()}"
                }
            }
        }
    }
}
