//! Secondary Panel Components
//!
//! The info box under the bio: either a static image + label, or a
//! presence blurb fed by the simulator.

use std::cell::RefCell;
use std::rc::Rc;

use biolink_core::{
    PresenceSimulator, PresenceStatus, SecondaryPanel, SimulatedPanelConfig, StaticPanelConfig,
};
use dioxus::prelude::*;

/// Renders whichever panel the options select
#[component]
pub fn SecondaryPanelView(panel: SecondaryPanel) -> Element {
    match panel {
        SecondaryPanel::Static(config) => rsx! { StaticPanel { config: config } },
        SecondaryPanel::Simulated(config) => rsx! { PresencePanel { config: config } },
    }
}

#[component]
pub fn StaticPanel(config: StaticPanelConfig) -> Element {
    rsx! {
        div { class: "secondary-panel group",
            div { class: "secondary-panel__row",
                img {
                    class: "secondary-panel__img",
                    src: "{config.image_url}",
                    alt: "{config.label}",
                    width: "40",
                    height: "40",
                }
                p { class: "secondary-panel__label", "{config.label}" }
            }
        }
    }
}

/// Presence blurb that refreshes its activity line from a
/// [`PresenceSimulator`].
///
/// The simulator starts on first render and is dropped with the
/// component; the task mirroring its updates is scope-owned and is
/// cancelled at the same time.
#[component]
pub fn PresencePanel(config: SimulatedPanelConfig) -> Element {
    let mut status: Signal<PresenceStatus> = use_signal(|| config.initial.clone());

    let simulator = use_hook(|| {
        let sim = PresenceSimulator::start(config.initial.clone(), config.period);
        let mut rx = sim.subscribe();
        spawn(async move {
            while rx.changed().await.is_ok() {
                let next = rx.borrow_and_update().clone();
                status.set(next);
            }
        });
        Rc::new(RefCell::new(Some(sim)))
    });

    use_drop(move || {
        simulator.borrow_mut().take();
    });

    let current = status.read();

    rsx! {
        div { class: "secondary-panel group",
            div { class: "secondary-panel__row",
                img {
                    class: "secondary-panel__avatar",
                    src: "{current.avatar_url}",
                    alt: "Presence avatar",
                    width: "40",
                    height: "40",
                }
                div {
                    p { class: "presence__username", "{current.username}" }
                    p { class: "presence__activity", "{current.activity.name}" }
                    p { class: "presence__details", "{current.activity.details}" }
                    p { class: "presence__state", "{current.activity.state}" }
                }
            }
        }
    }
}
